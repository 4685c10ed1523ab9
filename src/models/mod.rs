// ============================================================================
// MODELS - MODULE PRINCIPAL
// ============================================================================
//
// Liste des modules:
//   - attendee : Participants inscrits à un événement
//   - event : Événements (titre, slug, capacité)
//   - badge : DTO de réponse du badge (non persisté)
//   - health : Health check API
//
// ============================================================================

pub mod attendee;
pub mod badge;
pub mod event;
pub mod health;
