// ============================================================================
// MODÈLE : ATTENDEES
// ============================================================================
//
// Colonnes de la table attendees:
//   - id (INTEGER, PRIMARY KEY, SERIAL)
//   - name (TEXT, NOT NULL)
//   - email (TEXT, NOT NULL)
//   - created_at (TIMESTAMP, DEFAULT CURRENT_TIMESTAMP)
//   - event_id (TEXT, NOT NULL, FK vers events)
//
// Points d'attention:
//   - Un participant appartient toujours à un événement (event_id non nul)
//   - Table en lecture seule pour ce service
//
// ============================================================================

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "attendees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime,
    pub event_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id"
    )]
    Event,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
