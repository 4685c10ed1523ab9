use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,sqlx=warn";

/// Initialise le subscriber tracing.
/// RUST_LOG a priorité sur le filtre par défaut. Les logs `log` d'actix
/// (middleware Logger) sont redirigés vers tracing par `init()`.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();
}
