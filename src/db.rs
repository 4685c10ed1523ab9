// connexion BD

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::settings::Settings;

pub async fn establish_connection(settings: &Settings) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(settings.database_url.clone());
    // sqlx logge chaque SELECT en info, trop bruyant pour un endpoint de lecture
    options.sqlx_logging(false);

    Database::connect(options).await
}
