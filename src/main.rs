mod settings;
mod db;
mod error;
mod models;
mod routes;
mod services;
mod telemetry;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let settings = settings::Settings::load()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    telemetry::init();

    tracing::info!("connecting to database");
    let db = db::establish_connection(&settings)
        .await
        .map_err(io::Error::other)?;
    tracing::info!("database connected");
    // une seule connexion, partagée entre les workers
    let db = web::Data::new(db);

    let (host, port) = settings.bind_address();
    tracing::info!(%host, port, "starting server");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(db.clone())
            .configure(routes::configure_routes)
    })
        .bind((host, port))?
        .run()
        .await
}
