pub mod attendees;
pub mod health;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health_check)
        .configure(attendees::attendees_routes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    // même montage que main : un seul web::Data cloné dans chaque App
    #[actix_web::test]
    async fn shared_connection_serves_every_app_instance() {
        let db = web::Data::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([
                    vec![BTreeMap::from([
                        ("name", Value::from("Ada Lovelace")),
                        ("email", Value::from("ada@example.com")),
                        ("event_title", Value::from("DevConf 2024")),
                    ])],
                ])
                .into_connection(),
        );

        let first = test::init_service(
            App::new().app_data(db.clone()).configure(configure_routes),
        )
        .await;
        let second = test::init_service(
            App::new().app_data(db.clone()).configure(configure_routes),
        )
        .await;

        let resp = test::call_service(
            &first,
            test::TestRequest::get().uri("/attendees/42/badge").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test::call_service(
            &second,
            test::TestRequest::get().uri("/health").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
