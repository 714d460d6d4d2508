//! Route table for the HTTP adapter.
//!
//! ```text
//! /person       POST, GET
//! /person/{id}  GET, PUT, DELETE
//! *             404 {"message":"Resource not found"}
//! ```
//!
//! Register with [`configure`] and install [`resource_not_found`] as the
//! application's default service.

use actix_web::{HttpResponse, web};

use super::error::ErrorBody;
use super::persons::{create_person, delete_person, get_person, list_persons, update_person};

/// Register every person endpoint.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use person_service::inbound::http::routes::{configure, resource_not_found};
///
/// let _app = App::new()
///     .configure(configure)
///     .default_service(web::to(resource_not_found));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_person)
        .service(list_persons)
        .service(get_person)
        .service(update_person)
        .service(delete_person);
}

/// Fallback for unknown paths and unsupported methods.
pub async fn resource_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::Message("Resource not found".to_owned()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::{MockPersonCommand, MockPersonQuery};
    use crate::inbound::http::state::HttpState;

    #[rstest]
    #[case(actix_test::TestRequest::get().uri("/people"))]
    #[case(actix_test::TestRequest::patch().uri("/person"))]
    #[case(actix_test::TestRequest::post().uri("/person/123"))]
    #[actix_web::test]
    async fn unmatched_requests_get_generic_not_found(#[case] request: actix_test::TestRequest) {
        let state = HttpState::new(
            Arc::new(MockPersonCommand::new()),
            Arc::new(MockPersonQuery::new()),
        );
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure)
                .default_service(web::to(resource_not_found)),
        )
        .await;

        let response = actix_test::call_service(&app, request.to_request()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({"message": "Resource not found"}));
    }
}
