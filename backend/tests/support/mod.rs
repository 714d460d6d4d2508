//! Shared helpers for HTTP integration tests.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use person_service::Trace;
use person_service::domain::PersonService;
use person_service::inbound::http::routes::{configure, resource_not_found};
use person_service::inbound::http::state::HttpState;
use person_service::outbound::memory::InMemoryPersonRepository;
use serde_json::Value;

/// Initialise the full application over a fresh in-memory store.
pub async fn in_memory_app()
-> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    let service = Arc::new(PersonService::new(Arc::new(InMemoryPersonRepository::new())));
    let state = HttpState::new(service.clone(), service);
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(configure)
            .default_service(web::to(resource_not_found)),
    )
    .await
}

/// Body for a creation request.
pub fn person_body(name: &str, age: i64, hobbies: &[&str]) -> Value {
    serde_json::json!({ "name": name, "age": age, "hobbies": hobbies })
}
