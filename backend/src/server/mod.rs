//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use person_service::Trace;
#[cfg(debug_assertions)]
use person_service::doc::ApiDoc;
use person_service::domain::PersonService;
use person_service::domain::ports::PersonRepository;
use person_service::inbound::http::routes::{configure, resource_not_found};
use person_service::inbound::http::state::HttpState;
use person_service::outbound::memory::InMemoryPersonRepository;
use person_service::outbound::persistence::DieselPersonRepository;

fn state_for<R>(repository: R) -> HttpState
where
    R: PersonRepository + 'static,
{
    let service = Arc::new(PersonService::new(Arc::new(repository)));
    HttpState::new(service.clone(), service)
}

/// Wire the person service to the Diesel repository when a pool is
/// configured, otherwise to the in-memory store.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => state_for(DieselPersonRepository::new(pool.clone())),
        None => state_for(InMemoryPersonRepository::new()),
    }
}

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/swagger/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    app.default_service(web::to(resource_not_found))
}

/// Construct the Actix HTTP server.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let bind_addr = config.bind_addr;

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "person service listening");
    Ok(server)
}
