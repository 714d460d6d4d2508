//! Person service library: a small CRUD HTTP service for person records.
//!
//! Layout follows a ports-and-adapters split:
//! - [`domain`]: model, driving and driven ports, [`domain::PersonService`].
//! - [`inbound`]: actix-web handlers and route table.
//! - [`outbound`]: Diesel/PostgreSQL and in-memory repositories.
//! - [`middleware`]: request tracing.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
pub use settings::ServiceSettings;
