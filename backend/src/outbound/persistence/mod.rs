//! PostgreSQL persistence adapter using Diesel.
//!
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay private
//! to this module; only the repository, pool and migration entry points are
//! exported.
//!
//! ```ignore
//! use person_service::outbound::persistence::{DbPool, DieselPersonRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/persons")).await?;
//! let repo = DieselPersonRepository::new(pool);
//! ```

mod diesel_person_repository;
mod json_serializers;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_person_repository::DieselPersonRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
