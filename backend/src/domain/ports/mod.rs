//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod person_command;
mod person_query;
mod person_repository;

#[cfg(test)]
pub use person_command::MockPersonCommand;
pub use person_command::PersonCommand;
#[cfg(test)]
pub use person_query::MockPersonQuery;
pub use person_query::{ListPersonsRequest, PersonPage, PersonQuery};
#[cfg(test)]
pub use person_repository::MockPersonRepository;
pub use person_repository::{PersonRepository, PersonRepositoryError};
