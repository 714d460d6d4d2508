//! Driving port for mutating persons.
//!
//! Inbound adapters validate payloads into [`PersonDetails`] before calling
//! this port; the implementation owns identifier assignment.

use async_trait::async_trait;

use crate::domain::{Error, Person, PersonDetails, PersonId};

/// Port consumed by inbound adapters to create, replace and remove persons.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonCommand: Send + Sync {
    /// Store a new person under a freshly generated identifier.
    async fn create_person(&self, details: PersonDetails) -> Result<Person, Error>;

    /// Replace the mutable fields of an existing person.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`Error`] when the identifier is unknown.
    async fn update_person(&self, id: &PersonId, details: PersonDetails) -> Result<Person, Error>;

    /// Remove a person.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`Error`] when the identifier is unknown.
    async fn delete_person(&self, id: &PersonId) -> Result<(), Error>;
}
