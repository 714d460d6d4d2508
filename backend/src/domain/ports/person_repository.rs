//! Driven port for person persistence.
//!
//! Adapters store whole [`Person`] records keyed by [`PersonId`] and answer
//! paged, optionally sorted listings. Identifier assignment and validation
//! happen before a record reaches this port.

use async_trait::async_trait;

use crate::domain::{Person, PersonId};

use super::{ListPersonsRequest, PersonPage, define_port_error};

define_port_error! {
    /// Errors raised by person repository adapters.
    pub enum PersonRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "person repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "person repository query failed: {message}",
        /// No person is stored under the requested identifier.
        NotFound => "person not found",
        /// A stored value could not be converted to or from its column form.
        Serialization { message: String } =>
            "person repository serialization failed: {message}",
    }
}

/// Port for person storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Insert a new person.
    async fn create(&self, person: &Person) -> Result<(), PersonRepositoryError>;

    /// Fetch a person by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PersonRepositoryError::NotFound`] when nothing is stored
    /// under `id`.
    async fn find_by_id(&self, id: &PersonId) -> Result<Person, PersonRepositoryError>;

    /// Insert or fully overwrite the person with the same identifier.
    async fn save(&self, person: &Person) -> Result<(), PersonRepositoryError>;

    /// Remove a person, reporting whether a record was deleted.
    async fn delete(&self, id: &PersonId) -> Result<bool, PersonRepositoryError>;

    /// Return one page of persons together with the total record count.
    ///
    /// Without a sort the adapter returns records in its natural order; with
    /// one, ties are broken by identifier so pages are stable.
    async fn list_page(
        &self,
        request: &ListPersonsRequest,
    ) -> Result<PersonPage, PersonRepositoryError>;
}
