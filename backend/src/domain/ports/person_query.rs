//! Driving port for reading persons.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{Error, Person, PersonId, PersonSort};

/// Parameters for a paged person listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListPersonsRequest {
    /// Page number and page size.
    pub page: PageRequest,
    /// Optional ordering; `None` keeps the store's natural order.
    pub sort: Option<PersonSort>,
}

/// One page of persons plus the size of the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonPage {
    /// Records on the requested page.
    pub persons: Vec<Person>,
    /// Number of records across all pages.
    pub total_records: u64,
}

/// Port consumed by inbound adapters to read persons.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonQuery: Send + Sync {
    /// Fetch a single person.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`Error`] when the identifier is unknown.
    async fn get_person(&self, id: &PersonId) -> Result<Person, Error>;

    /// Fetch one page of persons.
    async fn list_persons(&self, request: ListPersonsRequest) -> Result<PersonPage, Error>;
}
