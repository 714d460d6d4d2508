//! Person domain service.
//!
//! Implements both driving ports on top of a [`PersonRepository`]. The service
//! assigns identifiers, turns repository misses into not-found errors and
//! logs persistence failures before surfacing them as internal errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{
    ListPersonsRequest, PersonCommand, PersonPage, PersonQuery, PersonRepository,
    PersonRepositoryError,
};
use crate::domain::{Error, Person, PersonDetails, PersonId};

const PERSON_NOT_FOUND: &str = "person not found";

/// Person service implementing [`PersonCommand`] and [`PersonQuery`].
#[derive(Clone)]
pub struct PersonService<R> {
    repository: Arc<R>,
}

impl<R> PersonService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> PersonService<R>
where
    R: PersonRepository,
{
    fn map_repository_error(operation: &'static str, err: PersonRepositoryError) -> Error {
        match err {
            PersonRepositoryError::NotFound => Error::not_found(PERSON_NOT_FOUND),
            other => {
                error!(operation, error = %other, "person repository failure");
                Error::internal(other.to_string())
            }
        }
    }
}

#[async_trait]
impl<R> PersonCommand for PersonService<R>
where
    R: PersonRepository,
{
    async fn create_person(&self, details: PersonDetails) -> Result<Person, Error> {
        let person = Person::new(PersonId::random(), details);
        self.repository
            .create(&person)
            .await
            .map_err(|err| Self::map_repository_error("create", err))?;
        info!(person_id = %person.id(), "person created");
        Ok(person)
    }

    async fn update_person(&self, id: &PersonId, details: PersonDetails) -> Result<Person, Error> {
        let mut person = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|err| Self::map_repository_error("update", err))?;
        person.apply(details);
        self.repository
            .save(&person)
            .await
            .map_err(|err| Self::map_repository_error("update", err))?;
        Ok(person)
    }

    async fn delete_person(&self, id: &PersonId) -> Result<(), Error> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(|err| Self::map_repository_error("delete", err))?;
        if deleted {
            info!(person_id = %id, "person deleted");
            Ok(())
        } else {
            Err(Error::not_found(PERSON_NOT_FOUND))
        }
    }
}

#[async_trait]
impl<R> PersonQuery for PersonService<R>
where
    R: PersonRepository,
{
    async fn get_person(&self, id: &PersonId) -> Result<Person, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| Self::map_repository_error("get", err))
    }

    async fn list_persons(&self, request: ListPersonsRequest) -> Result<PersonPage, Error> {
        self.repository
            .list_page(&request)
            .await
            .map_err(|err| Self::map_repository_error("list", err))
    }
}
