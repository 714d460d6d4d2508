//! Process-local `PersonRepository` used when no database is configured.
//!
//! Records are kept in insertion order, which is the natural order reported
//! by unsorted listings. Contents are lost on restart.

use std::cmp::Ordering;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use pagination::SortDirection;

use crate::domain::ports::{
    ListPersonsRequest, PersonPage, PersonRepository, PersonRepositoryError,
};
use crate::domain::{Person, PersonId, PersonSort, PersonSortField};

/// In-memory implementation of the [`PersonRepository`] port.
#[derive(Debug, Default)]
pub struct InMemoryPersonRepository {
    persons: RwLock<Vec<Person>>,
}

impl InMemoryPersonRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> PersonRepositoryError {
    PersonRepositoryError::connection("in-memory store lock poisoned")
}

fn compare(a: &Person, b: &Person, sort: PersonSort) -> Ordering {
    let by_field = match sort.field {
        PersonSortField::Id => a.id().cmp(&b.id()),
        PersonSortField::Name => a.name().cmp(b.name()),
        PersonSortField::Age => a.age().cmp(&b.age()),
    };
    let by_field = match sort.direction {
        SortDirection::Asc => by_field,
        SortDirection::Desc => by_field.reverse(),
    };
    by_field.then_with(|| a.id().cmp(&b.id()))
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn create(&self, person: &Person) -> Result<(), PersonRepositoryError> {
        let mut persons = self.persons.write().map_err(poisoned)?;
        if persons.iter().any(|stored| stored.id() == person.id()) {
            return Err(PersonRepositoryError::query("person already exists"));
        }
        persons.push(person.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &PersonId) -> Result<Person, PersonRepositoryError> {
        let persons = self.persons.read().map_err(poisoned)?;
        persons
            .iter()
            .find(|stored| stored.id() == *id)
            .cloned()
            .ok_or_else(PersonRepositoryError::not_found)
    }

    async fn save(&self, person: &Person) -> Result<(), PersonRepositoryError> {
        let mut persons = self.persons.write().map_err(poisoned)?;
        match persons.iter_mut().find(|stored| stored.id() == person.id()) {
            Some(stored) => *stored = person.clone(),
            None => persons.push(person.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: &PersonId) -> Result<bool, PersonRepositoryError> {
        let mut persons = self.persons.write().map_err(poisoned)?;
        let before = persons.len();
        persons.retain(|stored| stored.id() != *id);
        Ok(persons.len() < before)
    }

    async fn list_page(
        &self,
        request: &ListPersonsRequest,
    ) -> Result<PersonPage, PersonRepositoryError> {
        let mut snapshot = self.persons.read().map_err(poisoned)?.clone();
        if let Some(sort) = request.sort {
            snapshot.sort_by(|a, b| compare(a, b, sort));
        }

        let total_records = u64::try_from(snapshot.len())
            .map_err(|_| PersonRepositoryError::query("record count out of range"))?;
        let offset = usize::try_from(request.page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(request.page.limit()).unwrap_or(usize::MAX);
        let persons = snapshot.into_iter().skip(offset).take(limit).collect();

        Ok(PersonPage {
            persons,
            total_records,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PersonDetails;
    use pagination::PageRequest;
    use rstest::{fixture, rstest};

    fn person(name: &str, age: i32) -> Person {
        Person::new(PersonId::random(), PersonDetails::new(name, age, Vec::new()))
    }

    #[fixture]
    fn repo() -> InMemoryPersonRepository {
        InMemoryPersonRepository::new()
    }

    fn request(page: i64, limit: i64, sort: Option<PersonSort>) -> ListPersonsRequest {
        ListPersonsRequest {
            page: PageRequest::new(page, limit).expect("valid page"),
            sort,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn create_then_find(repo: InMemoryPersonRepository) {
        let ada = person("Ada", 36);
        repo.create(&ada).await.expect("create");

        assert_eq!(repo.find_by_id(&ada.id()).await.expect("find"), ada);
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_duplicate_id(repo: InMemoryPersonRepository) {
        let ada = person("Ada", 36);
        repo.create(&ada).await.expect("first insert");

        assert!(repo.create(&ada).await.is_err());
    }

    #[rstest]
    #[tokio::test]
    async fn find_unknown_is_not_found(repo: InMemoryPersonRepository) {
        let err = repo
            .find_by_id(&PersonId::random())
            .await
            .expect_err("missing");
        assert_eq!(err, PersonRepositoryError::not_found());
    }

    #[rstest]
    #[tokio::test]
    async fn save_overwrites_in_place(repo: InMemoryPersonRepository) {
        let mut ada = person("Ada", 36);
        repo.create(&ada).await.expect("create");
        ada.apply(PersonDetails::new("Ada Lovelace", 37, vec!["maths".to_owned()]));
        repo.save(&ada).await.expect("save");

        let page = repo.list_page(&request(1, 10, None)).await.expect("list");
        assert_eq!(page.total_records, 1);
        assert_eq!(page.persons, vec![ada]);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_reports_whether_removed(repo: InMemoryPersonRepository) {
        let ada = person("Ada", 36);
        repo.create(&ada).await.expect("create");

        assert!(repo.delete(&ada.id()).await.expect("first delete"));
        assert!(!repo.delete(&ada.id()).await.expect("second delete"));
    }

    #[rstest]
    #[tokio::test]
    async fn pages_follow_insertion_order(repo: InMemoryPersonRepository) {
        let people: Vec<_> = (0..15).map(|i| person(&format!("P{i:02}"), i)).collect();
        for p in &people {
            repo.create(p).await.expect("create");
        }

        let second = repo.list_page(&request(2, 10, None)).await.expect("list");
        assert_eq!(second.total_records, 15);
        assert_eq!(second.persons.len(), 5);
        assert_eq!(second.persons.first().map(Person::name), Some("P10"));

        let beyond = repo.list_page(&request(3, 10, None)).await.expect("list");
        assert!(beyond.persons.is_empty());
        assert_eq!(beyond.total_records, 15);
    }

    #[rstest]
    #[case(SortDirection::Asc, [20, 30, 40])]
    #[case(SortDirection::Desc, [40, 30, 20])]
    #[tokio::test]
    async fn sorts_by_age(
        repo: InMemoryPersonRepository,
        #[case] direction: SortDirection,
        #[case] expected: [i32; 3],
    ) {
        for (name, age) in [("Bo", 30), ("Cy", 40), ("Al", 20)] {
            repo.create(&person(name, age)).await.expect("create");
        }
        let sort = PersonSort {
            field: PersonSortField::Age,
            direction,
        };

        let page = repo
            .list_page(&request(1, 10, Some(sort)))
            .await
            .expect("list");
        let ages: Vec<_> = page.persons.iter().map(Person::age).collect();
        assert_eq!(ages, expected);
    }
}
