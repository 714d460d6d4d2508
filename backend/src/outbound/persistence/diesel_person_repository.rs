//! PostgreSQL-backed `PersonRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::SortDirection;
use tracing::debug;

use crate::domain::ports::{
    ListPersonsRequest, PersonPage, PersonRepository, PersonRepositoryError,
};
use crate::domain::{Person, PersonDetails, PersonId, PersonSort, PersonSortField};

use super::json_serializers::{hobbies_to_json, json_to_hobbies};
use super::models::{NewPersonRow, PersonChangeset, PersonRow};
use super::pool::{DbPool, PoolError};
use super::schema::persons;

/// Diesel-backed implementation of the [`PersonRepository`] port.
#[derive(Clone)]
pub struct DieselPersonRepository {
    pool: DbPool,
}

impl DieselPersonRepository {
    /// Create a new repository over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PersonRepositoryError {
    PersonRepositoryError::connection(error.message())
}

fn map_diesel_error(error: diesel::result::Error) -> PersonRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => PersonRepositoryError::not_found(),
        DieselError::QueryBuilderError(_) => PersonRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PersonRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            PersonRepositoryError::query("person already exists")
        }
        _ => PersonRepositoryError::query("database error"),
    }
}

fn row_to_person(row: PersonRow) -> Result<Person, PersonRepositoryError> {
    let hobbies = json_to_hobbies(&row.hobbies).map_err(PersonRepositoryError::serialization)?;
    Ok(Person::new(
        PersonId::from_uuid(row.id),
        PersonDetails::new(row.name, row.age, hobbies),
    ))
}

fn encode_hobbies(person: &Person) -> Result<String, PersonRepositoryError> {
    hobbies_to_json(person.hobbies()).map_err(PersonRepositoryError::serialization)
}

fn ordered(
    query: persons::BoxedQuery<'static, Pg>,
    sort: Option<PersonSort>,
) -> persons::BoxedQuery<'static, Pg> {
    let Some(PersonSort { field, direction }) = sort else {
        return query.order(persons::id.asc());
    };
    let query = match (field, direction) {
        (PersonSortField::Id, SortDirection::Asc) => query.order(persons::id.asc()),
        (PersonSortField::Id, SortDirection::Desc) => query.order(persons::id.desc()),
        (PersonSortField::Name, SortDirection::Asc) => query.order(persons::name.asc()),
        (PersonSortField::Name, SortDirection::Desc) => query.order(persons::name.desc()),
        (PersonSortField::Age, SortDirection::Asc) => query.order(persons::age.asc()),
        (PersonSortField::Age, SortDirection::Desc) => query.order(persons::age.desc()),
    };
    query.then_order_by(persons::id.asc())
}

#[async_trait]
impl PersonRepository for DieselPersonRepository {
    async fn create(&self, person: &Person) -> Result<(), PersonRepositoryError> {
        let row = NewPersonRow {
            id: *person.id().as_uuid(),
            name: person.name(),
            age: person.age(),
            hobbies: encode_hobbies(person)?,
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(persons::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &PersonId) -> Result<Person, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = persons::table
            .filter(persons::id.eq(id.as_uuid()))
            .select(PersonRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .ok_or_else(PersonRepositoryError::not_found)?;

        row_to_person(row)
    }

    async fn save(&self, person: &Person) -> Result<(), PersonRepositoryError> {
        let hobbies = encode_hobbies(person)?;
        let row = NewPersonRow {
            id: *person.id().as_uuid(),
            name: person.name(),
            age: person.age(),
            hobbies: hobbies.clone(),
        };
        let changes = PersonChangeset {
            name: person.name(),
            age: person.age(),
            hobbies: &hobbies,
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(persons::table)
            .values(&row)
            .on_conflict(persons::id)
            .do_update()
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn delete(&self, id: &PersonId) -> Result<bool, PersonRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(persons::table.filter(persons::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(affected > 0)
    }

    async fn list_page(
        &self,
        request: &ListPersonsRequest,
    ) -> Result<PersonPage, PersonRepositoryError> {
        let offset = request.page.offset();
        let limit = i64::from(request.page.limit());
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = persons::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let rows: Vec<PersonRow> = ordered(persons::table.into_boxed(), request.sort)
            .offset(offset)
            .limit(limit)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let persons = rows
            .into_iter()
            .map(row_to_person)
            .collect::<Result<Vec<_>, _>>()?;
        let total_records = u64::try_from(total)
            .map_err(|_| PersonRepositoryError::query("negative record count"))?;

        Ok(PersonPage {
            persons,
            total_records,
        })
    }
}
