//! Diesel row types for the `persons` table.
//!
//! These structs never leave the persistence module; the repository converts
//! them to and from [`crate::domain::Person`].

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::persons;

/// Row read from `persons`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = persons)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PersonRow {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub hobbies: String,
}

/// Row written on insert.
#[derive(Debug, Insertable)]
#[diesel(table_name = persons)]
pub(crate) struct NewPersonRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub age: i32,
    pub hobbies: String,
}

/// Column set replaced on update.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = persons)]
pub(crate) struct PersonChangeset<'a> {
    pub name: &'a str,
    pub age: i32,
    pub hobbies: &'a str,
}
