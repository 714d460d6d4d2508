//! Person data model.
//!
//! A [`Person`] is the only entity managed by the service. Its identifier is
//! assigned once by [`crate::domain::PersonService`] and never changes; the
//! remaining fields form [`PersonDetails`] and are replaced wholesale on
//! update.
//!
//! Serialisation contract (JSON):
//! `{"id":"<uuid>","name":"Ada","age":36,"hobbies":["chess"]}`

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use uuid::Uuid;

/// Minimum name length, counted in characters.
pub const NAME_MIN_CHARS: usize = 2;
/// Maximum name length, counted in characters.
pub const NAME_MAX_CHARS: usize = 100;
/// Youngest accepted age.
pub const AGE_MIN: i64 = 0;
/// Oldest accepted age.
pub const AGE_MAX: i64 = 120;

/// Bounds violations detected by [`validate_name`] and [`validate_age`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PersonValidationError {
    /// The name is shorter or longer than allowed.
    #[error("name must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters")]
    NameLength,
    /// The age is outside the accepted range.
    #[error("age must be between {AGE_MIN} and {AGE_MAX}")]
    AgeOutOfRange,
}

/// Check that `name` has an accepted number of characters.
///
/// # Errors
///
/// Returns [`PersonValidationError::NameLength`] when the bounds are missed.
///
/// # Examples
/// ```
/// use person_service::domain::validate_name;
///
/// assert!(validate_name("Jo").is_ok());
/// assert!(validate_name("J").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<(), PersonValidationError> {
    let length = name.chars().count();
    if (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&length) {
        Ok(())
    } else {
        Err(PersonValidationError::NameLength)
    }
}

/// Check that `age` lies within the inclusive accepted range and narrow it
/// to the stored width.
///
/// # Errors
///
/// Returns [`PersonValidationError::AgeOutOfRange`] when the bounds are
/// missed.
pub fn validate_age(age: i64) -> Result<i32, PersonValidationError> {
    if !(AGE_MIN..=AGE_MAX).contains(&age) {
        return Err(PersonValidationError::AgeOutOfRange);
    }
    i32::try_from(age).map_err(|_| PersonValidationError::AgeOutOfRange)
}

/// Stable person identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PersonId(Uuid);

impl PersonId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PersonId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Ordered list of hobby names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Hobbies(Vec<String>);

impl Hobbies {
    /// Borrow the hobbies in their stored order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for Hobbies {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

/// The mutable field set of a person.
///
/// Values are expected to have passed [`validate_name`] and
/// [`validate_age`] at the inbound boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDetails {
    /// Display name.
    pub name: String,
    /// Age in whole years.
    pub age: i32,
    /// Hobbies in caller-supplied order.
    pub hobbies: Hobbies,
}

impl PersonDetails {
    /// Bundle the mutable fields.
    pub fn new(name: impl Into<String>, age: i32, hobbies: impl Into<Hobbies>) -> Self {
        Self {
            name: name.into(),
            age,
            hobbies: hobbies.into(),
        }
    }
}

/// A stored person record.
///
/// # Examples
/// ```
/// use person_service::domain::{Person, PersonDetails, PersonId};
///
/// let id = PersonId::random();
/// let mut person = Person::new(id, PersonDetails::new("Ada", 36, vec!["chess".to_owned()]));
/// person.apply(PersonDetails::new("Ada Lovelace", 37, Vec::new()));
/// assert_eq!(person.id(), id);
/// assert_eq!(person.age(), 37);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    id: PersonId,
    name: String,
    age: i32,
    hobbies: Hobbies,
}

impl Person {
    /// Assemble a person from an identifier and its details.
    #[must_use]
    pub fn new(id: PersonId, details: PersonDetails) -> Self {
        let PersonDetails { name, age, hobbies } = details;
        Self {
            id,
            name,
            age,
            hobbies,
        }
    }

    /// Replace name, age and hobbies; the identifier is left untouched.
    pub fn apply(&mut self, details: PersonDetails) {
        let PersonDetails { name, age, hobbies } = details;
        self.name = name;
        self.age = age;
        self.hobbies = hobbies;
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> PersonId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Age in whole years.
    #[must_use]
    pub const fn age(&self) -> i32 {
        self.age
    }

    /// Hobbies in stored order.
    #[must_use]
    pub const fn hobbies(&self) -> &Hobbies {
        &self.hobbies
    }
}

/// Columns a person listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonSortField {
    /// Order by identifier.
    Id,
    /// Order by name.
    Name,
    /// Order by age.
    Age,
}

impl PersonSortField {
    /// Wire and column name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Age => "age",
        }
    }
}

impl fmt::Display for PersonSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a sort field is not one of [`PersonSortField`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported sort field: {0}")]
pub struct UnknownSortField(String);

impl FromStr for PersonSortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "age" => Ok(Self::Age),
            _ => Err(UnknownSortField(s.to_owned())),
        }
    }
}

/// Requested ordering for a person listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonSort {
    /// Column to order by.
    pub field: PersonSortField,
    /// Ascending or descending.
    pub direction: pagination::SortDirection,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagination::SortDirection;
    use rstest::rstest;

    #[rstest]
    #[case("Jo", true)]
    #[case("J", false)]
    #[case("", false)]
    #[case("Zoë", true)]
    fn name_bounds_count_characters(#[case] name: &str, #[case] valid: bool) {
        assert_eq!(validate_name(name).is_ok(), valid);
    }

    #[rstest]
    fn name_accepts_exactly_one_hundred_characters() {
        assert!(validate_name(&"é".repeat(NAME_MAX_CHARS)).is_ok());
        assert_eq!(
            validate_name(&"a".repeat(NAME_MAX_CHARS + 1)),
            Err(PersonValidationError::NameLength)
        );
    }

    #[rstest]
    #[case(0, Ok(0))]
    #[case(120, Ok(120))]
    #[case(-1, Err(PersonValidationError::AgeOutOfRange))]
    #[case(121, Err(PersonValidationError::AgeOutOfRange))]
    #[case(i64::MAX, Err(PersonValidationError::AgeOutOfRange))]
    fn age_bounds_are_inclusive(
        #[case] age: i64,
        #[case] expected: Result<i32, PersonValidationError>,
    ) {
        assert_eq!(validate_age(age), expected);
    }

    #[rstest]
    fn person_serialises_with_flat_fields() {
        let id: PersonId = "3fa85f64-5717-4562-b3fc-2c963f66afa6"
            .parse()
            .expect("valid id");
        let person = Person::new(
            id,
            PersonDetails::new("Ada", 36, vec!["chess".to_owned(), "maths".to_owned()]),
        );

        let value = serde_json::to_value(&person).expect("serialise");
        assert_eq!(
            value,
            serde_json::json!({
                "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                "name": "Ada",
                "age": 36,
                "hobbies": ["chess", "maths"],
            })
        );
    }

    #[rstest]
    fn apply_keeps_identifier() {
        let id = PersonId::random();
        let mut person = Person::new(id, PersonDetails::new("Ada", 36, Vec::new()));
        person.apply(PersonDetails::new("Grace", 45, vec!["sailing".to_owned()]));

        assert_eq!(person.id(), id);
        assert_eq!(person.name(), "Grace");
        assert_eq!(person.age(), 45);
        assert_eq!(person.hobbies().as_slice(), ["sailing"]);
    }

    #[rstest]
    fn random_ids_are_distinct() {
        assert_ne!(PersonId::random(), PersonId::random());
    }

    #[rstest]
    #[case("name", PersonSortField::Name)]
    #[case("AGE", PersonSortField::Age)]
    #[case("id", PersonSortField::Id)]
    fn sort_field_parses_known_columns(#[case] raw: &str, #[case] expected: PersonSortField) {
        assert_eq!(raw.parse::<PersonSortField>(), Ok(expected));
    }

    #[rstest]
    fn sort_field_rejects_other_columns() {
        let err = "hobbies; DROP TABLE persons"
            .parse::<PersonSortField>()
            .expect_err("not a sortable column");
        assert!(err.to_string().starts_with("unsupported sort field"));
    }

    #[rstest]
    fn sort_defaults_to_ascending_direction() {
        let sort = PersonSort {
            field: PersonSortField::Name,
            direction: SortDirection::default(),
        };
        assert_eq!(sort.direction, SortDirection::Asc);
    }
}
