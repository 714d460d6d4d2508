//! Request validation helpers shared by the persons handlers.

use std::collections::BTreeMap;

use crate::domain::{Hobbies, PersonDetails, PersonId, validate_age, validate_name};

use super::error::ApiError;

/// Message for a missing or out-of-bounds `name`.
pub(crate) const NAME_MESSAGE: &str =
    "Name is required and must be between 2 and 100 characters.";
/// Message for a missing or out-of-bounds `age`.
pub(crate) const AGE_MESSAGE: &str = "Age is required and must be between 0 and 120.";
/// Message for a missing `hobbies` list.
pub(crate) const HOBBIES_MESSAGE: &str = "Hobbies is required.";
/// Message for a path segment that is not a UUID.
pub(crate) const INVALID_PERSON_ID: &str = "Invalid Person ID";

/// Parse a person identifier from a path segment.
pub(crate) fn parse_person_id(raw: &str) -> Result<PersonId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(INVALID_PERSON_ID))
}

/// Validate the creation fields, reporting every failing field at once.
pub(crate) fn validate_creation(
    name: Option<String>,
    age: Option<i64>,
    hobbies: Option<Vec<String>>,
) -> Result<PersonDetails, BTreeMap<&'static str, &'static str>> {
    let mut errors = BTreeMap::new();

    let name = name.filter(|value| validate_name(value).is_ok());
    if name.is_none() {
        errors.insert("name", NAME_MESSAGE);
    }
    let age = age.and_then(|value| validate_age(value).ok());
    if age.is_none() {
        errors.insert("age", AGE_MESSAGE);
    }
    if hobbies.is_none() {
        errors.insert("hobbies", HOBBIES_MESSAGE);
    }

    match (name, age, hobbies) {
        (Some(name), Some(age), Some(hobbies)) if errors.is_empty() => {
            Ok(PersonDetails::new(name, age, Hobbies::from(hobbies)))
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn valid_fields_produce_details() {
        let details = validate_creation(
            Some("Ada".to_owned()),
            Some(0),
            Some(vec!["chess".to_owned()]),
        )
        .expect("valid");
        assert_eq!(details.age, 0);
        assert_eq!(details.hobbies.as_slice(), ["chess"]);
    }

    #[rstest]
    fn every_failing_field_is_reported() {
        let errors = validate_creation(None, Some(121), None).expect_err("invalid");
        assert_eq!(
            errors,
            BTreeMap::from([
                ("age", AGE_MESSAGE),
                ("hobbies", HOBBIES_MESSAGE),
                ("name", NAME_MESSAGE),
            ])
        );
    }

    #[rstest]
    #[case(Some("A".to_owned()), Some(30), vec!["name"])]
    #[case(Some("Al".to_owned()), Some(-1), vec!["age"])]
    #[case(Some("x".repeat(101)), None, vec!["age", "name"])]
    fn bounds_are_checked(
        #[case] name: Option<String>,
        #[case] age: Option<i64>,
        #[case] failing: Vec<&str>,
    ) {
        let errors = validate_creation(name, age, Some(Vec::new())).expect_err("invalid");
        assert_eq!(errors.keys().copied().collect::<Vec<_>>(), failing);
    }

    #[rstest]
    #[case("not-a-uuid")]
    #[case("")]
    #[case("123")]
    fn malformed_ids_are_rejected(#[case] raw: &str) {
        let err = parse_person_id(raw).expect_err("malformed");
        assert_eq!(err, ApiError::bad_request(INVALID_PERSON_ID));
    }
}
