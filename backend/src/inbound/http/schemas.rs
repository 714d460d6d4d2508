//! OpenAPI schema definitions for domain types and error bodies.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape so the API document can refer
//! to them.

use std::collections::BTreeMap;

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Person`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Person)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PersonSchema {
    /// Stable identifier assigned on creation.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Display name, 2 to 100 characters.
    #[schema(example = "Ada Lovelace")]
    name: String,
    /// Age in whole years, 0 to 120.
    #[schema(example = 36, minimum = 0, maximum = 120)]
    age: i32,
    /// Hobbies in stored order.
    hobbies: Vec<String>,
}

/// OpenAPI schema for the creation body; every field is required.
#[derive(ToSchema)]
#[schema(as = CreatePersonRequest)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CreatePersonSchema {
    /// Display name, 2 to 100 characters.
    #[schema(example = "Ada Lovelace", min_length = 2, max_length = 100)]
    name: String,
    /// Age in whole years, 0 to 120.
    #[schema(example = 36, minimum = 0, maximum = 120)]
    age: i64,
    /// Hobbies in display order.
    #[schema(example = json!(["chess"]))]
    hobbies: Vec<String>,
}

/// `{"error": "..."}` body used by most failures.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorDetailSchema {
    /// Human-readable failure description.
    #[schema(example = "Person not found")]
    error: String,
}

/// `{"Error": "..."}` body returned by create for undecodable input and
/// storage failures.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FormatErrorSchema {
    /// Human-readable failure description.
    #[schema(rename = "Error", example = "Invalid request format")]
    error: String,
}

/// `{"errors": {"<field>": "..."}}` body returned by create validation.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FieldErrorsSchema {
    /// Message per failing field (`name`, `age`, `hobbies`).
    errors: BTreeMap<String, String>,
}

/// `{"message": "Resource not found"}` body for unmatched routes.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RouteNotFoundSchema {
    /// Fixed message.
    #[schema(example = "Resource not found")]
    message: String,
}
