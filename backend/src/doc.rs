//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers every person endpoint plus the schema wrappers from
//! [`crate::inbound::http::schemas`]. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::persons::{PersonPageResponse, UpdatePersonRequest};
use crate::inbound::http::schemas::{
    CreatePersonSchema, ErrorDetailSchema, FieldErrorsSchema, FormatErrorSchema, PersonSchema,
    RouteNotFoundSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Person service API",
        description = "Create, list, fetch, replace and delete person records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::persons::create_person,
        crate::inbound::http::persons::list_persons,
        crate::inbound::http::persons::get_person,
        crate::inbound::http::persons::update_person,
        crate::inbound::http::persons::delete_person,
    ),
    components(schemas(
        PersonSchema,
        CreatePersonSchema,
        UpdatePersonRequest,
        PersonPageResponse,
        ErrorDetailSchema,
        FormatErrorSchema,
        FieldErrorsSchema,
        RouteNotFoundSchema
    )),
    tags(
        (name = "persons", description = "Person records")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const PERSON_SCHEMA_NAME: &str = "crate.domain.Person";

    #[rstest]
    #[case("/person")]
    #[case("/person/{id}")]
    fn person_paths_are_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn person_schema_lists_all_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let Some(RefOr::T(Schema::Object(person))) = schemas.get(PERSON_SCHEMA_NAME) else {
            panic!("expected Person object schema");
        };
        for field in ["id", "name", "age", "hobbies"] {
            assert!(person.properties.contains_key(field), "missing {field}");
        }
    }

    #[rstest]
    fn create_body_requires_every_field() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let Some(RefOr::T(Schema::Object(body))) = schemas.get("CreatePersonRequest") else {
            panic!("expected CreatePersonRequest object schema");
        };
        for field in ["name", "age", "hobbies"] {
            assert!(body.required.iter().any(|name| name == field), "{field} not required");
        }
    }

    #[rstest]
    fn document_serialises_to_json() {
        let json = ApiDoc::openapi().to_json().expect("serialise");
        assert!(json.contains("createPerson"));
        assert!(json.contains("deletePerson"));
    }
}
