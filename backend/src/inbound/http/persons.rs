//! Person CRUD handlers.
//!
//! ```text
//! POST   /person
//! GET    /person?page&limit&sortedBy&sortedOrder
//! GET    /person/{id}
//! PUT    /person/{id}
//! DELETE /person/{id}
//! ```
//!
//! Bodies are decoded by hand from raw bytes so decoding failures produce the
//! endpoint's own error body instead of actix's default extractor response.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, PageRequest, SortDirection, total_pages};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::ListPersonsRequest;
use crate::domain::{
    Hobbies, Person, PersonDetails, PersonSort, PersonSortField, validate_age, validate_name,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{ApiError, ErrorBody};
use crate::inbound::http::schemas::{
    CreatePersonSchema, ErrorDetailSchema, FieldErrorsSchema, FormatErrorSchema, PersonSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_person_id, validate_creation};

const INVALID_FORMAT: &str = "Invalid request format";
const CREATE_FAILED: &str = "Database error: Unable to create person";
const INVALID_REQUEST: &str = "Invalid request";
const PERSON_NOT_FOUND: &str = "Person not found";
const INTERNAL_ERROR: &str = "Internal server error";
const DEFAULT_SORT_FIELD: &str = "name";
const DEFAULT_SORT_ORDER: &str = "asc";

/// Creation payload. Fields are optional here so absence can be reported per
/// field; [`CreatePersonSchema`] documents them as required.
#[derive(Debug, Deserialize)]
pub struct CreatePersonRequest {
    /// Display name, 2 to 100 characters.
    pub name: Option<String>,
    /// Age in whole years, 0 to 120.
    pub age: Option<i64>,
    /// Hobbies in display order.
    pub hobbies: Option<Vec<String>>,
}

/// Replacement payload. A supplied `id` is ignored; the path wins.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdatePersonRequest {
    /// Display name, 2 to 100 characters.
    pub name: String,
    /// Age in whole years, 0 to 120.
    pub age: i64,
    /// Hobbies in display order; omitted or null means none.
    #[serde(default)]
    pub hobbies: Option<Vec<String>>,
}

impl UpdatePersonRequest {
    fn into_details(self) -> Option<PersonDetails> {
        validate_name(&self.name).ok()?;
        let age = validate_age(self.age).ok()?;
        Some(PersonDetails::new(
            self.name,
            age,
            Hobbies::from(self.hobbies.unwrap_or_default()),
        ))
    }
}

/// Listing query string. Values are kept raw and parsed leniently.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ListPersonsParams {
    /// One-based page number (default 1).
    pub page: Option<String>,
    /// Page size (default 10).
    pub limit: Option<String>,
    /// `id`, `name` or `age` (default `name`); empty disables sorting.
    pub sorted_by: Option<String>,
    /// `asc` or `desc` (default `asc`); empty disables sorting.
    pub sorted_order: Option<String>,
}

impl ListPersonsParams {
    /// Collect the known keys from decoded query pairs. A repeated key keeps
    /// its first value; unknown keys are ignored.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                "sortedBy" => &mut params.sorted_by,
                "sortedOrder" => &mut params.sorted_order,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// Envelope returned by the listing endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct PersonPageResponse {
    /// Persons on this page.
    #[schema(value_type = Vec<PersonSchema>)]
    pub data: Vec<Person>,
    /// Page number that was served.
    pub current_page: u32,
    /// Number of pages at the requested page size.
    pub total_pages: u64,
    /// Number of persons across all pages.
    pub total_records: u64,
}

/// Present but non-numeric values count as zero.
fn lenient_number(raw: Option<&str>, default: i64) -> i64 {
    raw.map_or(default, |value| value.parse().unwrap_or(0))
}

fn parse_sort(params: &ListPersonsParams) -> Result<Option<PersonSort>, ApiError> {
    let field = params.sorted_by.as_deref().unwrap_or(DEFAULT_SORT_FIELD);
    let order = params.sorted_order.as_deref().unwrap_or(DEFAULT_SORT_ORDER);
    if field.is_empty() || order.is_empty() {
        return Ok(None);
    }
    let field = field
        .parse::<PersonSortField>()
        .map_err(|err| ApiError::bad_request(err.to_string()))?;
    let direction = order
        .parse::<SortDirection>()
        .map_err(|err| ApiError::bad_request(err.to_string()))?;
    Ok(Some(PersonSort { field, direction }))
}

fn parse_list_params(params: &ListPersonsParams) -> Result<ListPersonsRequest, ApiError> {
    let page = PageRequest::new(
        lenient_number(params.page.as_deref(), DEFAULT_PAGE),
        lenient_number(params.limit.as_deref(), DEFAULT_LIMIT),
    )
    .map_err(|err| ApiError::bad_request(err.to_string()))?;
    let sort = parse_sort(params)?;
    Ok(ListPersonsRequest { page, sort })
}

/// Create a person.
#[utoipa::path(
    post,
    path = "/person",
    request_body = CreatePersonSchema,
    responses(
        (status = 201, description = "Person created", body = PersonSchema),
        (status = 400, description = "Malformed body or failing fields", body = FieldErrorsSchema),
        (status = 500, description = "Storage failure", body = FormatErrorSchema)
    ),
    tags = ["persons"],
    operation_id = "createPerson"
)]
#[post("/person")]
pub async fn create_person(state: web::Data<HttpState>, body: web::Bytes) -> ApiResult<HttpResponse> {
    let payload: CreatePersonRequest = serde_json::from_slice(&body).map_err(|_| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            ErrorBody::Format(INVALID_FORMAT.to_owned()),
        )
    })?;
    let details = validate_creation(payload.name, payload.age, payload.hobbies)
        .map_err(ApiError::invalid_fields)?;

    let person = state.persons.create_person(details).await.map_err(|err| {
        tracing::error!(error = %err, "failed to create person");
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody::Format(CREATE_FAILED.to_owned()),
        )
    })?;
    Ok(HttpResponse::Created().json(person))
}

/// List persons one page at a time.
#[utoipa::path(
    get,
    path = "/person",
    params(ListPersonsParams),
    responses(
        (status = 200, description = "One page of persons", body = PersonPageResponse),
        (status = 400, description = "Invalid paging or sorting", body = ErrorDetailSchema),
        (status = 500, description = "Storage failure", body = ErrorDetailSchema)
    ),
    tags = ["persons"],
    operation_id = "listPersons"
)]
#[get("/person")]
pub async fn list_persons(state: web::Data<HttpState>, req: HttpRequest) -> ApiResult<HttpResponse> {
    let params = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map(|query| ListPersonsParams::from_pairs(query.into_inner()))
        .map_err(|_| ApiError::bad_request(INVALID_REQUEST))?;
    let request = parse_list_params(&params)?;

    let page = state
        .persons_query
        .list_persons(request)
        .await
        .map_err(|err| ApiError::internal(err.message()))?;

    Ok(HttpResponse::Ok().json(PersonPageResponse {
        data: page.persons,
        current_page: request.page.page(),
        total_pages: total_pages(page.total_records, request.page.limit()),
        total_records: page.total_records,
    }))
}

/// Fetch one person.
#[utoipa::path(
    get,
    path = "/person/{id}",
    params(("id" = String, Path, description = "Person UUID")),
    responses(
        (status = 200, description = "The person", body = PersonSchema),
        (status = 400, description = "Malformed identifier", body = ErrorDetailSchema),
        (status = 404, description = "Unknown identifier", body = ErrorDetailSchema),
        (status = 500, description = "Storage failure", body = ErrorDetailSchema)
    ),
    tags = ["persons"],
    operation_id = "getPerson"
)]
#[get("/person/{id}")]
pub async fn get_person(state: web::Data<HttpState>, path: web::Path<String>) -> ApiResult<HttpResponse> {
    let id = parse_person_id(&path)?;
    let person = state
        .persons_query
        .get_person(&id)
        .await
        .map_err(|err| ApiError::from_domain(&err, PERSON_NOT_FOUND, INTERNAL_ERROR))?;
    Ok(HttpResponse::Ok().json(person))
}

/// Replace a person's name, age and hobbies.
#[utoipa::path(
    put,
    path = "/person/{id}",
    params(("id" = String, Path, description = "Person UUID")),
    request_body = UpdatePersonRequest,
    responses(
        (status = 200, description = "The updated person", body = PersonSchema),
        (status = 400, description = "Malformed identifier or body", body = ErrorDetailSchema),
        (status = 404, description = "Unknown identifier", body = ErrorDetailSchema),
        (status = 500, description = "Storage failure", body = ErrorDetailSchema)
    ),
    tags = ["persons"],
    operation_id = "updatePerson"
)]
#[put("/person/{id}")]
pub async fn update_person(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let id = parse_person_id(&path)?;
    let details = serde_json::from_slice::<UpdatePersonRequest>(&body)
        .ok()
        .and_then(UpdatePersonRequest::into_details)
        .ok_or_else(|| ApiError::bad_request(INVALID_REQUEST))?;

    let person = state
        .persons
        .update_person(&id, details)
        .await
        .map_err(|err| ApiError::from_domain(&err, PERSON_NOT_FOUND, INTERNAL_ERROR))?;
    Ok(HttpResponse::Ok().json(person))
}

/// Remove a person.
#[utoipa::path(
    delete,
    path = "/person/{id}",
    params(("id" = String, Path, description = "Person UUID")),
    responses(
        (status = 204, description = "Person removed"),
        (status = 400, description = "Malformed identifier", body = ErrorDetailSchema),
        (status = 404, description = "Unknown identifier", body = ErrorDetailSchema),
        (status = 500, description = "Storage failure", body = ErrorDetailSchema)
    ),
    tags = ["persons"],
    operation_id = "deletePerson"
)]
#[delete("/person/{id}")]
pub async fn delete_person(state: web::Data<HttpState>, path: web::Path<String>) -> ApiResult<HttpResponse> {
    let id = parse_person_id(&path)?;
    state
        .persons
        .delete_person(&id)
        .await
        .map_err(|err| ApiError::from_domain(&err, PERSON_NOT_FOUND, INTERNAL_ERROR))?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "persons_tests.rs"]
mod tests;
