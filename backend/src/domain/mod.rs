//! Domain primitives, services and ports.
//!
//! Purpose: define the person model and the transport-agnostic operations on
//! it. Adapters in `inbound` and `outbound` depend on this module; nothing
//! here depends on them.
//!
//! Public surface:
//! - Error, ErrorCode: transport-agnostic failure payload.
//! - Person, PersonId, PersonDetails, Hobbies: the stored record.
//! - PersonService: implementation of the driving ports.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod person;
pub mod person_service;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::person::{
    AGE_MAX, AGE_MIN, Hobbies, NAME_MAX_CHARS, NAME_MIN_CHARS, Person, PersonDetails, PersonId,
    PersonSort, PersonSortField, PersonValidationError, UnknownSortField, validate_age,
    validate_name,
};
pub use self::person_service::PersonService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
