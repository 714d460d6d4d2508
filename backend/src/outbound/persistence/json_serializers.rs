//! JSON text encoding for the `hobbies` column.
//!
//! Hobbies are stored as a JSON array in a `TEXT` column. Decoding rejects
//! anything that is not an array of strings so corrupt rows surface as
//! serialization errors instead of silently dropping data.

use crate::domain::Hobbies;

pub(super) fn hobbies_to_json(hobbies: &Hobbies) -> Result<String, String> {
    serde_json::to_string(hobbies.as_slice()).map_err(|err| err.to_string())
}

pub(super) fn json_to_hobbies(raw: &str) -> Result<Hobbies, String> {
    serde_json::from_str::<Vec<String>>(raw)
        .map(Hobbies::from)
        .map_err(|err| format!("hobbies column is not a JSON string array: {err}"))
}
