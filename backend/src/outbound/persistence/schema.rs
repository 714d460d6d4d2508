//! Diesel table definitions.
//!
//! Must match `migrations/` exactly; regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// Person records.
    persons (id) {
        /// Primary key: UUID v4 identifier assigned by the service.
        id -> Uuid,
        /// Display name, 2 to 100 characters.
        name -> Text,
        /// Age in whole years, 0 to 120.
        age -> Int4,
        /// Hobbies encoded as a JSON array of strings.
        hobbies -> Text,
    }
}
