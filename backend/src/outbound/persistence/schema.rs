//! Diesel table definitions for the user store.
//!
//! The table is owned by the account service; this crate only reads it, so
//! there are no migrations here. Keep in sync with `diesel print-schema`.

diesel::table! {
    /// Registered users.
    users (id) {
        id -> Uuid,
        /// Unique, case-sensitive account handle.
        username -> Varchar,
        /// Unique contact address.
        email -> Varchar,
        created_at -> Timestamptz,
    }
}
