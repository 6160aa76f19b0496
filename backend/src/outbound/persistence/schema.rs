//! Diesel table definitions. Kept in sync with `backend/migrations`.

diesel::table! {
    /// Registered users. `id` orders rows by insertion.
    users (id) {
        id -> Int8,
        name -> Varchar,
        lastname -> Varchar,
        /// Unique; the unique index backs username allocation races.
        username -> Varchar,
        password_digest -> Varchar,
        created_at -> Timestamptz,
    }
}
