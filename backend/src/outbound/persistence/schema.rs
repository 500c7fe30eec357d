//! Diesel table definitions matching `backend/migrations`.

diesel::table! {
    users (id) {
        id -> Uuid,
        username -> Varchar,
        name -> Nullable<Varchar>,
        avatar -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}
