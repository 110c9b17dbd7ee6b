//! Persistence layer. Task queries are owner-scoped by construction: every
//! function takes the owning user's id and binds it in the SQL, so a query
//! cannot return or touch another owner's row.

pub mod tasks;
pub mod users;
