//! Business logic behind the API handlers.

pub mod users;
