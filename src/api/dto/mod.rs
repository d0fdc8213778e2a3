//! Request/response DTOs for the JSON API.
//!
//! Wire shapes use camelCase field names. Validation lives on the request
//! structs via `validator`; handlers call `.validate()` before touching
//! services.

pub mod affiliate_link;
pub mod auth;
pub mod guide;
pub mod health;
pub mod stats;
pub mod taxonomy;
