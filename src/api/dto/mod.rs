//! Data Transfer Objects for API requests and responses.
//!
//! Responses are built from domain entities via `From` impls; query
//! parameters are validated with `validator`.

pub mod analytics;
pub mod duplicates;
pub mod health;
