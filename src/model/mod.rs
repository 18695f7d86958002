//! Data transfer objects shared by the HTTP API.
//!
//! These types define the JSON bodies accepted and returned by the controllers. Field names
//! are serialized in camelCase. Server-side domain models convert into these at the
//! controller boundary via `into_dto()`.

pub mod api;
pub mod book;
pub mod forum;
pub mod user;
