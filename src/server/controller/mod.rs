//! HTTP request handlers.
//!
//! Controllers extract path, query and body values, build the services they need from
//! `AppState`, and convert domain models into DTOs for the response. Business rules live in
//! the service layer.

pub mod book;
pub mod forum;
pub mod user;
