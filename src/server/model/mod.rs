//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! The `google_books` module additionally holds the remote provider's schema and its
//! mapping onto `Book`.

pub mod book;
pub mod comment;
pub mod confirmation_token;
pub mod google_books;
pub mod topic;
pub mod user;
