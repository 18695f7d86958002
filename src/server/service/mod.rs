//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and the Google Books API
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Services borrow their collaborators and are built per request from `AppState`.

pub mod book;
pub mod comment;
pub mod confirmation_token;
pub mod google_books;
pub mod topic;
pub mod user;
