//! SeaORM entity models for the book club database.

pub mod prelude;

pub mod book;
pub mod book_shelf;
pub mod comment;
pub mod confirmation_token;
pub mod topic;
pub mod user;
