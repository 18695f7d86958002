mod book;
mod comment;
mod confirmation_token;
mod shelf;
mod topic;
mod user;
