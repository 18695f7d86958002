use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A comment row holds a status outside UNVERIFIED, REPORTED, VERIFIED.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown comment status '{0}' stored in database")]
    UnknownCommentStatus(String),

    /// A shelf row holds a shelf outside WANT_TO_READ, READING, READ.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown shelf '{0}' stored in database")]
    UnknownShelf(String),
}
