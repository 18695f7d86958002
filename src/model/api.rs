use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Plain informational message body.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
