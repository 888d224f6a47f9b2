use reqwest::StatusCode;
use thiserror::Error;

use todo_types::ErrorBody;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Todo with ID {0} not found")]
    NotFound(i64),

    /// Any other non-success status. `body` is present when the server sent
    /// its usual JSON error document.
    #[error("server rejected request with {status}")]
    Rejected {
        status: StatusCode,
        body: Option<ErrorBody>,
    },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

impl ClientError {
    /// Field-level validation messages, if this was a 400 from the boundary.
    pub fn field_errors(&self) -> &[todo_types::FieldError] {
        match self {
            Self::Rejected {
                body: Some(body), ..
            } => &body.fields,
            _ => &[],
        }
    }
}
