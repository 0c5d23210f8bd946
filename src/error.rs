//! Defines the app level error type and its conversion into webhook replies.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::twiml::TwimlMessage;

/// The reply sent to the user when their message could not be processed.
pub const SOMETHING_WENT_WRONG_MESSAGE: &str = "משהו השתבש, נסו שוב מאוחר יותר.";

/// The errors that may occur in the application.
///
/// Problems with the content of a message are never errors, they are resolved
/// to a best-effort interpretation instead. These errors come from the
/// database and the server.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A department name read from the database is not one of the known
    /// departments.
    #[error("\"{0}\" is not a known department")]
    InvalidDepartment(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// Tried to update an item that does not exist
    #[error("tried to update an item that is not in the database")]
    UpdateMissingItem,

    /// Tried to delete an item that does not exist
    #[error("tried to delete an item that is not in the database")]
    DeleteMissingItem,
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", error);
        Error::SqlError(error)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("An unexpected error occurred: {}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            TwimlMessage::new(SOMETHING_WENT_WRONG_MESSAGE),
        )
            .into_response()
    }
}
