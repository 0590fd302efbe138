use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn allocation(context: impl Into<String>, source: TryReserveError) -> Error {
        Error(
            ErrorKind::Allocation {
                context: context.into(),
                source,
            }
            .into(),
        )
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn not_found(position: i64) -> Error {
        Error(ErrorKind::NotFound { position }.into())
    }

    /// Returns `true` if this error reports a failed storage allocation.
    pub fn is_allocation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Allocation { .. })
    }

    /// Returns `true` if this error reports a missing interval.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("allocation failed for '{context}': {source}")]
    Allocation {
        context: String,
        source: TryReserveError,
    },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid interval sequence for '{element}': {message}")]
    InvalidFormat { element: String, message: String },

    #[error("no interval begins at position {position}")]
    NotFound { position: i64 },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<TryReserveError> for Error {
    fn from(e: TryReserveError) -> Self {
        Error::allocation("", e)
    }
}
