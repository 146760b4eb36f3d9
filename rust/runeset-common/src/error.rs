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

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// Two sub-ranges at indices `first` and `second` (in sorted order) overlap.
    pub fn overlap(first: usize, second: usize) -> Error {
        Error(ErrorKind::Overlap { first, second }.into())
    }

    pub fn not_interior(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::NotInterior {
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn capacity_exceeded(what: impl Into<String>, limit: usize, requested: usize) -> Error {
        Error(
            ErrorKind::CapacityExceeded {
                what: what.into(),
                limit,
                requested,
            }
            .into(),
        )
    }

    pub fn invalid_config(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidConfig {
                message: message.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("overlapping ranges [{first}] and [{second}]")]
    Overlap { first: usize, second: usize },

    #[error("exclusion is not interior to its base range: {message}")]
    NotInterior { message: String },

    #[error("{what} exceeds capacity: limit {limit}, requested {requested}")]
    CapacityExceeded {
        what: String,
        limit: usize,
        requested: usize,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
