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

    pub fn precondition(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::PreconditionViolation {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn unsupported_width(width: usize) -> Error {
        Error(ErrorKind::UnsupportedElementWidth { width }.into())
    }

    /// Returns `true` for the kinds that the raw engine treats as fatal.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::PreconditionViolation { .. } | ErrorKind::UnsupportedElementWidth { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("precondition violated for {name}: {message}")]
    PreconditionViolation { name: String, message: String },

    #[error("unsupported element width {width}, expected 2, 4 or 8")]
    UnsupportedElementWidth { width: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(e: std::convert::Infallible) -> Self {
        match e {}
    }
}
