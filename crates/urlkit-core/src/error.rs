//! Error type for URL construction and component mutation.
//!
//! Every failure is built through [`Error::new`], which records the failing
//! operation and, in debug builds, where inside the crate the error was raised.

use std::fmt;
use std::panic::Location;

use crate::component::Component;

pub type Result<T> = std::result::Result<T, Error>;

/// Status reported by the URL engine when it rejects input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Status {
    /// Syntax error from the parser.
    #[error("{0}")]
    Parse(#[from] ::url::ParseError),
    /// The engine refused the value without further detail.
    #[error("value rejected")]
    Rejected,
    /// Port text is not a number in `0..=65535`.
    #[error("not a port number")]
    InvalidPort,
    /// The URL's scheme does not carry login options.
    #[error("scheme does not carry login options")]
    OptionsUnsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// Construction from text failed.
    #[error("invalid url '{text}'. url engine returned: {status}")]
    InvalidUrl { text: String, status: Status },
    /// A setter or `add_query` was rejected.
    #[error("invalid {component} '{value}'. url engine returned: {status}")]
    InvalidComponent {
        component: Component,
        value: String,
        status: Status,
    },
}

#[derive(Debug, Clone)]
pub struct Error {
    operation: &'static str,
    location: Option<&'static Location<'static>>,
    kind: ErrorKind,
}

impl Error {
    #[track_caller]
    pub(crate) fn new(operation: &'static str, kind: ErrorKind) -> Self {
        let location = if cfg!(debug_assertions) {
            Some(Location::caller())
        } else {
            None
        };
        Self {
            operation,
            location,
            kind,
        }
    }

    /// Name of the operation that failed (e.g. `"parse"`, `"set_host"`).
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Source location of the failure; only recorded in debug builds.
    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Underlying engine status code.
    pub fn status(&self) -> Status {
        match &self.kind {
            ErrorKind::InvalidUrl { status, .. } | ErrorKind::InvalidComponent { status, .. } => {
                *status
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operation)?;
        if let Some(loc) = self.location {
            write!(f, "({}:{})", loc.file(), loc.line())?;
        }
        write!(f, ". {}", self.kind)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::InvalidUrl { status, .. } | ErrorKind::InvalidComponent { status, .. } => {
                Some(status)
            }
        }
    }
}
