use std::error::Error as StdError;
use std::fmt;

/// Coarse classification of a failed portal interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Token missing, redirected back to the logon page, or the page lacks
    /// the element that identifies a logged-in student.
    Authentication,
    /// Network failure, bad HTTP status or an otherwise unusable response.
    Upstream,
    /// Invalid process configuration.
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Authentication => "authentication",
            ErrorKind::Upstream => "upstream",
            ErrorKind::Config => "config",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub struct HacError {
    pub kind: ErrorKind,
    pub message: String,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl HacError {
    pub fn new(kind: ErrorKind, message: &str) -> Self {
        HacError {
            kind,
            message: message.to_string(),
            source: None,
        }
    }

    pub fn authentication(message: &str) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    pub fn upstream(message: &str) -> Self {
        Self::new(ErrorKind::Upstream, message)
    }

    pub fn config(message: &str) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn is_authentication(&self) -> bool {
        self.kind == ErrorKind::Authentication
    }

    /// The wrapped lower-level error, if any.
    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }
}

impl fmt::Display for HacError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HacError({}): {}", self.kind, self.message)
    }
}

// Any std error (reqwest, url, io, FieldError...) converts with `?` and is
// classified as an upstream failure.
impl<E: StdError + Send + Sync + 'static> From<E> for HacError {
    fn from(err: E) -> Self {
        HacError {
            kind: ErrorKind::Upstream,
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
