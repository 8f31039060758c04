//! Error types that can occur during header collection operations.
use std::error::Error;

/// An error that can occur in header collection operations.
#[derive(Debug)]
#[non_exhaustive]
pub enum HeaderError {
    /// Header name is empty or only whitespace.
    EmptyName,
    /// A single value mutator was given an absent value.
    MissingValue,
    /// The collection is read only.
    ReadOnly,
    /// An entry visitor failed while traversing a collection.
    Visitor(Box<dyn Error + Send + Sync>),
}

impl HeaderError {
    /// Wraps an error raised from inside an entry visitor.
    pub fn visitor<E: Into<Box<dyn Error + Send + Sync>>>(err: E) -> Self {
        Self::Visitor(err.into())
    }

    /// Returns `true` if the error was caused by mutating a read only collection.
    pub const fn is_read_only(&self) -> bool {
        matches!(self, Self::ReadOnly)
    }

    pub(crate) const fn message(&self) -> &'static str {
        match self {
            Self::EmptyName => "header name cannot be empty",
            Self::MissingValue => "header value is missing",
            Self::ReadOnly => "read only",
            Self::Visitor(_) => "entry visitor failed",
        }
    }
}

impl Error for HeaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Visitor(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl std::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Visitor(err) => write!(f, "{}: {err}", self.message()),
            _ => f.write_str(self.message()),
        }
    }
}
