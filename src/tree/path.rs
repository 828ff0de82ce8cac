use std::{fmt, str::FromStr};

use thiserror::Error;

/// Errors produced when parsing a dot-separated path string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    /// The path string was empty.
    #[error("path is empty")]
    Empty,
    /// A segment between two dots was empty (e.g. `"a..b"` or `"a."`).
    #[error("empty segment in path {path:?}")]
    EmptySegment {
        /// The offending path string.
        path: String,
    },
}

/// A parsed address into a configuration tree.
///
/// Paths are written as dot-separated strings (`"inner.segments.0.color"`)
/// and parsed once into an ordered list of segments, validated before use:
/// an empty path or an empty segment is rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreePath(Vec<String>);

impl TreePath {
    /// Parse a dot-separated path string.
    ///
    /// # Errors
    ///
    /// Returns [`PathError`] when the string is empty or contains an empty
    /// segment.
    pub fn parse(s: &str) -> Result<Self, PathError> {
        if s.is_empty() {
            return Err(PathError::Empty);
        }
        let segments: Vec<String> = s.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(PathError::EmptySegment {
                path: s.to_string(),
            });
        }
        Ok(TreePath(segments))
    }

    /// Build a path from pre-split segments.
    ///
    /// Segments are taken as-is; this is intended for static tables of
    /// known-good tokens where parse-time validation adds nothing.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TreePath(segments.into_iter().map(Into::into).collect())
    }

    /// The ordered path segments.
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl FromStr for TreePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TreePath::parse(s)
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}
