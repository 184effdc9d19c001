//! Reply definitions
//!
//! Decoded server replies and their human-readable rendering.

use std::fmt;

use bytes::Bytes;

/// A decoded server reply
///
/// `None` is the protocol null. It is never the same thing as an empty
/// payload or an empty array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Status, error, integer or bulk string reply
    Scalar(Option<Bytes>),

    /// Array reply whose elements are nullable bulk strings
    Aggregate(Option<Vec<Option<Bytes>>>),
}

impl Reply {
    /// Create a present scalar reply
    pub fn scalar(payload: impl Into<Bytes>) -> Self {
        Reply::Scalar(Some(payload.into()))
    }

    /// True for a null scalar or a null aggregate
    pub fn is_null(&self) -> bool {
        matches!(self, Reply::Scalar(None) | Reply::Aggregate(None))
    }

    /// Render the reply as display lines
    ///
    /// Array elements are numbered from zero and quoted; nulls print as
    /// `(nil)`.
    pub fn format(&self) -> Vec<String> {
        match self {
            Reply::Scalar(None) | Reply::Aggregate(None) => vec!["(nil)".to_string()],
            Reply::Scalar(Some(payload)) => vec![text(payload)],
            Reply::Aggregate(Some(elements)) if elements.is_empty() => {
                vec!["(empty list or set)".to_string()]
            }
            Reply::Aggregate(Some(elements)) => elements
                .iter()
                .enumerate()
                .map(|(i, element)| match element {
                    None => format!("{}) (nil)", i),
                    Some(payload) => format!("{}) \"{}\"", i, text(payload)),
                })
                .collect(),
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format().join("\n"))
    }
}

fn text(payload: &[u8]) -> String {
    String::from_utf8_lossy(payload).into_owned()
}
