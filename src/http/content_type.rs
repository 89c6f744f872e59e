use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A media type for the `Content-Type` header.
///
/// JSON descriptors start out as [`ContentType::json`]; any other media type
/// can be substituted through the descriptor's override call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentType(String);

impl ContentType {
    /// Any media type, taken verbatim.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// `application/json`.
    pub fn json() -> Self {
        Self::new("application/json")
    }

    /// `text/plain`.
    pub fn plain_text() -> Self {
        Self::new("text/plain")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
