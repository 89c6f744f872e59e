use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A single HTTP header to send with a request.
///
/// Headers are kept in insertion order. Repeated names are not collapsed;
/// whether duplicates mean "last wins" or "send all" is the execution
/// engine's decision, not this model's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiHeader {
    name: String,
    value: String,
}

impl ApiHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for ApiHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}
