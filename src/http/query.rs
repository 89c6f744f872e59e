use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A single query parameter to append to a request URL.
///
/// Same ordering and duplicate policy as [`super::header::ApiHeader`]:
/// insertion order preserved, repeated names kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiQueryParam {
    name: String,
    value: String,
}

impl ApiQueryParam {
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

impl Display for ApiQueryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
