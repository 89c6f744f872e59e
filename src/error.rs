use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or preparing a request descriptor.
///
/// `InvalidJson` is the expected, recoverable rejection: fix the payload and
/// construct again. The file variants are environmental failures and carry
/// the underlying cause together with the offending path. The URL and header
/// variants are raised when a finished descriptor is handed to the execution
/// engine and a field cannot be expressed on the wire.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The body text failed JSON parsing. Carries the parse cause and the
    /// exact text that was rejected.
    #[error("invalid JSON body: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The body file could not be read.
    #[error("failed to read JSON body from `{}`", .path.display())]
    FileRead {
        #[source]
        source: io::Error,
        path: PathBuf,
    },

    /// The body file was read but its bytes are not valid text in the
    /// requested encoding.
    #[error("file `{}` is not valid {} text", .path.display(), .encoding)]
    FileDecode {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error("invalid URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid header `{name}`: {reason}")]
    InvalidHeader { name: String, reason: String },
}
