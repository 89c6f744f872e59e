use super::content_type::ContentType;
use super::header::ApiHeader;
use super::method::HttpMethod;
use super::query::ApiQueryParam;

/// Read contract a finished request descriptor exposes to the execution
/// engine.
///
/// Accessors return stored values as-is; nothing is recomputed or
/// re-serialized on read.
pub trait HttpRequest {
    /// Human-readable label for reports and logs.
    fn name(&self) -> &str;

    fn url(&self) -> &str;

    fn method(&self) -> HttpMethod;

    fn content_type(&self) -> &ContentType;

    /// Headers in insertion order, duplicates included.
    fn headers(&self) -> &[ApiHeader];

    /// Query parameters in insertion order, duplicates included.
    fn query_params(&self) -> &[ApiQueryParam];

    /// Raw body text, byte-for-byte as supplied at construction.
    fn body(&self) -> &str;
}
