use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use tracing::debug;

use crate::error::RequestError;
use crate::http::content_type::ContentType;
use crate::http::header::ApiHeader;
use crate::http::method::HttpMethod;
use crate::http::query::ApiQueryParam;
use crate::http::request::HttpRequest;

/// An HTTP request carrying a JSON body, for use in API tests.
///
/// The body is supplied inline or read from a file and is checked for JSON
/// validity exactly once, at construction; a descriptor that exists holds a
/// syntactically valid body. The content type starts as `application/json`,
/// headers and query parameters start empty, and the descriptive name
/// defaults to `"<METHOD> <url>"`. Configuration methods consume and return
/// the descriptor so calls chain.
#[derive(Debug, Clone)]
pub struct JsonRequest {
    name: String,
    url: String,
    method: HttpMethod,
    content_type: ContentType,
    headers: Vec<ApiHeader>,
    query_params: Vec<ApiQueryParam>,
    body: String,
}

impl JsonRequest {
    /// Build a request from inline JSON text.
    ///
    /// # Errors
    ///
    /// [`RequestError::InvalidJson`] if `json` does not parse, carrying the
    /// parse cause and the rejected text.
    pub fn from_string(
        method: HttpMethod,
        url: impl Into<String>,
        json: impl Into<String>,
    ) -> Result<Self, RequestError> {
        Self::build(method, url.into(), json.into())
    }

    /// [`JsonRequest::from_string`] with the method fixed to POST.
    pub fn post_from_string(
        url: impl Into<String>,
        json: impl Into<String>,
    ) -> Result<Self, RequestError> {
        Self::from_string(HttpMethod::Post, url, json)
    }

    /// [`JsonRequest::from_string`] with the method fixed to PUT.
    pub fn put_from_string(
        url: impl Into<String>,
        json: impl Into<String>,
    ) -> Result<Self, RequestError> {
        Self::from_string(HttpMethod::Put, url, json)
    }

    /// Build a request whose JSON body is the content of a UTF-8 file.
    ///
    /// # Errors
    ///
    /// [`RequestError::FileRead`] if the file cannot be read,
    /// [`RequestError::FileDecode`] if its bytes are not UTF-8 text, and
    /// [`RequestError::InvalidJson`] if the text does not parse as JSON.
    pub fn from_file(
        method: HttpMethod,
        url: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, RequestError> {
        Self::from_file_with_encoding(method, url, path, UTF_8)
    }

    /// Build a request whose JSON body is read from a file in an explicit
    /// character encoding.
    ///
    /// The encoding is a parameter rather than an environment default so a
    /// test behaves the same on every machine that runs it.
    pub fn from_file_with_encoding(
        method: HttpMethod,
        url: impl Into<String>,
        path: impl AsRef<Path>,
        encoding: &'static Encoding,
    ) -> Result<Self, RequestError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| RequestError::FileRead {
            source,
            path: path.to_path_buf(),
        })?;
        let (text, _, had_errors) = encoding.decode(&bytes);
        if had_errors {
            return Err(RequestError::FileDecode {
                path: path.to_path_buf(),
                encoding: encoding.name(),
            });
        }
        debug!(path = %path.display(), bytes = bytes.len(), "read JSON body from file");
        Self::build(method, url.into(), text.into_owned())
    }

    /// [`JsonRequest::from_file`] with the method fixed to POST.
    pub fn post_from_file(
        url: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, RequestError> {
        Self::from_file(HttpMethod::Post, url, path)
    }

    /// [`JsonRequest::from_file`] with the method fixed to PUT.
    pub fn put_from_file(
        url: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, RequestError> {
        Self::from_file(HttpMethod::Put, url, path)
    }

    fn build(method: HttpMethod, url: String, body: String) -> Result<Self, RequestError> {
        // Parsed once here; the text itself is what gets sent, untouched.
        if let Err(source) = serde_json::from_str::<serde_json::Value>(&body) {
            debug!(%method, %url, "rejected request body as invalid JSON");
            return Err(RequestError::InvalidJson { source, body });
        }

        let name = format!("{method} {url}");
        debug!(%method, %url, "built JSON request descriptor");
        Ok(Self {
            name,
            url,
            method,
            content_type: ContentType::json(),
            headers: Vec::new(),
            query_params: Vec::new(),
            body,
        })
    }

    /// Replace the default `application/json` content type. The last call
    /// wins.
    pub fn override_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Append a header. Repeated names accumulate in call order.
    pub fn add_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(ApiHeader::new(name, value));
        self
    }

    /// Append a query parameter. Repeated names accumulate in call order.
    pub fn add_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push(ApiQueryParam::new(name, value));
        self
    }
}

impl HttpRequest for JsonRequest {
    fn name(&self) -> &str {
        &self.name
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn method(&self) -> HttpMethod {
        self.method
    }

    fn content_type(&self) -> &ContentType {
        &self.content_type
    }

    fn headers(&self) -> &[ApiHeader] {
        &self.headers
    }

    fn query_params(&self) -> &[ApiQueryParam] {
        &self.query_params
    }

    fn body(&self) -> &str {
        &self.body
    }
}
