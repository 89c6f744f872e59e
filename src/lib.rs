//! # Rampart
//!
//! Declarative HTTP API test support. Tests describe a call — method, URL,
//! headers, query parameters, content type, JSON body — as a typed request
//! descriptor, validated at construction, and hand it to an execution engine
//! to perform.
//!
//! The descriptor for JSON payloads is [`JsonRequest`]; every descriptor
//! exposes its fields through the [`HttpRequest`] read contract.

pub mod error;
pub mod http;
pub mod json;

pub use error::RequestError;
pub use http::content_type::ContentType;
pub use http::header::ApiHeader;
pub use http::method::HttpMethod;
pub use http::query::ApiQueryParam;
pub use http::request::HttpRequest;
pub use json::request::JsonRequest;
