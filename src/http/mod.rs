//! # HTTP Request Model
//!
//! The typed building blocks of a request descriptor (method, content type,
//! header and query-parameter pairs), the [`request::HttpRequest`] read
//! contract, and the [`engine`] bridge that turns a finished descriptor into
//! a `reqwest` request.

pub mod content_type;
pub mod engine;
pub mod header;
pub mod method;
pub mod query;
pub mod request;
