//! # JSON Requests
//!
//! Request descriptors whose body is JSON text, validated once at
//! construction.

pub mod request;
