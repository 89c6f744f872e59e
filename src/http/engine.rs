use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};

use crate::error::RequestError;
use crate::http::request::HttpRequest;

/// Turn a finished descriptor into a `reqwest::RequestBuilder`.
///
/// Query parameters and headers are applied in insertion order, after the
/// content-type header. The builder is returned unsent; the caller decides
/// when and how the request is executed.
pub fn prepare(
    client: &reqwest::Client,
    request: &dyn HttpRequest,
) -> Result<reqwest::RequestBuilder, RequestError> {
    let mut url = reqwest::Url::parse(request.url()).map_err(|e| RequestError::InvalidUrl {
        url: request.url().to_string(),
        reason: e.to_string(),
    })?;

    if !request.query_params().is_empty() {
        let mut query_pairs = url.query_pairs_mut();
        for param in request.query_params() {
            query_pairs.append_pair(param.name(), param.value());
        }
    }

    let mut builder = client.request(request.method().into(), url);

    let content_type =
        HeaderValue::from_str(request.content_type().as_str()).map_err(|e| {
            RequestError::InvalidHeader {
                name: CONTENT_TYPE.as_str().to_string(),
                reason: e.to_string(),
            }
        })?;
    builder = builder.header(CONTENT_TYPE, content_type);

    for header in request.headers() {
        let name = HeaderName::from_bytes(header.name().as_bytes()).map_err(|e| {
            RequestError::InvalidHeader {
                name: header.name().to_string(),
                reason: e.to_string(),
            }
        })?;
        let value =
            HeaderValue::from_str(header.value()).map_err(|e| RequestError::InvalidHeader {
                name: header.name().to_string(),
                reason: e.to_string(),
            })?;
        builder = builder.header(name, value);
    }

    if !request.body().is_empty() {
        builder = builder.body(request.body().to_string());
    }

    Ok(builder)
}
