// ABOUTME: Request ID middleware for correlating logs with responses
// ABOUTME: Reuses an incoming x-request-id or generates a UUID v4 and echoes it back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

use axum::{extract::Request, middleware::Next, response::Response};
use bakebase_core::constants::headers::X_REQUEST_ID;
use http::HeaderValue;
use tracing::{info_span, Instrument};
use uuid::Uuid;

/// Correlation ID of the current request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    /// Take the caller's ID when it is a usable header value, else generate one
    #[must_use]
    pub fn from_header(value: Option<&HeaderValue>) -> Self {
        value
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map_or_else(|| Self(Uuid::new_v4().to_string()), |id| Self(id.to_owned()))
    }
}

/// Attach a request ID to the request, its tracing span, and the response
pub async fn propagate_request_id(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_header(request.headers().get(X_REQUEST_ID));
    let header_value = HeaderValue::from_str(&request_id.0).ok();
    let span = info_span!("request", request_id = %request_id.0);
    request.extensions_mut().insert(request_id);

    let mut response = next.run(request).instrument(span).await;
    if let Some(value) = header_value {
        response.headers_mut().insert(X_REQUEST_ID, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_from_header() {
        let value = HeaderValue::from_static("req-123");
        assert_eq!(RequestId::from_header(Some(&value)).0, "req-123");

        let generated = RequestId::from_header(None);
        assert!(Uuid::parse_str(&generated.0).is_ok());

        let blank = HeaderValue::from_static("   ");
        assert_ne!(RequestId::from_header(Some(&blank)).0, "");
    }
}
