//! Correlation ID middleware.

use axum::{
    body::{Body, Bytes},
    http::{header::CONTENT_LENGTH, HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use gamevault_core::ErrorResponse;
use uuid::Uuid;

/// Header carrying the correlation ID.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

// Error envelopes are small; anything larger is passed through untouched.
const MAX_PATCHED_BODY_BYTES: usize = 64 * 1024;

/// Correlation ID assigned to a request.
#[derive(Debug, Clone)]
pub struct CorrelationId(pub String);

impl CorrelationId {
    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Assigns each request a correlation ID.
///
/// An incoming `x-correlation-id` header is honored so upstream callers
/// can trace a request through the service; otherwise a fresh ID is
/// generated. The ID is stored in the request extensions, echoed on the
/// response, and stamped into the body of error envelopes.
pub async fn correlation_middleware(mut request: Request<Body>, next: Next) -> Response {
    let header_name = HeaderName::from_static(CORRELATION_ID_HEADER);

    let correlation_id = request
        .headers()
        .get(&header_name)
        .and_then(|h| h.to_str().ok())
        .map(ToString::to_string)
        .unwrap_or_else(|| Uuid::now_v7().to_string());

    request
        .extensions_mut()
        .insert(CorrelationId(correlation_id.clone()));

    let response = next.run(request).await;
    let mut response = attach_to_error_body(response, &correlation_id).await;

    if let Ok(value) = HeaderValue::from_str(&correlation_id) {
        response.headers_mut().insert(header_name, value);
    }

    response
}

/// Stamps the correlation ID into the error envelope of 4xx/5xx responses.
///
/// Non-JSON bodies and bodies that do not carry the envelope shape pass
/// through unchanged.
async fn attach_to_error_body(response: Response, correlation_id: &str) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_PATCHED_BODY_BYTES).await {
        Ok(bytes) => bytes,
        // Oversized or broken body; the status line is all that is left.
        Err(_) => return Response::from_parts(parts, Body::empty()),
    };

    let Ok(mut json) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
        return Response::from_parts(parts, Body::from(bytes));
    };

    let patched = (|| {
        let error_value = json.get_mut("error")?;
        let error = serde_json::from_value::<ErrorResponse>(error_value.clone()).ok()?;
        *error_value = serde_json::to_value(error.with_correlation_id(correlation_id)).ok()?;
        serde_json::to_vec(&json).ok()
    })()
    .map(Bytes::from);

    match patched {
        Some(patched) => {
            parts.headers.remove(CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(patched))
        }
        None => Response::from_parts(parts, Body::from(bytes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responses::AppError;
    use axum::http::StatusCode;
    use axum::{middleware, routing::get, Router};
    use gamevault_core::VaultError;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> Router {
        Router::new()
            .route(
                "/missing",
                get(|| async { Err::<(), _>(AppError(VaultError::not_found("Game", "g-1"))) }),
            )
            .route("/fine", get(|| async { "fine" }))
            .layer(middleware::from_fn(correlation_middleware))
    }

    #[tokio::test]
    async fn test_error_body_carries_generated_id() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let header_id = response
            .headers()
            .get(CORRELATION_ID_HEADER)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["correlation_id"], header_id.as_str());
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_incoming_id_is_honored() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/missing")
                    .header(CORRELATION_ID_HEADER, "caller-supplied-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(CORRELATION_ID_HEADER).unwrap(),
            "caller-supplied-id"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["correlation_id"], "caller-supplied-id");
    }

    #[tokio::test]
    async fn test_success_body_passes_through() {
        let response = test_app()
            .oneshot(Request::builder().uri("/fine").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(CORRELATION_ID_HEADER));

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"fine");
    }

    #[tokio::test]
    async fn test_non_envelope_error_body_is_untouched() {
        let app = Router::new()
            .route(
                "/plain",
                get(|| async { (StatusCode::BAD_REQUEST, "plain text") }),
            )
            .layer(middleware::from_fn(correlation_middleware));

        let response = app
            .oneshot(Request::builder().uri("/plain").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"plain text");
    }
}
