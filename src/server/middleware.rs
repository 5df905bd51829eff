use std::sync::Arc;

use axum::body::Body;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::auth::{AuthError, CredentialVerifier};

use super::error::ApiError;

/// Header carrying the caller's shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Auth middleware: checks the x-api-key header before the request reaches a
/// handler, so rejected callers never trigger an upstream call.
pub async fn api_key_middleware(
    verifier: Arc<dyn CredentialVerifier>,
    req: Request<Body>,
    next: Next,
) -> Response {
    match check_api_key(verifier.as_ref(), &req) {
        Ok(()) => next.run(req).await,
        Err(e) => ApiError::Unauthorized(e).into_response(),
    }
}

/// Compares raw header bytes, so secrets outside visible ASCII still match.
fn check_api_key(verifier: &dyn CredentialVerifier, req: &Request<Body>) -> Result<(), AuthError> {
    let supplied = req.headers().get(API_KEY_HEADER).map(|v| v.as_bytes());
    verifier.verify(supplied)
}
