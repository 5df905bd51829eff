pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod welcome;

use std::sync::Arc;

use axum::middleware as axum_middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::auth::CredentialVerifier;
use crate::backend::Backend;

use self::handlers::AppState;
use self::welcome::WelcomePage;

/// Path of the authenticated generation endpoint.
pub const GENERATE_PATH: &str = "/generate-text/";

/// Same endpoint without the trailing slash.
const GENERATE_PATH_ALIAS: &str = "/generate-text";

/// Build the axum router with public and protected route split.
pub fn build_router(
    backend: Arc<dyn Backend>,
    verifier: Arc<dyn CredentialVerifier>,
    welcome: WelcomePage,
) -> Router {
    let state = Arc::new(AppState { backend, welcome });

    // Public routes (no auth)
    let public_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health));

    // Protected routes (x-api-key checked before the handler runs)
    let protected_routes = Router::new()
        .route(GENERATE_PATH, post(handlers::generate_text))
        .route(GENERATE_PATH_ALIAS, post(handlers::generate_text))
        .route_layer(axum_middleware::from_fn_with_state(
            verifier,
            |state: axum::extract::State<Arc<dyn CredentialVerifier>>,
             req: axum::extract::Request,
             next: axum_middleware::Next| {
                middleware::api_key_middleware(state.0, req, next)
            },
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(axum_middleware::from_fn(logging::request_log_middleware))
        .with_state(state)
}
