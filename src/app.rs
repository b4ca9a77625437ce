use crate::handlers::{facebook_login_handler, google_login_handler, index_handler, login_page_handler};
use crate::models::AppState;
use axum::{Router, routing::get};
use time::Duration;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

pub fn router(app_state: AppState, session_store: MemoryStore) -> Router {
    let session_expiry = Expiry::OnInactivity(Duration::hours(6));
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(app_state.config.secure_cookies)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_expiry(session_expiry);

    Router::new()
        .route("/", get(index_handler))
        .route("/login", get(login_page_handler))
        .route("/login/google", get(google_login_handler))
        .route("/login/facebook", get(facebook_login_handler))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
