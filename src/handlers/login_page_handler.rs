use crate::handlers::error::AppError;
use crate::models::AppState;
use crate::models::oauth::{LoginQuery, OAuthProvider};
use crate::notifications;
use crate::views::login_page::LoginPage;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

pub const LOGIN_PATH: &str = "/login";

pub async fn index_handler() -> Redirect {
    Redirect::to(LOGIN_PATH)
}

/// Renders the login page.
///
/// The backend sends the browser back here with `?error=...` when a provider
/// callback fails. That message is queued as a notification and the browser
/// is redirected to the bare page, so a refresh does not show it again.
pub async fn login_page_handler(
    State(app_state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
    session: Session,
) -> Result<Response, AppError> {
    let query = LoginQuery::from_pairs(pairs);

    if let Some(error) = query.error() {
        tracing::warn!(%error, "login callback reported an error");
        notifications::notify_error(&session, error).await?;
        return Ok(Redirect::to(LOGIN_PATH).into_response());
    }

    let page = LoginPage {
        google_enabled: app_state.config.is_enabled(OAuthProvider::Google),
        facebook_enabled: app_state.config.is_enabled(OAuthProvider::Facebook),
        notifications: notifications::take_notifications(&session).await?,
    };

    Ok(Html(page.render()).into_response())
}
