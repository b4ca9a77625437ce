use crate::handlers::error::AppError;
use crate::models::AppState;
use crate::models::oauth::OAuthProvider;
use crate::oauth::{facebook, google};
use axum::{extract::State, response::Redirect};

pub async fn google_login_handler(State(app_state): State<AppState>) -> Result<Redirect, AppError> {
    let config = app_state
        .config
        .google
        .as_ref()
        .ok_or(AppError::ProviderNotConfigured(OAuthProvider::Google))?;

    let url = google::authorization_url(config);

    tracing::info!(provider = %OAuthProvider::Google, "redirecting to authorization endpoint");
    Ok(Redirect::to(url.as_str()))
}

pub async fn facebook_login_handler(
    State(app_state): State<AppState>,
) -> Result<Redirect, AppError> {
    let config = app_state
        .config
        .facebook
        .as_ref()
        .ok_or(AppError::ProviderNotConfigured(OAuthProvider::Facebook))?;

    let url = facebook::authorization_url(config);

    tracing::info!(provider = %OAuthProvider::Facebook, "redirecting to authorization endpoint");
    Ok(Redirect::to(url.as_str()))
}
