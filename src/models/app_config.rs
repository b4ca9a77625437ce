use crate::models::oauth::OAuthProvider;
use oauth2::{AuthUrl, ClientId, CsrfToken, RedirectUrl};
use std::net::SocketAddr;

pub const GOOGLE_CLIENT_ID_VAR: &str = "REACT_APP_GOOGLE_CLIENT_ID";
pub const FACEBOOK_CLIENT_ID_VAR: &str = "REACT_APP_FACEBOOK_CLIENT_ID";
pub const BASE_BACKEND_URL_VAR: &str = "REACT_APP_BASE_BACKEND_URL";
pub const FACEBOOK_STATE_VAR: &str = "REACT_APP_SECRET_FACEBOOK_STATE";
pub const LISTEN_ADDR_VAR: &str = "LISTEN_ADDR";
pub const COOKIE_SECURE_VAR: &str = "COOKIE_SECURE";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:10000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {provider} authorization endpoint: {source}")]
    InvalidAuthUrl {
        provider: OAuthProvider,
        #[source]
        source: oauth2::url::ParseError,
    },
    #[error("invalid {provider} redirect URI {uri:?}: {source}")]
    InvalidRedirectUri {
        provider: OAuthProvider,
        uri: String,
        #[source]
        source: oauth2::url::ParseError,
    },
    #[error("{provider} client ID is set but {var} is missing")]
    MissingProviderSetting {
        provider: OAuthProvider,
        var: &'static str,
    },
    #[error("LISTEN_ADDR is not a socket address: {0:?}")]
    InvalidListenAddr(String),
    #[error("COOKIE_SECURE must be a boolean, got {0:?}")]
    InvalidCookieSecure(String),
}

#[derive(Clone, Debug)]
pub struct GoogleLoginConfig {
    pub auth_url: AuthUrl,
    pub client_id: ClientId,
    pub redirect_url: RedirectUrl,
}

#[derive(Clone, Debug)]
pub struct FacebookLoginConfig {
    pub auth_url: AuthUrl,
    pub client_id: ClientId,
    pub redirect_url: RedirectUrl,
    /// Sent verbatim as the `state` parameter on every request. This is a
    /// static shared secret, not a per-request nonce, so it only proves the
    /// callback came through a flow this deployment started at some point.
    pub state: CsrfToken,
}

/// Process-wide settings, read once at start-up.
///
/// A provider is enabled exactly when its client ID is set; the login page
/// renders the button of a `None` provider disabled. A client ID without the
/// backend base URL (or, for Facebook, the state secret) is a start-up error
/// rather than a silently disabled button.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub google: Option<GoogleLoginConfig>,
    pub facebook: Option<FacebookLoginConfig>,
    pub listen_addr: SocketAddr,
    pub secure_cookies: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        use dotenvy::dotenv;
        use std::env;

        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let require = |provider: OAuthProvider, key: &'static str| {
            var(key).ok_or(ConfigError::MissingProviderSetting { provider, var: key })
        };

        let google = match var(GOOGLE_CLIENT_ID_VAR) {
            Some(client_id) => {
                let base = require(OAuthProvider::Google, BASE_BACKEND_URL_VAR)?;
                Some(GoogleLoginConfig {
                    auth_url: auth_url(OAuthProvider::Google)?,
                    client_id: ClientId::new(client_id),
                    redirect_url: callback_url(&base, OAuthProvider::Google)?,
                })
            }
            None => None,
        };

        let facebook = match var(FACEBOOK_CLIENT_ID_VAR) {
            Some(client_id) => {
                let base = require(OAuthProvider::Facebook, BASE_BACKEND_URL_VAR)?;
                let state = require(OAuthProvider::Facebook, FACEBOOK_STATE_VAR)?;
                Some(FacebookLoginConfig {
                    auth_url: auth_url(OAuthProvider::Facebook)?,
                    client_id: ClientId::new(client_id),
                    redirect_url: callback_url(&base, OAuthProvider::Facebook)?,
                    state: CsrfToken::new(state),
                })
            }
            None => None,
        };

        let listen_addr = var(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidListenAddr(listen_addr))?;

        let secure_cookies = match var(COOKIE_SECURE_VAR) {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidCookieSecure(raw))?,
            None => false,
        };

        Ok(Self {
            google,
            facebook,
            listen_addr,
            secure_cookies,
        })
    }

    pub fn is_enabled(&self, provider: OAuthProvider) -> bool {
        match provider {
            OAuthProvider::Google => self.google.is_some(),
            OAuthProvider::Facebook => self.facebook.is_some(),
        }
    }
}

pub fn auth_url(provider: OAuthProvider) -> Result<AuthUrl, ConfigError> {
    AuthUrl::new(provider.authorization_endpoint().to_string())
        .map_err(|source| ConfigError::InvalidAuthUrl { provider, source })
}

/// Joins the backend base URL and the provider's callback path with exactly
/// one slash between them.
pub fn callback_url(base: &str, provider: OAuthProvider) -> Result<RedirectUrl, ConfigError> {
    let uri = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        provider.callback_path()
    );

    RedirectUrl::new(uri.clone()).map_err(|source| ConfigError::InvalidRedirectUri {
        provider,
        uri,
        source,
    })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}

#[cfg(test)]
#[path = "app_config_test.rs"]
mod tests;
