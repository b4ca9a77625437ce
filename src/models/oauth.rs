use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Facebook,
}

impl OAuthProvider {
    pub const ALL: [OAuthProvider; 2] = [OAuthProvider::Google, OAuthProvider::Facebook];

    pub fn authorization_endpoint(self) -> &'static str {
        match self {
            OAuthProvider::Google => "https://accounts.google.com/o/oauth2/v2/auth",
            OAuthProvider::Facebook => "https://www.facebook.com/v13.0/dialog/oauth",
        }
    }

    /// Path on the backend that receives the provider's redirect, relative to
    /// the backend base URL.
    pub fn callback_path(self) -> &'static str {
        match self {
            OAuthProvider::Google => "api/v1/users/auth/login/google/",
            OAuthProvider::Facebook => "api/v1/users/auth/login/facebook/",
        }
    }

    /// Route on this service that starts the provider's flow.
    pub fn login_route(self) -> &'static str {
        match self {
            OAuthProvider::Google => "/login/google",
            OAuthProvider::Facebook => "/login/facebook",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            OAuthProvider::Google => "Google",
            OAuthProvider::Facebook => "Facebook",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Query string the backend appends when it sends the browser back to the
/// login page.
#[derive(Debug, Default)]
pub struct LoginQuery {
    pub error: Option<String>,
}

impl LoginQuery {
    /// Keeps the first `error` value when the key is repeated.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let error = pairs
            .into_iter()
            .find(|(key, _)| key == "error")
            .map(|(_, value)| value);

        Self { error }
    }

    /// The relayed error, if any. An empty `error=` counts as absent.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref().filter(|error| !error.is_empty())
    }
}
