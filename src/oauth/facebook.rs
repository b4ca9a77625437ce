use super::AuthorizationRequest;
use crate::models::app_config::FacebookLoginConfig;
use oauth2::url::Url;

pub const FIELDS: &str = "name,email,picture";
pub const SCOPE: &str = "email";

/// `auth_type=rerequest` asks Facebook to prompt again for permissions the
/// user declined on an earlier attempt.
pub fn authorization_url(config: &FacebookLoginConfig) -> Url {
    AuthorizationRequest::new(&config.auth_url)
        .param("client_id", config.client_id.as_str())
        .param("redirect_uri", config.redirect_url.as_str())
        .param("state", config.state.secret().as_str())
        .param("auth_type", "rerequest")
        .param("fields", FIELDS)
        .param("scope", SCOPE)
        .into_url()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::app_config::{auth_url, callback_url};
    use crate::models::oauth::OAuthProvider;
    use oauth2::{ClientId, CsrfToken};
    use std::collections::HashMap;

    fn config(state: &str) -> FacebookLoginConfig {
        FacebookLoginConfig {
            auth_url: auth_url(OAuthProvider::Facebook).unwrap(),
            client_id: ClientId::new("1088597931155576".to_string()),
            redirect_url: callback_url("http://localhost:8000", OAuthProvider::Facebook).unwrap(),
            state: CsrfToken::new(state.to_string()),
        }
    }

    fn query(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn targets_facebook_dialog_endpoint() {
        let url = authorization_url(&config("s3cret"));
        assert_eq!(url.host_str(), Some("www.facebook.com"));
        assert_eq!(url.path(), "/v13.0/dialog/oauth");
    }

    #[test]
    fn carries_all_parameters() {
        let params = query(&authorization_url(&config("s3cret")));

        assert_eq!(params.len(), 6);
        assert_eq!(params["client_id"], "1088597931155576");
        assert_eq!(
            params["redirect_uri"],
            "http://localhost:8000/api/v1/users/auth/login/facebook/"
        );
        assert_eq!(params["auth_type"], "rerequest");
        assert_eq!(params["fields"], "name,email,picture");
        assert_eq!(params["scope"], "email");
    }

    #[test]
    fn state_is_the_configured_secret_verbatim() {
        for state in ["s3cret", "with spaces & symbols=?", "0"] {
            let first = query(&authorization_url(&config(state)));
            let second = query(&authorization_url(&config(state)));
            assert_eq!(first["state"], state);
            assert_eq!(first["state"], second["state"]);
        }
    }
}
