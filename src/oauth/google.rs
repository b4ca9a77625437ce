use super::AuthorizationRequest;
use crate::models::app_config::GoogleLoginConfig;
use oauth2::url::Url;

pub const SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/userinfo.email",
    "https://www.googleapis.com/auth/userinfo.profile",
];

/// Authorization-code request with an account picker and offline access,
/// so the backend also receives a refresh token.
pub fn authorization_url(config: &GoogleLoginConfig) -> Url {
    AuthorizationRequest::new(&config.auth_url)
        .param("response_type", "code")
        .param("client_id", config.client_id.as_str())
        .param("redirect_uri", config.redirect_url.as_str())
        .param("prompt", "select_account")
        .param("access_type", "offline")
        .param("scope", SCOPES.join(" "))
        .into_url()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::app_config::{auth_url, callback_url};
    use crate::models::oauth::OAuthProvider;
    use oauth2::ClientId;
    use std::collections::HashMap;

    fn config(client_id: &str) -> GoogleLoginConfig {
        GoogleLoginConfig {
            auth_url: auth_url(OAuthProvider::Google).unwrap(),
            client_id: ClientId::new(client_id.to_string()),
            redirect_url: callback_url("https://api.example.com", OAuthProvider::Google).unwrap(),
        }
    }

    fn query(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn targets_google_authorization_endpoint() {
        let url = authorization_url(&config("client-123"));
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("accounts.google.com"));
        assert_eq!(url.path(), "/o/oauth2/v2/auth");
    }

    #[test]
    fn carries_all_parameters() {
        let url = authorization_url(&config("client-123"));
        let params = query(&url);

        assert_eq!(params.len(), 6);
        assert_eq!(params["response_type"], "code");
        assert_eq!(params["client_id"], "client-123");
        assert_eq!(
            params["redirect_uri"],
            "https://api.example.com/api/v1/users/auth/login/google/"
        );
        assert_eq!(params["prompt"], "select_account");
        assert_eq!(params["access_type"], "offline");
        assert!(!params.contains_key("state"));
    }

    #[test]
    fn parameter_order_is_stable() {
        let url = authorization_url(&config("client-123"));
        let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(
            keys,
            [
                "response_type",
                "client_id",
                "redirect_uri",
                "prompt",
                "access_type",
                "scope"
            ]
        );
    }

    #[test]
    fn scope_joins_both_scopes_with_one_space() {
        for client_id in ["client-123", "with space", "ünïcode&chars"] {
            let url = authorization_url(&config(client_id));
            let params = query(&url);
            assert_eq!(
                params["scope"],
                "https://www.googleapis.com/auth/userinfo.email https://www.googleapis.com/auth/userinfo.profile"
            );
            assert_eq!(params["client_id"], client_id);
        }
    }

    #[test]
    fn scope_is_form_encoded_on_the_wire() {
        let url = authorization_url(&config("client-123"));
        assert!(url.query().unwrap().contains(
            "scope=https%3A%2F%2Fwww.googleapis.com%2Fauth%2Fuserinfo.email+https%3A%2F%2Fwww.googleapis.com%2Fauth%2Fuserinfo.profile"
        ));
    }
}
