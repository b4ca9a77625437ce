//! Authorization-request URL builders, one per provider dialect.
//!
//! Builders only assemble URLs; navigating the browser there is the
//! caller's job.

pub mod facebook;
pub mod google;

use oauth2::AuthUrl;
use oauth2::url::Url;

/// Ordered query parameters for a provider's authorization endpoint.
#[derive(Debug)]
pub struct AuthorizationRequest<'a> {
    endpoint: &'a AuthUrl,
    params: Vec<(&'static str, String)>,
}

impl<'a> AuthorizationRequest<'a> {
    pub fn new(endpoint: &'a AuthUrl) -> Self {
        Self {
            endpoint,
            params: Vec::new(),
        }
    }

    pub fn param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.push((key, value.into()));
        self
    }

    /// Form-urlencodes the parameters onto the endpoint.
    pub fn into_url(self) -> Url {
        let mut url = self.endpoint.url().clone();

        url.query_pairs_mut().extend_pairs(
            self.params
                .iter()
                .map(|(key, value)| (*key, value.as_str())),
        );

        url
    }
}
