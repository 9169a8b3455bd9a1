mod auth;
mod modifiers;
mod restaurant;

use std::{fmt, num::NonZeroU32, time::Duration};

use governor::{DefaultDirectRateLimiter, Jitter, Quota, RateLimiter};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};

pub use auth::authenticate;
pub use modifiers::{fetch_modifiers, MenuItemId};
pub use restaurant::fetch_restaurant;

pub const DEFAULT_API_BASE: &str = "https://api-gtm.grubhub.com";
pub const DEFAULT_CLIENT_ID: &str = "beta_UmWlpstzQSFmocLy3h1UieYcVST";
static DELAY_JITTER: Duration = Duration::from_millis(250);

pub fn make_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder().gzip(true);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Everything a request needs besides the credential: the http client, where
/// the api lives and how fast we may hit it.
pub struct GrubhubApi {
    client: Client,
    base: Url,
    client_id: String,
    rate_limiter: Option<DefaultDirectRateLimiter>,
}

impl GrubhubApi {
    pub fn new(client: Client, base: Url) -> Result<Self> {
        if base.cannot_be_a_base() {
            return Err(Error::invalid_input(format!("{base} cannot be an api base url")));
        }
        Ok(Self {
            client,
            base,
            client_id: DEFAULT_CLIENT_ID.to_owned(),
            rate_limiter: None,
        })
    }

    #[must_use]
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Caps requests per second across the whole run. Without it every
    /// modifier request is sent at once.
    #[must_use]
    pub fn with_rate_limit(mut self, per_second: NonZeroU32) -> Self {
        self.rate_limiter = Some(RateLimiter::direct(Quota::per_second(per_second)));
        self
    }

    pub const fn client(&self) -> &Client {
        &self.client
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// `base` with `segments` appended to its path.
    pub fn endpoint<I>(&self, segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base.clone();
        // checked in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn throttle(&self) {
        if let Some(limiter) = &self.rate_limiter {
            let jitter = Jitter::new(Duration::ZERO, DELAY_JITTER);
            limiter.until_ready_with_jitter(jitter).await;
        }
    }
}

impl fmt::Debug for GrubhubApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrubhubApi")
            .field("base", &self.base.as_str())
            .field("client_id", &self.client_id)
            .field("rate_limited", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// The `session_handle` returned by the auth endpoint. Lives for one run and
/// is handed to every request explicitly.
#[derive(Clone, Deserialize)]
pub struct Credential {
    access_token: String,
    #[serde(flatten)]
    metadata: serde_json::Map<String, serde_json::Value>,
}

impl Credential {
    #[cfg(test)]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            metadata: serde_json::Map::new(),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub const fn metadata(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.metadata
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &"<redacted>")
            .field("metadata", &self.metadata.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn api_for(server: &wiremock::MockServer) -> GrubhubApi {
        let base: Url = server.uri().parse().expect("mock server uri should be valid");
        GrubhubApi::new(make_client(Some(Duration::from_secs(5))).unwrap(), base).unwrap()
    }

    #[test]
    fn test_endpoint() {
        let base: Url = DEFAULT_API_BASE.parse().unwrap();
        let api = GrubhubApi::new(make_client(None).unwrap(), base).unwrap();
        assert_eq!(
            api.endpoint(["restaurants", "42", "menu_items", "7"]).as_str(),
            "https://api-gtm.grubhub.com/restaurants/42/menu_items/7"
        );

        let base: Url = "http://localhost:8080/proxy/".parse().unwrap();
        let api = GrubhubApi::new(make_client(None).unwrap(), base).unwrap();
        assert_eq!(api.endpoint(["auth"]).as_str(), "http://localhost:8080/proxy/auth");
    }

    #[test]
    fn test_rejects_non_base_url() {
        let base: Url = "mailto:menus@example.com".parse().unwrap();
        let err = GrubhubApi::new(make_client(None).unwrap(), base).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_credential_debug_hides_token() {
        let credential: Credential = serde_json::from_str(
            r#"{"access_token": "secret-token", "refresh_token": "r", "token_expire_time": 3600}"#,
        )
        .unwrap();
        assert_eq!(credential.access_token(), "secret-token");
        assert_eq!(credential.metadata().len(), 2);
        let shown = format!("{credential:?}");
        assert!(!shown.contains("secret-token"));
        assert!(shown.contains("refresh_token"));
    }

    #[tokio::test]
    async fn test_rate_limited_requests_still_complete() {
        let base: Url = DEFAULT_API_BASE.parse().unwrap();
        let api = GrubhubApi::new(make_client(None).unwrap(), base)
            .unwrap()
            .with_rate_limit(NonZeroU32::new(100).unwrap());
        for _ in 0..3 {
            api.throttle().await;
        }
    }
}
