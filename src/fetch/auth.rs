use serde::{Deserialize, Serialize};
use tracing::{instrument, Level};

use super::{Credential, GrubhubApi};
use crate::error::{Error, Result};

#[derive(Serialize)]
struct AuthRequest<'a> {
    brand: &'a str,
    client_id: &'a str,
    scope: &'a str,
}

#[derive(Deserialize)]
struct AuthResponse {
    #[serde(default)]
    session_handle: Option<Credential>,
}

/// Anonymous login with the web client's identity. A single attempt; any
/// failure here ends the run.
#[instrument(skip(api), level = Level::DEBUG)]
pub async fn authenticate(api: &GrubhubApi) -> Result<Credential> {
    api.throttle().await;
    let payload = AuthRequest {
        brand: "GRUBHUB",
        client_id: api.client_id(),
        scope: "anonymous",
    };
    let response = api
        .client()
        .post(api.endpoint(["auth"]))
        .json(&payload)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(Error::authentication)?;
    let body: AuthResponse = response.json().await.map_err(Error::authentication)?;
    let credential = body
        .session_handle
        .ok_or_else(|| Error::authentication("No session data found after auth request"))?;
    log::debug!(
        "Session issued with {:?}",
        credential.metadata().keys().collect::<Vec<_>>()
    );
    Ok(credential)
}
