use tracing::{instrument, Level};

use super::{Credential, GrubhubApi};
use crate::{
    error::{Error, Result},
    parse::{RestaurantData, RestaurantId},
};

const QUERY: [(&str, &str); 6] = [
    ("hideChoiceCategories", "true"),
    ("version", "4"),
    ("variationId", "rtpFreeItems"),
    ("orderType", "standard"),
    ("hideUnavailableMenuItems", "true"),
    ("hideMenuItems", "false"),
];

/// Restaurant metadata and the whole menu tree in one request.
#[instrument(skip(api, id, credential), fields(id = %id), level = Level::DEBUG)]
pub async fn fetch_restaurant(
    api: &GrubhubApi,
    id: RestaurantId,
    credential: &Credential,
) -> Result<RestaurantData> {
    api.throttle().await;
    let mut url = api.endpoint(["restaurants", &id.to_string()]);
    url.query_pairs_mut().extend_pairs(QUERY);
    let start = std::time::Instant::now();
    let response = api
        .client()
        .get(url)
        .bearer_auth(credential.access_token())
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(Error::fetch)?;
    let data = response.json().await.map_err(Error::fetch)?;
    log::trace!("Got restaurant {id} in \t {:?}", start.elapsed());
    Ok(data)
}
