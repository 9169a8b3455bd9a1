use std::collections::HashSet;

use tracing::{instrument, Level};

use super::{Credential, GrubhubApi};
use crate::{
    error::{Error, Result},
    menu::ModifierRecord,
    parse::{MenuItemDetail, RestaurantId},
};

/// A menu item to look up modifiers for. Only drives the fan-out; never exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MenuItemId {
    pub restaurant: RestaurantId,
    pub item: u64,
}

#[instrument(skip(api, credential), fields(
    restaurant = %id.restaurant,
    item = id.item,
), level = Level::TRACE)]
pub async fn try_fetch_modifiers(
    api: &GrubhubApi,
    id: MenuItemId,
    credential: &Credential,
) -> Result<HashSet<ModifierRecord>> {
    api.throttle().await;
    let url = api.endpoint([
        "restaurants".to_owned(),
        id.restaurant.to_string(),
        "menu_items".to_owned(),
        id.item.to_string(),
    ]);
    let fail = |e: reqwest::Error| Error::modifier_fetch(id.item, e);
    let response = api
        .client()
        .get(url)
        .bearer_auth(credential.access_token())
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(fail)?;
    let detail: MenuItemDetail = response.json().await.map_err(fail)?;

    Ok(detail
        .choice_categories
        .iter()
        .flatten()
        .flat_map(ModifierRecord::from_choice_category)
        .collect())
}

/// Like [`try_fetch_modifiers`], but a failed item only logs a warning and
/// contributes no modifiers so the rest of the fan-out is unaffected.
pub async fn fetch_modifiers(
    api: &GrubhubApi,
    id: MenuItemId,
    credential: &Credential,
) -> HashSet<ModifierRecord> {
    match try_fetch_modifiers(api, id, credential).await {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("{e}; treating as no modifiers");
            HashSet::new()
        }
    }
}
