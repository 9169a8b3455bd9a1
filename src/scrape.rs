//! Runs the whole pipeline for one restaurant: authenticate, fetch the menu
//! tree, then fetch every item's modifiers concurrently and merge them.

use std::{collections::BTreeSet, fmt::Display};

use futures::{stream::FuturesUnordered, StreamExt};
use log::info;

use crate::{
    fetch::{authenticate, fetch_modifiers, fetch_restaurant, Credential, GrubhubApi, MenuItemId},
    menu::{MenuExport, MenuItemRecord},
    parse::{Restaurant, RestaurantId, Scalar},
};

/// What gets printed to the console before the export is written.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantInfo {
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub stars: Scalar,
    pub review_count: Scalar,
}

impl From<&Restaurant> for RestaurantInfo {
    fn from(r: &Restaurant) -> Self {
        let rating = r.rating.clone().unwrap_or_default();
        Self {
            name: r.name.clone(),
            street_address: r.address.street_address.clone(),
            city: r.address.locality.clone(),
            state: r.address.region.clone(),
            stars: rating.rating_value,
            review_count: rating.rating_count,
        }
    }
}

impl Display for RestaurantInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Restaurant Name: {}", self.name)?;
        writeln!(f, "Restaurant Address Line 1: {}", self.street_address)?;
        writeln!(f, "Restaurant City : {}", self.city)?;
        writeln!(f, "Restaurant State : {}", self.state)?;
        writeln!(f, "Restaurant Stars: {}", self.stars)?;
        write!(f, "Restaurant Review Count: {}", self.review_count)
    }
}

#[derive(Debug)]
pub struct Scrape {
    pub id: RestaurantId,
    pub restaurant: RestaurantInfo,
    pub menu: MenuExport,
}

/// `id` comes from an already validated url, so every failure past this point
/// is a network or upstream one.
pub async fn run(api: &GrubhubApi, id: RestaurantId) -> crate::Result<Scrape> {
    let credential = authenticate(api).await?;
    info!("Authenticated against {}", api.endpoint(["auth"]));

    let data = fetch_restaurant(api, id, &credential).await?;
    let (mut menu, item_ids) = collect_items(id, &data.restaurant);
    info!(
        "Restaurant {id} has {} unique items, fetching modifiers for {} menu items",
        menu.item_count(),
        item_ids.len()
    );

    let start = std::time::Instant::now();
    fetch_all_modifiers(api, &credential, item_ids, &mut menu).await;
    info!(
        "Collected {} unique modifiers in {:?}",
        menu.modifier_count(),
        start.elapsed()
    );

    Ok(Scrape {
        id,
        restaurant: RestaurantInfo::from(&data.restaurant),
        menu,
    })
}

/// Item records for every category plus the distinct item ids to fan out over.
pub fn collect_items(id: RestaurantId, restaurant: &Restaurant) -> (MenuExport, Vec<MenuItemId>) {
    let mut menu = MenuExport::new();
    let mut item_ids = BTreeSet::new();
    for category in &restaurant.categories {
        for item in &category.items {
            menu.add_item(MenuItemRecord::from_menu_item(&category.name, item));
            item_ids.insert(MenuItemId {
                restaurant: id,
                item: item.id,
            });
        }
    }
    (menu, item_ids.into_iter().collect())
}

/// One request per item, all in flight at once (unless the api is rate
/// limited). Results are merged as they complete; completion order does not
/// affect the merged sets.
async fn fetch_all_modifiers(
    api: &GrubhubApi,
    credential: &Credential,
    item_ids: Vec<MenuItemId>,
    menu: &mut MenuExport,
) {
    let mut pending: FuturesUnordered<_> = item_ids
        .into_iter()
        .map(|id| fetch_modifiers(api, id, credential))
        .collect();
    while let Some(records) = pending.next().await {
        menu.merge_modifiers(records);
    }
}
