use serde::Deserialize;

use super::amount::{null_as_default, numeric_id, Amount, Scalar};

/// Body of `GET /restaurants/{id}`; only the fields the export reads.
#[derive(Debug, Clone, Deserialize)]
pub struct RestaurantData {
    pub restaurant: Restaurant,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub address: Address,
    #[serde(default, rename = "rating_bayesian10_point")]
    pub rating: Option<Rating>,
    #[serde(default, rename = "menu_category_list")]
    pub categories: Vec<MenuCategory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street_address: String,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub region: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rating {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating_value: Scalar,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating_count: Scalar,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    #[serde(default, rename = "menu_item_list")]
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuItem {
    #[serde(deserialize_with = "numeric_id")]
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub price: Amount,
    #[serde(default)]
    pub minimum_price_variation: Amount,
}
