use serde::Deserialize;

use super::amount::{null_as_default, Amount};

/// Body of `GET /restaurants/{restaurant_id}/menu_items/{menu_item_id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuItemDetail {
    #[serde(default, rename = "choice_category_list")]
    pub choice_categories: Option<Vec<ChoiceCategory>>,
}

/// A modifier group, ex. "Sauce" with min 1 / max 1.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceCategory {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub min_choice_options: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_choice_options: i64,
    #[serde(default, rename = "choice_option_list")]
    pub options: Vec<ChoiceOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceOption {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub price: Amount,
}
