use std::borrow::Cow;

use crate::parse::{ChoiceCategory, MenuItem};

use super::Price;

/// One row of the items section. Field order is the sort order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MenuItemRecord {
    pub category: String,
    pub name: String,
    pub description: String,
    pub price: Price,
}

impl MenuItemRecord {
    pub const HEADER: [&'static str; 4] =
        ["Category Name", "Item Name", "Item Description", "Item Price"];

    /// Items priced by variation report 0 as their base price, so fall back to
    /// the cheapest variation.
    pub fn from_menu_item(category: &str, item: &MenuItem) -> Self {
        let price = match Price::from(item.price) {
            p if p.is_zero() => Price::from(item.minimum_price_variation),
            p => p,
        };
        Self {
            category: category.to_owned(),
            name: item.name.clone(),
            description: item.description.clone(),
            price,
        }
    }

    pub fn fields(&self) -> [Cow<'_, str>; 4] {
        [
            Cow::Borrowed(&self.category),
            Cow::Borrowed(&self.name),
            Cow::Borrowed(&self.description),
            Cow::Owned(self.price.to_string()),
        ]
    }
}

/// One row of the modifiers section. Field order is the sort order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModifierRecord {
    pub group: String,
    pub min: i64,
    pub max: i64,
    pub option: String,
    pub price: Price,
}

impl ModifierRecord {
    pub const HEADER: [&'static str; 5] = [
        "Modifier Group Name",
        "Modifier Min",
        "Modifier Max",
        "Option Name",
        "Option Price",
    ];

    pub fn from_choice_category(group: &ChoiceCategory) -> impl Iterator<Item = Self> + '_ {
        group.options.iter().map(|option| Self {
            group: group.name.clone(),
            min: group.min_choice_options,
            max: group.max_choice_options,
            option: option.description.clone(),
            price: option.price.into(),
        })
    }

    pub fn fields(&self) -> [Cow<'_, str>; 5] {
        [
            Cow::Borrowed(&self.group),
            Cow::Owned(self.min.to_string()),
            Cow::Owned(self.max.to_string()),
            Cow::Borrowed(&self.option),
            Cow::Owned(self.price.to_string()),
        ]
    }
}
