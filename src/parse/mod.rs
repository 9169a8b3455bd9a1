mod amount;
mod modifiers;
mod restaurant;
mod restaurant_url;

pub use amount::Scalar;
pub use modifiers::{ChoiceCategory, MenuItemDetail};
pub use restaurant::{MenuItem, Restaurant, RestaurantData};
pub use restaurant_url::RestaurantId;
