use std::{fmt::Display, str::FromStr};

use url::Url;

use crate::error::{Error, Result};

const HOSTS: [&str; 2] = ["grubhub.com", "www.grubhub.com"];

/// Numeric restaurant id, ex. `3159434` in
/// `https://www.grubhub.com/restaurant/impeckable-wings-901-nw-24th-st-san-antonio/3159434`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RestaurantId(u64);

impl RestaurantId {
    #[cfg(test)]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Validates a restaurant page url and pulls the id out of its last path segment.
    pub fn from_url(url: &Url) -> Result<Self> {
        match url.host_str() {
            Some(host) if HOSTS.contains(&host) => {}
            _ => return Err(Error::invalid_input("not a grubhub url")),
        }
        let segment = url.path().rsplit('/').next().unwrap_or_default();
        match segment.parse::<u64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(Error::invalid_input(format!(
                "{segment} must be integer. Check your url"
            ))),
        }
    }
}

impl FromStr for RestaurantId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let url = Url::parse(s).map_err(|e| Error::invalid_input(format!("{s}: {e}")))?;
        Self::from_url(&url)
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
