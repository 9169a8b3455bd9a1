use std::{num::NonZeroU32, path::PathBuf, time::Duration};

use clap::Parser;
use url::Url;

use crate::fetch::{make_client, GrubhubApi, DEFAULT_API_BASE, DEFAULT_CLIENT_ID};

/// Export a Grubhub restaurant's menu and item modifiers to `{restaurant_id}.csv`.
#[derive(Debug, Clone, Parser)]
#[command(name = "grubhub_menu", version)]
pub struct Config {
    /// Restaurant page, ex. https://www.grubhub.com/restaurant/some-place/3159434
    pub url: String,

    /// Directory the csv is written to.
    #[arg(long, env = "GRUBHUB_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    #[arg(long, env = "GRUBHUB_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: Url,

    #[arg(long, env = "GRUBHUB_CLIENT_ID", default_value = DEFAULT_CLIENT_ID)]
    pub client_id: String,

    /// Per-request timeout; 0 disables it.
    #[arg(long, env = "GRUBHUB_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Max requests per second. Unset sends every modifier request at once.
    #[arg(long, env = "GRUBHUB_RATE_LIMIT")]
    pub rate_limit: Option<NonZeroU32>,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    pub fn api(&self) -> crate::Result<GrubhubApi> {
        let client = make_client(self.timeout())?;
        let api = GrubhubApi::new(client, self.api_base.clone())?.with_client_id(&self.client_id);
        Ok(match self.rate_limit {
            Some(limit) => api.with_rate_limit(limit),
            None => api,
        })
    }
}
