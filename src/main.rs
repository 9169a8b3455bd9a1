#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod error;
mod export;
mod fetch;
mod menu;
mod parse;
mod scrape;

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

use crate::{config::Config, parse::RestaurantId};

pub use error::Result;

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Validate, scrape, print the restaurant summary, then write the csv. Nothing
/// is written unless every fatal stage succeeded.
async fn export_menu(config: &Config) -> Result<PathBuf> {
    let id: RestaurantId = config.url.parse()?;
    let api = config.api()?;
    let scrape = scrape::run(&api, id).await?;
    println!("{}", scrape.restaurant);
    let document = scrape.menu.into_document();
    document.write(&config.output_dir, scrape.id).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    pretty_env_logger::init();
    let config = Config::parse();
    log::debug!("{config:?}");
    match export_menu(&config).await {
        Ok(path) => {
            log::info!("Exported menu to {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::error::Error;

    fn config(server: &MockServer, url: &str, dir: &tempfile::TempDir) -> Config {
        Config {
            url: url.to_owned(),
            output_dir: dir.path().to_owned(),
            api_base: server.uri().parse().unwrap(),
            client_id: fetch::DEFAULT_CLIENT_ID.to_owned(),
            timeout_secs: 5,
            rate_limit: None,
        }
    }

    #[tokio::test]
    async fn test_export_menu_writes_csv() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"session_handle": {"access_token": "T"}})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/restaurants/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "restaurant": {
                    "name": "Wing Spot",
                    "address": {"street_address": "1 Main St", "locality": "San Antonio", "region": "TX"},
                    "menu_category_list": [{"name": "Wings", "menu_item_list": [{
                        "id": 7, "name": "6pc", "description": "",
                        "price": {"amount": 0}, "minimum_price_variation": {"amount": 599},
                    }]}],
                }
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/restaurants/42/menu_items/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choice_category_list": [{
                    "name": "Sauce", "min_choice_options": 1, "max_choice_options": 1,
                    "choice_option_list": [{"description": "Mild", "price": {"amount": 0}}],
                }]
            })))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let written = export_menu(&config(&server, "https://www.grubhub.com/restaurant/x/42", &dir))
            .await
            .unwrap();

        assert_eq!(written, dir.path().join("42.csv"));
        assert_eq!(
            std::fs::read_to_string(written).unwrap(),
            "Category Name,Item Name,Item Description,Item Price\r\n\
             Wings,6pc,,5.99\r\n\
             Modifier Group Name,Modifier Min,Modifier Max,Option Name,Option Price\r\n\
             Sauce,1,1,Mild,0.0\r\n"
        );
    }

    #[tokio::test]
    async fn test_fatal_failure_writes_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let err = export_menu(&config(&server, "https://www.grubhub.com/restaurant/x/42", &dir))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Authentication(_)), "{err}");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_host_writes_nothing() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let err = export_menu(&config(&server, "https://example.com/restaurant/42", &dir))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)), "{err}");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_url_is_checked_before_api_config() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(&server, "https://example.com/restaurant/42", &dir);
        config.api_base = "mailto:menus@example.com".parse().unwrap();

        let err = export_menu(&config).await.unwrap_err();
        assert!(
            matches!(&err, Error::InvalidInput(msg) if msg.contains("not a grubhub url")),
            "{err}"
        );
    }

    #[tokio::test]
    async fn test_non_integer_id_writes_nothing() {
        let server = MockServer::start().await;
        let dir = tempfile::tempdir().unwrap();
        let err = export_menu(&config(&server, "https://www.grubhub.com/restaurant/x/wings", &dir))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)), "{err}");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }
}
