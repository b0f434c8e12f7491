use crate::theme::{select_theme_color, ColorSource};
use crate::utils;
use crate::{DisplayModel, FetchError};
use serde_json::{Map, Value};
use tracing::debug;

pub const NO_TITLE: &str = "No Title Found";
pub const NO_DESCRIPTION: &str = "No Description Available";
pub const FALLBACK_IMAGE: &str = "fallback-image.png";

/// Placeholder shown before the first resolution completes (the stock
/// "no image" asset the original widget ships with).
pub const PLACEHOLDER_IMAGE: &str = "https://external-content.duckduckgo.com/iu/?u=https%3A%2F%2Fwww.ncenet.com%2Fwp-content%2Fuploads%2F2020%2F04%2Fno-image-png-2.png&f=1&nofb=1&ipt=6684568251b56d8ed89187e9e52fe7e6dfe7e84d19840142bf1d886bce8fedda&ipo=images";

/// Metadata extractor, responsible for turning the proxy's `data` mapping
/// into card fields via ordered fallback chains (first non-empty wins).
#[derive(Clone, Default)]
pub struct MetadataExtractor;

impl MetadataExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(
        &self,
        data: &Map<String, Value>,
        web_link: &str,
        colors: &dyn ColorSource,
    ) -> Result<DisplayModel, FetchError> {
        let host = utils::domain_of(web_link)?;

        let title = string_field(data, "og:title")
            .or_else(|| string_field(data, "title"))
            .unwrap_or(NO_TITLE)
            .to_string();

        let description = string_field(data, "og:description")
            .or_else(|| string_field(data, "description"))
            .unwrap_or(NO_DESCRIPTION)
            .to_string();

        let image_link = string_field(data, "og:image")
            .or_else(|| ld_json_logo(data))
            .or_else(|| ld_json_publisher_logo(data))
            .or_else(|| string_field(data, "msapplication-TileImage"))
            .or_else(|| string_field(data, "apple-touch-icon"))
            .unwrap_or(FALLBACK_IMAGE)
            .to_string();

        let logo = ld_json_logo(data).map(String::from);

        let theme_color = select_theme_color(
            string_field(data, "theme-color"),
            string_field(data, "msapplication-TileColor"),
            &host,
            colors,
        );

        debug!(
            url = %web_link,
            title = %title,
            theme_color = %theme_color,
            "Extracted card fields"
        );

        Ok(DisplayModel {
            title,
            description,
            image_link,
            logo,
            theme_color,
            status_code: String::new(),
        })
    }
}

fn string_field<'a>(data: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    data.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn ld_json_logo(data: &Map<String, Value>) -> Option<&str> {
    data.get("ld+json")?
        .get("logo")?
        .as_str()
        .filter(|s| !s.is_empty())
}

fn ld_json_publisher_logo(data: &Map<String, Value>) -> Option<&str> {
    data.get("ld+json")?
        .get("publisher")?
        .get("logo")?
        .as_str()
        .filter(|s| !s.is_empty())
}
