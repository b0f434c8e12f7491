use async_trait::async_trait;

mod card;
mod error;
mod extractor;
mod fetcher;
mod locales;
#[cfg(feature = "logging")]
mod logging;
mod render;
mod resolver;
mod theme;
mod utils;

pub use card::{CardState, LinkPreviewCard};
pub use error::FetchError;
pub use extractor::{
    MetadataExtractor, FALLBACK_IMAGE, NO_DESCRIPTION, NO_TITLE, PLACEHOLDER_IMAGE,
};
pub use fetcher::{Fetcher, FetcherConfig, MetadataResponse};
pub use locales::{labels_for, Labels};
#[cfg(feature = "logging")]
pub use logging::{log_card, log_error_card, setup_logging, LogConfig};
pub use render::render_card;
pub use resolver::MetadataResolver;
pub use theme::{
    is_institutional_host, ColorSource, EntropyColorSource, SeededColorSource, BRAND_COLOR,
    BRAND_DOMAIN, PRIMARY_COLOR_COUNT,
};

/// The set of fields rendered into the card.
///
/// Fully replaced on each successful resolution; kept stale-but-valid on
/// failure so the previous preview stays visible.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DisplayModel {
    pub title: String,
    pub description: String,
    pub image_link: String,
    pub logo: Option<String>,
    pub theme_color: String,
    pub status_code: String,
}

impl DisplayModel {
    /// Construction defaults shown before the first resolution completes.
    pub fn placeholder() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            image_link: PLACEHOLDER_IMAGE.to_string(),
            logo: None,
            theme_color: String::new(),
            status_code: String::new(),
        }
    }
}

impl Default for DisplayModel {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[async_trait]
pub trait Resolver {
    async fn resolve(&self, url: &str) -> Result<DisplayModel, FetchError>;
}
