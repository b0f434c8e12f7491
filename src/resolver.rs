use crate::theme::{ColorSource, EntropyColorSource};
use crate::{DisplayModel, FetchError, Fetcher, MetadataExtractor, Resolver};
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// Resolves a web link into card fields: one proxy round trip, then the
/// extraction fallback chains. Directly callable; `LinkPreviewCard` is only
/// a thin observer on top of this.
#[derive(Clone)]
pub struct MetadataResolver {
    pub fetcher: Fetcher,
    extractor: MetadataExtractor,
    colors: Arc<dyn ColorSource>,
}

impl Default for MetadataResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataResolver {
    pub fn new() -> Self {
        Self::new_with_fetcher(Fetcher::new())
    }

    pub fn new_with_fetcher(fetcher: Fetcher) -> Self {
        Self {
            fetcher,
            extractor: MetadataExtractor::new(),
            colors: Arc::new(EntropyColorSource),
        }
    }

    /// Swap in a custom color source, e.g. a seeded one for deterministic
    /// theme selection.
    pub fn with_color_source(mut self, colors: Arc<dyn ColorSource>) -> Self {
        self.colors = colors;
        self
    }
}

#[async_trait]
impl Resolver for MetadataResolver {
    async fn resolve(&self, url: &str) -> Result<DisplayModel, FetchError> {
        // Reject malformed links before the network trip.
        let _ = Url::parse(url)?;

        let response = self.fetcher.fetch_metadata(url).await?;
        self.extractor.extract(&response.data, url, self.colors.as_ref())
    }
}
