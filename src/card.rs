use crate::locales::{labels_for, Labels};
use crate::render::render_card;
use crate::{DisplayModel, MetadataResolver, Resolver};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Observable state behind a card instance: the attribute surface plus the
/// loading and error indicators.
#[derive(Debug, Clone, Default)]
pub struct CardState {
    pub web_link: String,
    pub model: DisplayModel,
    pub loading: bool,
    pub error_message: String,
}

/// The card component shell.
///
/// A cheap-clone handle over shared state; `set_web_link` is the attribute
/// observer that triggers resolution, while the resolver itself stays
/// independently callable. A generation counter guards against a superseded
/// resolution overwriting a newer one.
#[derive(Clone)]
pub struct LinkPreviewCard {
    resolver: Arc<MetadataResolver>,
    state: Arc<RwLock<CardState>>,
    generation: Arc<AtomicU64>,
    inflight: Arc<AtomicU64>,
    labels: Labels,
}

impl Default for LinkPreviewCard {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkPreviewCard {
    pub fn new() -> Self {
        Self::new_with_resolver(MetadataResolver::new())
    }

    pub fn new_with_resolver(resolver: MetadataResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
            state: Arc::new(RwLock::new(CardState::default())),
            generation: Arc::new(AtomicU64::new(0)),
            inflight: Arc::new(AtomicU64::new(0)),
            labels: Labels::default(),
        }
    }

    pub fn with_language(mut self, lang: &str) -> Self {
        self.labels = labels_for(lang);
        self
    }

    /// Attribute observer: stores the new link and re-resolves when the
    /// value actually changed.
    pub async fn set_web_link(&self, web_link: impl Into<String>) {
        let web_link = web_link.into();
        let changed = {
            let mut state = self.state.write().await;
            if state.web_link == web_link {
                false
            } else {
                state.web_link = web_link;
                true
            }
        };
        if changed {
            self.refresh().await;
        }
    }

    /// Re-runs resolution for the current web link.
    ///
    /// The loading flag tracks in-flight fetches exactly: raised when a fetch
    /// starts, cleared once the last outstanding fetch has returned. Only the
    /// latest generation may apply its outcome.
    pub async fn refresh(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inflight.fetch_add(1, Ordering::SeqCst);

        let web_link = {
            let mut state = self.state.write().await;
            // An already-superseded refresh must not disturb the indicators
            // the newer one owns.
            if self.generation.load(Ordering::SeqCst) == generation {
                state.loading = true;
                state.error_message.clear();
            }
            state.web_link.clone()
        };

        let outcome = self.resolver.resolve(&web_link).await;

        let mut state = self.state.write().await;
        let remaining = self.inflight.fetch_sub(1, Ordering::SeqCst) - 1;
        if self.generation.load(Ordering::SeqCst) == generation {
            match outcome {
                Ok(model) => {
                    state.model = model;
                    state.error_message.clear();
                }
                Err(e) => {
                    e.log();
                    // Fail soft: the previous fields stay visible untouched.
                    state.error_message = e.user_message().to_string();
                }
            }
        } else {
            debug!(url = %web_link, generation, "Dropping superseded resolution");
        }
        state.loading = remaining > 0;
    }

    pub async fn state(&self) -> CardState {
        self.state.read().await.clone()
    }

    pub async fn render(&self) -> String {
        let state = self.state.read().await;
        render_card(&state, &self.labels)
    }
}

/// Consumer-settable attribute surface.
impl LinkPreviewCard {
    pub async fn set_title(&self, title: impl Into<String>) {
        self.state.write().await.model.title = title.into();
    }

    pub async fn set_description(&self, description: impl Into<String>) {
        self.state.write().await.model.description = description.into();
    }

    pub async fn set_image_link(&self, image_link: impl Into<String>) {
        self.state.write().await.model.image_link = image_link.into();
    }

    pub async fn set_theme_color(&self, theme_color: impl Into<String>) {
        self.state.write().await.model.theme_color = theme_color.into();
    }

    pub async fn set_logo(&self, logo: impl Into<String>) {
        self.state.write().await.model.logo = Some(logo.into());
    }

    pub async fn set_status_code(&self, status_code: impl Into<String>) {
        self.state.write().await.model.status_code = status_code.into();
    }
}
