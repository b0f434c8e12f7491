use serde::Deserialize;
use tracing::warn;

/// Translated labels consumed by the render shell.
#[derive(Debug, Clone, Deserialize)]
pub struct Labels {
    pub title: String,
    pub visit: String,
    #[serde(rename = "moreDetails")]
    pub more_details: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Title".to_string(),
            visit: "Visit".to_string(),
            more_details: "More details".to_string(),
        }
    }
}

/// Labels for a language tag; unknown tags fall back to English.
pub fn labels_for(lang: &str) -> Labels {
    let raw = match lang {
        "ar" => include_str!("../locales/link-preview-card.ar.json"),
        "es" => include_str!("../locales/link-preview-card.es.json"),
        "hi" => include_str!("../locales/link-preview-card.hi.json"),
        "zh" => include_str!("../locales/link-preview-card.zh.json"),
        _ => return Labels::default(),
    };

    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!(lang, error = %e, "Failed to decode locale file, using defaults");
        Labels::default()
    })
}
