use thiserror::Error;
use tracing::{error, warn};

/// Everything that can go wrong between a web-link change and a populated
/// card. All variants collapse to the same user-visible text; the taxonomy
/// exists for the diagnostic channel only.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to parse URL: {0}")]
    Navigation(#[from] url::ParseError),

    #[error("Failed to reach metadata proxy: {0}")]
    Network(String),

    #[error("Metadata proxy returned status: {0}")]
    Http(u16),

    #[error("Failed to decode metadata response: {0}")]
    Parse(String),
}

impl FetchError {
    /// The collapsed text surfaced on the card for every failure kind.
    pub fn user_message(&self) -> &'static str {
        "Error"
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Http(code) => Some(*code),
            _ => None,
        }
    }

    pub fn log(&self) {
        match self {
            FetchError::Navigation(e) => {
                warn!(error = %e, "URL parsing failed");
            }
            FetchError::Network(e) => {
                error!(error = %e, "Metadata fetch failed");
            }
            FetchError::Http(code) => {
                error!(status = code, "Metadata proxy returned non-success status");
            }
            FetchError::Parse(e) => {
                error!(error = %e, "Metadata response decoding failed");
            }
        }
    }
}
