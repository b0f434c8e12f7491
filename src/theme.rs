use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of enumerated primary color tokens in the host design system.
pub const PRIMARY_COLOR_COUNT: usize = 26;

/// Fixed brand token assigned to institutional links (Nittany Navy).
pub const BRAND_COLOR: &str = "var(--ddd-primary-2)";

pub const BRAND_DOMAIN: &str = "psu.edu";

pub fn is_institutional_host(host: &str) -> bool {
    host.ends_with(BRAND_DOMAIN)
}

pub fn primary_token(index: usize) -> String {
    format!("var(--ddd-primary-{})", index)
}

/// Source of the pseudo-random primary-color index.
///
/// Injectable so callers can pin the selection; `pick_index` must return a
/// value in `0..PRIMARY_COLOR_COUNT`.
pub trait ColorSource: Send + Sync {
    fn pick_index(&self) -> usize;
}

/// Production source: a fresh entropy-seeded pick per resolution.
#[derive(Debug, Clone, Default)]
pub struct EntropyColorSource;

impl ColorSource for EntropyColorSource {
    fn pick_index(&self) -> usize {
        rand::thread_rng().gen_range(0..PRIMARY_COLOR_COUNT)
    }
}

/// Deterministic source: re-seeds from the same value on every pick, so an
/// identical response body always yields an identical card.
#[derive(Debug, Clone)]
pub struct SeededColorSource {
    seed: u64,
}

impl SeededColorSource {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl ColorSource for SeededColorSource {
    fn pick_index(&self) -> usize {
        StdRng::seed_from_u64(self.seed).gen_range(0..PRIMARY_COLOR_COUNT)
    }
}

/// Theme-color fallback chain: explicit `theme-color`, then the Windows tile
/// color, then the institutional domain rule, then a random primary token.
pub fn select_theme_color(
    theme_color: Option<&str>,
    tile_color: Option<&str>,
    host: &str,
    colors: &dyn ColorSource,
) -> String {
    if let Some(color) = theme_color.filter(|c| !c.is_empty()) {
        return color.to_string();
    }
    if let Some(color) = tile_color.filter(|c| !c.is_empty()) {
        return color.to_string();
    }
    if is_institutional_host(host) {
        return BRAND_COLOR.to_string();
    }
    primary_token(colors.pick_index() % PRIMARY_COLOR_COUNT)
}
