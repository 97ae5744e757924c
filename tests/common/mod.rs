//! Shared helpers for the integration tests

#![allow(dead_code)]

use tabstrip::config::RenderConfig;
use tabstrip::model::{IconProvider, MemoryItem, MemorySource, NoIcons};
use tabstrip::view::segment::{to_markup, StyledRun};
use tabstrip::{RenderInput, TabStrip};

/// Route `tracing` output to the test writer, once per test binary
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with_test_writer()
        .try_init();
}

/// A strip, its item list and its configuration, rendered at a fixed width
pub struct StripHarness {
    pub strip: TabStrip,
    pub source: MemorySource,
    pub config: RenderConfig,
    pub columns: usize,
}

impl StripHarness {
    pub fn new(items: impl IntoIterator<Item = MemoryItem>, columns: usize) -> Self {
        init_tracing();
        Self {
            strip: TabStrip::new(),
            source: MemorySource::from_items(items),
            config: plain_config(),
            columns,
        }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn runs(&mut self) -> Vec<StyledRun> {
        self.runs_with_icons(&NoIcons)
    }

    pub fn runs_with_icons(&mut self, icons: &dyn IconProvider) -> Vec<StyledRun> {
        let input = RenderInput::new(&self.source, icons, &self.config, self.columns);
        self.strip.render_runs(&input)
    }

    pub fn markup(&mut self) -> String {
        let input = RenderInput::new(&self.source, &NoIcons, &self.config, self.columns);
        self.strip.render(&input)
    }

    /// Rendered text without styles
    pub fn text(&mut self) -> String {
        plain_text(&self.runs())
    }

    pub fn scroll(&self) -> usize {
        self.strip.scroll_state(None).current
    }
}

/// Configuration with ASCII separators and no icons, so widths are easy to
/// count by hand
pub fn plain_config() -> RenderConfig {
    RenderConfig {
        icons: tabstrip::config::IconMode::None,
        separator_active: tabstrip::config::SeparatorGlyphs::new("|", ""),
        separator_inactive: tabstrip::config::SeparatorGlyphs::new("|", ""),
        modified_glyph: "*".to_string(),
        pinned_glyph: "!".to_string(),
        ..RenderConfig::default()
    }
}

pub fn plain_text(runs: &[StyledRun]) -> String {
    runs.iter().map(StyledRun::text).collect()
}

pub fn markup(runs: &[StyledRun]) -> String {
    to_markup(runs)
}
