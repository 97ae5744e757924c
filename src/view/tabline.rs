//! The render boundary: one pass from the item list to markup
//!
//! [`TabStrip`] owns everything that survives between renders (scroll
//! positions, the sidebar offset and the failure state). A render pass reads
//! the item list through [`ItemSource`], lays the items out, keeps the current
//! item in view and assembles the visible strip.
//!
//! A render that fails, by an unreadable item list, a broken width invariant
//! or a panic, disables the strip: it logs once, keeps the error for
//! [`TabStrip::take_diagnostic`] and renders nothing until
//! [`TabStrip::enable`] is called.

use super::item::ItemParts;
use super::layout::{self, LabelMetrics};
use super::scroll::{ScrollManager, ScrollState, ViewportId};
use super::segment::{runs_width, to_markup, StyledRun};
use super::strip::{assemble, place_items, tabpages_indicator, SidebarOffset};
use crate::config::RenderConfig;
use crate::model::{IconProvider, ItemSource, SourceError};
use crate::primitives::display_width::str_width;
use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Everything one render reads
#[derive(Clone, Copy)]
pub struct RenderInput<'a> {
    pub source: &'a dyn ItemSource,
    pub icons: &'a dyn IconProvider,
    pub config: &'a RenderConfig,
    /// Viewport whose scroll state is used; `None` for the default entry
    pub viewport: Option<ViewportId>,
    /// Total width of the line in columns
    pub columns: usize,
}

impl<'a> RenderInput<'a> {
    pub fn new(
        source: &'a dyn ItemSource,
        icons: &'a dyn IconProvider,
        config: &'a RenderConfig,
        columns: usize,
    ) -> Self {
        Self {
            source,
            icons,
            config,
            viewport: None,
            columns,
        }
    }

    pub fn with_viewport(mut self, viewport: ViewportId) -> Self {
        self.viewport = Some(viewport);
        self
    }
}

/// Why a render failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The item list could not be read
    Source(SourceError),
    /// The assembled strip broke a width invariant
    Invariant(String),
    /// The render pass panicked
    Panicked(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Source(err) => write!(f, "item source error: {err}"),
            RenderError::Invariant(msg) => write!(f, "invariant violated: {msg}"),
            RenderError::Panicked(msg) => write!(f, "render panicked: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Source(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenderStatus {
    #[default]
    Enabled,
    /// Rendering stopped after this error
    Disabled(RenderError),
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// A tab strip and its state between renders
#[derive(Debug, Default)]
pub struct TabStrip {
    scroll: ScrollManager,
    offset: Option<SidebarOffset>,
    status: RenderStatus,
    diagnostic: Option<RenderError>,
}

impl TabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render to statusline markup; `""` when disabled
    pub fn render(&mut self, input: &RenderInput<'_>) -> String {
        let runs = self.render_runs(input);
        if runs.is_empty() {
            return String::new();
        }
        to_markup(&runs)
    }

    /// Render to styled runs; empty when disabled
    pub fn render_runs(&mut self, input: &RenderInput<'_>) -> Vec<StyledRun> {
        if !self.is_enabled() {
            return Vec::new();
        }

        let error = match catch_unwind(AssertUnwindSafe(|| self.try_render(input))) {
            Ok(Ok(runs)) => return runs,
            Ok(Err(err)) => err,
            Err(payload) => RenderError::Panicked(panic_message(payload)),
        };
        self.disable(error);
        Vec::new()
    }

    /// One render pass, without failure isolation
    pub fn try_render(&mut self, input: &RenderInput<'_>) -> Result<Vec<StyledRun>, RenderError> {
        let config = input.config.clone().sanitized();
        let source = input.source;
        let viewport = input.viewport;
        let columns = input.columns;

        let ids = source.item_ids().map_err(RenderError::Source)?;
        let picking = source.is_picking();

        let mut parts = Vec::with_capacity(ids.len());
        for id in ids {
            let snapshot = match source.snapshot(id) {
                Ok(snapshot) => snapshot,
                Err(SourceError::Gone(id)) => {
                    tracing::debug!("Item {} vanished during render, skipping", id);
                    continue;
                }
                Err(err) => return Err(RenderError::Source(err)),
            };
            let icon = if config.icons.shows_icons() {
                input
                    .icons
                    .icon(&snapshot.name, snapshot.filetype.as_deref())
            } else {
                None
            };
            let position = parts.len() + 1;
            parts.push(ItemParts::new(
                &snapshot,
                position,
                picking,
                source.jump_letter(id),
                icon,
                &config,
            ));
        }

        let offset = self
            .offset
            .as_ref()
            .filter(|offset| offset.width > 0)
            .map(|offset| SidebarOffset::new(offset.width.min(columns), offset.text.clone()));
        let available = columns - offset.as_ref().map_or(0, |offset| offset.width);

        let indicator = tabpages_indicator(source.tabpages(), config.tabpages)
            .filter(|indicator| str_width(indicator) <= available);
        let indicator_width = indicator.as_deref().map_or(0, str_width);

        let labels: Vec<LabelMetrics> = parts
            .iter()
            .map(|part| LabelMetrics {
                name_width: part.name_width(),
                decoration_width: part.decoration_width(),
            })
            .collect();
        let layout = layout::calculate(
            &labels,
            available,
            indicator_width,
            &config.layout_policy(),
        );

        let items = place_items(parts.iter().enumerate().map(|(i, part)| {
            let runs = part.to_runs(
                layout.name_widths[i],
                layout.base_widths[i],
                layout.padding_width,
            );
            (part.is_current(), runs)
        }));

        for (i, item) in items.iter().enumerate() {
            let expected = layout.item_width(i);
            if item.width != expected {
                return Err(RenderError::Invariant(format!(
                    "item {} drew {} columns, layout gave it {}",
                    parts[i].id, item.width, expected
                )));
            }
        }

        if let Some(current) = items.iter().find(|item| item.is_current) {
            self.scroll
                .refocus(viewport, current.position, current.end(), layout.buffers_width);
        }
        self.scroll.clamp(viewport, layout.max_scroll());
        if !config.animation {
            self.scroll.settle(viewport);
        }
        let scroll = self.scroll.state(viewport).current;

        let runs = assemble(
            &items,
            &layout,
            scroll,
            offset.as_ref(),
            indicator.as_deref(),
        );

        let width = runs_width(&runs);
        if width > columns {
            return Err(RenderError::Invariant(format!(
                "strip is {width} columns wide, only {columns} available"
            )));
        }
        Ok(runs)
    }

    fn disable(&mut self, error: RenderError) {
        tracing::error!("Tab strip disabled after render failure: {}", error);
        self.status = RenderStatus::Disabled(error.clone());
        self.diagnostic = Some(error);
    }

    /// Re-arm rendering after a failure
    pub fn enable(&mut self) {
        if !self.is_enabled() {
            tracing::info!("Tab strip rendering re-enabled");
        }
        self.status = RenderStatus::Enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.status == RenderStatus::Enabled
    }

    pub fn status(&self) -> &RenderStatus {
        &self.status
    }

    /// The error that disabled the strip, reported once
    pub fn take_diagnostic(&mut self) -> Option<RenderError> {
        self.diagnostic.take()
    }

    pub fn scroll_by(&mut self, viewport: Option<ViewportId>, delta: isize) {
        self.scroll.scroll_by(viewport, delta);
    }

    pub fn scroll_to(&mut self, viewport: Option<ViewportId>, target: usize) {
        self.scroll.scroll_to(viewport, target);
    }

    /// Step the scroll animation; returns whether it is still running
    pub fn advance_scroll(&mut self, viewport: Option<ViewportId>, dt: f32) -> bool {
        self.scroll.advance(viewport, dt)
    }

    pub fn scroll_state(&self, viewport: Option<ViewportId>) -> ScrollState {
        self.scroll.state(viewport)
    }

    /// Reserve columns on the left for a side panel, or stop reserving them
    pub fn set_offset(&mut self, offset: Option<SidebarOffset>) {
        self.offset = offset;
    }

    pub fn offset(&self) -> Option<&SidebarOffset> {
        self.offset.as_ref()
    }
}
