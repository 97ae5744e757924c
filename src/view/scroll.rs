//! Horizontal scroll position of the strip, per viewport

use std::collections::HashMap;

/// Identifies the on-screen region a strip is rendered into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewportId(pub u64);

/// Scroll position in columns
///
/// `current` is what is drawn; `target` is where the strip is heading. They
/// differ only while an animation is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub current: usize,
    pub target: usize,
}

/// Scroll states keyed by viewport, with a default entry for `None`
#[derive(Debug, Clone, Default)]
pub struct ScrollManager {
    default: ScrollState,
    viewports: HashMap<ViewportId, ScrollState>,
}

impl ScrollManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// State of a viewport; unknown viewports see the default entry
    pub fn state(&self, viewport: Option<ViewportId>) -> ScrollState {
        viewport
            .and_then(|id| self.viewports.get(&id))
            .copied()
            .unwrap_or(self.default)
    }

    /// Mutable state of a viewport, created on first access
    pub fn state_mut(&mut self, viewport: Option<ViewportId>) -> &mut ScrollState {
        match viewport {
            Some(id) => self.viewports.entry(id).or_default(),
            None => &mut self.default,
        }
    }

    /// Move the target by `delta` columns, stopping at zero
    pub fn scroll_by(&mut self, viewport: Option<ViewportId>, delta: isize) {
        let state = self.state_mut(viewport);
        state.target = state.target.saturating_add_signed(delta);
    }

    /// Set the target; the next render clamps it to the scrollable range
    pub fn scroll_to(&mut self, viewport: Option<ViewportId>, target: usize) {
        self.state_mut(viewport).target = target;
    }

    /// Adjust the target so the item spanning `[start, end)` is visible in a
    /// window of `buffers_width` columns. Returns whether the target moved.
    ///
    /// When the item is wider than the window its start wins.
    pub fn refocus(
        &mut self,
        viewport: Option<ViewportId>,
        start: usize,
        end: usize,
        buffers_width: usize,
    ) -> bool {
        let state = self.state_mut(viewport);
        let previous = state.target;

        if state.target > start {
            state.target = start;
        } else if state.target + buffers_width < end {
            // Never past the start, so an item wider than the window settles
            // with its start at the left edge.
            state.target = (end - buffers_width).min(start);
        }

        if state.target != previous {
            tracing::debug!(
                "Refocused strip on [{}, {}): scroll target {} -> {}",
                start,
                end,
                previous,
                state.target
            );
            return true;
        }
        false
    }

    /// Keep both positions within `[0, max_scroll]`
    pub fn clamp(&mut self, viewport: Option<ViewportId>, max_scroll: usize) {
        let state = self.state_mut(viewport);
        state.target = state.target.min(max_scroll);
        state.current = state.current.min(max_scroll);
    }

    /// Jump the drawn position to the target
    pub fn settle(&mut self, viewport: Option<ViewportId>) {
        let state = self.state_mut(viewport);
        state.current = state.target;
    }

    /// Move the drawn position toward the target after `dt` seconds.
    ///
    /// Uses exponential decay, moving at least one column per step and never
    /// past the target. Returns whether the position is still moving.
    pub fn advance(&mut self, viewport: Option<ViewportId>, dt: f32) -> bool {
        let state = self.state_mut(viewport);
        if state.current == state.target {
            return false;
        }

        // Exponential decay: rate = 1 - 2^(-60 * dt)
        let rate = (1.0 - 2.0_f32.powf(-60.0 * dt.max(0.0))).clamp(0.0, 1.0);
        let distance = state.current.abs_diff(state.target);
        let step = ((distance as f32 * rate).round() as usize).clamp(1, distance);

        if state.current < state.target {
            state.current += step;
        } else {
            state.current -= step;
        }
        state.current != state.target
    }
}
