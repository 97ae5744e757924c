//! Item widths and total strip width
//!
//! Every item is `decoration + name` columns wide (its base width) plus the
//! same padding on both sides. Padding grows between the configured minimum
//! and maximum to use spare room. When the items do not fit:
//! - with the fixed-width policy the strip overflows and is scrolled;
//! - with the shrink-to-fit policy the minimum width is lowered first, then
//!   the longest names are capped at a common width until the items fit, never
//!   below one column per name.

use crate::primitives::display_width::str_width;

/// Widths of one item before layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelMetrics {
    /// Width of the display name
    pub name_width: usize,
    /// Width of everything else except padding: separators, index, icon,
    /// spacer and glyph
    pub decoration_width: usize,
}

impl LabelMetrics {
    pub fn new(name: &str, decoration_width: usize) -> Self {
        Self {
            name_width: str_width(name),
            decoration_width,
        }
    }
}

/// How item widths react to the available space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPolicy {
    pub minimum_padding: usize,
    pub maximum_padding: usize,
    /// Minimum base width of an item
    pub minimum_width: usize,
    pub shrink_to_fit: bool,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self {
            minimum_padding: 1,
            maximum_padding: 4,
            minimum_width: 0,
            shrink_to_fit: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutResult {
    /// Width of each item without padding
    pub base_widths: Vec<usize>,
    /// Columns each item's name may use
    pub name_widths: Vec<usize>,
    /// Padding on each side of every item
    pub padding_width: usize,
    /// Columns available to the items
    pub buffers_width: usize,
    /// Width of all items laid end to end
    pub actual_width: usize,
    pub tabpages_indicator_width: usize,
}

impl LayoutResult {
    /// Full width of item `index`, padding included
    pub fn item_width(&self, index: usize) -> usize {
        self.base_widths[index] + 2 * self.padding_width
    }

    /// How far the strip can scroll
    pub fn max_scroll(&self) -> usize {
        self.actual_width.saturating_sub(self.buffers_width)
    }
}

/// Largest value in `[low, high]` satisfying a monotone `fits`, if any
fn largest_fitting(low: usize, high: usize, fits: impl Fn(usize) -> bool) -> Option<usize> {
    if !fits(low) {
        return None;
    }
    let (mut lo, mut hi) = (low, high);
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if fits(mid) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    Some(lo)
}

fn base_widths(labels: &[LabelMetrics], name_cap: usize, minimum_width: usize) -> Vec<usize> {
    labels
        .iter()
        .map(|label| (label.decoration_width + label.name_width.min(name_cap)).max(minimum_width))
        .collect()
}

/// Compute item widths.
///
/// `available_width` is what remains after any sidebar offset; the tab page
/// indicator is carved out of it.
pub fn calculate(
    labels: &[LabelMetrics],
    available_width: usize,
    tabpages_indicator_width: usize,
    policy: &LayoutPolicy,
) -> LayoutResult {
    let buffers_width = available_width.saturating_sub(tabpages_indicator_width);
    let count = labels.len();
    if count == 0 {
        return LayoutResult {
            buffers_width,
            tabpages_indicator_width,
            padding_width: policy.minimum_padding,
            ..LayoutResult::default()
        };
    }

    let longest_name = labels.iter().map(|l| l.name_width).max().unwrap_or(0);
    let mut name_cap = longest_name;
    let mut minimum_width = policy.minimum_width;
    let mut bases = base_widths(labels, name_cap, minimum_width);
    let used: usize = bases.iter().sum();

    let per_buffer = buffers_width.saturating_sub(used) / count;
    let padding_width = (per_buffer / 2)
        .min(policy.maximum_padding)
        .max(policy.minimum_padding);
    let total_padding = 2 * padding_width * count;

    if policy.shrink_to_fit && used + total_padding > buffers_width {
        let budget = buffers_width.saturating_sub(total_padding);
        let total = |cap: usize, min: usize| -> usize { base_widths(labels, cap, min).iter().sum() };

        match largest_fitting(0, minimum_width, |min| total(name_cap, min) <= budget) {
            Some(min) => minimum_width = min,
            None => {
                minimum_width = 0;
                let floor = longest_name.min(1);
                name_cap = largest_fitting(floor, longest_name, |cap| total(cap, 0) <= budget)
                    .unwrap_or(floor);
            }
        }
        tracing::debug!(
            "Shrinking items to fit {} columns: minimum width {}, name cap {}",
            buffers_width,
            minimum_width,
            name_cap
        );
        bases = base_widths(labels, name_cap, minimum_width);
    }

    let name_widths = labels
        .iter()
        .map(|label| label.name_width.min(name_cap))
        .collect();
    let actual_width = bases.iter().map(|base| base + 2 * padding_width).sum();

    LayoutResult {
        base_widths: bases,
        name_widths,
        padding_width,
        buffers_width,
        actual_width,
        tabpages_indicator_width,
    }
}
