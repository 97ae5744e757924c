//! Strip assembly: placing items on the fill, cropping to the scroll window,
//! and adding the sidebar offset and tab page indicator

use super::layout::LayoutResult;
use super::segment::{insert_at, runs_width, slice_left, slice_right, StyledRun};
use super::style::StyleTag;
use crate::model::TabpageInfo;
use crate::primitives::display_width::slice_columns;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An item's runs and where they sit in the full strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderItem {
    pub is_current: bool,
    pub width: usize,
    /// Column of the item's first cell in the unscrolled strip
    pub position: usize,
    pub runs: Vec<StyledRun>,
}

impl RenderItem {
    pub fn end(&self) -> usize {
        self.position + self.width
    }
}

/// Give each item its position, in list order
pub fn place_items(items: impl IntoIterator<Item = (bool, Vec<StyledRun>)>) -> Vec<RenderItem> {
    let mut position = 0;
    items
        .into_iter()
        .map(|(is_current, runs)| {
            let width = runs_width(&runs);
            let item = RenderItem {
                is_current,
                width,
                position,
                runs,
            };
            position += width;
            item
        })
        .collect()
}

/// Columns reserved on the left of the strip for a side panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SidebarOffset {
    pub width: usize,
    /// Title drawn in the reserved area
    #[serde(default)]
    pub text: String,
}

impl SidebarOffset {
    pub fn new(width: usize, text: impl Into<String>) -> Self {
        Self {
            width,
            text: text.into(),
        }
    }

    /// The offset area as one run of exactly `width` columns
    fn to_run(&self) -> StyledRun {
        let padded = format!(" {}{}", self.text, " ".repeat(self.width));
        StyledRun::new(StyleTag::Offset, slice_columns(&padded, 0, self.width))
    }
}

/// Text of the tab page indicator, if it should be shown
pub fn tabpages_indicator(tabpages: TabpageInfo, enabled: bool) -> Option<String> {
    (enabled && tabpages.total > 1).then(|| format!(" {}/{} ", tabpages.current, tabpages.total))
}

/// Build the visible strip.
///
/// Items are drawn over a fill as wide as all items, the current item last so
/// it wins any overlap. The result is cropped to the `buffers_width` columns
/// starting at `scroll`, then framed by the offset and indicator.
pub fn assemble(
    items: &[RenderItem],
    layout: &LayoutResult,
    scroll: usize,
    offset: Option<&SidebarOffset>,
    indicator: Option<&str>,
) -> Vec<StyledRun> {
    let mut strip = Vec::new();
    if layout.actual_width > 0 {
        strip.push(StyledRun::blank(StyleTag::Fill, layout.actual_width));
    }

    let current = items.iter().position(|item| item.is_current);
    for (index, item) in items.iter().enumerate() {
        if Some(index) != current {
            strip = insert_at(&strip, item.position, &item.runs);
        }
    }
    if let Some(item) = current.map(|index| &items[index]) {
        strip = insert_at(&strip, item.position, &item.runs);
    }

    let buffers_width = layout.buffers_width;
    let scroll = scroll.min(layout.max_scroll());
    let buffers_end = layout.actual_width - scroll;

    if buffers_end > buffers_width {
        strip = slice_right(&strip, scroll + buffers_width);
    }
    if scroll > 0 {
        strip = slice_left(&strip, buffers_width);
    }

    let mut result = Vec::with_capacity(strip.len() + 4);
    if let Some(offset) = offset.filter(|offset| offset.width > 0) {
        result.push(offset.to_run());
    }
    let strip_width = runs_width(&strip);
    result.extend(strip);

    if let Some(indicator) = indicator {
        if strip_width < buffers_width {
            result.push(StyledRun::blank(StyleTag::Fill, buffers_width - strip_width));
        }
        result.push(StyledRun::new(StyleTag::Tabpages, indicator));
    }
    result.push(StyledRun::new(StyleTag::Fill, ""));
    result
}
