//! Styled runs and the width-aware operations on run sequences
//!
//! A strip is a `Vec<StyledRun>`. Every operation here measures text in
//! display columns (see [`crate::primitives::display_width`]), never in chars
//! or bytes, so icons and wide characters keep their positions.

use super::style::StyleTag;
use crate::primitives::display_width::{slice_columns, str_width};
use std::borrow::Cow;

/// A style tag and the text drawn with it
///
/// Immutable: slicing produces new runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    style: StyleTag,
    text: String,
    width: usize,
}

impl StyledRun {
    pub fn new(style: StyleTag, text: impl Into<String>) -> Self {
        let text = text.into();
        let width = str_width(&text);
        Self { style, text, width }
    }

    /// `width` spaces in the given style
    pub fn blank(style: StyleTag, width: usize) -> Self {
        Self {
            style,
            text: " ".repeat(width),
            width,
        }
    }

    pub fn style(&self) -> &StyleTag {
        &self.style
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display width in columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// The part of this run covering columns `[start, end)` of its text
    pub fn slice(&self, start: usize, end: usize) -> StyledRun {
        StyledRun::new(self.style.clone(), slice_columns(&self.text, start, end))
    }
}

/// Total display width of a run sequence
pub fn runs_width(runs: &[StyledRun]) -> usize {
    runs.iter().map(StyledRun::width).sum()
}

/// Escape text for statusline markup: every `%` becomes `%%`
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    if text.contains('%') {
        Cow::Owned(text.replace('%', "%%"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Concatenate runs into statusline markup
pub fn to_markup(runs: &[StyledRun]) -> String {
    let mut out = String::new();
    for run in runs {
        out.push_str(&run.style.prefix());
        out.push_str(&escape_markup(&run.text));
    }
    out
}

/// Keep the leftmost `width` columns.
///
/// The run straddling the boundary is cut at its end; runs past it are
/// dropped.
pub fn slice_right(runs: &[StyledRun], width: usize) -> Vec<StyledRun> {
    let mut result = Vec::with_capacity(runs.len());
    let mut used = 0;

    for run in runs {
        if used + run.width <= width {
            result.push(run.clone());
            used += run.width;
            continue;
        }
        let keep = width - used;
        if keep > 0 {
            result.push(run.slice(0, keep));
        }
        break;
    }
    result
}

/// Keep the rightmost `width` columns.
///
/// The run straddling the boundary is cut at its start; runs before it are
/// dropped.
pub fn slice_left(runs: &[StyledRun], width: usize) -> Vec<StyledRun> {
    let mut result = Vec::with_capacity(runs.len());
    let mut used = 0;

    for run in runs.iter().rev() {
        if used + run.width <= width {
            result.push(run.clone());
            used += run.width;
            continue;
        }
        let keep = width - used;
        if keep > 0 {
            result.push(run.slice(run.width - keep, run.width));
        }
        break;
    }
    result.reverse();
    result
}

/// Splice `others` into `runs` starting at column `position`, drawing over
/// whatever occupied `[position, position + width(others))`.
///
/// A run straddling `position` is split, runs entirely under the inserted
/// span are removed, and a run sticking out past the span keeps only its
/// tail. A `position` past the end of `runs` appends `others`.
pub fn insert_at(runs: &[StyledRun], position: usize, others: &[StyledRun]) -> Vec<StyledRun> {
    if others.is_empty() {
        return runs.to_vec();
    }

    let span_end = position + runs_width(others);
    let mut result = Vec::with_capacity(runs.len() + others.len() + 2);
    let mut inserted = false;
    let mut col = 0;

    for run in runs {
        let start = col;
        let end = start + run.width;
        col = end;

        if !inserted {
            if end <= position {
                result.push(run.clone());
                continue;
            }
            if start < position {
                result.push(run.slice(0, position - start));
            }
            result.extend_from_slice(others);
            inserted = true;
        }

        if start >= span_end {
            result.push(run.clone());
        } else if end > span_end {
            result.push(run.slice(span_end - start, run.width));
        }
        // Otherwise the run lies under the inserted span.
    }

    if !inserted {
        result.extend_from_slice(others);
    }
    result
}
