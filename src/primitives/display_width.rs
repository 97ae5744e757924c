//! Display width accounting for terminal text
//!
//! All widths are measured in terminal columns over extended grapheme
//! clusters, so emoji sequences, CJK characters and combining marks are
//! counted the way a terminal draws them:
//! - ASCII: one column per byte
//! - Wide characters (CJK, most emoji): two columns
//! - Combining marks and other zero-width code points: zero columns

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a single grapheme cluster.
#[inline]
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_ascii() {
        // Printable ASCII is one column per byte; control bytes draw nothing.
        return grapheme.bytes().filter(|b| !b.is_ascii_control()).count();
    }
    UnicodeWidthStr::width(grapheme)
}

/// Display width of a string, summed over its grapheme clusters.
pub fn str_width(text: &str) -> usize {
    if text.is_ascii() {
        return grapheme_width(text);
    }
    text.graphemes(true).map(grapheme_width).sum()
}

/// Text covering the display columns `[start, end)` of `text`.
///
/// A wide grapheme cut by either edge is replaced by one space per column it
/// covers inside the range, so the result is always exactly
/// `min(end, width) - start` columns wide. A zero-width grapheme belongs to
/// the column it sits at; one sitting at the very end of the text is kept when
/// `end` reaches that end.
pub fn slice_columns(text: &str, start: usize, end: usize) -> String {
    let total = str_width(text);
    let end = end.min(total);
    if start >= end && !(start == end && end == total) {
        return String::new();
    }

    let mut out = String::with_capacity(text.len());
    let mut col = 0;
    for grapheme in text.graphemes(true) {
        let width = grapheme_width(grapheme);
        let next = col + width;

        if width == 0 {
            if col >= start && (col < end || end == total) {
                out.push_str(grapheme);
            }
        } else if col >= start && next <= end {
            out.push_str(grapheme);
        } else if col < end && next > start {
            let covered = next.min(end) - col.max(start);
            out.extend(std::iter::repeat(' ').take(covered));
        }

        col = next;
        if col > end {
            break;
        }
    }
    out
}

/// Truncate text to fit within a width, adding `ellipsis` if anything was cut.
///
/// Respects grapheme boundaries. If the ellipsis alone does not fit, the text
/// is truncated without it.
pub fn truncate_with_ellipsis(text: &str, max_width: usize, ellipsis: &str) -> String {
    if str_width(text) <= max_width {
        return text.to_string();
    }

    let ellipsis_width = str_width(ellipsis);
    if ellipsis_width >= max_width {
        return truncate_to_width(text, max_width).to_string();
    }

    let mut result = truncate_to_width(text, max_width - ellipsis_width).to_string();
    result.push_str(ellipsis);
    result
}

/// Longest prefix of `text` whose width does not exceed `max_width`.
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut byte_end = 0;
    let mut current_width = 0;

    for grapheme in text.graphemes(true) {
        let width = grapheme_width(grapheme);
        if current_width + width > max_width {
            break;
        }
        current_width += width;
        byte_end += grapheme.len();
    }

    &text[..byte_end]
}

/// Split off the first grapheme cluster: `(first, rest)`.
pub fn split_first_grapheme(text: &str) -> Option<(&str, &str)> {
    let first = text.graphemes(true).next()?;
    Some((first, &text[first.len()..]))
}

/// Split off the shortest run of whole graphemes at least `width` columns
/// wide. Returns the whole text as the prefix when it is narrower.
pub fn split_covering(text: &str, width: usize) -> (&str, &str) {
    let mut byte_end = 0;
    let mut covered = 0;
    for grapheme in text.graphemes(true) {
        if covered >= width {
            break;
        }
        covered += grapheme_width(grapheme);
        byte_end += grapheme.len();
    }
    text.split_at(byte_end)
}
