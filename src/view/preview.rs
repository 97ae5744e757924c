//! Terminal preview of a rendered strip
//!
//! Maps style tags onto a fixed ratatui palette so the command line tool can
//! show what the strip looks like without a host editor.

use super::segment::StyledRun;
use super::style::{ItemPart, StyleTag};
use crate::model::Activity;
use crate::primitives::display_width::grapheme_width;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Default palette for a style tag
pub fn style_for(tag: &StyleTag) -> Style {
    match tag {
        StyleTag::Fill => Style::default().bg(Color::Black),
        StyleTag::Tabpages => Style::default().fg(Color::Black).bg(Color::Blue),
        StyleTag::Offset => Style::default().fg(Color::Gray).bg(Color::DarkGray),
        StyleTag::Group(_) => Style::default().fg(Color::Cyan),
        StyleTag::Item { activity, part } => {
            let base = match activity {
                Activity::Current => Style::default()
                    .fg(Color::White)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
                Activity::Visible => Style::default().fg(Color::Gray).bg(Color::Black),
                Activity::Inactive => Style::default().fg(Color::DarkGray).bg(Color::Black),
            };
            match part {
                ItemPart::Name => base,
                ItemPart::Modified => base.fg(Color::Yellow),
                ItemPart::Sign => base.fg(Color::Blue),
                ItemPart::Index => base.fg(Color::LightBlue),
                ItemPart::Target => base.fg(Color::Red).add_modifier(Modifier::BOLD),
                ItemPart::Icon => base.fg(Color::Cyan),
            }
        }
    }
}

/// The runs as one styled ratatui line
pub fn to_line(runs: &[StyledRun]) -> Line<'static> {
    Line::from(
        runs.iter()
            .map(|run| Span::styled(run.text().to_string(), style_for(run.style())))
            .collect::<Vec<_>>(),
    )
}

/// Draw the runs into a one-row buffer `width` cells wide and read the text back
///
/// Trailing blanks are trimmed.
pub fn render_plain(runs: &[StyledRun], width: u16) -> String {
    let area = Rect::new(0, 0, width, 1);
    let mut buffer = Buffer::empty(area);
    buffer.set_line(0, 0, &to_line(runs), width);

    let mut text = String::new();
    let mut x = 0;
    while x < area.width {
        let idx = buffer.index_of(x, 0);
        let Some(cell) = buffer.content.get(idx) else {
            break;
        };
        let symbol = cell.symbol();
        text.push_str(symbol);
        // Wide symbols own the cells after them.
        x += grapheme_width(symbol).max(1) as u16;
    }
    text.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_items_are_bold() {
        let style = style_for(&StyleTag::name(Activity::Current, false));
        assert!(style.add_modifier.contains(Modifier::BOLD));
        let style = style_for(&StyleTag::name(Activity::Inactive, true));
        assert_eq!(style.fg, Some(Color::Yellow));
    }

    #[test]
    fn line_keeps_run_texts() {
        let runs = vec![
            StyledRun::new(StyleTag::Offset, " Files"),
            StyledRun::new(StyleTag::name(Activity::Current, false), "a.rs"),
        ];
        let line = to_line(&runs);
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[1].content, "a.rs");
        assert_eq!(line.width(), 10);
    }

    #[test]
    fn plain_preview_handles_wide_text() {
        let runs = vec![
            StyledRun::new(StyleTag::Fill, "你好"),
            StyledRun::new(StyleTag::Fill, " ab "),
        ];
        assert_eq!(render_plain(&runs, 20), "你好 ab");
        assert_eq!(render_plain(&runs, 6), "你好 a");
    }
}
