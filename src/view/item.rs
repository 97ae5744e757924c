//! Rendering of a single item into styled runs

use super::segment::StyledRun;
use super::style::{is_group_name, ItemPart, StyleTag};
use crate::config::{RenderConfig, SeparatorGlyphs};
use crate::model::{Activity, Icon, ItemId, ItemSnapshot};
use crate::primitives::display_width::{
    grapheme_width, slice_columns, split_covering, str_width, truncate_with_ellipsis,
};

/// `text` cut or space-padded to exactly `width` columns
fn fit_to_width(text: &str, width: usize) -> String {
    let padded = format!("{text}{}", " ".repeat(width));
    slice_columns(&padded, 0, width)
}

/// Columns a jump letter needs; zero-width letters still get one
fn letter_width(letter: char) -> usize {
    grapheme_width(letter.encode_utf8(&mut [0; 4])).max(1)
}

/// Where the jump letter goes while picking
#[derive(Debug, Clone, PartialEq, Eq)]
enum JumpSlot {
    /// In place of the icon, padded to the icon's width
    Icon(String),
    /// In place of the leading name graphemes it covers
    Name(char),
}

/// Everything needed to draw one item, resolved from its snapshot and the
/// configuration before layout
#[derive(Debug, Clone)]
pub struct ItemParts {
    pub id: ItemId,
    activity: Activity,
    modified: bool,
    separator: SeparatorGlyphs,
    index: Option<String>,
    icon: Option<(String, StyleTag)>,
    jump: Option<JumpSlot>,
    name: String,
    glyph: Option<String>,
    maximum_length: usize,
    ellipsis: String,
}

impl ItemParts {
    /// Resolve the parts of an item.
    ///
    /// `position` is the 1-based place of the item in the list. `jump_letter`
    /// is only used while `picking`.
    pub fn new(
        snapshot: &ItemSnapshot,
        position: usize,
        picking: bool,
        jump_letter: Option<char>,
        icon: Option<Icon>,
        config: &RenderConfig,
    ) -> Self {
        // An item being closed is drawn like any background item.
        let activity = if snapshot.closing {
            Activity::Inactive
        } else {
            snapshot.activity
        };
        let modified = snapshot.modified;
        let name_style = StyleTag::name(activity, modified);

        let index = if config.icons.shows_index() {
            Some(format!("{position} "))
        } else if config.icons.shows_buffer_number() {
            Some(format!("{} ", snapshot.number))
        } else {
            None
        };

        let icon = icon.filter(|_| config.icons.shows_icons()).map(|icon| {
            let style = if config.icon_custom_colors {
                StyleTag::item(activity, ItemPart::Icon)
            } else {
                match icon.group {
                    Some(group) if is_group_name(&group) => StyleTag::Group(group),
                    _ => name_style.clone(),
                }
            };
            (format!("{} ", icon.glyph), style)
        });

        let letter = jump_letter.filter(|_| picking);
        let (icon, jump) = match (icon, letter) {
            (Some((glyph, _)), Some(letter)) => {
                let width = str_width(&glyph).max(letter_width(letter) + 1);
                let slot = fit_to_width(&letter.to_string(), width);
                (None, Some(JumpSlot::Icon(slot)))
            }
            (icon, Some(letter)) => (icon, Some(JumpSlot::Name(letter))),
            (icon, None) => (icon, None),
        };

        let name = if snapshot.name.is_empty() {
            config.no_name_title.clone()
        } else {
            snapshot.name.clone()
        };

        let glyph = if snapshot.pinned {
            Some(config.pinned_glyph.clone())
        } else if modified {
            Some(config.modified_glyph.clone())
        } else {
            config.close_glyph.clone()
        }
        .filter(|glyph| !glyph.is_empty());

        Self {
            id: snapshot.id,
            activity,
            modified,
            separator: config.separator(activity).clone(),
            index,
            icon,
            jump,
            name,
            glyph,
            maximum_length: config.maximum_length.max(1) as usize,
            ellipsis: config.ellipsis.clone(),
        }
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn is_current(&self) -> bool {
        self.activity == Activity::Current
    }

    /// Name as displayed before layout truncation
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width of the name, capped at the configured maximum length
    pub fn name_width(&self) -> usize {
        str_width(&self.name).min(self.maximum_length)
    }

    /// Extra columns kept for a jump letter wider than the name it replaces
    fn jump_reserve(&self) -> usize {
        match self.jump {
            Some(JumpSlot::Name(letter)) => letter_width(letter) - 1,
            _ => 0,
        }
    }

    /// Width of everything except the name and the padding
    pub fn decoration_width(&self) -> usize {
        let index = self.index.as_deref().map_or(0, str_width);
        let icon = match (&self.icon, &self.jump) {
            (Some((glyph, _)), _) => str_width(glyph),
            (None, Some(JumpSlot::Icon(slot))) => str_width(slot),
            _ => 0,
        };
        let glyph = self.glyph.as_deref().map_or(0, |glyph| str_width(glyph) + 1);

        str_width(&self.separator.left)
            + str_width(&self.separator.right)
            + index
            + icon
            + 1
            + glyph
            + self.jump_reserve()
    }

    /// Draw the item.
    ///
    /// The name is truncated to `name_width` columns. Content narrower than
    /// `base_width` is centered by widening the paddings, so the runs always
    /// measure `base_width + 2 * padding` columns.
    pub fn to_runs(&self, name_width: usize, base_width: usize, padding: usize) -> Vec<StyledRun> {
        let activity = self.activity;
        let name_style = StyleTag::name(activity, self.modified);
        let sign_style = StyleTag::item(activity, ItemPart::Sign);

        let name = truncate_with_ellipsis(&self.name, name_width, &self.ellipsis);
        let mut content = self.decoration_width() - self.jump_reserve() + str_width(&name);
        let (jump, name) = match &self.jump {
            Some(JumpSlot::Name(letter)) if str_width(&name) > 0 => {
                // The letter covers whole graphemes; a half-covered column
                // becomes a space and a name narrower than the letter uses
                // the reserve.
                let width = letter_width(*letter);
                let (covered, rest) = split_covering(&name, width);
                let covered_width = str_width(covered);
                content += width.saturating_sub(covered_width);
                let slot = fit_to_width(&letter.to_string(), covered_width.max(width));
                (Some(slot), rest.to_string())
            }
            Some(JumpSlot::Icon(slot)) => (Some(slot.clone()), name),
            _ => (None, name),
        };

        let slack = base_width.saturating_sub(content);
        let left_pad = padding + slack / 2;
        let right_pad = padding + slack - slack / 2;

        let mut runs = Vec::with_capacity(10);
        let mut push = |style: &StyleTag, text: &str| {
            if !text.is_empty() {
                runs.push(StyledRun::new(style.clone(), text));
            }
        };

        push(&sign_style, &self.separator.left);
        push(&name_style, &" ".repeat(left_pad));
        if let Some(index) = &self.index {
            push(&StyleTag::item(activity, ItemPart::Index), index);
        }
        if let Some((glyph, style)) = &self.icon {
            push(style, glyph);
        }
        if let Some(jump) = &jump {
            push(&StyleTag::item(activity, ItemPart::Target), jump);
        }
        push(&name_style, &name);
        push(&name_style, &" ".repeat(right_pad));
        push(&name_style, " ");
        if let Some(glyph) = &self.glyph {
            push(&name_style, &format!("{glyph} "));
        }
        push(&sign_style, &self.separator.right);

        runs
    }
}
