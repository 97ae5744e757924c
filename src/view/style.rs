//! Style tags: highlight groups attached to styled runs

use crate::model::Activity;
use std::borrow::Cow;

/// Which part of an item a run belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemPart {
    /// Name, paddings, spacer and glyph of an unmodified item
    Name,
    /// Name, paddings, spacer and glyph of a modified item
    Modified,
    Sign,
    Index,
    Target,
    Icon,
}

impl ItemPart {
    fn suffix(self) -> &'static str {
        match self {
            ItemPart::Name => "",
            ItemPart::Modified => "Mod",
            ItemPart::Sign => "Sign",
            ItemPart::Index => "Index",
            ItemPart::Target => "Target",
            ItemPart::Icon => "Icon",
        }
    }
}

/// Highlight group of a run
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleTag {
    /// Background of the strip where no item is drawn
    Fill,
    /// Tab page indicator
    Tabpages,
    /// Sidebar offset area
    Offset,
    /// Part of an item, varying with its activity
    Item { activity: Activity, part: ItemPart },
    /// A group named by a collaborator, e.g. a file icon's own color
    Group(String),
}

/// Whether `name` can be embedded in `%#name#` markup as a highlight group
pub fn is_group_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '@'))
}

impl StyleTag {
    pub fn item(activity: Activity, part: ItemPart) -> Self {
        StyleTag::Item { activity, part }
    }

    /// Style of an item name: `Buffer{Activity}` or `Buffer{Activity}Mod`
    pub fn name(activity: Activity, modified: bool) -> Self {
        let part = if modified {
            ItemPart::Modified
        } else {
            ItemPart::Name
        };
        StyleTag::item(activity, part)
    }

    /// Highlight group name, e.g. `BufferCurrentMod`
    pub fn group_name(&self) -> Cow<'_, str> {
        match self {
            StyleTag::Fill => Cow::Borrowed("BufferTabpageFill"),
            StyleTag::Tabpages => Cow::Borrowed("BufferTabpages"),
            StyleTag::Offset => Cow::Borrowed("BufferOffset"),
            StyleTag::Item { activity, part } => Cow::Owned(format!(
                "Buffer{}{}",
                activity.group_name(),
                part.suffix()
            )),
            StyleTag::Group(name) => Cow::Borrowed(name),
        }
    }

    /// Markup that switches to this style
    pub fn prefix(&self) -> String {
        format!("%#{}#", self.group_name())
    }
}
