//! File icon lookup

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A file icon glyph and its intrinsic highlight group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Icon {
    pub glyph: String,
    /// Highlight group carrying the icon's own color (e.g. `DevIconRust`)
    #[serde(default)]
    pub group: Option<String>,
}

impl Icon {
    pub fn new(glyph: impl Into<String>, group: Option<&str>) -> Self {
        Self {
            glyph: glyph.into(),
            group: group.map(str::to_string),
        }
    }
}

/// Looks up the icon for an item
pub trait IconProvider {
    fn icon(&self, name: &str, filetype: Option<&str>) -> Option<Icon>;
}

/// Provider that never returns an icon
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIcons;

impl IconProvider for NoIcons {
    fn icon(&self, _name: &str, _filetype: Option<&str>) -> Option<Icon> {
        None
    }
}

/// Table-driven provider: file type first, then file extension, then a default
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct IconTable {
    #[serde(default)]
    pub by_filetype: HashMap<String, Icon>,
    #[serde(default)]
    pub by_extension: HashMap<String, Icon>,
    #[serde(default)]
    pub default: Option<Icon>,
}

impl IconTable {
    pub fn with_extension(mut self, extension: &str, icon: Icon) -> Self {
        self.by_extension.insert(extension.to_string(), icon);
        self
    }

    pub fn with_filetype(mut self, filetype: &str, icon: Icon) -> Self {
        self.by_filetype.insert(filetype.to_string(), icon);
        self
    }

    pub fn with_default(mut self, icon: Icon) -> Self {
        self.default = Some(icon);
        self
    }
}

impl IconProvider for IconTable {
    fn icon(&self, name: &str, filetype: Option<&str>) -> Option<Icon> {
        filetype
            .and_then(|ft| self.by_filetype.get(ft))
            .or_else(|| {
                name.rsplit_once('.')
                    .and_then(|(_, ext)| self.by_extension.get(ext))
            })
            .or(self.default.as_ref())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_prefers_filetype_over_extension() {
        let table = IconTable::default()
            .with_extension("rs", Icon::new("R", Some("DevIconRust")))
            .with_filetype("toml", Icon::new("T", None));

        assert_eq!(table.icon("main.rs", None).unwrap().glyph, "R");
        assert_eq!(table.icon("main.rs", Some("toml")).unwrap().glyph, "T");
        assert_eq!(table.icon("README", None), None);
    }

    #[test]
    fn table_falls_back_to_default() {
        let table = IconTable::default().with_default(Icon::new("F", None));
        assert_eq!(table.icon("notes.txt", None).unwrap().glyph, "F");
    }
}
