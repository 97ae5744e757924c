use crate::model::{Activity, InsertPosition};
use crate::view::layout::LayoutPolicy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tab strip rendering configuration
///
/// Read once per render; nothing in the renderer keeps a global copy.
/// Width fields are signed so that a negative value in a config file can be
/// reported by [`RenderConfig::validate`] and clamped by
/// [`RenderConfig::sanitized`] instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RenderConfig {
    /// What to show before each name: file icons, list indices, buffer numbers
    #[serde(default)]
    pub icons: IconMode,

    /// Color icons with the per-activity `Buffer*Icon` groups instead of the
    /// icon's own highlight group
    #[serde(default = "default_false")]
    pub icon_custom_colors: bool,

    /// Separator glyphs for current and visible items
    #[serde(default = "default_separator")]
    pub separator_active: SeparatorGlyphs,

    /// Separator glyphs for inactive items
    #[serde(default = "default_separator")]
    pub separator_inactive: SeparatorGlyphs,

    /// Glyph shown after the name of pinned items
    #[serde(default = "default_pinned_glyph")]
    pub pinned_glyph: String,

    /// Glyph shown after the name of modified items
    #[serde(default = "default_modified_glyph")]
    pub modified_glyph: String,

    /// Close button glyph shown on items that are neither pinned nor modified
    #[serde(default)]
    pub close_glyph: Option<String>,

    /// Minimum number of padding columns on each side of an item
    #[serde(default = "default_minimum_padding")]
    pub minimum_padding: i32,

    /// Maximum number of padding columns on each side of an item
    #[serde(default = "default_maximum_padding")]
    pub maximum_padding: i32,

    /// Minimum width of an item, excluding padding
    #[serde(default)]
    pub minimum_width: i32,

    /// Names wider than this are truncated with the ellipsis
    #[serde(default = "default_maximum_length")]
    pub maximum_length: i32,

    /// Shrink names when the items do not fit instead of scrolling
    #[serde(default = "default_false")]
    pub shrink_to_fit: bool,

    /// Name shown for items without a name
    #[serde(default = "default_no_name_title")]
    pub no_name_title: String,

    /// Marker appended to truncated names
    #[serde(default = "default_ellipsis")]
    pub ellipsis: String,

    /// Show the `current/total` tab page indicator when there are several tab pages
    #[serde(default = "default_true")]
    pub tabpages: bool,

    /// Leave the scroll position for an animator to move toward its target.
    /// When false the scroll position jumps to its target on every render.
    #[serde(default = "default_false")]
    pub animation: bool,

    /// Where newly opened items are inserted (used by the item list, not the renderer)
    #[serde(default)]
    pub insert_position: InsertPosition,
}

/// What to display in front of each item name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Names only
    None,
    /// File type icons
    #[default]
    Icons,
    /// Position of the item in the list
    Numbers,
    /// Host buffer number
    BufferNumbers,
    /// List position and file type icon
    Both,
    /// Host buffer number and file type icon
    BufferNumberWithIcon,
}

impl IconMode {
    pub fn shows_icons(self) -> bool {
        matches!(
            self,
            IconMode::Icons | IconMode::Both | IconMode::BufferNumberWithIcon
        )
    }

    pub fn shows_index(self) -> bool {
        matches!(self, IconMode::Numbers | IconMode::Both)
    }

    pub fn shows_buffer_number(self) -> bool {
        matches!(
            self,
            IconMode::BufferNumbers | IconMode::BufferNumberWithIcon
        )
    }
}

/// Glyphs drawn before and after an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SeparatorGlyphs {
    #[serde(default)]
    pub left: String,
    #[serde(default)]
    pub right: String,
}

impl SeparatorGlyphs {
    pub fn new(left: &str, right: &str) -> Self {
        Self {
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

fn default_separator() -> SeparatorGlyphs {
    SeparatorGlyphs::new("▎", "")
}

fn default_pinned_glyph() -> String {
    "📌".to_string()
}

fn default_modified_glyph() -> String {
    "●".to_string()
}

fn default_minimum_padding() -> i32 {
    1
}

fn default_maximum_padding() -> i32 {
    4
}

fn default_maximum_length() -> i32 {
    30
}

fn default_no_name_title() -> String {
    "[No Name]".to_string()
}

fn default_ellipsis() -> String {
    "…".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            icon_custom_colors: false,
            separator_active: default_separator(),
            separator_inactive: default_separator(),
            pinned_glyph: default_pinned_glyph(),
            modified_glyph: default_modified_glyph(),
            close_glyph: None,
            minimum_padding: default_minimum_padding(),
            maximum_padding: default_maximum_padding(),
            minimum_width: 0,
            maximum_length: default_maximum_length(),
            shrink_to_fit: false,
            no_name_title: default_no_name_title(),
            ellipsis: default_ellipsis(),
            tabpages: true,
            animation: false,
            insert_position: InsertPosition::default(),
        }
    }
}

fn has_control_chars(glyph: &str) -> bool {
    glyph.chars().any(char::is_control)
}

impl RenderConfig {
    /// Load configuration from a JSON file
    ///
    /// Missing fields take their defaults. The result is not sanitized; call
    /// [`RenderConfig::validate`] to report problems.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate the configuration, reporting the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("minimum_padding", self.minimum_padding),
            ("maximum_padding", self.maximum_padding),
            ("minimum_width", self.minimum_width),
        ] {
            if value < 0 {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be >= 0 (got {value})"
                )));
            }
        }

        if self.minimum_padding > self.maximum_padding {
            return Err(ConfigError::ValidationError(format!(
                "minimum_padding ({}) must be <= maximum_padding ({})",
                self.minimum_padding, self.maximum_padding
            )));
        }

        if self.maximum_length < 1 {
            return Err(ConfigError::ValidationError(
                "maximum_length must be >= 1".to_string(),
            ));
        }

        for (name, glyph) in self.glyphs() {
            if has_control_chars(glyph) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must not contain control characters"
                )));
            }
        }

        Ok(())
    }

    fn glyphs(&self) -> Vec<(&'static str, &str)> {
        let mut glyphs = vec![
            ("separator_active.left", self.separator_active.left.as_str()),
            ("separator_active.right", self.separator_active.right.as_str()),
            ("separator_inactive.left", self.separator_inactive.left.as_str()),
            ("separator_inactive.right", self.separator_inactive.right.as_str()),
            ("pinned_glyph", self.pinned_glyph.as_str()),
            ("modified_glyph", self.modified_glyph.as_str()),
            ("no_name_title", self.no_name_title.as_str()),
            ("ellipsis", self.ellipsis.as_str()),
        ];
        if let Some(close) = &self.close_glyph {
            glyphs.push(("close_glyph", close.as_str()));
        }
        glyphs
    }

    /// Clamp every field into its safe range
    ///
    /// Negative widths become 0, a minimum padding above the maximum raises the
    /// maximum, a maximum length below 1 becomes 1, and glyphs containing
    /// control characters fall back to their defaults.
    pub fn sanitized(mut self) -> Self {
        self.minimum_padding = self.minimum_padding.max(0);
        self.maximum_padding = self.maximum_padding.max(self.minimum_padding);
        self.minimum_width = self.minimum_width.max(0);
        self.maximum_length = self.maximum_length.max(1);

        let separator = default_separator();
        for (glyph, fallback) in [
            (&mut self.separator_active.left, &separator.left),
            (&mut self.separator_active.right, &separator.right),
            (&mut self.separator_inactive.left, &separator.left),
            (&mut self.separator_inactive.right, &separator.right),
        ] {
            if has_control_chars(glyph) {
                *glyph = fallback.clone();
            }
        }
        if has_control_chars(&self.pinned_glyph) {
            self.pinned_glyph = default_pinned_glyph();
        }
        if has_control_chars(&self.modified_glyph) {
            self.modified_glyph = default_modified_glyph();
        }
        if has_control_chars(&self.no_name_title) {
            self.no_name_title = default_no_name_title();
        }
        if has_control_chars(&self.ellipsis) {
            self.ellipsis = default_ellipsis();
        }
        if self.close_glyph.as_deref().is_some_and(has_control_chars) {
            self.close_glyph = None;
        }
        self
    }

    /// Width policy handed to the layout calculator
    pub fn layout_policy(&self) -> LayoutPolicy {
        LayoutPolicy {
            minimum_padding: self.minimum_padding.max(0) as usize,
            maximum_padding: self.maximum_padding.max(0) as usize,
            minimum_width: self.minimum_width.max(0) as usize,
            shrink_to_fit: self.shrink_to_fit,
        }
    }

    /// Separator glyphs for an item of the given activity
    pub fn separator(&self, activity: Activity) -> &SeparatorGlyphs {
        match activity {
            Activity::Inactive => &self.separator_inactive,
            _ => &self.separator_active,
        }
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
