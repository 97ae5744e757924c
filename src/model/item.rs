//! Item handles and the [`ItemSource`] capability trait

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle of an item (editor buffer) owned by the item list
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How prominently an item is shown by the host
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    /// Open but not displayed in any window
    #[default]
    Inactive,
    /// Displayed in a window that is not focused
    Visible,
    /// Displayed in the focused window
    Current,
}

impl Activity {
    /// Name used when building highlight group names
    pub fn group_name(self) -> &'static str {
        match self {
            Activity::Inactive => "Inactive",
            Activity::Visible => "Visible",
            Activity::Current => "Current",
        }
    }
}

/// Current tab page and tab page count, both 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TabpageInfo {
    pub current: usize,
    pub total: usize,
}

impl Default for TabpageInfo {
    fn default() -> Self {
        Self {
            current: 1,
            total: 1,
        }
    }
}

/// Errors reported by an [`ItemSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The item disappeared between the list snapshot and the accessor call
    Gone(ItemId),
    /// The item list itself could not be read
    Unavailable(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Gone(id) => write!(f, "item {id} no longer exists"),
            SourceError::Unavailable(msg) => write!(f, "item list unavailable: {msg}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Everything the renderer reads about one item, captured at once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSnapshot {
    pub id: ItemId,
    pub name: String,
    pub activity: Activity,
    pub modified: bool,
    pub pinned: bool,
    pub closing: bool,
    /// Host buffer number, shown in the `buffer_numbers` icon modes
    pub number: u32,
    pub filetype: Option<String>,
}

/// Read access to the host's item list
///
/// Implementations adapt the host editor; per-item accessors return
/// [`SourceError::Gone`] when the item vanished after [`ItemSource::item_ids`]
/// was taken. The renderer skips such items for the current render.
pub trait ItemSource {
    /// Ordered identifiers of the items to display
    fn item_ids(&self) -> Result<Vec<ItemId>, SourceError>;

    fn name(&self, id: ItemId) -> Result<String, SourceError>;

    fn activity(&self, id: ItemId) -> Result<Activity, SourceError>;

    fn is_modified(&self, id: ItemId) -> Result<bool, SourceError>;

    fn is_pinned(&self, id: ItemId) -> Result<bool, SourceError>;

    /// Whether the item is being closed but still listed
    fn is_closing(&self, id: ItemId) -> Result<bool, SourceError>;

    fn number(&self, id: ItemId) -> Result<u32, SourceError>;

    fn filetype(&self, id: ItemId) -> Result<Option<String>, SourceError>;

    /// Whether the interactive "pick an item" mode is active
    fn is_picking(&self) -> bool {
        false
    }

    /// Jump letter assigned to the item while picking
    fn jump_letter(&self, _id: ItemId) -> Option<char> {
        None
    }

    fn tabpages(&self) -> TabpageInfo {
        TabpageInfo::default()
    }

    /// Read all per-item fields, failing on the first accessor that fails
    fn snapshot(&self, id: ItemId) -> Result<ItemSnapshot, SourceError> {
        Ok(ItemSnapshot {
            id,
            name: self.name(id)?,
            activity: self.activity(id)?,
            modified: self.is_modified(id)?,
            pinned: self.is_pinned(id)?,
            closing: self.is_closing(id)?,
            number: self.number(id)?,
            filetype: self.filetype(id)?,
        })
    }
}
