//! In-memory item list
//!
//! [`MemorySource`] is a plain ordered list of [`MemoryItem`]s implementing
//! [`ItemSource`]. It deserializes from the `items` part of a scene file, and
//! its mutating methods are the list-changing phase that runs between renders.

use super::item::{Activity, ItemId, ItemSource, SourceError, TabpageInfo};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where newly opened items are placed in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InsertPosition {
    /// Append after the last item
    End,
    /// Prepend before the first item
    Start,
    /// Right after the current item, or at the end when there is none
    #[default]
    AfterCurrent,
}

/// One item of a [`MemorySource`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MemoryItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub activity: Activity,
    #[serde(default)]
    pub modified: bool,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub closing: bool,
    /// Host buffer number; defaults to the item id
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub filetype: Option<String>,
    #[serde(default)]
    pub jump_letter: Option<char>,
}

impl MemoryItem {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            activity: Activity::Inactive,
            modified: false,
            pinned: false,
            closing: false,
            number: None,
            filetype: None,
            jump_letter: None,
        }
    }

    pub fn current(mut self) -> Self {
        self.activity = Activity::Current;
        self
    }

    pub fn visible(mut self) -> Self {
        self.activity = Activity::Visible;
        self
    }

    pub fn modified(mut self) -> Self {
        self.modified = true;
        self
    }

    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    pub fn closing(mut self) -> Self {
        self.closing = true;
        self
    }

    pub fn with_number(mut self, number: u32) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_filetype(mut self, filetype: &str) -> Self {
        self.filetype = Some(filetype.to_string());
        self
    }

    pub fn with_jump_letter(mut self, letter: char) -> Self {
        self.jump_letter = Some(letter);
        self
    }
}

/// Ordered in-memory item list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MemorySource {
    #[serde(default)]
    pub items: Vec<MemoryItem>,
    /// Whether pick mode is active
    #[serde(default)]
    pub picking: bool,
    #[serde(default)]
    pub tabpages: TabpageInfo,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: impl IntoIterator<Item = MemoryItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
            ..Self::default()
        }
    }

    fn get(&self, id: ItemId) -> Result<&MemoryItem, SourceError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(SourceError::Gone(id))
    }

    fn get_mut(&mut self, id: ItemId) -> Option<&mut MemoryItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Add an item at the position chosen by `position`.
    ///
    /// Returns false (and leaves the list untouched) if the id is already listed.
    pub fn insert(&mut self, item: MemoryItem, position: InsertPosition) -> bool {
        if self.items.iter().any(|existing| existing.id == item.id) {
            tracing::debug!("Item {} already listed, not inserting", item.id);
            return false;
        }

        let index = match position {
            InsertPosition::End => self.items.len(),
            InsertPosition::Start => 0,
            InsertPosition::AfterCurrent => self
                .items
                .iter()
                .position(|item| item.activity == Activity::Current)
                .map(|idx| idx + 1)
                .unwrap_or(self.items.len()),
        };
        self.items.insert(index, item);
        true
    }

    pub fn remove(&mut self, id: ItemId) -> Option<MemoryItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Make `id` the current item; the previous current item becomes inactive.
    pub fn set_current(&mut self, id: ItemId) -> bool {
        if self.get(id).is_err() {
            return false;
        }
        for item in &mut self.items {
            if item.id == id {
                item.activity = Activity::Current;
            } else if item.activity == Activity::Current {
                item.activity = Activity::Inactive;
            }
        }
        true
    }

    pub fn set_modified(&mut self, id: ItemId, modified: bool) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.modified = modified;
                true
            }
            None => false,
        }
    }

    pub fn set_picking(&mut self, picking: bool) {
        self.picking = picking;
    }
}

impl ItemSource for MemorySource {
    fn item_ids(&self) -> Result<Vec<ItemId>, SourceError> {
        Ok(self.items.iter().map(|item| item.id).collect())
    }

    fn name(&self, id: ItemId) -> Result<String, SourceError> {
        self.get(id).map(|item| item.name.clone())
    }

    fn activity(&self, id: ItemId) -> Result<Activity, SourceError> {
        self.get(id).map(|item| item.activity)
    }

    fn is_modified(&self, id: ItemId) -> Result<bool, SourceError> {
        self.get(id).map(|item| item.modified)
    }

    fn is_pinned(&self, id: ItemId) -> Result<bool, SourceError> {
        self.get(id).map(|item| item.pinned)
    }

    fn is_closing(&self, id: ItemId) -> Result<bool, SourceError> {
        self.get(id).map(|item| item.closing)
    }

    fn number(&self, id: ItemId) -> Result<u32, SourceError> {
        self.get(id).map(|item| item.number.unwrap_or(id.0))
    }

    fn filetype(&self, id: ItemId) -> Result<Option<String>, SourceError> {
        self.get(id).map(|item| item.filetype.clone())
    }

    fn is_picking(&self) -> bool {
        self.picking
    }

    fn jump_letter(&self, id: ItemId) -> Option<char> {
        self.get(id).ok().and_then(|item| item.jump_letter)
    }

    fn tabpages(&self) -> TabpageInfo {
        self.tabpages
    }
}
