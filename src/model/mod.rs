//! Read-only model of the items a tab strip displays
//!
//! The renderer never owns the item list. It reads it through the
//! [`ItemSource`] capability trait and looks up file icons through
//! [`IconProvider`]. [`memory::MemorySource`] and [`icons::IconTable`] are the
//! in-memory implementations used by tests and the command line tool.

pub mod icons;
pub mod item;
pub mod memory;

pub use icons::{Icon, IconProvider, IconTable, NoIcons};
pub use item::{Activity, ItemId, ItemSnapshot, ItemSource, SourceError, TabpageInfo};
pub use memory::{InsertPosition, MemoryItem, MemorySource};
