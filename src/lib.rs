//! Tab strip rendering for editor buffer lines.
//!
//! Given the open items of an editor and a target width, [`view::tabline::TabStrip`]
//! produces one statusline-style markup string: styled runs for every item,
//! cropped to a horizontally scrolled window that keeps the current item visible.

pub mod config;
pub mod model;
pub mod primitives;
pub mod view;

#[cfg(feature = "runtime")]
pub mod services;

pub use config::RenderConfig;
pub use model::{Activity, ItemId, ItemSource};
pub use view::segment::StyledRun;
pub use view::tabline::{RenderInput, TabStrip};
