//! Tab strip rendering
//!
//! Leaf first: [`segment`] holds styled runs and the width-aware operations
//! on them, [`layout`] sizes the items, [`item`] turns one item into runs,
//! [`scroll`] keeps per-viewport scroll positions, [`strip`] assembles and
//! crops the strip, and [`tabline`] drives one render behind a circuit breaker.

pub mod item;
pub mod layout;
#[cfg(feature = "runtime")]
pub mod preview;
pub mod scroll;
pub mod segment;
pub mod strip;
pub mod style;
pub mod tabline;
