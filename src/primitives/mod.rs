//! Low-level primitives and utilities
//!
//! This module contains display width accounting for terminal text.

pub mod display_width;
