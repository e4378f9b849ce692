//! Formatter module - The line-transformation pass
//!
//! Provides:
//! - marker: Line-number marker stripping
//! - collapse: Blank-line run collapsing
//! - paragraph: The full pass plus the format/check commands

pub mod collapse;
pub mod marker;
pub mod paragraph;
