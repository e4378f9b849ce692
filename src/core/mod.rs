//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Report model and error types
//! - Rendering functions for different output formats
//! - Path helpers
//! - Common utilities
//! - File reading and writing strategies

pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
pub mod util;
