//! # VendHub Common Library
//!
//! Shared code for VendHub back-office tools including:
//! - Common error types
//! - Configuration resolution (flag → environment → TOML)
//! - Human-readable formatting helpers

pub mod config;
pub mod error;
pub mod format;

pub use error::{Error, Result};
