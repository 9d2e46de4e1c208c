//! Common utilities shared across the account crates.
//!
//! This crate provides:
//! - The application error taxonomy and its HTTP mapping
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
