//! Configuration module for kakeibo-form
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Endpoint and field-identifier persistence

pub mod paths;
pub mod settings;

pub use paths::KakeiboPaths;
pub use settings::Settings;
