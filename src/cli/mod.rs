//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the form and submission layers.

pub mod category;
pub mod submit;

pub use category::{handle_category_command, CategoryArgs};
pub use submit::{handle_submit_command, SubmitArgs};
