//! kakeibo-form - Terminal entry form for a household account book
//!
//! This library backs a small tool for recording one account-book entry at
//! a time: fill in date, type, category, description, amount and payment
//! method, validate everything at once, and POST the entry url-encoded to a
//! form collector.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `form`: The entry draft, its fixed vocabulary and its validation
//! - `submit`: Encoding drafts into form pairs and posting them
//! - `cli`: One-shot commands (submit, categories)
//! - `tui`: The interactive entry form
//!
//! # Example
//!
//! ```rust,ignore
//! use kakeibo::config::{KakeiboPaths, Settings};
//!
//! let paths = KakeiboPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod submit;
pub mod tui;

pub use error::KakeiboError;
