//! Terminal User Interface module
//!
//! A single-screen ratatui form for putting together one account-book
//! entry and posting it. Submissions run in the background; the event
//! loop stays responsive throughout.

pub mod app;
pub mod event;
pub mod form;
pub mod handler;
pub mod terminal;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_form;
