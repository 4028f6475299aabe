//! The submission adapter
//!
//! Maps a validated draft onto the collector's wire format and posts it:
//! field identifiers from configuration, fixed encoding rules, one
//! url-encoded POST with an opaque response.

pub mod client;
pub mod encode;
pub mod fields;

pub use client::Submitter;
pub use encode::{encode, EATING_OUT_MARKER};
pub use fields::FieldIds;
