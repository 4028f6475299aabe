//! The entry form core
//!
//! Everything the two surfaces (TUI and CLI) share: the draft record, the
//! entry-type and payment-method vocabulary, the per-type category lists,
//! and total validation.

pub mod categories;
pub mod draft;
pub mod types;
pub mod validate;

pub use categories::{categories_for, FOOD};
pub use draft::EntryDraft;
pub use types::{EntryType, Field, PaymentMethod};
pub use validate::{validate, ValidationErrors};
