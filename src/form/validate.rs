//! Entry validation
//!
//! Validation is total: every rule runs on every pass so the form can show
//! all problems at once instead of revealing them one keystroke at a time.
//! An empty [`ValidationErrors`] means the draft is ready to submit.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

use super::categories::categories_for;
use super::draft::EntryDraft;
use super::types::Field;

/// Per-field validation messages, ordered by form position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any earlier one
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// The message for a field, if it failed
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate messages in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Check every field of the draft and collect all failures.
///
/// Description and the eating-out flag are optional and never fail. The
/// category must be a member of the selected type's list; the UI cannot
/// produce a stray category, but the CLI can.
pub fn validate(draft: &EntryDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.date.trim().is_empty() {
        errors.insert(Field::Date, "Date is required");
    } else if NaiveDate::parse_from_str(draft.date.trim(), "%Y-%m-%d").is_err() {
        errors.insert(Field::Date, "Use the YYYY-MM-DD format");
    }

    if draft.entry_type.is_none() {
        errors.insert(Field::Type, "Select an entry type");
    }

    if draft.category.is_empty() {
        errors.insert(Field::Category, "Select a category");
    } else if let Some(entry_type) = draft.entry_type {
        if !categories_for(Some(entry_type)).contains(&draft.category.as_str()) {
            errors.insert(
                Field::Category,
                format!("Not available for {}", entry_type.label()),
            );
        }
    }

    match draft.amount {
        None => errors.insert(Field::Amount, "Amount is required"),
        Some(amount) if !(amount > 0.0) => {
            errors.insert(Field::Amount, "Amount must be positive");
        }
        Some(_) => {}
    }

    if draft.payment_method.is_none() {
        errors.insert(Field::PaymentMethod, "Select a payment method");
    }

    errors
}
