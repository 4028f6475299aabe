//! The entry draft: one in-progress household account book entry
//!
//! The draft is the single mutable record behind both the TUI form and the
//! one-shot CLI. Setters keep its cross-field rules intact: the category must
//! stay within the selected type's list, and the eating-out flag only ever
//! holds for food entries.

use chrono::Local;

use super::categories::{categories_for, FOOD};
use super::types::{EntryType, PaymentMethod};

/// One in-progress entry
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    /// Entry date as YYYY-MM-DD
    pub date: String,

    /// Income / expense / top-up / deposit
    pub entry_type: Option<EntryType>,

    /// Category within the entry type's list; empty until chosen
    pub category: String,

    /// Free-text note, may stay empty
    pub description: String,

    /// Amount in yen; must end up positive to submit
    pub amount: Option<f64>,

    /// How the entry was paid
    pub payment_method: Option<PaymentMethod>,

    /// Whether a food expense was eating out
    pub eating_out: bool,
}

impl Default for EntryDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryDraft {
    /// Create a fresh draft: today's date, everything else unset
    pub fn new() -> Self {
        Self {
            date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            entry_type: None,
            category: String::new(),
            description: String::new(),
            amount: None,
            payment_method: None,
            eating_out: false,
        }
    }

    /// Change the entry type and recompute the category context.
    ///
    /// The current category survives only if it is also in the new type's
    /// list (wallet stays selected across top-up/deposit switches); any
    /// other selection is cleared. Losing the category also drops the
    /// eating-out flag.
    pub fn set_entry_type(&mut self, entry_type: EntryType) {
        self.entry_type = Some(entry_type);
        if !self.category.is_empty()
            && !categories_for(self.entry_type).contains(&self.category.as_str())
        {
            self.category.clear();
        }
        self.enforce_eating_out_rule();
    }

    /// Select a category. Moving away from food clears the eating-out flag.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.enforce_eating_out_rule();
    }

    /// Toggle the eating-out flag. Ignored unless the category is food.
    pub fn set_eating_out(&mut self, eating_out: bool) {
        self.eating_out = eating_out && self.eating_out_applicable();
    }

    /// Whether the eating-out flag applies to the current draft
    pub fn eating_out_applicable(&self) -> bool {
        self.category == FOOD
    }

    /// The category options for the currently selected type
    pub fn categories(&self) -> &'static [&'static str] {
        categories_for(self.entry_type)
    }

    fn enforce_eating_out_rule(&mut self) {
        if !self.eating_out_applicable() {
            self.eating_out = false;
        }
    }
}
