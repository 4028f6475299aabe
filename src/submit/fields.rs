//! External field identifiers
//!
//! The collector does not know our field names. Every value is posted under
//! an opaque identifier assigned by the form backend, so the mapping lives in
//! configuration rather than in code. The defaults match the hosted form this
//! tool was built against; point them elsewhere via the config file.

use serde::{Deserialize, Serialize};

use crate::form::Field;

/// Identifier the collector expects for each entry form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIds {
    #[serde(default = "default_date_id")]
    pub date: String,

    #[serde(default = "default_entry_type_id")]
    pub entry_type: String,

    #[serde(default = "default_category_id")]
    pub category: String,

    #[serde(default = "default_description_id")]
    pub description: String,

    #[serde(default = "default_amount_id")]
    pub amount: String,

    #[serde(default = "default_payment_method_id")]
    pub payment_method: String,

    #[serde(default = "default_eating_out_id")]
    pub eating_out: String,
}

fn default_date_id() -> String {
    "entry.1534241070".to_string()
}

fn default_entry_type_id() -> String {
    "entry.911996037".to_string()
}

fn default_category_id() -> String {
    "entry.1045781291".to_string()
}

fn default_description_id() -> String {
    "entry.2134630941".to_string()
}

fn default_amount_id() -> String {
    "entry.839337160".to_string()
}

fn default_payment_method_id() -> String {
    "entry.1065046570".to_string()
}

fn default_eating_out_id() -> String {
    "entry.769723499".to_string()
}

impl Default for FieldIds {
    fn default() -> Self {
        Self {
            date: default_date_id(),
            entry_type: default_entry_type_id(),
            category: default_category_id(),
            description: default_description_id(),
            amount: default_amount_id(),
            payment_method: default_payment_method_id(),
            eating_out: default_eating_out_id(),
        }
    }
}

impl FieldIds {
    /// The external identifier for a form field
    pub fn id_for(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Type => &self.entry_type,
            Field::Category => &self.category,
            Field::Description => &self.description,
            Field::Amount => &self.amount,
            Field::PaymentMethod => &self.payment_method,
            Field::EatingOut => &self.eating_out,
        }
    }
}
