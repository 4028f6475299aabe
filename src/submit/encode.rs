//! Payload encoding
//!
//! Turns a validated draft into the ordered key/value pairs the collector
//! expects. The wire rules are fixed by the receiving form:
//!
//! - dates travel with slashes ("2024-05-01" becomes "2024/05/01")
//! - the eating-out flag is a fixed marker value when set and an absent key
//!   when not
//! - unselected optional fields are omitted entirely, but the description is
//!   always sent, empty or not
//! - the amount is a plain decimal string with no trailing ".0"

use crate::form::EntryDraft;

use super::fields::FieldIds;

/// Marker value posted under the eating-out identifier when the flag is set
pub const EATING_OUT_MARKER: &str = "eating-out";

/// Encode a draft as ordered key/value pairs, ready for url-encoding.
pub fn encode(draft: &EntryDraft, ids: &FieldIds) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(7);

    pairs.push((ids.date.clone(), draft.date.replace('-', "/")));

    if let Some(entry_type) = draft.entry_type {
        pairs.push((ids.entry_type.clone(), entry_type.label().to_string()));
    }

    pairs.push((ids.category.clone(), draft.category.clone()));
    pairs.push((ids.description.clone(), draft.description.clone()));

    if let Some(amount) = draft.amount {
        pairs.push((ids.amount.clone(), amount.to_string()));
    }

    if let Some(method) = draft.payment_method {
        pairs.push((ids.payment_method.clone(), method.label().to_string()));
    }

    if draft.eating_out {
        pairs.push((ids.eating_out.clone(), EATING_OUT_MARKER.to_string()));
    }

    pairs
}
