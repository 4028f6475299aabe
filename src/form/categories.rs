//! Category lists per entry type
//!
//! Each entry type has a fixed category vocabulary. The lists are ordered the
//! way the form presents them, and the submitted payload carries the category
//! string verbatim.

use super::types::EntryType;

/// The one category that makes the eating-out flag applicable
pub const FOOD: &str = "food";

const INCOME_CATEGORIES: &[&str] = &["salary", "side-job", "windfall", "other-income"];

const EXPENSE_CATEGORIES: &[&str] = &[
    FOOD,
    "misc",
    "daily-goods",
    "transport",
    "hobby",
    "education",
    "apparel-beauty",
    "automobile",
    "health",
    "utilities",
    "communication",
    "insurance",
    "housing",
    "other-savings",
    "over-budget",
];

const WALLET_CATEGORIES: &[&str] = &["wallet"];

/// The category options for the given entry type.
///
/// Returns an empty slice while no type is selected. Top-ups and deposits
/// share the single wallet category.
pub fn categories_for(entry_type: Option<EntryType>) -> &'static [&'static str] {
    match entry_type {
        Some(EntryType::Income) => INCOME_CATEGORIES,
        Some(EntryType::Expense) => EXPENSE_CATEGORIES,
        Some(EntryType::TopUp) | Some(EntryType::Deposit) => WALLET_CATEGORIES,
        None => &[],
    }
}
