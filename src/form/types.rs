//! Entry vocabulary: entry types, payment methods, and form fields

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of household account book entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryType {
    /// Money coming in (salary, side jobs, ...)
    Income,
    /// Money going out
    Expense,
    /// Charging an e-money balance or prepaid wallet
    TopUp,
    /// Moving money into savings
    Deposit,
}

impl EntryType {
    /// All entry types in display order
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense, Self::TopUp, Self::Deposit]
    }

    /// The label used in the submitted payload
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::TopUp => "top-up",
            Self::Deposit => "deposit",
        }
    }

    /// Parse an entry type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            "top-up" | "topup" | "top_up" => Some(Self::TopUp),
            "deposit" => Some(Self::Deposit),
            _ => None,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::TopUp => write!(f, "Top-up"),
            Self::Deposit => write!(f, "Deposit"),
        }
    }
}

/// How an entry was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    EMoney,
    BankTransfer,
    Other,
}

impl PaymentMethod {
    /// All payment methods in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Cash,
            Self::CreditCard,
            Self::EMoney,
            Self::BankTransfer,
            Self::Other,
        ]
    }

    /// The label used in the submitted payload
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::CreditCard => "credit-card",
            Self::EMoney => "e-money",
            Self::BankTransfer => "bank-transfer",
            Self::Other => "other",
        }
    }

    /// Parse a payment method from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cash" => Some(Self::Cash),
            "credit-card" | "creditcard" | "credit_card" | "credit" | "card" => {
                Some(Self::CreditCard)
            }
            "e-money" | "emoney" | "e_money" => Some(Self::EMoney),
            "bank-transfer" | "banktransfer" | "bank_transfer" | "transfer" => {
                Some(Self::BankTransfer)
            }
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "Cash"),
            Self::CreditCard => write!(f, "Credit card"),
            Self::EMoney => write!(f, "E-money"),
            Self::BankTransfer => write!(f, "Bank transfer"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// The seven entry form fields, in form order.
///
/// Used both as the key of the validation error map and as the key of the
/// submission field-identifier table. The derived ordering is the form order,
/// which keeps error listings stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Date,
    Type,
    Category,
    Description,
    Amount,
    PaymentMethod,
    EatingOut,
}

impl Field {
    /// All fields in form order
    pub fn all() -> &'static [Self] {
        &[
            Self::Date,
            Self::Type,
            Self::Category,
            Self::Description,
            Self::Amount,
            Self::PaymentMethod,
            Self::EatingOut,
        ]
    }

    /// Short name used in error listings and diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Type => "type",
            Self::Category => "category",
            Self::Description => "description",
            Self::Amount => "amount",
            Self::PaymentMethod => "payment-method",
            Self::EatingOut => "eating-out",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
