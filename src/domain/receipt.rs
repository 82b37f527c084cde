use super::money::Amount;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A receipt as submitted over the wire, before validation.
///
/// Every field is kept as text. Missing fields deserialize to empty values so
/// that they are rejected by validation rather than by the JSON decoder.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptSubmission {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<ItemSubmission>,
    pub total: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemSubmission {
    pub short_description: String,
    pub price: String,
}

/// A receipt that passed validation.
///
/// Only [`crate::domain::validation::validate`] constructs one, so every field
/// is already parsed and the total is known to match the item prices.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub(crate) retailer: String,
    pub(crate) purchase_date: NaiveDate,
    pub(crate) purchase_time: NaiveTime,
    pub(crate) items: Vec<Item>,
    pub(crate) total: Amount,
}

impl Receipt {
    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    pub fn purchase_time(&self) -> NaiveTime {
        self.purchase_time
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn total(&self) -> Amount {
        self.total
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub(crate) short_description: String,
    pub(crate) price: Amount,
}

impl Item {
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    pub fn price(&self) -> Amount {
        self.price
    }
}

/// Opaque identifier assigned to a stored receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generates a fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an identifier previously handed out by [`ReceiptId::generate`].
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::try_parse(s).ok().map(Self)
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}
