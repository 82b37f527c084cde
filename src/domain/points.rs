//! Loyalty points awarded for a validated receipt.
//!
//! The score is the sum of six independent rules. Each rule only reads the
//! receipt, so they can be evaluated in any order.

use super::receipt::Receipt;
use chrono::{Datelike, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

/// A Unicode letter (general category L) or number (category N).
static LETTER_OR_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]").expect("Invalid regex"));

pub type Rule = fn(&Receipt) -> u64;

/// Every scoring rule, in no particular order.
pub const RULES: [Rule; 6] = [
    retailer_name,
    total_amount,
    item_count,
    item_descriptions,
    purchase_date,
    purchase_time,
];

pub fn score_points(receipt: &Receipt) -> u64 {
    RULES
        .iter()
        .map(|rule| rule(receipt))
        .fold(0, u64::saturating_add)
}

/// One point for every letter or digit in the retailer name.
///
/// Combining marks do not count, even where Unicode classes them as
/// alphabetic (Devanagari vowel signs, for instance).
pub fn retailer_name(receipt: &Receipt) -> u64 {
    LETTER_OR_NUMBER.find_iter(receipt.retailer()).count() as u64
}

/// 50 points for a round dollar total, plus 25 if it is a multiple of 0.25.
pub fn total_amount(receipt: &Receipt) -> u64 {
    let total = receipt.total();
    let mut points = 0;
    if total.is_whole() {
        points += 50;
    }
    if total.is_multiple_of(dec!(0.25)) {
        points += 25;
    }
    points
}

/// 5 points for every two items.
pub fn item_count(receipt: &Receipt) -> u64 {
    (receipt.items().len() / 2) as u64 * 5
}

/// For each item whose trimmed description length is a multiple of 3, the
/// price times 0.2 rounded up.
///
/// Length is measured in UTF-8 bytes, so "Crème" has length 6.
pub fn item_descriptions(receipt: &Receipt) -> u64 {
    receipt
        .items()
        .iter()
        .filter(|item| item.short_description().trim().len() % 3 == 0)
        .map(|item| {
            // Prices beyond u64 points are scored as zero.
            item.price()
                .value()
                .checked_mul(dec!(0.2))
                .and_then(|points| points.ceil().to_u64())
                .unwrap_or(0)
        })
        .fold(0, u64::saturating_add)
}

/// 6 points if the day of the purchase date is odd.
pub fn purchase_date(receipt: &Receipt) -> u64 {
    if receipt.purchase_date().day() % 2 == 1 {
        6
    } else {
        0
    }
}

/// 10 points if the purchase hour is 14, 15 or 16.
///
/// The whole of hour 16 counts, so 16:30 scores even though the rule is
/// usually phrased as "before 4:00pm".
pub fn purchase_time(receipt: &Receipt) -> u64 {
    if (14..=16).contains(&receipt.purchase_time().hour()) {
        10
    } else {
        0
    }
}
