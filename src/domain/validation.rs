use super::money::{Amount, ParseAmountError};
use super::receipt::{Item, Receipt, ReceiptSubmission};
use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Why a submission was rejected. Only the first failing check is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("retailer is required")]
    MissingRetailer,
    #[error("purchase date '{0}' is not a YYYY-MM-DD date")]
    InvalidPurchaseDate(String),
    #[error("purchase date {0} is in the future")]
    FuturePurchaseDate(NaiveDate),
    #[error("purchase time is required")]
    MissingPurchaseTime,
    #[error("purchase time '{0}' is not an HH:MM time")]
    InvalidPurchaseTime(String),
    #[error("at least one item is required")]
    NoItems,
    #[error("item #{0} has no short description")]
    MissingDescription(usize),
    #[error("item #{index} price: {source}")]
    InvalidPrice {
        index: usize,
        source: ParseAmountError,
    },
    #[error("total: {0}")]
    InvalidTotal(ParseAmountError),
    #[error("total {total} does not match the sum of item prices {sum}")]
    TotalMismatch { total: Amount, sum: Amount },
    #[error("sum of item prices is too large")]
    SumOverflow,
}

/// Checks a submission and turns it into a [`Receipt`].
///
/// `today` is the latest purchase date that is accepted. Checks run in a fixed
/// order and stop at the first failure.
pub fn validate(
    submission: &ReceiptSubmission,
    today: NaiveDate,
) -> Result<Receipt, ValidationError> {
    if submission.retailer.is_empty() {
        return Err(ValidationError::MissingRetailer);
    }

    let purchase_date = parse_date(&submission.purchase_date)
        .ok_or_else(|| ValidationError::InvalidPurchaseDate(submission.purchase_date.clone()))?;
    if purchase_date > today {
        return Err(ValidationError::FuturePurchaseDate(purchase_date));
    }

    if submission.purchase_time.is_empty() {
        return Err(ValidationError::MissingPurchaseTime);
    }
    let purchase_time = parse_time(&submission.purchase_time)
        .ok_or_else(|| ValidationError::InvalidPurchaseTime(submission.purchase_time.clone()))?;

    if submission.items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    // Item numbers in errors are 1-based.
    if let Some(pos) = submission
        .items
        .iter()
        .position(|item| item.short_description.is_empty())
    {
        return Err(ValidationError::MissingDescription(pos + 1));
    }

    let items = submission
        .items
        .iter()
        .enumerate()
        .map(|(pos, item)| {
            let price = item
                .price
                .parse::<Amount>()
                .map_err(|source| ValidationError::InvalidPrice {
                    index: pos + 1,
                    source,
                })?;
            Ok(Item {
                short_description: item.short_description.clone(),
                price,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total = submission
        .total
        .parse::<Amount>()
        .map_err(ValidationError::InvalidTotal)?;

    let sum = Amount::checked_sum(items.iter().map(Item::price))
        .ok_or(ValidationError::SumOverflow)?;
    if sum != total {
        return Err(ValidationError::TotalMismatch { total, sum });
    }

    Ok(Receipt {
        retailer: submission.retailer.clone(),
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

/// True when `s` is ASCII digits with `separator` at exactly the given positions.
fn has_shape(s: &str, len: usize, separator: u8, positions: &[usize]) -> bool {
    s.len() == len
        && s.bytes().enumerate().all(|(i, b)| {
            if positions.contains(&i) {
                b == separator
            } else {
                b.is_ascii_digit()
            }
        })
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if !has_shape(s, 10, b'-', &[4, 7]) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    if !has_shape(s, 5, b':', &[2]) {
        return None;
    }
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}
