use crate::domain::points::score_points;
use crate::domain::ports::ReceiptStoreBox;
use crate::domain::receipt::{ReceiptId, ReceiptSubmission};
use crate::domain::validation::validate;
use crate::error::{ReceiptError, Result};
use chrono::{NaiveDate, Utc};

/// The entry point for processing receipts and computing their points.
///
/// `ReceiptService` owns the storage backend. Validation and scoring are pure,
/// so the only shared state is inside the store.
pub struct ReceiptService {
    store: ReceiptStoreBox,
}

impl ReceiptService {
    /// Creates a new `ReceiptService` backed by `store`.
    pub fn new(store: ReceiptStoreBox) -> Self {
        Self { store }
    }

    /// Validates a submission against today's date and stores it.
    pub async fn process_receipt(&self, submission: ReceiptSubmission) -> Result<ReceiptId> {
        let today = Utc::now().date_naive();
        self.process_receipt_on(submission, today).await
    }

    /// Validates a submission as of `today` and stores it.
    ///
    /// Nothing is stored when validation fails.
    #[tracing::instrument(skip(self, submission), fields(retailer = %submission.retailer))]
    pub async fn process_receipt_on(
        &self,
        submission: ReceiptSubmission,
        today: NaiveDate,
    ) -> Result<ReceiptId> {
        let receipt = validate(&submission, today).inspect_err(|reason| {
            tracing::info!(%reason, "receipt rejected");
        })?;

        let item_count = receipt.items().len();
        let id = self.store.insert(receipt).await?;
        let stored = self.store.count().await?;
        tracing::info!(%id, item_count, stored, "receipt accepted");
        Ok(id)
    }

    /// Computes the points for a stored receipt.
    ///
    /// Identifiers that are malformed or unknown are both reported as `NotFound`.
    #[tracing::instrument(skip(self))]
    pub async fn points(&self, id: &str) -> Result<u64> {
        let not_found = || ReceiptError::NotFound(id.to_string());

        let receipt_id = ReceiptId::parse(id).ok_or_else(not_found)?;
        let Some(receipt) = self.store.get(receipt_id).await? else {
            tracing::debug!("no receipt stored under id");
            return Err(not_found());
        };

        let points = score_points(&receipt);
        tracing::info!(points, "points computed");
        Ok(points)
    }

    /// Number of receipts accepted so far.
    pub async fn receipt_count(&self) -> Result<usize> {
        self.store.count().await
    }
}
