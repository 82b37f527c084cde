use super::receipt::{Receipt, ReceiptId};
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Stores an accepted receipt under a freshly generated identifier.
    ///
    /// The identifier is only visible to `get` once the receipt is stored.
    async fn insert(&self, receipt: Receipt) -> Result<ReceiptId>;
    async fn get(&self, id: ReceiptId) -> Result<Option<Receipt>>;
    async fn count(&self) -> Result<usize>;
}

pub type ReceiptStoreBox = Box<dyn ReceiptStore>;
