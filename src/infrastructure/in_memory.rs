use crate::domain::ports::ReceiptStore;
use crate::domain::receipt::{Receipt, ReceiptId};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for accepted receipts.
///
/// Uses `Arc<RwLock<HashMap<ReceiptId, Receipt>>>` to allow shared concurrent access.
/// Entries live for as long as the store and are never replaced or removed.
#[derive(Default, Clone)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<HashMap<ReceiptId, Receipt>>>,
}

impl InMemoryReceiptStore {
    /// Creates a new, empty in-memory receipt store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn insert(&self, receipt: Receipt) -> Result<ReceiptId> {
        let mut receipts = self.receipts.write().await;
        // A v4 collision is practically impossible, but an existing entry must never be replaced.
        loop {
            let id = ReceiptId::generate();
            if let Entry::Vacant(slot) = receipts.entry(id) {
                slot.insert(receipt);
                return Ok(id);
            }
        }
    }

    async fn get(&self, id: ReceiptId) -> Result<Option<Receipt>> {
        let receipts = self.receipts.read().await;
        Ok(receipts.get(&id).cloned())
    }

    async fn count(&self) -> Result<usize> {
        let receipts = self.receipts.read().await;
        Ok(receipts.len())
    }
}
