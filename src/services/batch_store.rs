use async_trait::async_trait;
use chroma_sort::SortedBatch;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ApiError;

/// A sorted batch kept for preview and export
#[derive(Clone)]
pub struct StoredBatch {
    pub batch: Arc<SortedBatch>,
    /// When this batch was stored
    pub created_at: chrono::DateTime<chrono::Utc>,
    seq: u64,
}

/// Trait for preview batch storage
#[async_trait]
pub trait BatchStore: Send + Sync {
    /// Store a batch and return its identifier
    async fn insert(&self, batch: Arc<SortedBatch>) -> Result<String, ApiError>;

    /// Find a batch by identifier
    async fn get(&self, id: &str) -> Result<Option<StoredBatch>, ApiError>;
}

/// In-memory batch storage bounded by `capacity`
///
/// Inserting beyond capacity evicts the oldest batch.
pub struct InMemoryBatchStore {
    batches: Arc<RwLock<HashMap<String, StoredBatch>>>,
    capacity: usize,
    next_seq: AtomicU64,
}

impl InMemoryBatchStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            batches: Arc::new(RwLock::new(HashMap::new())),
            capacity: capacity.max(1),
            next_seq: AtomicU64::new(0),
        }
    }

    pub async fn len(&self) -> usize {
        self.batches.read().await.len()
    }

    /// Derive an opaque identifier from the batch contents and sequence number
    fn batch_id(batch: &SortedBatch, seq: u64, created_at: &chrono::DateTime<chrono::Utc>) -> String {
        let mut hasher = Sha256::new();
        hasher.update(seq.to_le_bytes());
        hasher.update(created_at.timestamp_nanos_opt().unwrap_or_default().to_le_bytes());
        for thumb in &batch.thumbnails {
            hasher.update(thumb.id.as_bytes());
            hasher.update(&thumb.jpeg);
        }
        hex::encode(&hasher.finalize()[..8])
    }
}

impl Default for InMemoryBatchStore {
    fn default() -> Self {
        Self::new(32)
    }
}

#[async_trait]
impl BatchStore for InMemoryBatchStore {
    async fn insert(&self, batch: Arc<SortedBatch>) -> Result<String, ApiError> {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let created_at = chrono::Utc::now();
        let id = Self::batch_id(&batch, seq, &created_at);

        let mut batches = self.batches.write().await;
        while batches.len() >= self.capacity {
            let oldest = batches
                .iter()
                .min_by_key(|(_, stored)| stored.seq)
                .map(|(id, stored)| (id.clone(), stored.created_at));
            match oldest {
                Some((oldest, stored_at)) => {
                    batches.remove(&oldest);
                    let age_ms = (created_at - stored_at).num_milliseconds();
                    tracing::debug!(batch = %oldest, age_ms, "Evicted preview batch");
                }
                None => break,
            }
        }

        batches.insert(
            id.clone(),
            StoredBatch {
                batch,
                created_at,
                seq,
            },
        );
        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Option<StoredBatch>, ApiError> {
        let batches = self.batches.read().await;
        Ok(batches.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_sort::SortStrategy;

    fn empty_batch() -> Arc<SortedBatch> {
        Arc::new(SortedBatch {
            strategy: SortStrategy::Spectrum,
            size: 10,
            thumbnails: Vec::new(),
            skipped: Vec::new(),
        })
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = InMemoryBatchStore::new(4);
        let id = store.insert(empty_batch()).await.unwrap();

        assert_eq!(id.len(), 16);
        let found = store.get(&id).await.unwrap();
        assert!(found.is_some());
        let found = found.unwrap();
        assert_eq!(found.batch.size, 10);
        assert!(found.created_at <= chrono::Utc::now());
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = InMemoryBatchStore::new(4);
        let a = store.insert(empty_batch()).await.unwrap();
        let b = store.insert(empty_batch()).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_evicts_oldest_beyond_capacity() {
        let store = InMemoryBatchStore::new(2);
        let first = store.insert(empty_batch()).await.unwrap();
        let second = store.insert(empty_batch()).await.unwrap();
        let third = store.insert(empty_batch()).await.unwrap();

        assert_eq!(store.len().await, 2);
        assert!(store.get(&first).await.unwrap().is_none());
        assert!(store.get(&second).await.unwrap().is_some());
        assert!(store.get(&third).await.unwrap().is_some());
    }
}
