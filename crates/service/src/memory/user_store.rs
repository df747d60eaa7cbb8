use std::sync::Arc;
use tracing::debug;

use crate::errors::ServiceError;
use crate::storage::append_log::AppendLog;
use crate::users::store::{UserRecord, UserStore};

/// Process-lifetime user store. Starts empty and is dropped with the process.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    log: AppendLog<UserRecord>,
}

impl InMemoryUserStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn append(&self, record: UserRecord) -> Result<(), ServiceError> {
        let total = self.log.push(record).await;
        debug!(total, "user record stored");
        Ok(())
    }

    async fn snapshot(&self) -> Vec<UserRecord> { self.log.snapshot().await }

    async fn len(&self) -> usize { self.log.len().await }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn starts_empty() {
        let store = InMemoryUserStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.snapshot().await, Vec::<UserRecord>::new());
    }

    #[tokio::test]
    async fn append_then_snapshot_preserves_order() -> Result<(), anyhow::Error> {
        let store = InMemoryUserStore::new();
        store.append(json!({"name": "Ana"})).await?;
        store.append(json!({"name": "Bob"})).await?;
        store.append(json!({"name": "Ana"})).await?;

        let all = store.snapshot().await;
        assert_eq!(all, vec![json!({"name": "Ana"}), json!({"name": "Bob"}), json!({"name": "Ana"})]);
        assert_eq!(store.len().await, 3);
        Ok(())
    }

    #[tokio::test]
    async fn any_json_shape_is_stored_verbatim() -> Result<(), anyhow::Error> {
        let store = InMemoryUserStore::new();
        let values = vec![
            json!(null),
            json!(true),
            json!(42.5),
            json!("texto"),
            json!([1, {"a": []}]),
            json!({"z": 1, "a": {"nested": [null]}}),
        ];
        for v in &values {
            store.append(v.clone()).await?;
        }
        assert_eq!(store.snapshot().await, values);
        Ok(())
    }

    #[tokio::test]
    async fn snapshot_does_not_mutate() -> Result<(), anyhow::Error> {
        let store = InMemoryUserStore::new();
        store.append(json!({"id": 1})).await?;
        let first = store.snapshot().await;
        let second = store.snapshot().await;
        assert_eq!(first, second);
        assert_eq!(store.len().await, 1);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_appends_all_land() -> Result<(), anyhow::Error> {
        let store: Arc<dyn UserStore> = InMemoryUserStore::new();
        let mut handles = Vec::new();
        for task in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                for i in 0..25 {
                    store.append(json!({"task": task, "i": i})).await?;
                }
                Ok::<_, ServiceError>(())
            }));
        }
        for h in handles {
            h.await??;
        }
        assert_eq!(store.len().await, 400);

        // per-task order survives interleaving
        let all = store.snapshot().await;
        for task in 0..16 {
            let seq: Vec<i64> = all
                .iter()
                .filter(|r| r["task"] == task)
                .filter_map(|r| r["i"].as_i64())
                .collect();
            assert_eq!(seq, (0..25).collect::<Vec<i64>>());
        }
        Ok(())
    }
}
