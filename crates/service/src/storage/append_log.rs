use std::sync::Arc;
use tokio::sync::RwLock;

/// Generic in-memory append-only log.
///
/// Keeps a `Vec<V>` behind an async `RwLock`. Writers are serialized by the
/// write guard, so the final order equals the order in which `push` acquired
/// the lock. Readers get a cloned snapshot and never block each other.
#[derive(Clone)]
pub struct AppendLog<V> {
    inner: Arc<RwLock<Vec<V>>>,
}

impl<V> Default for AppendLog<V> {
    fn default() -> Self {
        Self { inner: Arc::new(RwLock::new(Vec::new())) }
    }
}

impl<V> AppendLog<V>
where
    V: Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a value to the end and return the new length.
    pub async fn push(&self, value: V) -> usize {
        let mut items = self.inner.write().await;
        items.push(value);
        items.len()
    }

    /// Clone every entry in insertion order.
    pub async fn snapshot(&self) -> Vec<V> {
        let items = self.inner.read().await;
        items.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn last(&self) -> Option<V> {
        self.inner.read().await.last().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn append_log_keeps_order_and_duplicates() {
        let log = AppendLog::<String>::new();

        // initially empty
        assert_eq!(log.len().await, 0);
        assert!(log.snapshot().await.is_empty());
        assert!(log.last().await.is_none());

        assert_eq!(log.push("a".into()).await, 1);
        assert_eq!(log.push("b".into()).await, 2);
        assert_eq!(log.push("a".into()).await, 3);

        assert_eq!(log.snapshot().await, vec!["a", "b", "a"]);
        assert_eq!(log.last().await.as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn snapshot_is_detached_from_later_pushes() {
        let log = AppendLog::<u32>::new();
        log.push(1).await;
        let before = log.snapshot().await;
        log.push(2).await;
        assert_eq!(before, vec![1]);
        assert_eq!(log.snapshot().await, vec![1, 2]);
    }

    #[tokio::test]
    async fn clones_share_the_same_log() {
        let log = AppendLog::<u32>::new();
        let other = log.clone();
        other.push(7).await;
        assert_eq!(log.snapshot().await, vec![7]);
    }
}
