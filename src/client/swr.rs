use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

use crate::client::api_client::Fetcher;
use crate::client::error::ClientError;

/// Snapshot of one cached resource.
#[derive(Debug, Clone, Default)]
pub struct ResourceState {
    pub data: Option<Value>,
    pub error: Option<Arc<ClientError>>,
    pub is_loading: bool,
}

/// [`ResourceState`] with the payload decoded into `T`.
#[derive(Debug, Clone)]
pub struct TypedResource<T> {
    pub data: Option<T>,
    pub error: Option<Arc<ClientError>>,
    pub is_loading: bool,
}

#[derive(Debug, Default)]
struct Entry {
    data: Option<Value>,
    error: Option<Arc<ClientError>>,
    settled_at: Option<Instant>,
    in_flight: bool,
    // Bumped by every fetch start. Only the latest fetch may settle the entry.
    generation: u64,
}

impl Entry {
    fn snapshot(&self) -> ResourceState {
        ResourceState {
            data: self.data.clone(),
            error: self.error.clone(),
            is_loading: self.in_flight,
        }
    }

    fn start_fetch(&mut self) -> u64 {
        self.in_flight = true;
        self.generation += 1;
        self.generation
    }

    fn is_fresh(&self, dedupe_interval: Duration) -> bool {
        self.settled_at
            .map(|at| at.elapsed() < dedupe_interval)
            .unwrap_or(false)
    }
}

/// Stale-while-revalidate cache keyed by resource path.
///
/// A fresh entry is served as is. A stale one is served immediately while a
/// background task refetches it. A failed fetch keeps the last good data.
pub struct SwrCache<F>
where
    F: Fetcher + 'static,
{
    fetcher: Arc<F>,
    entries: Arc<RwLock<HashMap<String, Entry>>>,
    dedupe_interval: Duration,
}

impl<F> Clone for SwrCache<F>
where
    F: Fetcher + 'static,
{
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            entries: Arc::clone(&self.entries),
            dedupe_interval: self.dedupe_interval,
        }
    }
}

impl<F> SwrCache<F>
where
    F: Fetcher + 'static,
{
    pub fn new(fetcher: F, dedupe_interval: Duration) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            entries: Arc::new(RwLock::new(HashMap::new())),
            dedupe_interval,
        }
    }

    /// Returns the resource, fetching it on first use and revalidating it in
    /// the background once it is older than the dedupe interval.
    pub async fn use_resource(&self, key: &str) -> ResourceState {
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(key) {
                if entry.in_flight || entry.is_fresh(self.dedupe_interval) {
                    debug!(key, "Cache hit");
                    return entry.snapshot();
                }
            }
        }

        let (has_data, generation, snapshot) = {
            let mut entries = self.entries.write().await;
            let entry = entries.entry(key.to_string()).or_default();

            // Another caller may have started a fetch between the two locks.
            if entry.in_flight || entry.is_fresh(self.dedupe_interval) {
                return entry.snapshot();
            }
            let generation = entry.start_fetch();
            (entry.data.is_some(), generation, entry.snapshot())
        };

        if has_data {
            debug!(key, "Serving stale entry, revalidating");
            let fetcher = Arc::clone(&self.fetcher);
            let entries = Arc::clone(&self.entries);
            let key = key.to_string();
            tokio::spawn(async move {
                revalidate(fetcher.as_ref(), &entries, &key, generation).await;
            });
            snapshot
        } else {
            debug!(key, "Cache miss");
            revalidate(self.fetcher.as_ref(), &self.entries, key, generation).await
        }
    }

    /// Forces a refetch of `key` and replaces the cached data. A revalidation
    /// already in flight for `key` is superseded and its result dropped.
    pub async fn mutate(&self, key: &str) -> ResourceState {
        let generation = {
            let mut entries = self.entries.write().await;
            entries.entry(key.to_string()).or_default().start_fetch()
        };
        revalidate(self.fetcher.as_ref(), &self.entries, key, generation).await
    }

    /// Refetches every key a write reported as stale.
    pub async fn mutate_all<I, K>(&self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for key in keys {
            self.mutate(key.as_ref()).await;
        }
    }

    /// Current entry without triggering a fetch.
    pub async fn state(&self, key: &str) -> ResourceState {
        self.entries
            .read()
            .await
            .get(key)
            .map(Entry::snapshot)
            .unwrap_or_default()
    }

    pub async fn use_typed<T>(&self, key: &str) -> Result<TypedResource<T>, ClientError>
    where
        T: DeserializeOwned,
    {
        let state = self.use_resource(key).await;
        let data = state.data.map(serde_json::from_value).transpose()?;

        Ok(TypedResource {
            data,
            error: state.error,
            is_loading: state.is_loading,
        })
    }
}

async fn revalidate<F>(
    fetcher: &F,
    entries: &RwLock<HashMap<String, Entry>>,
    key: &str,
    generation: u64,
) -> ResourceState
where
    F: Fetcher + ?Sized,
{
    let result = fetcher.fetch(key).await;

    let mut entries = entries.write().await;
    let entry = entries.entry(key.to_string()).or_default();
    if entry.generation != generation {
        debug!(key, "Dropping superseded fetch");
        return entry.snapshot();
    }
    match result {
        Ok(data) => {
            entry.data = Some(data);
            entry.error = None;
        }
        Err(e) => {
            debug!(key, error = %e, "Revalidation failed, keeping previous data");
            entry.error = Some(Arc::new(e));
        }
    }
    entry.settled_at = Some(Instant::now());
    entry.in_flight = false;
    entry.snapshot()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    mock! {
        pub FetcherMock {}
        #[async_trait]
        impl Fetcher for FetcherMock {
            async fn fetch(&self, key: &str) -> Result<Value, ClientError>;
        }
    }

    /// Answers `{"n": <call number>}`, counting calls.
    fn counting_fetcher() -> (MockFetcherMock, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut fetcher = MockFetcherMock::new();
        fetcher.expect_fetch().returning(move |_| {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(json!({ "n": n }))
        });
        (fetcher, calls)
    }

    async fn wait_until_settled<F: Fetcher + 'static>(cache: &SwrCache<F>, key: &str) {
        for _ in 0..100 {
            if !cache.state(key).await.is_loading {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("revalidation never settled");
    }

    #[tokio::test]
    async fn test_first_use_fetches() {
        let (fetcher, calls) = counting_fetcher();
        let cache = SwrCache::new(fetcher, Duration::from_secs(60));

        let state = cache.use_resource("/api/projects").await;

        assert_eq!(state.data, Some(json!({"n": 1})));
        assert!(state.error.is_none());
        assert!(!state.is_loading);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fresh_entry_is_deduped() {
        let (fetcher, calls) = counting_fetcher();
        let cache = SwrCache::new(fetcher, Duration::from_secs(60));

        cache.use_resource("/api/projects").await;
        let second = cache.use_resource("/api/projects").await;

        assert_eq!(second.data, Some(json!({"n": 1})));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stale_entry_served_then_revalidated() {
        let (fetcher, calls) = counting_fetcher();
        let cache = SwrCache::new(fetcher, Duration::ZERO);

        cache.use_resource("/api/socials").await;
        let stale = cache.use_resource("/api/socials").await;

        assert_eq!(stale.data, Some(json!({"n": 1})));

        wait_until_settled(&cache, "/api/socials").await;

        assert_eq!(cache.state("/api/socials").await.data, Some(json!({"n": 2})));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_mutate_forces_refetch() {
        let (fetcher, calls) = counting_fetcher();
        let cache = SwrCache::new(fetcher, Duration::from_secs(60));

        cache.use_resource("/api/profile").await;
        let mutated = cache.mutate("/api/profile").await;

        assert_eq!(mutated.data, Some(json!({"n": 2})));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    /// First call answers at once, the second slowly, every later one at once.
    struct SlowSecondFetch {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Fetcher for SlowSecondFetch {
        async fn fetch(&self, _key: &str) -> Result<Value, ClientError> {
            match self.calls.fetch_add(1, Ordering::SeqCst) {
                0 => Ok(json!("initial")),
                1 => {
                    tokio::time::sleep(Duration::from_millis(200)).await;
                    Ok(json!("old-before-write"))
                }
                _ => Ok(json!("new-after-write")),
            }
        }
    }

    #[tokio::test]
    async fn test_mutate_supersedes_background_revalidation() {
        let fetcher = SlowSecondFetch {
            calls: AtomicUsize::new(0),
        };
        let cache = SwrCache::new(fetcher, Duration::ZERO);

        cache.use_resource("/api/projects").await;
        let stale = cache.use_resource("/api/projects").await;
        assert!(stale.is_loading);

        let mutated = cache.mutate("/api/projects").await;
        assert_eq!(mutated.data, Some(json!("new-after-write")));
        assert!(!mutated.is_loading);

        tokio::time::sleep(Duration::from_millis(300)).await;

        let settled = cache.state("/api/projects").await;
        assert_eq!(settled.data, Some(json!("new-after-write")));
        assert!(!settled.is_loading);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_data() {
        let mut fetcher = MockFetcherMock::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        fetcher.expect_fetch().returning(move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(json!(["first"]))
            } else {
                Err(ClientError::Status {
                    status: 500,
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An unexpected error occurred".to_string(),
                })
            }
        });
        let cache = SwrCache::new(fetcher, Duration::from_secs(60));

        cache.use_resource("/api/projects").await;
        let after = cache.mutate("/api/projects").await;

        assert_eq!(after.data, Some(json!(["first"])));
        assert_eq!(after.error.as_ref().and_then(|e| e.code()), Some("INTERNAL_ERROR"));
    }

    #[tokio::test]
    async fn test_state_does_not_fetch() {
        let mut fetcher = MockFetcherMock::new();
        fetcher.expect_fetch().never();
        let cache = SwrCache::new(fetcher, Duration::from_secs(60));

        let state = cache.state("/api/projects").await;

        assert!(state.data.is_none());
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_use_typed_decodes() {
        #[derive(serde::Deserialize)]
        struct Count {
            n: usize,
        }

        let (fetcher, _) = counting_fetcher();
        let cache = SwrCache::new(fetcher, Duration::from_secs(60));

        let typed = cache.use_typed::<Count>("/api/profile").await.unwrap();
        assert_eq!(typed.data.map(|c| c.n), Some(1));

        let wrong = cache.use_typed::<Vec<String>>("/api/profile").await;
        assert!(matches!(wrong, Err(ClientError::Decode(_))));
    }

    #[tokio::test]
    async fn test_mutate_all_refetches_each_key() {
        let (fetcher, calls) = counting_fetcher();
        let cache = SwrCache::new(fetcher, Duration::from_secs(60));

        cache
            .mutate_all(vec!["/api/projects".to_string(), "/api/projects/1".to_string()])
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(cache.state("/api/projects/1").await.data.is_some());
    }
}
