use parking_lot::RwLock;

use crate::sources::{JsonFeed, SourceError};

/// Observable state of one feed's request lifecycle.
#[derive(Debug, Clone)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(SourceError),
}

impl<T> FetchState<T> {
    #[allow(dead_code)]
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SourceError> {
        match self {
            FetchState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

struct Inner<T> {
    generation: u64,
    state: FetchState<T>,
}

/// State holder for one feed. `begin` invalidates any in-flight request by
/// bumping the generation; `commit` only lands a result whose token is still
/// current, so a superseded response can never overwrite newer state.
pub struct FetchSlot<T> {
    inner: RwLock<Inner<T>>,
}

impl<T> FetchSlot<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                generation: 0,
                state: FetchState::Idle,
            }),
        }
    }

    /// Enter Loading and return the token the eventual commit must present.
    pub fn begin(&self) -> u64 {
        let mut inner = self.inner.write();
        inner.generation += 1;
        inner.state = FetchState::Loading;
        inner.generation
    }

    /// Land a result. Returns false (state untouched) when the token has
    /// been superseded by a later `begin` or `invalidate`.
    pub fn commit(&self, token: u64, result: Result<T, SourceError>) -> bool {
        let mut inner = self.inner.write();
        if token != inner.generation {
            return false;
        }
        inner.state = match result {
            Ok(data) => FetchState::Ready(data),
            Err(e) => FetchState::Failed(e),
        };
        true
    }

    /// Drop whatever is in flight without touching the visible state.
    /// Used on teardown; the network request itself is not aborted.
    #[allow(dead_code)]
    pub fn invalidate(&self) {
        self.inner.write().generation += 1;
    }

    pub fn state(&self) -> FetchState<T>
    where
        T: Clone,
    {
        self.inner.read().state.clone()
    }
}

/// Drive one feed through its slot: begin, await the fetch, commit. The
/// commit is a no-op if this refresh was superseded while in flight.
pub async fn refresh<T, F>(slot: &FetchSlot<T>, feed: &dyn JsonFeed, map: F) -> bool
where
    F: FnOnce(serde_json::Value) -> T,
{
    let token = slot.begin();
    let result = feed.fetch().await.map(map);
    if let Err(e) = &result {
        tracing::warn!("{} fetch failed: {}", feed.name(), e);
    }
    slot.commit(token, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    #[test]
    fn begin_enters_loading() {
        let slot: FetchSlot<i32> = FetchSlot::new();
        assert!(matches!(slot.state(), FetchState::Idle));
        slot.begin();
        assert!(slot.state().is_loading());
    }

    #[test]
    fn commit_lands_current_token() {
        let slot: FetchSlot<i32> = FetchSlot::new();
        let token = slot.begin();
        assert!(slot.commit(token, Ok(7)));
        assert_eq!(slot.state().data(), Some(&7));
    }

    #[test]
    fn stale_commit_is_dropped() {
        let slot: FetchSlot<i32> = FetchSlot::new();
        let stale = slot.begin();
        let fresh = slot.begin();
        assert!(!slot.commit(stale, Ok(1)));
        assert!(slot.state().is_loading());
        assert!(slot.commit(fresh, Ok(2)));
        assert_eq!(slot.state().data(), Some(&2));
    }

    #[test]
    fn late_result_after_fresh_commit_is_dropped() {
        let slot: FetchSlot<i32> = FetchSlot::new();
        let stale = slot.begin();
        let fresh = slot.begin();
        assert!(slot.commit(fresh, Ok(2)));
        assert!(!slot.commit(stale, Ok(1)));
        assert_eq!(slot.state().data(), Some(&2));
    }

    #[test]
    fn invalidate_suppresses_in_flight_result() {
        let slot: FetchSlot<i32> = FetchSlot::new();
        let token = slot.begin();
        slot.invalidate();
        assert!(!slot.commit(token, Ok(1)));
        assert!(slot.state().is_loading());
    }

    #[test]
    fn failure_clears_payload_and_carries_status() {
        let slot: FetchSlot<i32> = FetchSlot::new();
        let token = slot.begin();
        slot.commit(token, Ok(5));
        let token = slot.begin();
        slot.commit(token, Err(SourceError::Http(503)));
        assert!(slot.state().data().is_none());
        assert_eq!(slot.state().error(), Some(&SourceError::Http(503)));
    }

    struct StubFeed {
        payload: Value,
    }

    #[async_trait]
    impl JsonFeed for StubFeed {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn fetch(&self) -> Result<Value, SourceError> {
            Ok(self.payload.clone())
        }
    }

    #[tokio::test]
    async fn refresh_maps_and_commits() {
        let slot: FetchSlot<usize> = FetchSlot::new();
        let feed = StubFeed { payload: json!([1, 2, 3]) };
        let committed = refresh(&slot, &feed, |v| v.as_array().map(|a| a.len()).unwrap_or(0)).await;
        assert!(committed);
        assert_eq!(slot.state().data(), Some(&3));
    }
}
