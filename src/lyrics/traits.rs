//! The provider seam.
//!
//! The resolver only sees [`LyricsProvider`]. Production code registers the
//! HTTP clients from `client.rs`; tests substitute the mocks below.

use async_trait::async_trait;

use super::domain::{ProviderId, ProviderOutcome, Query};

/// A single lyric source.
///
/// `fetch` returns an outcome, never an error: every failure mode is folded
/// into [`ProviderOutcome::Fault`] before it reaches the resolver.
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    /// Which provider this is, for tagging results and logs.
    fn id(&self) -> ProviderId;

    /// Look up lyrics for a query.
    async fn fetch(&self, query: &Query) -> ProviderOutcome;
}

/// Mock providers for resolver and router tests.
#[cfg(test)]
pub mod mocks {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::lyrics::domain::{LyricsPayload, ProviderFault};

    /// Mock provider that returns a fixed outcome and counts its calls.
    pub struct MockProvider {
        id: ProviderId,
        outcome: ProviderOutcome,
        delay: Option<Duration>,
        calls: Arc<AtomicUsize>,
    }

    impl MockProvider {
        fn new(id: ProviderId, outcome: ProviderOutcome) -> Self {
            Self {
                id,
                outcome,
                delay: None,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        /// A provider that finds plain lyrics.
        pub fn found(id: ProviderId, lyrics: &str) -> Self {
            Self::new(
                id,
                ProviderOutcome::Success(LyricsPayload::Text {
                    lyrics: lyrics.to_string(),
                }),
            )
        }

        /// A provider that answers with nothing.
        pub fn empty(id: ProviderId) -> Self {
            Self::new(id, ProviderOutcome::Empty)
        }

        /// A broken provider.
        pub fn fault(id: ProviderId, fault: ProviderFault) -> Self {
            Self::new(id, ProviderOutcome::Fault(fault))
        }

        /// Sleep before answering.
        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        /// Handle to the call counter, readable after the mock is moved.
        pub fn counter(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.calls)
        }
    }

    #[async_trait]
    impl LyricsProvider for MockProvider {
        fn id(&self) -> ProviderId {
            self.id
        }

        async fn fetch(&self, _query: &Query) -> ProviderOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.outcome.clone()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn query() -> Query {
            Query::new("Artist", "Song").unwrap()
        }

        #[tokio::test]
        async fn test_mock_found() {
            let mock = MockProvider::found(ProviderId::Dr, "words");
            assert!(mock.fetch(&query()).await.is_success());
            assert_eq!(mock.id(), ProviderId::Dr);
        }

        #[tokio::test]
        async fn test_mock_counts_calls() {
            let mock = MockProvider::empty(ProviderId::Ovh);
            let calls = mock.counter();
            mock.fetch(&query()).await;
            mock.fetch(&query()).await;
            assert_eq!(calls.load(Ordering::SeqCst), 2);
        }

        #[tokio::test]
        async fn test_mock_fault() {
            let mock = MockProvider::fault(ProviderId::Lrclib, ProviderFault::Status(503));
            assert_eq!(
                mock.fetch(&query()).await,
                ProviderOutcome::Fault(ProviderFault::Status(503))
            );
        }
    }
}
