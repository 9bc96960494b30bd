//! Ordered fallback resolver.
//!
//! Walks a [`ProviderOrder`] strictly sequentially:
//! 1. Ask the provider (bounded by the per-provider timeout)
//! 2. On success, return immediately - later providers are never called
//! 3. On empty or fault, move on to the next provider
//!
//! When the order is exhausted the result is an aggregate not-found naming
//! the order that was attempted. Nothing escapes this layer as an error.
//! Providers are never raced: position in the order is the only priority
//! signal, and a result that would be discarded is never requested.

use std::sync::Arc;
use std::time::Duration;

use super::domain::{ProviderFault, ProviderId, ProviderOrder, ProviderOutcome, ProviderResult, Query};
use super::traits::LyricsProvider;

/// Resolver over a registry of providers, shared by every request.
pub struct FallbackResolver {
    providers: Vec<Arc<dyn LyricsProvider>>,
    provider_timeout: Duration,
}

impl FallbackResolver {
    /// Create a resolver from the registered providers.
    pub fn new(providers: Vec<Arc<dyn LyricsProvider>>, provider_timeout: Duration) -> Self {
        Self {
            providers,
            provider_timeout,
        }
    }

    /// Resolve lyrics with the order led by `primary`.
    pub async fn resolve_with_primary(&self, primary: ProviderId, query: &Query) -> ProviderResult {
        self.resolve(&ProviderOrder::with_primary(primary), query)
            .await
    }

    /// Try every provider in `order` until one succeeds.
    pub async fn resolve(&self, order: &ProviderOrder, query: &Query) -> ProviderResult {
        tracing::debug!(
            "Resolving lyrics for {} - {} via {}",
            query.artist,
            query.song,
            order
        );

        for id in order.iter() {
            match self.attempt(id, query).await {
                ProviderOutcome::Success(payload) => {
                    tracing::info!(
                        "Lyrics for {} - {} found by {}",
                        query.artist,
                        query.song,
                        id
                    );
                    return ProviderResult::Found {
                        provider: id,
                        payload,
                    };
                }
                ProviderOutcome::Empty | ProviderOutcome::Fault(_) => {
                    tracing::debug!("{} had nothing, trying next provider", id);
                }
            }
        }

        tracing::info!(
            "No lyrics found for {} - {} ({} + fallbacks)",
            query.artist,
            query.song,
            order.primary()
        );
        ProviderResult::NotFound { attempted: *order }
    }

    /// One bounded provider call.
    async fn attempt(&self, id: ProviderId, query: &Query) -> ProviderOutcome {
        let Some(provider) = self.providers.iter().find(|p| p.id() == id) else {
            tracing::warn!("Provider {} is not registered, skipping", id);
            return ProviderOutcome::Empty;
        };

        match tokio::time::timeout(self.provider_timeout, provider.fetch(query)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::warn!(
                    "Provider failed: {} (no answer within {:?})",
                    id,
                    self.provider_timeout
                );
                ProviderOutcome::Fault(ProviderFault::Timeout)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::domain::LyricsPayload;
    use crate::lyrics::traits::mocks::MockProvider;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const BUDGET: Duration = Duration::from_secs(5);

    fn query() -> Query {
        Query::new("Artist", "Song").unwrap()
    }

    /// Register mocks and keep their call counters, in registration order.
    fn resolver(mocks: Vec<MockProvider>) -> (FallbackResolver, Vec<Arc<AtomicUsize>>) {
        let counters = mocks.iter().map(MockProvider::counter).collect();
        let providers = mocks
            .into_iter()
            .map(|m| Arc::new(m) as Arc<dyn LyricsProvider>)
            .collect();
        (FallbackResolver::new(providers, BUDGET), counters)
    }

    fn calls(counter: &Arc<AtomicUsize>) -> usize {
        counter.load(Ordering::SeqCst)
    }

    #[tokio::test]
    async fn test_second_provider_wins_and_third_is_skipped() {
        let (resolver, counters) = resolver(vec![
            MockProvider::empty(ProviderId::Ovh),
            MockProvider::found(ProviderId::Dr, "la la la"),
            MockProvider::found(ProviderId::Lrclib, "never asked"),
        ]);

        let result = resolver
            .resolve(&ProviderOrder::with_primary(ProviderId::Ovh), &query())
            .await;

        assert_eq!(
            result,
            ProviderResult::Found {
                provider: ProviderId::Dr,
                payload: LyricsPayload::Text {
                    lyrics: "la la la".to_string()
                },
            }
        );
        assert_eq!(calls(&counters[0]), 1);
        assert_eq!(calls(&counters[1]), 1);
        assert_eq!(calls(&counters[2]), 0);
    }

    #[tokio::test]
    async fn test_primary_hit_short_circuits() {
        let (resolver, counters) = resolver(vec![
            MockProvider::found(ProviderId::Ovh, "ovh words"),
            MockProvider::found(ProviderId::Dr, "dr words"),
            MockProvider::found(ProviderId::Lrclib, "lrclib words"),
        ]);

        let result = resolver
            .resolve_with_primary(ProviderId::Lrclib, &query())
            .await;

        assert!(matches!(
            result,
            ProviderResult::Found {
                provider: ProviderId::Lrclib,
                ..
            }
        ));
        assert_eq!(calls(&counters[0]), 0);
        assert_eq!(calls(&counters[1]), 0);
        assert_eq!(calls(&counters[2]), 1);
    }

    #[tokio::test]
    async fn test_all_empty_is_aggregate_not_found() {
        let (resolver, counters) = resolver(vec![
            MockProvider::empty(ProviderId::Ovh),
            MockProvider::empty(ProviderId::Dr),
            MockProvider::empty(ProviderId::Lrclib),
        ]);
        let order = ProviderOrder::with_primary(ProviderId::Lrclib);

        let result = resolver.resolve(&order, &query()).await;

        assert_eq!(result, ProviderResult::NotFound { attempted: order });
        assert!(counters.iter().all(|c| calls(c) == 1));
    }

    #[tokio::test]
    async fn test_faults_fall_through_like_empty() {
        let (resolver, _) = resolver(vec![
            MockProvider::fault(ProviderId::Dr, ProviderFault::Network("reset".into())),
            MockProvider::fault(ProviderId::Ovh, ProviderFault::Malformed("html".into())),
            MockProvider::found(ProviderId::Lrclib, "finally"),
        ]);

        let result = resolver.resolve_with_primary(ProviderId::Dr, &query()).await;

        assert!(matches!(
            result,
            ProviderResult::Found {
                provider: ProviderId::Lrclib,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_all_faults_is_aggregate_not_found() {
        let (resolver, _) = resolver(vec![
            MockProvider::fault(ProviderId::Ovh, ProviderFault::Status(500)),
            MockProvider::fault(ProviderId::Dr, ProviderFault::Timeout),
            MockProvider::fault(ProviderId::Lrclib, ProviderFault::Network("dns".into())),
        ]);

        let result = resolver.resolve_with_primary(ProviderId::Ovh, &query()).await;

        assert_eq!(
            result,
            ProviderResult::NotFound {
                attempted: ProviderOrder::with_primary(ProviderId::Ovh)
            }
        );
    }

    #[tokio::test]
    async fn test_slow_provider_is_cut_off() {
        let slow = MockProvider::found(ProviderId::Ovh, "too late").with_delay(Duration::from_secs(60));
        let slow_calls = slow.counter();
        let providers: Vec<Arc<dyn LyricsProvider>> = vec![
            Arc::new(slow),
            Arc::new(MockProvider::found(ProviderId::Dr, "on time")),
        ];
        let resolver = FallbackResolver::new(providers, Duration::from_millis(50));

        let result = resolver.resolve_with_primary(ProviderId::Ovh, &query()).await;

        assert!(matches!(
            result,
            ProviderResult::Found {
                provider: ProviderId::Dr,
                ..
            }
        ));
        assert_eq!(calls(&slow_calls), 1);
    }

    #[tokio::test]
    async fn test_unregistered_provider_is_skipped() {
        let (resolver, _) = resolver(vec![MockProvider::found(ProviderId::Lrclib, "only one")]);

        let result = resolver.resolve_with_primary(ProviderId::Ovh, &query()).await;

        assert!(matches!(
            result,
            ProviderResult::Found {
                provider: ProviderId::Lrclib,
                ..
            }
        ));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The first provider in the order that finds lyrics is the one tagged,
            /// and nothing after it is called.
            #[test]
            fn first_hit_wins(
                primary in prop::sample::select(ProviderId::ALL.to_vec()),
                hits in prop::array::uniform3(any::<bool>()),
            ) {
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_time()
                    .build()
                    .unwrap();

                let mocks: Vec<_> = ProviderId::ALL
                    .iter()
                    .zip(hits)
                    .map(|(id, hit)| {
                        if hit {
                            MockProvider::found(*id, id.as_str())
                        } else {
                            MockProvider::empty(*id)
                        }
                    })
                    .collect();
                let (resolver, counters) = resolver(mocks);
                let order = ProviderOrder::with_primary(primary);

                let result = runtime.block_on(resolver.resolve(&order, &query()));

                let hit_of = |id: ProviderId| hits[ProviderId::ALL.iter().position(|p| *p == id).unwrap()];
                let counter_of = |id: ProviderId| calls(&counters[ProviderId::ALL.iter().position(|p| *p == id).unwrap()]);
                let winner = order.iter().find(|id| hit_of(*id));

                match winner {
                    Some(winner) => {
                        let is_winner = matches!(result, ProviderResult::Found { provider, .. } if provider == winner);
                        prop_assert!(is_winner);
                        let after: Vec<_> = order.iter().skip_while(|id| *id != winner).skip(1).collect();
                        for id in after {
                            prop_assert_eq!(counter_of(id), 0);
                        }
                    }
                    None => {
                        prop_assert_eq!(result, ProviderResult::NotFound { attempted: order });
                    }
                }
            }
        }
    }
}
