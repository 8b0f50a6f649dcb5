//! Search Service
//!
//! Runs one flight lookup per invocation and publishes the outcome to the
//! shared search state.

use crate::provider::types::SearchFilter;
use crate::state::{AppState, SearchOutcome};
use tracing::{info, warn};

/// Flight search orchestration
pub struct SearchService;

impl SearchService {
    /// Run one search.
    ///
    /// The outcome is returned to the caller and, unless a newer search
    /// superseded this one while it was in flight, published to the
    /// observable state the results screen renders.
    pub async fn run_search(state: &AppState, filter: SearchFilter) -> SearchOutcome {
        let token = state.begin_search();
        info!(
            "SearchService::run_search - generation {}, limit {}",
            token, filter.limit
        );

        let outcome = match state.provider.fetch_flights(&filter).await {
            Ok(page) => {
                info!("Search returned {} flights", page.data.len());
                SearchOutcome::Success(page)
            }
            Err(e) => {
                warn!("Search failed: {}", e);
                SearchOutcome::Failed {
                    message: e.to_string(),
                }
            }
        };

        if !state.finish_search(token, outcome.clone()) {
            warn!("Search generation {} superseded; result discarded", token);
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, Result};
    use crate::provider::types::{FlightPage, FlightRecord, Pagination};
    use crate::provider::FlightProvider;
    use async_trait::async_trait;
    use std::sync::Arc;

    fn record(number: &str) -> FlightRecord {
        serde_json::from_str(&format!(
            r#"
            {{
                "flight_date": "2024-12-25",
                "flight_status": "active",
                "airline": {{"name": "Delta Air Lines", "iata": "DL", "icao": "DAL"}},
                "flight": {{"number": "{}", "iata": null, "icao": null}},
                "live": null
            }}
            "#,
            number
        ))
        .unwrap()
    }

    /// Serves a fixed result set, truncated to the requested limit
    struct StaticProvider {
        records: Vec<FlightRecord>,
    }

    #[async_trait]
    impl FlightProvider for StaticProvider {
        fn id(&self) -> &'static str {
            "static"
        }

        async fn fetch_flights(&self, filter: &SearchFilter) -> Result<FlightPage> {
            let mut data = self.records.clone();
            data.truncate(filter.limit as usize);
            let count = data.len() as u32;

            Ok(FlightPage {
                pagination: Pagination {
                    limit: filter.limit,
                    offset: 0,
                    count,
                    total: self.records.len() as u32,
                },
                data,
            })
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl FlightProvider for FailingProvider {
        fn id(&self) -> &'static str {
            "failing"
        }

        async fn fetch_flights(&self, _filter: &SearchFilter) -> Result<FlightPage> {
            Err(AppError::Api("simulated outage".to_string()))
        }
    }

    #[tokio::test]
    async fn test_search_publishes_matching_flights() {
        let state = AppState::with_provider(Arc::new(StaticProvider {
            records: vec![record("1004"), record("2010")],
        }));

        let mut filter = SearchFilter::new();
        filter.set_airline("Delta Air Lines");
        filter.set_limit(10);

        let outcome = SearchService::run_search(&state, filter).await;
        assert!(outcome.has_flights());

        let snapshot = state.search_snapshot();
        assert!(!snapshot.loading);
        match snapshot.outcome {
            Some(SearchOutcome::Success(page)) => {
                assert_eq!(page.data.len(), 2);
                assert_eq!(page.data[0].flight.number.as_deref(), Some("1004"));
            }
            other => panic!("expected a success outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_respects_limit() {
        let state = AppState::with_provider(Arc::new(StaticProvider {
            records: vec![record("1"), record("2"), record("3")],
        }));

        let mut filter = SearchFilter::new();
        filter.set_limit(2);

        match SearchService::run_search(&state, filter).await {
            SearchOutcome::Success(page) => assert_eq!(page.data.len(), 2),
            other => panic!("expected a success outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_search_publishes_failure_state() {
        let state = AppState::with_provider(Arc::new(FailingProvider));

        let outcome = SearchService::run_search(&state, SearchFilter::new()).await;
        assert!(!outcome.has_flights());

        let snapshot = state.search_snapshot();
        assert!(!snapshot.loading);
        match snapshot.outcome {
            Some(SearchOutcome::Failed { message }) => {
                assert!(message.contains("simulated outage"));
            }
            other => panic!("expected a failure outcome, got {:?}", other),
        }
    }
}
