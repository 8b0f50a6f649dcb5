//! Application state management

use crate::airlines::AirlineDirectory;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::provider::aviationstack::AviationstackClient;
use crate::provider::types::{FlightPage, FlightRecord};
use crate::provider::FlightProvider;
use crate::saved::{RemoveSignal, SavedFlights, TrackSignal};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Outcome of one flight lookup, published for the presentation layer.
/// A failure is a distinct renderable state, not a silently missing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchOutcome {
    Success(FlightPage),
    Failed { message: String },
}

impl SearchOutcome {
    /// True when this outcome holds at least one flight
    pub fn has_flights(&self) -> bool {
        matches!(self, SearchOutcome::Success(page) if !page.data.is_empty())
    }
}

/// Observable search state the presentation layer renders
#[derive(Debug, Clone, Serialize)]
pub struct SearchSnapshot {
    pub loading: bool,
    pub outcome: Option<SearchOutcome>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug)]
struct SearchState {
    loading: bool,
    outcome: Option<SearchOutcome>,
    updated_at: Option<DateTime<Utc>>,
}

/// Application state shared across all services
pub struct AppState {
    /// Flight data provider
    pub provider: Arc<dyn FlightProvider>,

    /// Read-only airline reference list for the filter screen
    pub airlines: AirlineDirectory,

    /// Latest published search result
    search: RwLock<SearchState>,

    /// The user's tracked flights
    saved: RwLock<SavedFlights>,

    /// Generation of the most recently issued search
    generation: AtomicU64,
}

impl AppState {
    /// Create application state backed by the aviationstack provider
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let provider = Arc::new(AviationstackClient::new(config)?);
        Ok(Self::with_provider(provider))
    }

    /// Create application state over an arbitrary provider
    pub fn with_provider(provider: Arc<dyn FlightProvider>) -> Self {
        let airlines = AirlineDirectory::bundled();
        tracing::info!(
            "Loaded {} airlines for provider '{}'",
            airlines.len(),
            provider.id()
        );

        Self {
            provider,
            airlines,
            search: RwLock::new(SearchState {
                loading: false,
                outcome: None,
                updated_at: None,
            }),
            saved: RwLock::new(SavedFlights::new()),
            generation: AtomicU64::new(0),
        }
    }

    /// Mark a new search as issued; returns its generation token.
    /// The loading indicator stays up until the latest search finishes.
    pub fn begin_search(&self) -> u64 {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.search.write().loading = true;
        token
    }

    /// Publish a finished search.
    ///
    /// The outcome is applied only when `token` still belongs to the latest
    /// issued search; a superseded completion is discarded so a slow, stale
    /// request can never overwrite a newer result.
    pub fn finish_search(&self, token: u64, outcome: SearchOutcome) -> bool {
        let mut search = self.search.write();
        if token != self.generation.load(Ordering::SeqCst) {
            return false;
        }

        search.loading = false;
        search.outcome = Some(outcome);
        search.updated_at = Some(Utc::now());
        true
    }

    /// Current observable search state
    pub fn search_snapshot(&self) -> SearchSnapshot {
        let search = self.search.read();
        SearchSnapshot {
            loading: search.loading,
            outcome: search.outcome.clone(),
            updated_at: search.updated_at,
        }
    }

    /// Track a flight; a repeat is refused with a notice
    pub fn track_flight(&self, record: FlightRecord) -> TrackSignal {
        self.saved.write().add(record)
    }

    /// Delete a flight from the tracked list
    pub fn untrack_flight(&self, record: &FlightRecord) -> RemoveSignal {
        self.saved.write().remove(record)
    }

    /// Tracked flights, in insertion order
    pub fn saved_flights(&self) -> Vec<FlightRecord> {
        self.saved.read().records().to_vec()
    }

    pub fn saved_count(&self) -> usize {
        self.saved.read().len()
    }
}
