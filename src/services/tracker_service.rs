//! Tracker Service
//!
//! Maintains the user's saved-flights list and the notices the screens
//! show for each interaction.

use crate::provider::types::FlightRecord;
use crate::saved::{RemoveSignal, TrackSignal};
use crate::state::AppState;
use tracing::info;

/// Saved-flights orchestration
pub struct TrackerService;

impl TrackerService {
    /// Track a displayed flight; a repeat is refused with a notice
    pub fn track(state: &AppState, record: FlightRecord) -> TrackSignal {
        let signal = state.track_flight(record);
        info!("TrackerService::track - {}", signal.notice());
        signal
    }

    /// Delete a flight from the saved list
    pub fn untrack(state: &AppState, record: &FlightRecord) -> RemoveSignal {
        let signal = state.untrack_flight(record);
        info!("TrackerService::untrack - {}", signal.notice);
        signal
    }

    /// Tracked flights, in insertion order
    pub fn saved(state: &AppState) -> Vec<FlightRecord> {
        state.saved_flights()
    }
}
