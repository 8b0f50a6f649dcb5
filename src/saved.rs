//! Tracked-flights list

use crate::display;
use crate::provider::types::FlightRecord;
use serde::Serialize;

/// Signal returned when the user tracks a flight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrackSignal {
    Added { notice: String },
    AlreadyTracked { notice: String },
}

impl TrackSignal {
    /// User-visible notice text
    pub fn notice(&self) -> &str {
        match self {
            TrackSignal::Added { notice } => notice,
            TrackSignal::AlreadyTracked { notice } => notice,
        }
    }
}

/// Confirmation returned when the user deletes a tracked flight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoveSignal {
    pub notice: String,
}

/// The user's tracked-flights list.
///
/// Membership is by full structural equality and insertion order is
/// preserved. Lives only for the process lifetime.
#[derive(Debug, Default)]
pub struct SavedFlights {
    records: Vec<FlightRecord>,
}

impl SavedFlights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a flight. Tracking one already in the list leaves the list
    /// unchanged and says so.
    pub fn add(&mut self, record: FlightRecord) -> TrackSignal {
        if self.records.contains(&record) {
            return TrackSignal::AlreadyTracked {
                notice: "You are already tracking this flight!".to_string(),
            };
        }

        let number = display::flight_number(record.flight.number.as_deref());
        self.records.push(record);
        TrackSignal::Added {
            notice: format!("Flight {} has been added to your list.", number),
        }
    }

    /// Delete a flight from the list, confirming with its number.
    pub fn remove(&mut self, record: &FlightRecord) -> RemoveSignal {
        self.records.retain(|tracked| tracked != record);

        let number = display::flight_number(record.flight.number.as_deref());
        RemoveSignal {
            notice: format!("Flight {} has been deleted.", number),
        }
    }

    /// Tracked flights, in insertion order
    pub fn records(&self) -> &[FlightRecord] {
        &self.records
    }

    pub fn contains(&self, record: &FlightRecord) -> bool {
        self.records.contains(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
