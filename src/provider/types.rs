//! Common flight lookup types
//!
//! The request descriptor and the response model shared by providers,
//! services, and the presentation boundary.

use serde::{Deserialize, Serialize};

/// Result limit used when the caller picks none
pub const DEFAULT_LIMIT: u32 = 10;

/// Flight lifecycle states accepted by the status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightStatus {
    Scheduled,
    Active,
    Landed,
    Cancelled,
    Incident,
    Diverted,
}

impl FlightStatus {
    /// All statuses, in the order the filter dropdown offers them
    pub const ALL: [FlightStatus; 6] = [
        FlightStatus::Scheduled,
        FlightStatus::Active,
        FlightStatus::Landed,
        FlightStatus::Cancelled,
        FlightStatus::Incident,
        FlightStatus::Diverted,
    ];

    /// Wire form sent as the `flight_status` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "scheduled",
            FlightStatus::Active => "active",
            FlightStatus::Landed => "landed",
            FlightStatus::Cancelled => "cancelled",
            FlightStatus::Incident => "incident",
            FlightStatus::Diverted => "diverted",
        }
    }

    /// Parse a status string, case-insensitive
    pub fn parse(value: &str) -> Option<FlightStatus> {
        match value.to_lowercase().as_str() {
            "scheduled" => Some(FlightStatus::Scheduled),
            "active" => Some(FlightStatus::Active),
            "landed" => Some(FlightStatus::Landed),
            "cancelled" => Some(FlightStatus::Cancelled),
            "incident" => Some(FlightStatus::Incident),
            "diverted" => Some(FlightStatus::Diverted),
            _ => None,
        }
    }
}

/// User-chosen query constraints for one flight lookup.
///
/// Mutated by the filter controls, read once when a search is triggered.
/// A filter left unset is omitted from the outgoing request entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    #[serde(default)]
    pub airline: Option<String>,
    #[serde(default)]
    pub status: Option<FlightStatus>,
    #[serde(default)]
    pub flight_number: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            airline: None,
            status: None,
            flight_number: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the airline-name filter. Blank input clears it.
    pub fn set_airline(&mut self, name: impl Into<String>) {
        self.airline = non_blank(name.into());
    }

    pub fn set_status(&mut self, status: Option<FlightStatus>) {
        self.status = status;
    }

    /// Set the flight-number filter. Blank input clears it.
    pub fn set_flight_number(&mut self, number: impl Into<String>) {
        self.flight_number = non_blank(number.into());
    }

    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit;
    }

    /// Outgoing query parameters; unset filters are omitted, never sent
    /// as empty strings.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("limit", self.limit.to_string())];

        if let Some(status) = self.status {
            params.push(("flight_status", status.as_str().to_string()));
        }
        if let Some(airline) = &self.airline {
            params.push(("airline_name", airline.clone()));
        }
        if let Some(number) = &self.flight_number {
            params.push(("flight_number", number.clone()));
        }

        params
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// One page of lookup results: pagination metadata plus the records in
/// the order the provider returned them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPage {
    pub pagination: Pagination,
    pub data: Vec<FlightRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
    pub count: u32,
    pub total: u32,
}

/// One flight returned by the lookup. Structural equality over all fields
/// is the saved-list membership test.
///
/// Older provider revisions omit the departure/arrival blocks; those
/// payloads still deserialize, with empty endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_date: Option<String>,
    pub flight_status: Option<String>,
    #[serde(default)]
    pub departure: RouteEndpoint,
    #[serde(default)]
    pub arrival: RouteEndpoint,
    #[serde(default)]
    pub airline: Airline,
    #[serde(default)]
    pub flight: FlightCode,
    pub live: Option<LivePosition>,
}

/// Airline identity block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airline {
    pub name: Option<String>,
    pub iata: Option<String>,
    pub icao: Option<String>,
}

/// Flight designator block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightCode {
    pub number: Option<String>,
    pub iata: Option<String>,
    pub icao: Option<String>,
}

/// Real-time aircraft position; absent when the flight is not airborne
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LivePosition {
    pub updated: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
    pub direction: Option<f64>,
    pub speed_horizontal: Option<f64>,
    pub speed_vertical: Option<f64>,
    pub is_ground: Option<bool>,
}

/// Departure or arrival details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEndpoint {
    pub airport: Option<String>,
    pub timezone: Option<String>,
    pub terminal: Option<String>,
    pub estimated: Option<String>,
}
