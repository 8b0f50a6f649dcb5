//! Flight data provider adapters

pub mod aviationstack;
pub mod types;

use crate::error::Result;
use async_trait::async_trait;
use types::{FlightPage, SearchFilter};

/// Lookup interface the app core talks to. One adapter per flight-data
/// vendor; the aviationstack adapter is the only production one.
#[async_trait]
pub trait FlightProvider: Send + Sync {
    /// Provider ID (e.g., "aviationstack")
    fn id(&self) -> &'static str;

    /// Perform exactly one lookup bounded by the filter and parse the
    /// response into a page of flights.
    async fn fetch_flights(&self, filter: &SearchFilter) -> Result<FlightPage>;
}
