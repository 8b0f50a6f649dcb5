//! FlyBuddy - Flight Lookup and Saved-Flights Tracker
//!
//! The portable core of the FlyBuddy app: flight search against a
//! flight-data provider plus the user's tracked-flights list. The
//! presentation shell binds its screens to [`state::AppState`] through the
//! services layer; nothing here touches the UI.

pub mod airlines;
pub mod config;
pub mod display;
pub mod error;
pub mod provider;
pub mod saved;
pub mod services;
pub mod state;

use config::ApiConfig;
use error::Result;
use state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging and build the shared application state.
///
/// The embedding shell calls this once at startup, before wiring up any
/// screens.
pub fn bootstrap(config: ApiConfig) -> Result<AppState> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flybuddy=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FlyBuddy core...");

    let state = AppState::new(&config)?;

    tracing::info!("Application state initialized");
    Ok(state)
}
