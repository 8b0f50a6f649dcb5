//! Bundled airline reference list
//!
//! Newline-delimited airline names the filter screen offers for selection.
//! Loaded once at startup and treated as read-only.

use crate::error::Result;
use std::path::Path;

const BUNDLED: &str = include_str!("../data/airlines.txt");

/// Read-only list of airline names
#[derive(Debug, Clone)]
pub struct AirlineDirectory {
    names: Vec<String>,
}

impl AirlineDirectory {
    /// Directory from the list bundled with the app
    pub fn bundled() -> Self {
        Self::parse(BUNDLED)
    }

    /// Directory from a newline-delimited file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(Self::parse(&raw))
    }

    fn parse(raw: &str) -> Self {
        let names = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self { names }
    }

    /// Airline names in file order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
