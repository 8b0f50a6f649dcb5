//! Display normalization for flight cards
//!
//! The provider leaves many fields null; the cards render documented
//! placeholders instead of raw nulls.

use crate::provider::types::FlightRecord;
use serde::Serialize;

const MISSING_TEXT: &str = "N/A";
const MISSING_NUMBER: &str = "-";

/// Flight number, or "-" when the provider did not supply one
pub fn flight_number(value: Option<&str>) -> String {
    match value {
        Some(number) => number.to_string(),
        None => MISSING_NUMBER.to_string(),
    }
}

/// Named entity (airline and friends), or "N/A"
pub fn airline_name(value: Option<&str>) -> String {
    match value {
        Some(name) => name.to_string(),
        None => MISSING_TEXT.to_string(),
    }
}

/// Airport name; path-style values keep only the segment after the last '/'
pub fn airport(value: Option<&str>) -> String {
    match value {
        None => MISSING_TEXT.to_string(),
        Some(name) => match name.rsplit_once('/') {
            Some((_, tail)) => tail.to_string(),
            None => name.to_string(),
        },
    }
}

/// Status with its first character uppercased, or "N/A"
pub fn status(value: Option<&str>) -> String {
    match value {
        None => MISSING_TEXT.to_string(),
        Some(raw) => {
            let mut chars = raw.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// Card-ready view of one flight, as the result and saved-flights screens
/// render it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightCard {
    pub number: String,
    pub airline: String,
    pub departure: String,
    pub arrival: String,
    pub status: String,
}

impl FlightCard {
    pub fn from_record(record: &FlightRecord) -> Self {
        Self {
            number: flight_number(record.flight.number.as_deref()),
            airline: airline_name(record.airline.name.as_deref()),
            departure: airport(record.departure.airport.as_deref()),
            arrival: airport(record.arrival.airport.as_deref()),
            status: status(record.flight_status.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_placeholders() {
        assert_eq!(flight_number(None), "-");
        assert_eq!(airline_name(None), "N/A");
        assert_eq!(airport(None), "N/A");
        assert_eq!(status(None), "N/A");
    }

    #[test]
    fn test_present_fields_pass_through() {
        assert_eq!(flight_number(Some("1004")), "1004");
        assert_eq!(airline_name(Some("Delta Air Lines")), "Delta Air Lines");
        assert_eq!(airport(Some("Heathrow")), "Heathrow");
    }

    #[test]
    fn test_airport_path_keeps_last_segment() {
        assert_eq!(airport(Some("London/Heathrow")), "Heathrow");
        assert_eq!(airport(Some("A/B/C")), "C");
    }

    #[test]
    fn test_status_capitalizes_first_char() {
        assert_eq!(status(Some("active")), "Active");
        assert_eq!(status(Some("Landed")), "Landed");
        assert_eq!(status(Some("")), "");
    }

    #[test]
    fn test_card_from_sparse_record() {
        let json = r#"
            {
                "flight_date": null,
                "flight_status": "scheduled",
                "departure": {"airport": "Paris/Charles de Gaulle", "timezone": null,
                              "terminal": null, "estimated": null},
                "arrival": {"airport": null, "timezone": null,
                            "terminal": null, "estimated": null},
                "airline": {"name": null, "iata": null, "icao": null},
                "flight": {"number": null, "iata": null, "icao": null},
                "live": null
            }
        "#;
        let record: FlightRecord = serde_json::from_str(json).unwrap();

        let card = FlightCard::from_record(&record);
        assert_eq!(card.number, "-");
        assert_eq!(card.airline, "N/A");
        assert_eq!(card.departure, "Charles de Gaulle");
        assert_eq!(card.arrival, "N/A");
        assert_eq!(card.status, "Scheduled");
    }
}
