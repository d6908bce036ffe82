//! Core request and helper types for the ecobloom service.
//!
//! This module contains the input structures accepted by the catalog,
//! together with the crate-wide `Result` alias.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::GardenError;

/// A specialized Result type for ecobloom operations.
pub type Result<T> = std::result::Result<T, GardenError>;

/// One of the two watering slots tracked per plant each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Evening,
}

impl TimeOfDay {
    /// Capitalized label used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Evening => "Evening",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeOfDay::Morning => write!(f, "morning"),
            TimeOfDay::Evening => write!(f, "evening"),
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "morning" => Ok(TimeOfDay::Morning),
            "evening" => Ok(TimeOfDay::Evening),
            other => Err(GardenError::invalid_input(format!(
                "time_of_day must be \"morning\" or \"evening\", got \"{}\"",
                other
            ))),
        }
    }
}

/// Fields accepted when adding a plant to the catalog.
///
/// Everything is optional on the wire so that a missing `name` can be
/// reported as invalid input instead of a body rejection. Absent optional
/// fields default to empty values when the record is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPlant {
    pub name: Option<String>,
    pub scientific_name: Option<String>,
    pub image: Option<String>,
    pub watering_frequency: Option<String>,
    pub watering_times: Option<Vec<String>>,
    pub sunlight: Option<String>,
    pub soil: Option<String>,
    pub fertilizer: Option<String>,
    pub growth_type: Option<String>,
    pub care_tips: Option<String>,
    pub saved: Option<bool>,
}

impl NewPlant {
    /// Shorthand for an input carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        NewPlant {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// Body of a watering update request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WateringRequest {
    pub time_of_day: Option<String>,
}

impl WateringRequest {
    /// Resolves the requested slot, rejecting missing or unknown values.
    pub fn time_of_day(&self) -> Result<TimeOfDay> {
        match self.time_of_day.as_deref() {
            Some(value) => value.parse(),
            None => Err(GardenError::invalid_input("time_of_day is required")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_times_of_day() {
        assert_eq!("morning".parse::<TimeOfDay>().unwrap(), TimeOfDay::Morning);
        assert_eq!("evening".parse::<TimeOfDay>().unwrap(), TimeOfDay::Evening);
    }

    #[test]
    fn time_of_day_must_match_exactly() {
        for value in ["MORNING", "Evening", "  evening\t", "morning ", ""] {
            let err = value.parse::<TimeOfDay>().unwrap_err();
            assert!(
                matches!(err, GardenError::InvalidInput { .. }),
                "{:?} should be rejected",
                value
            );
        }
    }

    #[test]
    fn rejects_unknown_time_of_day() {
        let err = "noon".parse::<TimeOfDay>().unwrap_err();
        assert!(matches!(err, GardenError::InvalidInput { .. }));
    }

    #[test]
    fn watering_request_requires_time_of_day() {
        let request = WateringRequest::default();
        assert!(matches!(
            request.time_of_day(),
            Err(GardenError::InvalidInput { .. })
        ));
    }
}
