//! Core data structures for the ecobloom service.
//!
//! This module contains the plant record persisted in the catalog document
//! and its per-day watering status.
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{GardenError, NewPlant, Result, TimeOfDay};

/// Morning/evening completion flags for the current watering cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WateringStatus {
    pub morning: bool,
    pub evening: bool,
}

impl WateringStatus {
    /// Marks the given slot as done.
    pub fn mark(&mut self, time_of_day: TimeOfDay) {
        match time_of_day {
            TimeOfDay::Morning => self.morning = true,
            TimeOfDay::Evening => self.evening = true,
        }
    }

    pub fn reset(&mut self) {
        *self = WateringStatus::default();
    }
}

/// Represents a single plant in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    /// Unique identifier, assigned once at creation
    pub id: u64,
    /// Common name
    pub name: String,
    #[serde(default)]
    pub scientific_name: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// Free-text watering guidance, e.g. "Once weekly"
    #[serde(default)]
    pub watering_frequency: String,
    /// Preferred slots, usually "Morning" and/or "Evening"
    #[serde(default)]
    pub watering_times: Vec<String>,
    #[serde(default)]
    pub sunlight: String,
    #[serde(default)]
    pub soil: String,
    #[serde(default)]
    pub fertilizer: String,
    #[serde(default)]
    pub growth_type: String,
    #[serde(default)]
    pub care_tips: String,
    /// Whether the plant is in the user's garden
    #[serde(default)]
    pub saved: bool,
    /// When the plant was last watered, if ever
    #[serde(default, deserialize_with = "deserialize_last_watered")]
    pub last_watered: Option<DateTime<Utc>>,
    #[serde(default)]
    pub watering_status: WateringStatus,
}

/// Reads `last_watered` with or without a UTC offset.
///
/// Documents written by earlier versions of the service carry naive
/// timestamps such as `2025-06-01T07:30:00.123456`; those are taken as UTC.
fn deserialize_last_watered<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };

    if let Ok(stamp) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(stamp.with_timezone(&Utc)));
    }
    raw.parse::<NaiveDateTime>()
        .map(|naive| Some(naive.and_utc()))
        .map_err(|e| serde::de::Error::custom(format!("invalid last_watered \"{}\": {}", raw, e)))
}

impl Plant {
    /// Builds a fresh record from add input.
    ///
    /// The name must be present and non-blank. Watering state always starts
    /// from its defaults regardless of what the caller sent.
    pub fn from_input(id: u64, input: NewPlant) -> Result<Self> {
        let name = match input.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(GardenError::invalid_input("name is required")),
        };

        Ok(Plant {
            id,
            name,
            scientific_name: input.scientific_name.unwrap_or_default(),
            image: input.image.unwrap_or_default(),
            watering_frequency: input.watering_frequency.unwrap_or_default(),
            watering_times: input.watering_times.unwrap_or_default(),
            sunlight: input.sunlight.unwrap_or_default(),
            soil: input.soil.unwrap_or_default(),
            fertilizer: input.fertilizer.unwrap_or_default(),
            growth_type: input.growth_type.unwrap_or_default(),
            care_tips: input.care_tips.unwrap_or_default(),
            saved: input.saved.unwrap_or(false),
            last_watered: None,
            watering_status: WateringStatus::default(),
        })
    }

    /// Records a watering in the given slot at `at`.
    pub fn water(&mut self, time_of_day: TimeOfDay, at: DateTime<Utc>) {
        self.watering_status.mark(time_of_day);
        self.last_watered = Some(at);
    }

    /// Takes the plant out of the garden. `last_watered` is kept.
    pub fn unsave(&mut self) {
        self.saved = false;
        self.watering_status.reset();
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn from_input_fills_defaults() {
        let plant = Plant::from_input(21, NewPlant::named("Fern")).unwrap();

        assert_eq!(plant.id, 21);
        assert_eq!(plant.name, "Fern");
        assert_eq!(plant.scientific_name, "");
        assert_eq!(plant.image, "");
        assert!(plant.watering_times.is_empty());
        assert!(!plant.saved);
        assert_eq!(plant.last_watered, None);
        assert_eq!(plant.watering_status, WateringStatus::default());
    }

    #[test]
    fn from_input_rejects_blank_name() {
        let err = Plant::from_input(1, NewPlant::named("   ")).unwrap_err();
        assert!(matches!(err, GardenError::InvalidInput { .. }));

        let err = Plant::from_input(1, NewPlant::default()).unwrap_err();
        assert!(matches!(err, GardenError::InvalidInput { .. }));
    }

    #[test]
    fn unsave_keeps_last_watered() {
        let at = Utc.with_ymd_and_hms(2026, 5, 1, 7, 30, 0).unwrap();
        let mut plant = Plant::from_input(1, NewPlant::named("Mint")).unwrap();
        plant.saved = true;
        plant.water(TimeOfDay::Morning, at);
        plant.water(TimeOfDay::Evening, at);

        plant.unsave();

        assert!(!plant.saved);
        assert_eq!(plant.watering_status, WateringStatus::default());
        assert_eq!(plant.last_watered, Some(at));
    }

    #[test]
    fn deserializes_sparse_records() {
        let plant: Plant = serde_json::from_value(json!({ "id": 3, "name": "Rose" })).unwrap();

        assert_eq!(plant.id, 3);
        assert_eq!(plant.care_tips, "");
        assert_eq!(plant.last_watered, None);
        assert_eq!(plant.watering_status, WateringStatus::default());
    }

    #[test]
    fn reads_naive_and_offset_timestamps_as_utc() {
        let naive: Plant = serde_json::from_value(
            json!({ "id": 1, "name": "Aloe", "last_watered": "2025-06-01T07:30:00.123456" }),
        )
        .unwrap();
        let offset: Plant = serde_json::from_value(
            json!({ "id": 2, "name": "Rose", "last_watered": "2025-06-01T09:30:00+02:00" }),
        )
        .unwrap();

        let expected = Utc.with_ymd_and_hms(2025, 6, 1, 7, 30, 0).unwrap();
        assert_eq!(
            naive.last_watered,
            Some(expected + chrono::Duration::microseconds(123456))
        );
        assert_eq!(offset.last_watered, Some(expected));
        assert_eq!(
            serde_json::to_value(&offset).unwrap()["last_watered"],
            json!("2025-06-01T07:30:00Z")
        );
    }

    #[test]
    fn rejects_garbage_timestamp() {
        let result: serde_json::Result<Plant> = serde_json::from_value(
            json!({ "id": 1, "name": "Aloe", "last_watered": "yesterday" }),
        );
        assert!(result.is_err());
    }

    #[test]
    fn serializes_null_last_watered_and_status_keys() {
        let plant = Plant::from_input(1, NewPlant::named("Neem")).unwrap();
        let value = serde_json::to_value(&plant).unwrap();

        assert!(value["last_watered"].is_null());
        assert_eq!(value["watering_status"], json!({ "morning": false, "evening": false }));
    }
}
