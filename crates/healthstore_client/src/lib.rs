//! Minimal `HealthStore` trait and the provider-native record types it returns.
//!
//! The store is a read-only source of completed workouts and the quantity
//! data recorded alongside them. Values come back in the store's base units
//! (documented on [`QuantityKind`]); unit conversion is the consumer's job.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod config;
pub mod http_client;

#[derive(Debug, Error)]
pub enum HealthStoreError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("authorization denied: {0}")]
    Auth(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("store error (status {status}): {message}")]
    Status { status: u16, message: String },
    #[error("configuration error: {0}")]
    Config(String),
}

impl HealthStoreError {
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => HealthStoreError::Auth(message),
            404 => HealthStoreError::NotFound(message),
            422 => HealthStoreError::InvalidInput(message),
            _ => HealthStoreError::Status { status, message },
        }
    }
}

/// Categories of quantity data the store records.
///
/// Base units on the wire are fixed per kind:
/// energy joules, distance meters, heart rate beats/second, speed m/s,
/// power watts, steps raw count.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum QuantityKind {
    ActiveEnergyBurned,
    Distance,
    StepCount,
    HeartRate,
    Speed,
    Power,
}

impl QuantityKind {
    /// Wire tag used in query parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            QuantityKind::ActiveEnergyBurned => "active_energy_burned",
            QuantityKind::Distance => "distance",
            QuantityKind::StepCount => "step_count",
            QuantityKind::HeartRate => "heart_rate",
            QuantityKind::Speed => "speed",
            QuantityKind::Power => "power",
        }
    }
}

/// Aggregates for one quantity kind over a time range.
///
/// All fields `None` means the store had no samples of that kind in the
/// range. That is absence of data, not zero: a recorded zero comes back as
/// `Some(0.0)`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct QuantityStatistics {
    pub sum: Option<f64>,
    pub average: Option<f64>,
    pub maximum: Option<f64>,
}

/// A single raw quantity sample, in the kind's base unit.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct QuantitySample {
    pub date: DateTime<Utc>,
    pub value: f64,
}

/// Handle to the GPS route recorded for a workout. At most one exists.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct WorkoutRoute {
    pub id: String,
}

/// One recorded location along a route.
///
/// `horizontal_accuracy` and `speed` use a negative value as the store's
/// "unavailable" sentinel.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct LocationPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub timestamp: DateTime<Utc>,
    pub horizontal_accuracy: f64,
    pub speed: f64,
}

/// A discrete occurrence during a workout (pause, lap marker, ...).
///
/// `kind` is the store's own open-ended enumeration; new kinds appear over
/// time, so consumers must tolerate unrecognized values. `end_date` is
/// absent for instantaneous events.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct WorkoutEvent {
    pub kind: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

/// A contiguous segment within a multi-segment workout.
///
/// The store may omit `end_date` even when `duration_secs` is present.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct WorkoutActivity {
    pub activity_kind: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub duration_secs: f64,
}

/// A completed workout record.
///
/// `duration_secs` is the store's own accounting (pauses excluded) and may
/// legitimately differ from `end_date - start_date`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Workout {
    pub id: String,
    pub activity_kind: String,
    pub source_app: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub duration_secs: f64,
    #[serde(default)]
    pub events: Vec<WorkoutEvent>,
    #[serde(default)]
    pub activities: Vec<WorkoutActivity>,
}

/// Read-only boundary to the health-data store.
///
/// All operations are independent round trips: implementations hold no
/// per-call state, so any subset may run concurrently.
#[async_trait]
pub trait HealthStore: Send + Sync + 'static {
    /// Look up a completed workout by identifier.
    async fn query_workout(&self, workout_id: &str) -> Result<Workout, HealthStoreError>;

    /// Aggregate statistics for one quantity kind over a time range.
    ///
    /// No samples in range is not an error; it comes back as a
    /// [`QuantityStatistics`] with every aggregate `None`.
    async fn query_statistics(
        &self,
        kind: QuantityKind,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<QuantityStatistics, HealthStoreError>;

    /// Raw samples of one quantity kind within a time range.
    async fn query_samples(
        &self,
        kind: QuantityKind,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        ascending: bool,
        limit: Option<u32>,
    ) -> Result<Vec<QuantitySample>, HealthStoreError>;

    /// The route recorded for a workout, if any. A workout without a GPS
    /// track yields `Ok(None)`, never an error.
    async fn find_workout_route(
        &self,
        workout_id: &str,
    ) -> Result<Option<WorkoutRoute>, HealthStoreError>;

    /// The location points of a route, in chronological order.
    async fn route_locations(
        &self,
        route_id: &str,
    ) -> Result<Vec<LocationPoint>, HealthStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_status_maps_auth_codes() {
        assert!(matches!(
            HealthStoreError::from_status(401, "nope".into()),
            HealthStoreError::Auth(_)
        ));
        assert!(matches!(
            HealthStoreError::from_status(403, "nope".into()),
            HealthStoreError::Auth(_)
        ));
        assert!(matches!(
            HealthStoreError::from_status(500, "boom".into()),
            HealthStoreError::Status { status: 500, .. }
        ));
    }

    #[test]
    fn workout_deserializes_with_missing_event_end() {
        let payload = json!({
            "id": "w1",
            "activity_kind": "running",
            "source_app": "Runna",
            "start_date": "2024-03-07T08:15:00Z",
            "end_date": "2024-03-07T09:00:00Z",
            "duration_secs": 2640.0,
            "events": [
                {"kind": "lap", "start_date": "2024-03-07T08:25:00Z"}
            ]
        });
        let w: Workout = serde_json::from_value(payload).expect("workout");
        assert_eq!(w.events.len(), 1);
        assert!(w.events[0].end_date.is_none());
        assert!(w.activities.is_empty());
    }

    #[test]
    fn quantity_statistics_defaults_to_all_absent() {
        let s: QuantityStatistics = serde_json::from_value(json!({})).expect("stats");
        assert_eq!(s, QuantityStatistics::default());
    }

    #[test]
    fn quantity_kind_wire_tags_are_snake_case() {
        assert_eq!(
            QuantityKind::ActiveEnergyBurned.as_str(),
            "active_energy_burned"
        );
        assert_eq!(QuantityKind::HeartRate.as_str(), "heart_rate");
    }
}
