//! The versioned export document schema.
//!
//! Everything here is an immutable value record constructed once per export
//! request. Field names below are the JSON contract for downstream
//! consumers; [`EXPORT_VERSION`] must be bumped whenever a field is added,
//! removed, or retyped anywhere in this module.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Semantic version of the export schema.
pub const EXPORT_VERSION: &str = "1.0";

/// Store-side cap on heart-rate samples per export.
pub const MAX_HEART_RATE_SAMPLES: u32 = 5000;

/// Normalized activity-kind tags for workouts and sub-activities.
///
/// The store's own enumeration is open-ended; anything unmapped resolves to
/// `Other` rather than failing.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Running,
    StrengthTraining,
    FunctionalStrength,
    #[serde(other)]
    Other,
}

impl ActivityKind {
    /// Map a store-native activity kind onto the fixed tag set.
    pub fn from_provider(kind: &str) -> Self {
        match kind {
            "running" => ActivityKind::Running,
            "traditionalStrengthTraining" => ActivityKind::StrengthTraining,
            "functionalStrengthTraining" => ActivityKind::FunctionalStrength,
            _ => ActivityKind::Other,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ActivityKind::Running => "running",
            ActivityKind::StrengthTraining => "strength_training",
            ActivityKind::FunctionalStrength => "functional_strength",
            ActivityKind::Other => "other",
        }
    }
}

/// Normalized event-kind tags, with `Unknown` absorbing future store kinds.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Pause,
    Resume,
    Lap,
    Segment,
    Marker,
    MotionPaused,
    MotionResumed,
    #[serde(other)]
    Unknown,
}

impl EventKind {
    /// Map a store-native event kind onto the fixed tag set.
    pub fn from_provider(kind: &str) -> Self {
        match kind {
            "pause" => EventKind::Pause,
            "resume" => EventKind::Resume,
            "lap" => EventKind::Lap,
            "segment" => EventKind::Segment,
            "marker" => EventKind::Marker,
            "motionPaused" => EventKind::MotionPaused,
            "motionResumed" => EventKind::MotionResumed,
            _ => EventKind::Unknown,
        }
    }
}

/// A unit-normalized statistic. The unit string is fixed per field by the
/// extractor, never locale- or store-dependent.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct StatValue {
    pub value: f64,
    pub unit: String,
}

impl StatValue {
    pub fn new(value: f64, unit: &str) -> Self {
        Self {
            value,
            unit: unit.to_string(),
        }
    }
}

/// Per-range aggregates. Each field is independently optional: absence
/// means the store had no samples of that kind in the range, which is not
/// the same as a recorded zero.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStatistics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_energy_burned: Option<StatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<StatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_count: Option<StatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_heart_rate: Option<StatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_heart_rate: Option<StatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_speed: Option<StatValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_power: Option<StatValue>,
}

/// One heart-rate reading, already converted to beats per minute.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct HeartRateSample {
    pub date: DateTime<Utc>,
    pub bpm: f64,
}

/// One GPS point of the workout route. Accuracy and speed are present only
/// when the store reported a non-negative value.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoutePoint {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

/// A discrete workout event. `end_date` is absent for instantaneous events
/// such as lap markers.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEventData {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub start_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

/// A sub-activity segment with statistics scoped to its own time range.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityData {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Seconds, as accounted by the store.
    #[serde(rename = "duration")]
    pub duration_secs: f64,
    pub statistics: WorkoutStatistics,
}

/// The merged per-workout payload.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutData {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub source_app: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Seconds, carried verbatim from the store. May diverge from
    /// `end_date - start_date` under pause/resume accounting and is never
    /// recomputed here.
    #[serde(rename = "duration")]
    pub duration_secs: f64,
    pub statistics: WorkoutStatistics,
    /// Chronological, at most [`MAX_HEART_RATE_SAMPLES`] entries. Empty when
    /// no samples exist in range, never absent.
    pub heart_rate_samples: Vec<HeartRateSample>,
    /// Chronological. Empty when the workout has no GPS track.
    pub route: Vec<RoutePoint>,
    /// Store order preserved.
    pub events: Vec<WorkoutEventData>,
    /// Store order preserved; empty for single-segment workouts.
    pub activities: Vec<ActivityData>,
}

/// The self-contained, versioned export document.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExport {
    pub export_version: String,
    /// Generation time, not workout time.
    pub export_date: DateTime<Utc>,
    pub workout: WorkoutData,
}
