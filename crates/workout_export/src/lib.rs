//! Workout export assembly pipeline.
//!
//! Given a completed workout record from a [`HealthStore`], assemble one
//! versioned, self-contained [`WorkoutExport`] document: per-range
//! statistics, heart-rate time series, GPS route, events, and sub-activity
//! segments, merged deterministically with the two time-series fetches
//! running concurrently. [`serialize`] then turns the document into
//! canonical JSON bytes plus a derived filename; persisting or delivering
//! those bytes is the caller's concern.
//!
//! The pipeline is stateless per request: no caches, no connection pools,
//! no partial documents on failure.

pub mod assembler;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod model;
pub mod serializer;
pub mod stats;

mod test_utils;

pub use assembler::build_export;
pub use error::{ExportError, ExportResult};
pub use model::{
    ActivityData, ActivityKind, EXPORT_VERSION, EventKind, HeartRateSample,
    MAX_HEART_RATE_SAMPLES, RoutePoint, StatValue, WorkoutData, WorkoutEventData, WorkoutExport,
    WorkoutStatistics,
};
pub use serializer::serialize;

pub use healthstore_client::HealthStore;
