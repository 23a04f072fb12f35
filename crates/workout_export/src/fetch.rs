//! The two time-series fetchers: heart-rate samples and the GPS route.
//!
//! Both are independent, read-only store round trips. The assembler runs
//! them concurrently; neither touches shared state.

use healthstore_client::{HealthStore, LocationPoint, QuantityKind, Workout};

use crate::error::ExportResult;
use crate::model::{HeartRateSample, MAX_HEART_RATE_SAMPLES, RoutePoint};
use crate::stats::beats_per_sec_to_bpm;

/// Heart-rate samples within the workout's time range, ascending, capped at
/// [`MAX_HEART_RATE_SAMPLES`], converted to beats per minute.
pub async fn fetch_heart_rate_samples(
    store: &dyn HealthStore,
    workout: &Workout,
) -> ExportResult<Vec<HeartRateSample>> {
    let samples = store
        .query_samples(
            QuantityKind::HeartRate,
            workout.start_date,
            workout.end_date,
            true,
            Some(MAX_HEART_RATE_SAMPLES),
        )
        .await?;
    Ok(samples
        .into_iter()
        .map(|s| HeartRateSample {
            date: s.date,
            bpm: beats_per_sec_to_bpm(s.value),
        })
        .collect())
}

/// The workout's route as ordered points. A workout without a GPS track
/// yields an empty sequence, not an error.
pub async fn fetch_route(
    store: &dyn HealthStore,
    workout: &Workout,
) -> ExportResult<Vec<RoutePoint>> {
    let Some(route) = store.find_workout_route(&workout.id).await? else {
        return Ok(Vec::new());
    };
    let locations = store.route_locations(&route.id).await?;
    Ok(locations.into_iter().map(route_point).collect())
}

/// A negative accuracy or speed is the store's "unavailable" sentinel and
/// must become an absent optional, never a negative number.
fn route_point(loc: LocationPoint) -> RoutePoint {
    RoutePoint {
        latitude: loc.latitude,
        longitude: loc.longitude,
        altitude: loc.altitude,
        timestamp: loc.timestamp,
        horizontal_accuracy: (loc.horizontal_accuracy >= 0.0).then_some(loc.horizontal_accuracy),
        speed: (loc.speed >= 0.0).then_some(loc.speed),
    }
}
