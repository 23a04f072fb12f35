//! Export assembly: the single public entry point of the pipeline.

use chrono::Utc;
use healthstore_client::{HealthStore, Workout};

use crate::error::ExportResult;
use crate::extract::{collect_activities, extract_events};
use crate::fetch::{fetch_heart_rate_samples, fetch_route};
use crate::model::{ActivityKind, EXPORT_VERSION, WorkoutData, WorkoutExport};
use crate::stats::collect_statistics;

/// Assemble a complete [`WorkoutExport`] for one workout record.
///
/// The heart-rate and route fetches run concurrently and are both required:
/// if either fails the whole export fails, and when both fail the
/// heart-rate error is the one reported. Statistics, events, and activities
/// are extracted inline. Single attempt; store failures surface verbatim.
pub async fn build_export(
    store: &dyn HealthStore,
    workout: &Workout,
) -> ExportResult<WorkoutExport> {
    tracing::debug!(workout_id = %workout.id, "assembling workout export");

    let (heart_rate, route) = tokio::join!(
        fetch_heart_rate_samples(store, workout),
        fetch_route(store, workout),
    );
    let heart_rate_samples = heart_rate?;
    let route = route?;

    let statistics = collect_statistics(store, workout.start_date, workout.end_date).await?;
    let events = extract_events(&workout.events);
    let activities = collect_activities(store, &workout.activities).await?;

    tracing::info!(
        workout_id = %workout.id,
        heart_rate_samples = heart_rate_samples.len(),
        route_points = route.len(),
        events = events.len(),
        activities = activities.len(),
        "workout export assembled"
    );

    Ok(WorkoutExport {
        export_version: EXPORT_VERSION.to_string(),
        export_date: Utc::now(),
        workout: WorkoutData {
            kind: ActivityKind::from_provider(&workout.activity_kind),
            source_app: workout.source_app.clone(),
            start_date: workout.start_date,
            end_date: workout.end_date,
            duration_secs: workout.duration_secs,
            statistics,
            heart_rate_samples,
            route,
            events,
            activities,
        },
    })
}
