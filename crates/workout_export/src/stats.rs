//! Statistics extraction with fixed unit normalization.
//!
//! The store reports aggregates in its base units (joules, meters,
//! beats/second, m/s, watts, raw count); this module converts them to the
//! export's fixed unit strings. Applies equally to a whole workout and to a
//! single sub-activity, scoped by time range.

use chrono::{DateTime, Utc};
use healthstore_client::{HealthStore, QuantityKind};

use crate::error::ExportResult;
use crate::model::{StatValue, WorkoutStatistics};

const JOULES_PER_KCAL: f64 = 4184.0;
const METERS_PER_KM: f64 = 1000.0;
const SECS_PER_MINUTE: f64 = 60.0;

pub(crate) fn joules_to_kcal(v: f64) -> f64 {
    v / JOULES_PER_KCAL
}

pub(crate) fn meters_to_km(v: f64) -> f64 {
    v / METERS_PER_KM
}

pub(crate) fn beats_per_sec_to_bpm(v: f64) -> f64 {
    v * SECS_PER_MINUTE
}

/// Collect the seven export statistics for `[start, end]`.
///
/// Sum aggregate for energy, distance, and steps; average for heart rate,
/// speed, and power; maximum additionally captured for heart rate. An
/// aggregate the store has no samples for stays absent (a recorded zero is
/// `Some`). A failed store query propagates; it is never downgraded to
/// absence.
pub async fn collect_statistics(
    store: &dyn HealthStore,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> ExportResult<WorkoutStatistics> {
    let energy = store
        .query_statistics(QuantityKind::ActiveEnergyBurned, start, end)
        .await?;
    let distance = store
        .query_statistics(QuantityKind::Distance, start, end)
        .await?;
    let steps = store
        .query_statistics(QuantityKind::StepCount, start, end)
        .await?;
    let heart_rate = store
        .query_statistics(QuantityKind::HeartRate, start, end)
        .await?;
    let speed = store.query_statistics(QuantityKind::Speed, start, end).await?;
    let power = store.query_statistics(QuantityKind::Power, start, end).await?;

    Ok(WorkoutStatistics {
        active_energy_burned: energy.sum.map(|j| StatValue::new(joules_to_kcal(j), "kcal")),
        distance: distance.sum.map(|m| StatValue::new(meters_to_km(m), "km")),
        step_count: steps.sum.map(|n| StatValue::new(n, "steps")),
        average_heart_rate: heart_rate
            .average
            .map(|v| StatValue::new(beats_per_sec_to_bpm(v), "bpm")),
        max_heart_rate: heart_rate
            .maximum
            .map(|v| StatValue::new(beats_per_sec_to_bpm(v), "bpm")),
        average_speed: speed.average.map(|v| StatValue::new(v, "m/s")),
        average_power: power.average.map(|v| StatValue::new(v, "W")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockHealthStore;
    use chrono::TimeZone;
    use healthstore_client::QuantityStatistics;

    fn range() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            Utc.with_ymd_and_hms(2024, 3, 7, 8, 15, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 7, 9, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn no_samples_leaves_every_field_absent() {
        let store = MockHealthStore::default();
        let (start, end) = range();
        let stats = collect_statistics(&store, start, end).await.expect("stats");
        assert_eq!(stats, WorkoutStatistics::default());
    }

    #[tokio::test]
    async fn recorded_zero_energy_stays_present() {
        let store = MockHealthStore::default().with_statistics(
            QuantityKind::ActiveEnergyBurned,
            QuantityStatistics {
                sum: Some(0.0),
                ..Default::default()
            },
        );
        let (start, end) = range();
        let stats = collect_statistics(&store, start, end).await.expect("stats");
        let energy = stats.active_energy_burned.expect("present");
        assert_eq!(energy.value, 0.0);
        assert_eq!(energy.unit, "kcal");
    }

    #[tokio::test]
    async fn conversions_apply_fixed_units() {
        let store = MockHealthStore::default()
            .with_statistics(
                QuantityKind::ActiveEnergyBurned,
                QuantityStatistics {
                    sum: Some(4184.0 * 250.0),
                    ..Default::default()
                },
            )
            .with_statistics(
                QuantityKind::Distance,
                QuantityStatistics {
                    sum: Some(5200.0),
                    ..Default::default()
                },
            )
            .with_statistics(
                QuantityKind::HeartRate,
                QuantityStatistics {
                    average: Some(2.4),
                    maximum: Some(3.0),
                    ..Default::default()
                },
            )
            .with_statistics(
                QuantityKind::Speed,
                QuantityStatistics {
                    average: Some(2.9),
                    ..Default::default()
                },
            );
        let (start, end) = range();
        let stats = collect_statistics(&store, start, end).await.expect("stats");

        let energy = stats.active_energy_burned.expect("energy");
        assert!((energy.value - 250.0).abs() < 1e-9);
        assert_eq!(energy.unit, "kcal");

        let distance = stats.distance.expect("distance");
        assert!((distance.value - 5.2).abs() < 1e-9);
        assert_eq!(distance.unit, "km");

        let avg_hr = stats.average_heart_rate.expect("avg hr");
        assert!((avg_hr.value - 144.0).abs() < 1e-9);
        assert_eq!(avg_hr.unit, "bpm");

        let max_hr = stats.max_heart_rate.expect("max hr");
        assert!((max_hr.value - 180.0).abs() < 1e-9);

        let speed = stats.average_speed.expect("speed");
        assert_eq!(speed.value, 2.9);
        assert_eq!(speed.unit, "m/s");

        assert!(stats.average_power.is_none());
        assert!(stats.step_count.is_none());
    }

    #[tokio::test]
    async fn store_failure_propagates_not_absence() {
        let store = MockHealthStore::default().failing_statistics();
        let (start, end) = range();
        let res = collect_statistics(&store, start, end).await;
        assert!(res.is_err());
    }
}
