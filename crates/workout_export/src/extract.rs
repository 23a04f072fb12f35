//! Event and sub-activity extraction.
//!
//! Events are a pure mapping over the store's open-ended kind enumeration.
//! Sub-activities additionally pull their own statistics, scoped to the
//! activity's time range.

use chrono::TimeDelta;
use healthstore_client::{HealthStore, WorkoutActivity, WorkoutEvent};

use crate::error::ExportResult;
use crate::model::{ActivityData, ActivityKind, EventKind, WorkoutEventData};
use crate::stats::collect_statistics;

/// Map store events onto the normalized tag set, preserving store order.
pub fn extract_events(events: &[WorkoutEvent]) -> Vec<WorkoutEventData> {
    events
        .iter()
        .map(|e| WorkoutEventData {
            kind: EventKind::from_provider(&e.kind),
            start_date: e.start_date,
            end_date: e.end_date,
        })
        .collect()
}

/// Map store sub-activities onto [`ActivityData`], preserving store order.
///
/// When the store omits an activity's `end_date` it falls back to
/// `start_date + duration`. Fallback only: a present `end_date` is taken as
/// is and never cross-checked against the duration.
pub async fn collect_activities(
    store: &dyn HealthStore,
    activities: &[WorkoutActivity],
) -> ExportResult<Vec<ActivityData>> {
    let mut out = Vec::with_capacity(activities.len());
    for activity in activities {
        let end_date = activity.end_date.unwrap_or_else(|| {
            activity.start_date
                + TimeDelta::milliseconds((activity.duration_secs * 1000.0) as i64)
        });
        let statistics = collect_statistics(store, activity.start_date, end_date).await?;
        out.push(ActivityData {
            kind: ActivityKind::from_provider(&activity.activity_kind),
            start_date: activity.start_date,
            end_date,
            duration_secs: activity.duration_secs,
            statistics,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockHealthStore;
    use chrono::{TimeZone, Utc};

    #[test]
    fn events_preserve_order_and_fall_back_to_unknown() {
        let start = Utc.with_ymd_and_hms(2024, 3, 7, 8, 25, 0).unwrap();
        let events = vec![
            WorkoutEvent {
                kind: "lap".into(),
                start_date: start,
                end_date: None,
            },
            WorkoutEvent {
                kind: "hydrationReminder".into(),
                start_date: start,
                end_date: None,
            },
        ];
        let extracted = extract_events(&events);
        assert_eq!(extracted[0].kind, EventKind::Lap);
        assert_eq!(extracted[1].kind, EventKind::Unknown);
        assert!(extracted[0].end_date.is_none());
    }

    #[tokio::test]
    async fn activity_end_date_falls_back_to_duration() {
        let start = Utc.with_ymd_and_hms(2024, 3, 7, 8, 15, 0).unwrap();
        let activities = vec![WorkoutActivity {
            activity_kind: "functionalStrengthTraining".into(),
            start_date: start,
            end_date: None,
            duration_secs: 600.0,
        }];
        let store = MockHealthStore::default();
        let out = collect_activities(&store, &activities).await.expect("activities");
        assert_eq!(out[0].kind, ActivityKind::FunctionalStrength);
        assert_eq!(out[0].end_date, start + TimeDelta::seconds(600));
    }

    #[tokio::test]
    async fn explicit_end_date_is_taken_verbatim() {
        let start = Utc.with_ymd_and_hms(2024, 3, 7, 8, 15, 0).unwrap();
        // end_date disagrees with duration; fallback-only behaviour keeps it.
        let end = Utc.with_ymd_and_hms(2024, 3, 7, 8, 40, 0).unwrap();
        let activities = vec![WorkoutActivity {
            activity_kind: "running".into(),
            start_date: start,
            end_date: Some(end),
            duration_secs: 600.0,
        }];
        let store = MockHealthStore::default();
        let out = collect_activities(&store, &activities).await.expect("activities");
        assert_eq!(out[0].end_date, end);
    }

    #[tokio::test]
    async fn activity_statistics_use_activity_range() {
        let start = Utc.with_ymd_and_hms(2024, 3, 7, 8, 15, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 7, 8, 25, 0).unwrap();
        let activities = vec![WorkoutActivity {
            activity_kind: "running".into(),
            start_date: start,
            end_date: Some(end),
            duration_secs: 600.0,
        }];
        let store = MockHealthStore::default();
        collect_activities(&store, &activities).await.expect("activities");

        let ranges = store.statistics_ranges.lock().unwrap();
        assert!(!ranges.is_empty());
        assert!(ranges.iter().all(|&(s, e)| s == start && e == end));
    }
}
