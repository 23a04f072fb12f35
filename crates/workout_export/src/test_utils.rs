//! Shared in-memory `HealthStore` mock used by unit tests.
//!
//! Keep this module `#[cfg(test)]`-only. The mock records the ranges and
//! limits it is queried with so tests can assert scoping behaviour.
#![cfg(test)]

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use healthstore_client::{
    HealthStore, HealthStoreError, LocationPoint, QuantityKind, QuantitySample,
    QuantityStatistics, Workout, WorkoutRoute,
};

#[derive(Default)]
pub struct MockHealthStore {
    pub workout: Option<Workout>,
    pub statistics: BTreeMap<QuantityKind, QuantityStatistics>,
    pub samples: Vec<QuantitySample>,
    pub route: Option<(WorkoutRoute, Vec<LocationPoint>)>,
    pub fail_statistics: bool,
    pub fail_samples: bool,
    pub fail_route: bool,
    pub statistics_ranges: Mutex<Vec<(DateTime<Utc>, DateTime<Utc>)>>,
    pub sample_queries: Mutex<Vec<(bool, Option<u32>)>>,
}

impl MockHealthStore {
    pub fn with_statistics(mut self, kind: QuantityKind, stats: QuantityStatistics) -> Self {
        self.statistics.insert(kind, stats);
        self
    }

    pub fn with_samples(mut self, samples: Vec<QuantitySample>) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_route(mut self, id: &str, points: Vec<LocationPoint>) -> Self {
        self.route = Some((WorkoutRoute { id: id.to_string() }, points));
        self
    }

    pub fn failing_statistics(mut self) -> Self {
        self.fail_statistics = true;
        self
    }

    pub fn failing_samples(mut self) -> Self {
        self.fail_samples = true;
        self
    }

    pub fn failing_route(mut self) -> Self {
        self.fail_route = true;
        self
    }
}

#[async_trait]
impl HealthStore for MockHealthStore {
    async fn query_workout(&self, workout_id: &str) -> Result<Workout, HealthStoreError> {
        self.workout
            .clone()
            .ok_or_else(|| HealthStoreError::NotFound(workout_id.to_string()))
    }

    async fn query_statistics(
        &self,
        kind: QuantityKind,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<QuantityStatistics, HealthStoreError> {
        if self.fail_statistics {
            return Err(HealthStoreError::Status {
                status: 503,
                message: "store unavailable".into(),
            });
        }
        self.statistics_ranges.lock().unwrap().push((start, end));
        Ok(self.statistics.get(&kind).copied().unwrap_or_default())
    }

    async fn query_samples(
        &self,
        _kind: QuantityKind,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
        ascending: bool,
        limit: Option<u32>,
    ) -> Result<Vec<QuantitySample>, HealthStoreError> {
        if self.fail_samples {
            return Err(HealthStoreError::Status {
                status: 503,
                message: "sample query failed".into(),
            });
        }
        self.sample_queries.lock().unwrap().push((ascending, limit));
        Ok(self.samples.clone())
    }

    async fn find_workout_route(
        &self,
        _workout_id: &str,
    ) -> Result<Option<WorkoutRoute>, HealthStoreError> {
        if self.fail_route {
            return Err(HealthStoreError::Status {
                status: 503,
                message: "route query failed".into(),
            });
        }
        Ok(self.route.as_ref().map(|(route, _)| route.clone()))
    }

    async fn route_locations(
        &self,
        route_id: &str,
    ) -> Result<Vec<LocationPoint>, HealthStoreError> {
        match &self.route {
            Some((route, points)) if route.id == route_id => Ok(points.clone()),
            _ => Err(HealthStoreError::NotFound(route_id.to_string())),
        }
    }
}

/// A single-segment running workout used across tests.
pub fn running_workout() -> Workout {
    use chrono::TimeZone;
    Workout {
        id: "w1".into(),
        activity_kind: "running".into(),
        source_app: "Runna".into(),
        start_date: Utc.with_ymd_and_hms(2024, 3, 7, 8, 15, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2024, 3, 7, 9, 0, 0).unwrap(),
        duration_secs: 2640.0,
        events: vec![],
        activities: vec![],
    }
}
