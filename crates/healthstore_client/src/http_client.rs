//! HTTP client implementation for a health-data store API.
//!
//! This module provides a reqwest-based implementation of the
//! [`HealthStore`](crate::HealthStore) trait.

use crate::{
    HealthStore, HealthStoreError, LocationPoint, QuantityKind, QuantitySample,
    QuantityStatistics, Workout, WorkoutRoute,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};

/// Client for a health-data store HTTP API using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestHealthStore {
    base_url: String,
    api_key: SecretString,
    client: reqwest::Client,
}

impl ReqwestHealthStore {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the store API (e.g., "https://healthstore.local")
    /// * `api_key` - The API key for authentication
    pub fn new(base_url: &str, api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        }
    }

    /// Build an authenticated GET request.
    fn get_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .basic_auth("API_KEY", Some(self.api_key.expose_secret()))
    }

    /// Execute a request and expect a JSON response.
    async fn execute_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, HealthStoreError> {
        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(self.error_from_response(resp).await);
        }
        Ok(resp.json::<T>().await?)
    }

    /// Extract error information from a failed response.
    async fn error_from_response(&self, resp: reqwest::Response) -> HealthStoreError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body_snippet: String = body.chars().take(256).collect();
        HealthStoreError::from_status(status, body_snippet)
    }
}

#[async_trait]
impl HealthStore for ReqwestHealthStore {
    async fn query_workout(&self, workout_id: &str) -> Result<Workout, HealthStoreError> {
        let url = format!("{}/api/v1/workouts/{}", self.base_url, workout_id);
        tracing::debug!(%workout_id, "querying workout record");
        self.execute_json(self.get_request(&url)).await
    }

    async fn query_statistics(
        &self,
        kind: QuantityKind,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<QuantityStatistics, HealthStoreError> {
        let url = format!("{}/api/v1/statistics", self.base_url);
        let request = self.get_request(&url).query(&[
            ("quantity", kind.as_str().to_string()),
            ("start", start.to_rfc3339()),
            ("end", end.to_rfc3339()),
        ]);
        self.execute_json(request).await
    }

    async fn query_samples(
        &self,
        kind: QuantityKind,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        ascending: bool,
        limit: Option<u32>,
    ) -> Result<Vec<QuantitySample>, HealthStoreError> {
        let url = format!("{}/api/v1/samples", self.base_url);
        let mut params = vec![
            ("quantity", kind.as_str().to_string()),
            ("start", start.to_rfc3339()),
            ("end", end.to_rfc3339()),
            ("order", if ascending { "asc" } else { "desc" }.to_string()),
        ];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        self.execute_json(self.get_request(&url).query(&params)).await
    }

    async fn find_workout_route(
        &self,
        workout_id: &str,
    ) -> Result<Option<WorkoutRoute>, HealthStoreError> {
        let url = format!("{}/api/v1/workouts/{}/route", self.base_url, workout_id);
        let resp = self.get_request(&url).send().await?;
        // A workout without a GPS track is absence of data, not a failure.
        if resp.status().as_u16() == 404 {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(self.error_from_response(resp).await);
        }
        Ok(Some(resp.json::<WorkoutRoute>().await?))
    }

    async fn route_locations(
        &self,
        route_id: &str,
    ) -> Result<Vec<LocationPoint>, HealthStoreError> {
        let url = format!("{}/api/v1/routes/{}/locations", self.base_url, route_id);
        tracing::debug!(%route_id, "streaming route locations");
        self.execute_json(self.get_request(&url)).await
    }
}
