//! Mock journey planner for running without API access.
//!
//! Serves one canned response, loaded from a JSON file or string, for
//! every query, and remembers the queries it was given.

use std::future::Future;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::query::TripQuery;

use super::client::JourneyPlanner;
use super::error::EnturError;
use super::types::JourneyPlannerResponse;

/// Journey planner that answers every query with the same response.
#[derive(Debug, Clone)]
pub struct MockPlanner {
    response: JourneyPlannerResponse,
    queries: Arc<Mutex<Vec<TripQuery>>>,
}

impl MockPlanner {
    /// Serve an already decoded response.
    pub fn new(response: JourneyPlannerResponse) -> Self {
        Self {
            response,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Serve a response given as JSON text.
    pub fn from_json(json: &str) -> Result<Self, EnturError> {
        let response = serde_json::from_str(json).map_err(|e| EnturError::decode(&e, json))?;
        Ok(Self::new(response))
    }

    /// Serve a response loaded from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EnturError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| EnturError::MockData(format!("failed to read {}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Queries received so far, oldest first.
    pub fn queries(&self) -> Vec<TripQuery> {
        self.queries
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }
}

impl JourneyPlanner for MockPlanner {
    fn fetch_trip(
        &self,
        query: &TripQuery,
    ) -> impl Future<Output = Result<JourneyPlannerResponse, EnturError>> + Send {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.clone());
        }
        let response = self.response.clone();
        async move { Ok(response) }
    }
}
