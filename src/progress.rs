//! Progress through a route while navigating it.
//!
//! Pure state: the host drives the clock with [`RouteProgress::tick`] and
//! reports arrivals with [`RouteProgress::mark_complete`].

use serde::{Deserialize, Serialize};

use crate::error::ProgressError;
use crate::model::Location;
use crate::route::Route;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteProgress {
    route_id: String,
    current_index: usize,
    completed: Vec<String>,
    elapsed_seconds: u64,
}

impl RouteProgress {
    /// Fresh progress positioned at the route's first stop.
    pub fn new(route: &Route) -> Self {
        Self {
            route_id: route.id().to_string(),
            current_index: 0,
            completed: Vec::new(),
            elapsed_seconds: 0,
        }
    }

    pub fn route_id(&self) -> &str {
        &self.route_id
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Ids of completed stops in the order they were completed.
    pub fn completed(&self) -> &[String] {
        &self.completed
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Record that `location_id` was visited and move on to the next stop.
    ///
    /// Completing the same stop twice is a no-op. The current index never
    /// moves past the last stop.
    pub fn mark_complete(&mut self, route: &Route, location_id: &str) -> Result<(), ProgressError> {
        self.check_route(route)?;
        if !route.contains(location_id) {
            return Err(ProgressError::UnknownLocation(location_id.to_string()));
        }
        if self.is_completed(location_id) {
            return Ok(());
        }

        self.completed.push(location_id.to_string());
        self.current_index = (self.current_index + 1).min(route.len().saturating_sub(1));
        tracing::debug!(
            route = %self.route_id,
            location = location_id,
            completed = self.completed.len(),
            "stop completed"
        );
        Ok(())
    }

    pub fn is_completed(&self, location_id: &str) -> bool {
        self.completed.iter().any(|id| id == location_id)
    }

    /// Add elapsed navigation time.
    pub fn tick(&mut self, seconds: u64) {
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(seconds);
    }

    /// Back to the first stop with nothing completed and the clock at zero.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.completed.clear();
        self.elapsed_seconds = 0;
    }

    /// The stop the user is heading to.
    pub fn current_location<'a>(&self, route: &'a Route) -> Result<&'a Location, ProgressError> {
        self.check_route(route)?;
        route
            .locations()
            .get(self.current_index)
            .ok_or_else(|| ProgressError::UnknownLocation(format!("#{}", self.current_index)))
    }

    /// Completed stops as a percentage of all stops, 0–100.
    pub fn completion_percentage(&self, route: &Route) -> f64 {
        if route.is_empty() {
            return 0.0;
        }
        self.completed.len() as f64 / route.len() as f64 * 100.0
    }

    pub fn is_finished(&self, route: &Route) -> bool {
        !route.is_empty() && self.completed.len() == route.len()
    }

    fn check_route(&self, route: &Route) -> Result<(), ProgressError> {
        if route.id() == self.route_id {
            Ok(())
        } else {
            Err(ProgressError::RouteMismatch {
                expected: self.route_id.clone(),
                found: route.id().to_string(),
            })
        }
    }
}
