//! Search filters and list ordering for route browsing.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::Difficulty;
use crate::route::Route;

/// Criteria a route must meet to appear in a listing. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchFilters {
    /// Case-insensitive substring of the route name or description.
    pub query: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub max_distance_km: Option<f64>,
    pub max_duration_minutes: Option<u32>,
    /// Every listed tag must appear on at least one stop.
    pub tags: Vec<String>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn max_distance_km(mut self, km: f64) -> Self {
        self.max_distance_km = Some(km);
        self
    }

    pub fn max_duration_minutes(mut self, minutes: u32) -> Self {
        self.max_duration_minutes = Some(minutes);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn matches(&self, route: &Route) -> bool {
        if let Some(query) = self.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            let query = query.to_lowercase();
            let hit = route.name().to_lowercase().contains(&query)
                || route.description().to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }

        if self.difficulty.is_some_and(|d| d != route.difficulty()) {
            return false;
        }

        if self.max_distance_km.is_some_and(|max| route.total_distance() > max) {
            return false;
        }

        if self.max_duration_minutes.is_some_and(|max| route.total_time() > max) {
            return false;
        }

        self.tags.iter().all(|tag| route.has_tag(tag))
    }

    /// Routes that match, in their original order.
    pub fn apply<'a>(&self, routes: &'a [Route]) -> Vec<&'a Route> {
        routes.iter().filter(|route| self.matches(route)).collect()
    }
}

/// Listing order for route browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteSort {
    /// Alphabetical by name.
    Name,
    /// Easiest first.
    Difficulty,
    /// Longest first.
    Distance,
}

impl RouteSort {
    pub fn compare(self, a: &Route, b: &Route) -> Ordering {
        match self {
            Self::Name => a.name().cmp(b.name()),
            Self::Difficulty => a.difficulty().cmp(&b.difficulty()),
            Self::Distance => b.total_distance().total_cmp(&a.total_distance()),
        }
    }
}

/// Stable in-place sort of `routes` by `order`.
pub fn sort_routes<R: AsRef<Route>>(routes: &mut [R], order: RouteSort) {
    routes.sort_by(|a, b| order.compare(a.as_ref(), b.as_ref()));
}
