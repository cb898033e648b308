//! Validated routes with derived aggregates.
//!
//! A [`Route`] can only be built through [`Route::new`] (or deserialized,
//! which goes through the same checks), so every route is non-empty, has
//! unique location ids, and carries distance/time/difficulty that match its
//! locations. The aggregates are recomputed whenever the locations change.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::metrics::{self, RouteSummary};
use crate::model::{Coordinate, Difficulty, Location};
use crate::polyline::Polyline;
use crate::sequencer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RouteData")]
pub struct Route {
    id: String,
    name: String,
    description: String,
    locations: Vec<Location>,
    total_distance: f64,
    total_time: u32,
    difficulty: Difficulty,
}

/// Wire form accepted on deserialization; aggregates are always recomputed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteData {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    locations: Vec<Location>,
}

impl TryFrom<RouteData> for Route {
    type Error = RouteError;

    fn try_from(data: RouteData) -> Result<Self, Self::Error> {
        Ok(Route::new(data.id, data.name, data.locations)?.with_description(data.description))
    }
}

impl Route {
    /// Build a route visiting `locations` in the given order.
    ///
    /// Fails on an empty list or a repeated location id.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        locations: Vec<Location>,
    ) -> Result<Self, RouteError> {
        check_unique_ids(&locations)?;
        let RouteSummary {
            total_distance,
            total_time,
            difficulty,
        } = metrics::summarize(&locations)?;

        Ok(Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            locations,
            total_distance,
            total_time,
            difficulty,
        })
    }

    /// Sequence `candidates` into a visiting order, then build the route.
    ///
    /// `anchor` is passed to the sequencer; see [`sequencer::sequence`].
    pub fn planned(
        id: impl Into<String>,
        name: impl Into<String>,
        candidates: &[Location],
        anchor: Option<Coordinate>,
    ) -> Result<Self, RouteError> {
        let ordered = sequencer::sequence(candidates, anchor)
            .into_iter()
            .cloned()
            .collect();
        Self::new(id, name, ordered)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The same stops re-sequenced; display metadata is kept.
    pub fn optimized(&self) -> Result<Self, RouteError> {
        Ok(Self::planned(self.id.clone(), self.name.clone(), &self.locations, None)?
            .with_description(self.description.clone()))
    }

    /// Append a stop at the end of the route.
    pub fn push(&mut self, location: Location) -> Result<(), RouteError> {
        if self.contains(&location.id) {
            return Err(RouteError::DuplicateLocationId(location.id));
        }
        self.locations.push(location);
        if let Err(err) = self.refresh() {
            self.locations.pop();
            return Err(err);
        }
        Ok(())
    }

    /// Remove a stop by id, returning it.
    ///
    /// Removing the last remaining stop is rejected and leaves the route as is.
    pub fn remove(&mut self, id: &str) -> Result<Option<Location>, RouteError> {
        let Some(idx) = self.position_of(id) else {
            return Ok(None);
        };
        if self.locations.len() == 1 {
            return Err(RouteError::EmptyRoute);
        }
        let removed = self.locations.remove(idx);
        self.refresh()?;
        Ok(Some(removed))
    }

    fn refresh(&mut self) -> Result<(), RouteError> {
        let summary = metrics::summarize(&self.locations)?;
        self.total_distance = summary.total_distance;
        self.total_time = summary.total_time;
        self.difficulty = summary.difficulty;
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Locations in visit order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// First stop, where the route starts.
    pub fn start(&self) -> Option<&Location> {
        self.locations.first()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always false for a constructed route.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Total great-circle distance in km.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Total dwell time in minutes.
    pub fn total_time(&self) -> u32 {
        self.total_time
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            total_distance: self.total_distance,
            total_time: self.total_time,
            difficulty: self.difficulty,
        }
    }

    /// Walking time between stops, not included in [`Route::total_time`].
    pub fn estimated_travel_minutes(&self) -> u32 {
        self.summary().travel_minutes()
    }

    /// Sorted union of the stops' tags.
    pub fn tags(&self) -> Vec<&str> {
        let tags: BTreeSet<&str> = self
            .locations
            .iter()
            .flat_map(|loc| loc.tags.iter().map(String::as_str))
            .collect();
        tags.into_iter().collect()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.locations.iter().any(|loc| loc.has_tag(tag))
    }

    pub fn position_of(&self, location_id: &str) -> Option<usize> {
        self.locations.iter().position(|loc| loc.id == location_id)
    }

    pub fn contains(&self, location_id: &str) -> bool {
        self.position_of(location_id).is_some()
    }

    /// Geometry for drawing the route on a map.
    pub fn path(&self) -> Polyline {
        Polyline::new(self.locations.iter().map(|loc| loc.coordinates).collect())
    }
}

impl AsRef<Route> for Route {
    fn as_ref(&self) -> &Route {
        self
    }
}

fn check_unique_ids(locations: &[Location]) -> Result<(), RouteError> {
    let mut seen = HashSet::with_capacity(locations.len());
    for loc in locations {
        if !seen.insert(loc.id.as_str()) {
            return Err(RouteError::DuplicateLocationId(loc.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn stop(id: &str, lat: f64, lon: f64) -> Location {
        Location::new(id, Coordinate::new(lat, lon).unwrap()).with_minutes(30)
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Route::new("r", "Empty", vec![]), Err(RouteError::EmptyRoute));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Route::new("r", "Dup", vec![stop("a", 0.0, 0.0), stop("a", 0.0, 0.1)]).unwrap_err();
        assert_eq!(err, RouteError::DuplicateLocationId("a".into()));
    }

    #[test]
    fn aggregates_follow_locations() {
        let mut route = Route::new("r", "Walk", vec![stop("a", 28.65, 77.24), stop("b", 28.60, 77.25)]).unwrap();
        let two_stop = route.total_distance();
        assert_eq!(route.total_time(), 60);

        route.push(stop("c", 28.55, 77.23).with_difficulty(Difficulty::Hard)).unwrap();
        assert!(route.total_distance() > two_stop);
        assert_eq!(route.total_time(), 90);
        assert_eq!(route.difficulty(), Difficulty::Hard);

        let removed = route.remove("c").unwrap().unwrap();
        assert_eq!(removed.id, "c");
        assert_eq!(route.total_distance(), two_stop);
        assert_eq!(route.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn push_rejects_duplicate() {
        let mut route = Route::new("r", "Walk", vec![stop("a", 0.0, 0.0)]).unwrap();
        assert!(route.push(stop("a", 1.0, 1.0)).is_err());
        assert_eq!(route.len(), 1);
    }

    #[test]
    fn push_overflowing_dwell_time_leaves_route_unchanged() {
        let mut route = Route::new("r", "Walk", vec![stop("a", 0.0, 0.0).with_minutes(u32::MAX)]).unwrap();
        assert_eq!(route.push(stop("b", 0.0, 0.1)), Err(RouteError::DurationOverflow));
        assert_eq!(route.len(), 1);
        assert_eq!(route.total_time(), u32::MAX);
    }

    #[test]
    fn deserialize_rejects_overflowing_dwell_time() {
        let json = r#"{
            "id": "r",
            "locations": [
                {"id": "a", "coordinates": [0.0, 0.0], "estimatedTime": 4294967295},
                {"id": "b", "coordinates": [0.0, 0.1], "estimatedTime": 1}
            ]
        }"#;
        let err = serde_json::from_str::<Route>(json).unwrap_err();
        assert!(err.to_string().contains("total dwell time exceeds"), "{err}");
    }

    #[test]
    fn cannot_remove_last_stop() {
        let mut route = Route::new("r", "Walk", vec![stop("a", 0.0, 0.0)]).unwrap();
        assert_eq!(route.remove("a"), Err(RouteError::EmptyRoute));
        assert_eq!(route.len(), 1);
        assert_eq!(route.remove("missing"), Ok(None));
    }

    #[test]
    fn planned_sequences_before_building() {
        let candidates = vec![
            stop("end", 0.0, 0.5).with_role(Role::End),
            stop("far", 0.0, 0.3),
            stop("start", 0.0, 0.0).with_role(Role::Start),
            stop("near", 0.0, 0.1),
        ];
        let route = Route::planned("r", "Planned", &candidates, None).unwrap();
        let ids: Vec<&str> = route.locations().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["start", "near", "far", "end"]);
        assert_eq!(route.start().map(|l| l.id.as_str()), Some("start"));
    }

    #[test]
    fn tags_are_sorted_union() {
        let route = Route::new(
            "r",
            "Tagged",
            vec![
                stop("a", 0.0, 0.0).with_tag("park").with_tag("nearby"),
                stop("b", 0.0, 0.1).with_tag("nearby").with_tag("market"),
            ],
        )
        .unwrap();
        assert_eq!(route.tags(), vec!["market", "nearby", "park"]);
        assert!(route.has_tag("park"));
        assert!(!route.has_tag("beach"));
    }

    #[test]
    fn path_follows_visit_order() {
        let route = Route::new("r", "Walk", vec![stop("a", 1.0, 1.0), stop("b", 2.0, 2.0)]).unwrap();
        let path = route.path();
        assert_eq!(path.len(), 2);
        assert_eq!(path.points()[1].lat(), 2.0);
        assert!((path.length_km() - route.total_distance()).abs() < 1e-12);
    }

    #[test]
    fn deserialization_recomputes_aggregates() {
        let json = r#"{
            "id": "r1",
            "name": "From JSON",
            "locations": [
                {"id": "a", "coordinates": [28.6562, 77.2410], "estimatedTime": 40},
                {"id": "b", "coordinates": [28.6507, 77.2334], "estimatedTime": 20, "difficulty": "medium"}
            ],
            "totalDistance": 999.0,
            "totalTime": 1
        }"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert_eq!(route.total_time(), 60);
        assert_eq!(route.difficulty(), Difficulty::Medium);
        assert!(route.total_distance() < 1.0);
    }

    #[test]
    fn deserialization_rejects_empty_route() {
        let json = r#"{"id": "r1", "locations": []}"#;
        let err = serde_json::from_str::<Route>(json).unwrap_err();
        assert!(err.to_string().contains("at least one location"));
    }
}
