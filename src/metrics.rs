//! Aggregate statistics for an ordered sequence of stops.

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::haversine::Haversine;
use crate::model::Difficulty;
use crate::traits::{DistanceMetric, Waypoint};

/// Distance, dwell time and difficulty of an ordered route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    /// Sum of great-circle hops between consecutive stops, in km.
    pub total_distance: f64,
    /// Sum of dwell times in minutes. Travel time between stops is not included.
    pub total_time: u32,
    /// Hardest difficulty among the stops.
    pub difficulty: Difficulty,
}

impl RouteSummary {
    /// Walking time for the whole distance at this route's difficulty.
    ///
    /// Kept separate from `total_time`, which only counts time spent at stops.
    pub fn travel_minutes(&self) -> u32 {
        estimate_travel_minutes(self.total_distance, self.difficulty)
    }
}

/// Summarize `stops` in the given order using great-circle distance.
///
/// An empty slice is a caller error, as is a dwell-time total past `u32::MAX`.
pub fn summarize<W: Waypoint>(stops: &[W]) -> Result<RouteSummary, RouteError> {
    summarize_with(stops, &Haversine)
}

/// Same as [`summarize`] with a caller-supplied distance metric.
pub fn summarize_with<W, M>(stops: &[W], metric: &M) -> Result<RouteSummary, RouteError>
where
    W: Waypoint,
    M: DistanceMetric,
{
    let difficulty = stops
        .iter()
        .map(Waypoint::difficulty)
        .max()
        .ok_or(RouteError::EmptyRoute)?;

    let total_time = stops
        .iter()
        .try_fold(0u32, |total, stop| total.checked_add(stop.estimated_minutes()))
        .ok_or(RouteError::DurationOverflow)?;

    Ok(RouteSummary {
        total_distance: total_distance_with(stops, metric),
        total_time,
        difficulty,
    })
}

/// Sum of consecutive great-circle hops. Zero for fewer than two stops.
pub fn total_distance<W: Waypoint>(stops: &[W]) -> f64 {
    total_distance_with(stops, &Haversine)
}

fn total_distance_with<W, M>(stops: &[W], metric: &M) -> f64
where
    W: Waypoint,
    M: DistanceMetric,
{
    stops
        .windows(2)
        .map(|pair| metric.distance_km(pair[0].coordinate(), pair[1].coordinate()))
        .sum()
}

/// Estimated walking time in whole minutes for `distance_km` at `difficulty`.
///
/// Assumes 5 km/h on easy ground, 4 km/h on medium and 3 km/h on hard.
pub fn estimate_travel_minutes(distance_km: f64, difficulty: Difficulty) -> u32 {
    let hours = distance_km.max(0.0) / difficulty.walking_speed_kmh();
    (hours * 60.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haversine::distance_km;
    use crate::model::{Coordinate, Location};

    fn stop(id: &str, lat: f64, lon: f64, minutes: u32, difficulty: Difficulty) -> Location {
        Location::new(id, Coordinate::new(lat, lon).unwrap())
            .with_minutes(minutes)
            .with_difficulty(difficulty)
    }

    #[test]
    fn empty_is_an_error() {
        let stops: Vec<Location> = Vec::new();
        assert_eq!(summarize(&stops), Err(RouteError::EmptyRoute));
    }

    #[test]
    fn dwell_time_overflow_is_an_error() {
        let stops = vec![
            stop("a", 0.0, 0.0, u32::MAX, Difficulty::Easy),
            stop("b", 0.0, 0.1, 1, Difficulty::Easy),
        ];
        assert_eq!(summarize(&stops), Err(RouteError::DurationOverflow));

        let exact = vec![
            stop("a", 0.0, 0.0, u32::MAX - 1, Difficulty::Easy),
            stop("b", 0.0, 0.1, 1, Difficulty::Easy),
        ];
        assert_eq!(summarize(&exact).unwrap().total_time, u32::MAX);
    }

    #[test]
    fn single_stop_has_zero_distance() {
        let stops = vec![stop("a", 28.6, 77.2, 40, Difficulty::Medium)];
        let summary = summarize(&stops).unwrap();
        assert_eq!(summary.total_distance, 0.0);
        assert_eq!(summary.total_time, 40);
        assert_eq!(summary.difficulty, Difficulty::Medium);
    }

    #[test]
    fn distance_is_sum_of_hops() {
        let stops = vec![
            stop("a", 28.6562, 77.2410, 30, Difficulty::Easy),
            stop("b", 28.6507, 77.2334, 20, Difficulty::Easy),
            stop("c", 28.6506, 77.2303, 25, Difficulty::Easy),
        ];
        let expected = distance_km(stops[0].coordinates, stops[1].coordinates)
            + distance_km(stops[1].coordinates, stops[2].coordinates);
        let summary = summarize(&stops).unwrap();
        assert!((summary.total_distance - expected).abs() < 1e-12);
        assert_eq!(summary.total_time, 75);
    }

    #[test]
    fn difficulty_escalates_to_hardest() {
        let stops = vec![
            stop("a", 0.0, 0.0, 0, Difficulty::Easy),
            stop("b", 0.0, 0.01, 0, Difficulty::Hard),
            stop("c", 0.0, 0.02, 0, Difficulty::Easy),
        ];
        assert_eq!(summarize(&stops).unwrap().difficulty, Difficulty::Hard);
    }

    #[test]
    fn travel_minutes_by_difficulty() {
        assert_eq!(estimate_travel_minutes(5.0, Difficulty::Easy), 60);
        assert_eq!(estimate_travel_minutes(2.0, Difficulty::Medium), 30);
        assert_eq!(estimate_travel_minutes(1.0, Difficulty::Hard), 20);
        assert_eq!(estimate_travel_minutes(0.0, Difficulty::Hard), 0);
    }

    #[test]
    fn summary_travel_minutes_not_in_total_time() {
        let stops = vec![
            stop("a", 0.0, 0.0, 10, Difficulty::Easy),
            stop("b", 0.0, 0.1, 10, Difficulty::Easy),
        ];
        let summary = summarize(&stops).unwrap();
        assert_eq!(summary.total_time, 20);
        assert_eq!(summary.travel_minutes(), estimate_travel_minutes(summary.total_distance, Difficulty::Easy));
        assert!(summary.travel_minutes() > 0);
    }
}
