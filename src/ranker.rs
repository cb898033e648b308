//! Relevance ranking of candidate routes for a user position.
//!
//! Each route is scored independently from its distance to the user and its
//! own attributes, then the list is sorted best-first. Sort order is fully
//! determined: score descending, then distance ascending, then input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::haversine::distance_km;
use crate::model::{Coordinate, Difficulty};
use crate::route::Route;

/// Score every route starts from.
pub const BASE_SCORE: f64 = 100.0;
/// Points lost per km between the user and the route's first stop.
pub const DISTANCE_PENALTY_PER_KM: f64 = 2.0;
/// Bonus for routes whose hardest stop is easy.
pub const EASY_BONUS: f64 = 10.0;
/// Bonus for routes whose dwell time falls in the sweet spot.
pub const DURATION_BONUS: f64 = 15.0;
/// Inclusive lower bound of the duration sweet spot, in minutes.
pub const SWEET_SPOT_MIN_MINUTES: u32 = 60;
/// Inclusive upper bound of the duration sweet spot, in minutes.
pub const SWEET_SPOT_MAX_MINUTES: u32 = 180;

/// Tunable scoring weights. `Default` yields the standard policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RelevanceWeights {
    pub base_score: f64,
    pub distance_penalty_per_km: f64,
    pub easy_bonus: f64,
    pub duration_bonus: f64,
    pub sweet_spot_min_minutes: u32,
    pub sweet_spot_max_minutes: u32,
}

impl Default for RelevanceWeights {
    fn default() -> Self {
        Self {
            base_score: BASE_SCORE,
            distance_penalty_per_km: DISTANCE_PENALTY_PER_KM,
            easy_bonus: EASY_BONUS,
            duration_bonus: DURATION_BONUS,
            sweet_spot_min_minutes: SWEET_SPOT_MIN_MINUTES,
            sweet_spot_max_minutes: SWEET_SPOT_MAX_MINUTES,
        }
    }
}

impl RelevanceWeights {
    /// Score a route `distance_from_user` km away. Never negative.
    pub fn score(&self, route: &Route, distance_from_user: f64) -> f64 {
        let mut score = self.base_score;

        score -= self.distance_penalty_per_km * distance_from_user;

        if route.difficulty() == Difficulty::Easy {
            score += self.easy_bonus;
        }

        let sweet_spot = self.sweet_spot_min_minutes..=self.sweet_spot_max_minutes;
        if sweet_spot.contains(&route.total_time()) {
            score += self.duration_bonus;
        }

        // `max` also maps a NaN score to zero.
        score.max(0.0)
    }
}

/// A candidate route annotated with its ranking inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedRoute {
    #[serde(flatten)]
    pub route: Route,
    /// Great-circle km from the user to the route's first stop.
    pub distance_from_user: f64,
    pub relevance_score: f64,
}

/// Distance from `user` to where `route` starts.
///
/// Infinite for a route with no stops, which pushes it to the bottom.
pub fn distance_to_route(user: Coordinate, route: &Route) -> f64 {
    route
        .start()
        .map_or(f64::INFINITY, |start| distance_km(user, start.coordinates))
}

/// Rank `candidates` for `user` with the default weights.
pub fn rank(user: Coordinate, candidates: Vec<Route>) -> Vec<RankedRoute> {
    rank_with(user, candidates, &RelevanceWeights::default())
}

/// Rank `candidates` for `user`, best first.
pub fn rank_with(user: Coordinate, candidates: Vec<Route>, weights: &RelevanceWeights) -> Vec<RankedRoute> {
    tracing::debug!(candidates = candidates.len(), %user, "ranking routes");

    // Scores are independent of each other; the sort below fixes the order.
    let mut scored: Vec<(usize, RankedRoute)> = candidates
        .into_par_iter()
        .enumerate()
        .map(|(index, route)| {
            let distance_from_user = distance_to_route(user, &route);
            let relevance_score = weights.score(&route, distance_from_user);
            (
                index,
                RankedRoute {
                    route,
                    distance_from_user,
                    relevance_score,
                },
            )
        })
        .collect();

    scored.sort_by(|(ia, a), (ib, b)| {
        b.relevance_score
            .total_cmp(&a.relevance_score)
            .then(a.distance_from_user.total_cmp(&b.distance_from_user))
            .then(ia.cmp(ib))
    });

    scored.into_iter().map(|(_, ranked)| ranked).collect()
}
