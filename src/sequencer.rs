//! Visit-order sequencing (greedy nearest-neighbor).
//!
//! Orders an unordered set of stops into a single open path. Start and end
//! anchors stay fixed; everything between them is chained greedily, always
//! walking to the closest unvisited stop next. This is an O(n²)
//! approximation, not an optimal tour, and is meant for routes of a few
//! dozen stops at most.
//!
//! Ties are broken by input order: when two candidates are equally close,
//! the one that appears earlier in the caller's slice wins. Output is fully
//! determined by the input slice.

use crate::haversine::Haversine;
use crate::model::{Coordinate, Role};
use crate::traits::{DistanceMetric, Waypoint};

/// Order `items` into a visiting sequence using great-circle distance.
///
/// `anchor` only matters when no item carries a start or end role: the walk
/// then begins at the item closest to it instead of the first item.
///
/// Returns references into `items` in visit order.
pub fn sequence<W: Waypoint>(items: &[W], anchor: Option<Coordinate>) -> Vec<&W> {
    sequence_with(items, anchor, &Haversine)
}

/// Same as [`sequence`] with a caller-supplied distance metric.
pub fn sequence_with<'a, W, M>(items: &'a [W], anchor: Option<Coordinate>, metric: &M) -> Vec<&'a W>
where
    W: Waypoint,
    M: DistanceMetric,
{
    if items.len() <= 2 {
        return items.iter().collect();
    }

    let start_idx = items.iter().position(|item| item.role() == Role::Start);
    let end_idx = items.iter().position(|item| item.role() == Role::End);

    if start_idx.is_none() && end_idx.is_none() {
        tracing::trace!(stops = items.len(), "sequencing unconstrained route");
        return nearest_neighbor(items.iter().collect(), anchor, metric);
    }

    // A missing anchor falls back to the first (or last) input item that is
    // not already the other anchor.
    let start_idx = start_idx.unwrap_or_else(|| first_other(items.len(), end_idx));
    let end_idx = end_idx.unwrap_or_else(|| last_other(items.len(), Some(start_idx)));

    let milestones: Vec<&W> = items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != start_idx && *i != end_idx)
        .map(|(_, item)| item)
        .collect();

    tracing::trace!(
        milestones = milestones.len(),
        start = items[start_idx].id(),
        end = items[end_idx].id(),
        "sequencing anchored route"
    );

    let start = &items[start_idx];
    let mut route = Vec::with_capacity(items.len());
    route.push(start);
    route.extend(nearest_neighbor(milestones, Some(start.coordinate()), metric));
    route.push(&items[end_idx]);
    route
}

/// Greedy nearest-neighbor walk over `pool`.
///
/// Begins at the item closest to `start` when given, otherwise at the first
/// item, then repeatedly moves to the closest remaining item.
pub fn nearest_neighbor<'a, W, M>(mut pool: Vec<&'a W>, start: Option<Coordinate>, metric: &M) -> Vec<&'a W>
where
    W: Waypoint,
    M: DistanceMetric,
{
    let mut route = Vec::with_capacity(pool.len());

    let first = match start {
        Some(coord) => closest_index(&pool, coord, metric),
        None if pool.is_empty() => None,
        None => Some(0),
    };
    let Some(first) = first else {
        return route;
    };

    let mut current = pool.remove(first);
    route.push(current);

    while let Some(next) = closest_index(&pool, current.coordinate(), metric) {
        current = pool.remove(next);
        route.push(current);
    }

    route
}

/// Index of the item closest to `from`; the earliest one wins ties.
fn closest_index<W, M>(pool: &[&W], from: Coordinate, metric: &M) -> Option<usize>
where
    W: Waypoint,
    M: DistanceMetric,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, item) in pool.iter().enumerate() {
        let dist = metric.distance_km(from, item.coordinate());
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((i, dist)),
        }
    }
    best.map(|(i, _)| i)
}

fn first_other(len: usize, taken: Option<usize>) -> usize {
    (0..len).find(|i| Some(*i) != taken).unwrap_or(0)
}

fn last_other(len: usize, taken: Option<usize>) -> usize {
    (0..len).rev().find(|i| Some(*i) != taken).unwrap_or(0)
}
