//! Test fixtures for trail-planner.
//!
//! Provides realistic test data including:
//! - Real Delhi landmark coordinates
//! - Builders turning places into locations with roles and dwell times

#![allow(dead_code)]

pub mod delhi_places;

pub use delhi_places::*;

use trail_planner::{Coordinate, Difficulty, Location, Role};

/// Build a location from a fixture place.
pub fn location(id: &str, place: &Place, role: Role) -> Location {
    Location::new(id, place.coords())
        .named(place.name)
        .with_role(role)
        .with_minutes(30)
        .with_difficulty(Difficulty::Easy)
}

pub fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).unwrap()
}

pub fn ids(route: &[&Location]) -> Vec<String> {
    route.iter().map(|loc| loc.id.clone()).collect()
}
