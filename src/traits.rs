//! Seams between the planner and caller data models.
//!
//! Sequencing and metrics only need a handful of facts about each stop, so
//! they work over [`Waypoint`] rather than a concrete type. Callers with
//! their own catalog records can implement it instead of converting.

use crate::model::{Coordinate, Difficulty, Location, Role};

/// A stop that can be ordered into a route.
pub trait Waypoint {
    fn id(&self) -> &str;

    fn coordinate(&self) -> Coordinate;

    /// Position constraint (start / milestone / end).
    fn role(&self) -> Role;

    /// Dwell time at the stop in minutes.
    fn estimated_minutes(&self) -> u32;

    fn difficulty(&self) -> Difficulty;
}

impl Waypoint for Location {
    fn id(&self) -> &str {
        &self.id
    }

    fn coordinate(&self) -> Coordinate {
        self.coordinates
    }

    fn role(&self) -> Role {
        self.role
    }

    fn estimated_minutes(&self) -> u32 {
        self.estimated_time
    }

    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl<W: Waypoint + ?Sized> Waypoint for &W {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn coordinate(&self) -> Coordinate {
        (**self).coordinate()
    }

    fn role(&self) -> Role {
        (**self).role()
    }

    fn estimated_minutes(&self) -> u32 {
        (**self).estimated_minutes()
    }

    fn difficulty(&self) -> Difficulty {
        (**self).difficulty()
    }
}

/// Distance between two coordinates, in kilometers.
///
/// Implementations must be symmetric and non-negative.
pub trait DistanceMetric {
    fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64;
}
