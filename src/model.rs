//! Value types shared by every stage of route planning.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// A validated (latitude, longitude) pair in degrees.
///
/// Serialized as a `[lat, lon]` array, the shape map widgets expect.
/// Deserialization runs the same range check as [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Creates a coordinate, rejecting out-of-range or non-finite degrees.
    ///
    /// ```
    /// use trail_planner::Coordinate;
    ///
    /// let red_fort = Coordinate::new(28.6562, 77.2410).unwrap();
    /// assert_eq!(red_fort.lat(), 28.6562);
    ///
    /// assert!(Coordinate::new(90.5, 0.0).is_err());
    /// assert!(Coordinate::new(0.0, f64::NAN).is_err());
    /// ```
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeoError> {
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        let lon_ok = lon.is_finite() && (-180.0..=180.0).contains(&lon);
        if lat_ok && lon_ok {
            Ok(Self { lat, lon })
        } else {
            Err(GeoError::InvalidCoordinate { lat, lon })
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns a coordinate shifted by the given deltas in degrees.
    pub fn offset(&self, dlat: f64, dlon: f64) -> Result<Self, GeoError> {
        Self::new(self.lat + dlat, self.lon + dlon)
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = GeoError;

    fn try_from((lat, lon): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(lat, lon)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.lat, coord.lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lon)
    }
}

/// Position constraint of a location within a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Start,
    #[default]
    Milestone,
    End,
}

/// Physical effort rating. Ordered `Easy < Medium < Hard`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Assumed walking speed for this effort level, in km/h.
    pub fn walking_speed_kmh(self) -> f64 {
        match self {
            Self::Easy => 5.0,
            Self::Medium => 4.0,
            Self::Hard => 3.0,
        }
    }
}

/// A point of interest that can be placed on a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub coordinates: Coordinate,
    #[serde(rename = "type", default)]
    pub role: Role,
    /// Minutes a visitor is expected to spend here, excluding travel.
    #[serde(default)]
    pub estimated_time: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Location {
    /// Creates an easy milestone with no dwell time; refine with the `with_*` methods.
    pub fn new(id: impl Into<String>, coordinates: Coordinate) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: String::new(),
            coordinates,
            role: Role::Milestone,
            estimated_time: 0,
            difficulty: Difficulty::Easy,
            tags: Vec::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_minutes(mut self, minutes: u32) -> Self {
        self.estimated_time = minutes;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
