//! Coarse city detection from a coordinate.
//!
//! Each supported city is an inclusive lat/lon box. Boxes are checked in
//! declaration order and the first hit wins; anything else is `Generic`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Delhi,
    Mumbai,
    Bangalore,
    Chennai,
    Kolkata,
    Pune,
    Hyderabad,
    Jaipur,
    Generic,
}

/// (region, min_lat, max_lat, min_lon, max_lon)
const BOUNDS: &[(Region, f64, f64, f64, f64)] = &[
    (Region::Delhi, 28.4, 28.8, 76.8, 77.6),
    (Region::Mumbai, 18.9, 19.3, 72.7, 73.1),
    (Region::Bangalore, 12.8, 13.2, 77.4, 77.8),
    (Region::Chennai, 12.8, 13.3, 80.1, 80.4),
    (Region::Kolkata, 22.4, 22.7, 88.2, 88.5),
    (Region::Pune, 18.4, 18.7, 73.7, 74.0),
    (Region::Hyderabad, 17.2, 17.6, 78.2, 78.7),
    (Region::Jaipur, 26.7, 27.1, 75.6, 76.0),
];

impl Region {
    /// The region whose box contains `coord`, or `Generic`.
    pub fn locate(coord: Coordinate) -> Self {
        BOUNDS
            .iter()
            .find(|(_, min_lat, max_lat, min_lon, max_lon)| {
                (*min_lat..=*max_lat).contains(&coord.lat()) && (*min_lon..=*max_lon).contains(&coord.lon())
            })
            .map_or(Region::Generic, |(region, ..)| *region)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Delhi => "Delhi",
            Self::Mumbai => "Mumbai",
            Self::Bangalore => "Bangalore",
            Self::Chennai => "Chennai",
            Self::Kolkata => "Kolkata",
            Self::Pune => "Pune",
            Self::Hyderabad => "Hyderabad",
            Self::Jaipur => "Jaipur",
            Self::Generic => "Generic",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
