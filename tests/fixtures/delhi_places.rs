//! Real Delhi landmarks for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap.

use trail_planner::Coordinate;

/// A named place with coordinates.
#[derive(Debug, Clone)]
pub struct Place {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng).unwrap()
    }
}

pub const RED_FORT: Place = Place::new("Red Fort", 28.6562, 77.2410);
pub const JAMA_MASJID: Place = Place::new("Jama Masjid", 28.6507, 77.2334);
pub const INDIA_GATE: Place = Place::new("India Gate", 28.6129, 77.2295);

// ============================================================================
// Old Delhi
// ============================================================================

pub const OLD_DELHI: &[Place] = &[
    Place::new("Red Fort", 28.6562, 77.2410),
    Place::new("Jama Masjid", 28.6507, 77.2334),
    Place::new("Chandni Chowk", 28.6506, 77.2303),
    Place::new("Gurudwara Sis Ganj Sahib", 28.6560, 77.2320),
    Place::new("Khari Baoli", 28.6574, 77.2207),
    Place::new("Raj Ghat", 28.6406, 77.2495),
];

// ============================================================================
// Central and South Delhi
// ============================================================================

pub const CENTRAL_DELHI: &[Place] = &[
    Place::new("India Gate", 28.6129, 77.2295),
    Place::new("Rashtrapati Bhavan", 28.6143, 77.1994),
    Place::new("Jantar Mantar", 28.6271, 77.2166),
    Place::new("Agrasen ki Baoli", 28.6262, 77.2250),
    Place::new("Humayun's Tomb", 28.5933, 77.2507),
    Place::new("Lodhi Garden", 28.5931, 77.2197),
    Place::new("Lotus Temple", 28.5535, 77.2588),
    Place::new("Qutub Minar", 28.5245, 77.1855),
];
