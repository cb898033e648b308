//! Curated nearby routes for a user's city, and ranked recommendations.
//!
//! Landmark coordinates are real; dwell times are fixed estimates. Route
//! aggregates are always computed from the landmarks, never stored here.

use crate::error::RouteError;
use crate::model::{Coordinate, Difficulty, Location, Role};
use crate::ranker::{self, RankedRoute, RelevanceWeights};
use crate::region::Region;
use crate::route::Route;

/// A point of interest in a curated route.
#[derive(Debug, Clone, Copy)]
pub struct Landmark {
    pub name: &'static str,
    /// Short category, used as the first tag.
    pub kind: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub minutes: u32,
    pub difficulty: Difficulty,
}

impl Landmark {
    const fn new(name: &'static str, kind: &'static str, lat: f64, lon: f64, minutes: u32) -> Self {
        Self {
            name,
            kind,
            lat,
            lon,
            minutes,
            difficulty: Difficulty::Easy,
        }
    }

    const fn medium(mut self) -> Self {
        self.difficulty = Difficulty::Medium;
        self
    }
}

/// A named sequence of landmarks; the first is the start, the last the end.
#[derive(Debug, Clone, Copy)]
pub struct CuratedRoute {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub landmarks: &'static [Landmark],
}

// ============================================================================
// City routes
// ============================================================================

const DELHI: &[CuratedRoute] = &[
    CuratedRoute {
        id: "delhi-1",
        name: "Historic Delhi Explorer",
        description: "Discover the Mughal heritage and bustling markets near your location",
        landmarks: &[
            Landmark::new("Red Fort", "monument", 28.6562, 77.2410, 50),
            Landmark::new("Jama Masjid", "religious", 28.6507, 77.2334, 40),
            Landmark::new("Chandni Chowk", "market", 28.6506, 77.2303, 60),
        ],
    },
    CuratedRoute {
        id: "delhi-2",
        name: "Modern Delhi Circuit",
        description: "Experience contemporary Delhi with parks and monuments",
        landmarks: &[
            Landmark::new("India Gate", "monument", 28.6129, 77.2295, 30),
            Landmark::new("Lotus Temple", "spiritual", 28.5535, 77.2588, 40),
            Landmark::new("Humayun's Tomb", "heritage", 28.5933, 77.2507, 50),
        ],
    },
];

const MUMBAI: &[CuratedRoute] = &[CuratedRoute {
    id: "mumbai-1",
    name: "Coastal Mumbai Walk",
    description: "Scenic coastal route with iconic Mumbai landmarks",
    landmarks: &[
        Landmark::new("Gateway of India", "monument", 18.9220, 72.8347, 40),
        Landmark::new("Marine Drive", "promenade", 18.9435, 72.8234, 50),
        Landmark::new("Chowpatty Beach", "beach", 18.9545, 72.8156, 50),
    ],
}];

const BANGALORE: &[CuratedRoute] = &[CuratedRoute {
    id: "bangalore-1",
    name: "Garden City Experience",
    description: "Explore Bangalore's famous gardens and tech culture",
    landmarks: &[
        Landmark::new("Lalbagh Botanical Garden", "garden", 12.9507, 77.5848, 50),
        Landmark::new("Cubbon Park", "park", 12.9766, 77.5993, 45),
        Landmark::new("UB City Mall", "modern", 12.9716, 77.5946, 35),
    ],
}];

const CHENNAI: &[CuratedRoute] = &[CuratedRoute {
    id: "chennai-1",
    name: "Chennai Cultural Trail",
    description: "Experience Tamil culture and coastal beauty",
    landmarks: &[
        Landmark::new("Kapaleeshwarar Temple", "temple", 13.0339, 80.2690, 40),
        Landmark::new("Marina Beach", "beach", 13.0500, 80.2824, 40),
        Landmark::new("Government Museum", "museum", 13.0615, 80.2693, 40),
    ],
}];

const KOLKATA: &[CuratedRoute] = &[CuratedRoute {
    id: "kolkata-1",
    name: "Colonial Kolkata Heritage",
    description: "Explore the city of joy's colonial past and vibrant culture",
    landmarks: &[
        Landmark::new("Victoria Memorial", "monument", 22.5448, 88.3426, 60),
        Landmark::new("Howrah Bridge", "landmark", 22.5958, 88.3468, 40).medium(),
        Landmark::new("Park Street", "cultural", 22.5533, 88.3617, 60),
    ],
}];

const PUNE: &[CuratedRoute] = &[CuratedRoute {
    id: "pune-1",
    name: "Pune Hills & Heritage",
    description: "Discover Pune's historical sites and natural beauty",
    landmarks: &[
        Landmark::new("Shaniwar Wada", "historical", 18.5196, 73.8553, 45),
        Landmark::new("Aga Khan Palace", "heritage", 18.5579, 73.8957, 45),
        Landmark::new("Sinhagad Fort", "fort", 18.3664, 73.7562, 90).medium(),
    ],
}];

const HYDERABAD: &[CuratedRoute] = &[CuratedRoute {
    id: "hyderabad-1",
    name: "Nizami Heritage Trail",
    description: "Experience the royal heritage of the Nizams",
    landmarks: &[
        Landmark::new("Charminar", "monument", 17.3616, 78.4747, 40),
        Landmark::new("Golconda Fort", "fort", 17.3833, 78.4011, 80).medium(),
        Landmark::new("Hussain Sagar", "lake", 17.4239, 78.4738, 50),
    ],
}];

const JAIPUR: &[CuratedRoute] = &[CuratedRoute {
    id: "jaipur-1",
    name: "Pink City Royal Circuit",
    description: "Explore the magnificent palaces and forts of Jaipur",
    landmarks: &[
        Landmark::new("Hawa Mahal", "palace", 26.9239, 75.8267, 45),
        Landmark::new("City Palace", "palace", 26.9255, 75.8230, 60),
        Landmark::new("Jantar Mantar", "observatory", 26.9244, 75.8246, 45),
    ],
}];

/// Offset in degrees (roughly 1 km) for generic nearby stops.
const GENERIC_OFFSET_DEG: f64 = 0.01;

/// Curated routes for a known city; empty for [`Region::Generic`].
pub fn curated(region: Region) -> &'static [CuratedRoute] {
    match region {
        Region::Delhi => DELHI,
        Region::Mumbai => MUMBAI,
        Region::Bangalore => BANGALORE,
        Region::Chennai => CHENNAI,
        Region::Kolkata => KOLKATA,
        Region::Pune => PUNE,
        Region::Hyderabad => HYDERABAD,
        Region::Jaipur => JAIPUR,
        Region::Generic => &[],
    }
}

/// Candidate routes around `user`, built for the region they are in.
///
/// Outside the known cities this is a single short loop of stops about a
/// kilometer from the user.
pub fn routes_for(user: Coordinate) -> Result<Vec<Route>, RouteError> {
    let region = Region::locate(user);
    tracing::debug!(%region, %user, "building nearby routes");

    match region {
        Region::Generic => Ok(vec![generic_route(user)?]),
        known => curated(known).iter().map(build).collect(),
    }
}

/// Nearby routes for `user`, best first.
pub fn recommend(user: Coordinate, weights: &RelevanceWeights) -> Result<Vec<RankedRoute>, RouteError> {
    let routes = routes_for(user)?;
    Ok(ranker::rank_with(user, routes, weights))
}

/// Turn a curated route into a validated, sequenced [`Route`].
pub fn build(curated: &CuratedRoute) -> Result<Route, RouteError> {
    let last = curated.landmarks.len().saturating_sub(1);
    let locations = curated
        .landmarks
        .iter()
        .enumerate()
        .map(|(i, landmark)| -> Result<Location, RouteError> {
            let role = match i {
                0 => Role::Start,
                i if i == last => Role::End,
                _ => Role::Milestone,
            };
            Ok(Location::new(format!("{}-{}", curated.id, i + 1), Coordinate::new(landmark.lat, landmark.lon)?)
                .named(landmark.name)
                .with_description(format!("Explore {} - a beautiful {} location", landmark.name, landmark.kind))
                .with_role(role)
                .with_minutes(landmark.minutes)
                .with_difficulty(landmark.difficulty)
                .with_tag(landmark.kind)
                .with_tag("nearby")
                .with_tag("recommended"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Route::planned(curated.id, curated.name, &locations, None)?.with_description(curated.description))
}

fn generic_route(user: Coordinate) -> Result<Route, RouteError> {
    let o = GENERIC_OFFSET_DEG;
    let stop = |id: &str, name: &str, description: &str, coord: Coordinate, role: Role, minutes: u32, tags: [&str; 2]| {
        Location::new(id, coord)
            .named(name)
            .with_description(description)
            .with_role(role)
            .with_minutes(minutes)
            .with_tag(tags[0])
            .with_tag("nearby")
            .with_tag(tags[1])
    };

    let locations = vec![
        stop(
            "nearby-1",
            "Local Park",
            "A peaceful park area near your location",
            user.offset(o, o)?,
            Role::Start,
            25,
            ["park", "nature"],
        ),
        stop(
            "nearby-2",
            "Community Center",
            "Local community gathering place",
            user.offset(-o, o)?,
            Role::Milestone,
            30,
            ["community", "cultural"],
        ),
        stop(
            "nearby-3",
            "Market Area",
            "Local market with shops and eateries",
            user.offset(o, -o)?,
            Role::End,
            40,
            ["market", "shopping"],
        ),
    ];

    Ok(Route::planned("generic-1", "Local Area Explorer", &locations, None)?
        .with_description("Discover interesting places around your current location"))
}
