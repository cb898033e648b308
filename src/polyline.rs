//! Route geometry as an ordered list of coordinates.
//!
//! This is what a map layer draws for a route. Any compact encoding for the
//! wire happens at the presentation boundary, not here.

use serde::{Deserialize, Serialize};

use crate::haversine::distance_km;
use crate::model::Coordinate;

/// A polyline through a route's stops in visit order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Great-circle length along the points, in km.
    pub fn length_km(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| distance_km(pair[0], pair[1]))
            .sum()
    }

    /// Smallest (south-west, north-east) box containing every point.
    pub fn bounds(&self) -> Option<(Coordinate, Coordinate)> {
        let first = self.points.first()?;
        let (mut min_lat, mut min_lon) = (first.lat(), first.lon());
        let (mut max_lat, mut max_lon) = (min_lat, min_lon);
        for p in &self.points[1..] {
            min_lat = min_lat.min(p.lat());
            min_lon = min_lon.min(p.lon());
            max_lat = max_lat.max(p.lat());
            max_lon = max_lon.max(p.lon());
        }
        // Corners of a box of valid points are themselves valid.
        let sw = Coordinate::new(min_lat, min_lon).ok()?;
        let ne = Coordinate::new(max_lat, max_lon).ok()?;
        Some((sw, ne))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_new_and_points() {
        let points = vec![coord(28.6562, 77.2410), coord(28.6507, 77.2334)];
        let polyline = Polyline::new(points.clone());
        assert_eq!(polyline.points(), &points[..]);
        assert_eq!(polyline.len(), 2);
        assert_eq!(polyline.into_points(), points);
    }

    #[test]
    fn test_empty_polyline() {
        let polyline = Polyline::new(vec![]);
        assert!(polyline.is_empty());
        assert_eq!(polyline.length_km(), 0.0);
        assert!(polyline.bounds().is_none());
    }

    #[test]
    fn test_length_matches_hops() {
        let a = coord(18.9220, 72.8347);
        let b = coord(18.9435, 72.8234);
        let c = coord(18.9545, 72.8156);
        let polyline = Polyline::new(vec![a, b, c]);
        let expected = distance_km(a, b) + distance_km(b, c);
        assert!((polyline.length_km() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_bounds() {
        let polyline = Polyline::new(vec![coord(1.0, 5.0), coord(-2.0, 7.0), coord(0.5, 4.0)]);
        let (sw, ne) = polyline.bounds().unwrap();
        assert_eq!((sw.lat(), sw.lon()), (-2.0, 4.0));
        assert_eq!((ne.lat(), ne.lon()), (1.0, 7.0));
    }

    #[test]
    fn test_serializes_as_pairs() {
        let polyline = Polyline::new(vec![coord(1.0, 2.0)]);
        let json = serde_json::to_string(&polyline).unwrap();
        assert_eq!(json, r#"{"points":[[1.0,2.0]]}"#);
    }
}
