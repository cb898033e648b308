//! Error types for route construction and navigation progress.
//!
//! Everything in this crate is pure computation, so every error is an input
//! problem the caller can act on. Nothing here is retried or logged.

use thiserror::Error;

/// A coordinate that is not a valid point on the globe.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    /// Latitude outside [-90, 90], longitude outside [-180, 180], or a
    /// non-finite value in either.
    #[error("invalid coordinate ({lat}, {lon}): latitude must be in [-90, 90] and longitude in [-180, 180]")]
    InvalidCoordinate { lat: f64, lon: f64 },
}

/// Errors raised while building or summarizing a route.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// A route needs at least one location.
    #[error("route must contain at least one location")]
    EmptyRoute,

    /// Two locations in the same route share an id.
    #[error("duplicate location id in route: {0}")]
    DuplicateLocationId(String),

    /// Dwell times add up to more minutes than a `u32` holds.
    #[error("total dwell time exceeds {} minutes", u32::MAX)]
    DurationOverflow,

    #[error(transparent)]
    Geo(#[from] GeoError),
}

/// Errors raised while tracking progress along a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressError {
    /// The location id is not part of the route being navigated.
    #[error("location {0} is not part of this route")]
    UnknownLocation(String),

    /// The progress record belongs to a different route.
    #[error("progress belongs to route {expected}, not {found}")]
    RouteMismatch { expected: String, found: String },
}
