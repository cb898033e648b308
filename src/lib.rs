//! trail-planner core
//!
//! Route construction and ranking for walking adventures: great-circle
//! distances, greedy visit ordering, route aggregates, and relevance ranking
//! of candidate routes around a user.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod haversine;
pub mod metrics;
pub mod model;
pub mod polyline;
pub mod progress;
pub mod ranker;
pub mod region;
pub mod route;
pub mod sequencer;
pub mod traits;

pub use error::{GeoError, ProgressError, RouteError};
pub use model::{Coordinate, Difficulty, Location, Role};
pub use ranker::{RankedRoute, RelevanceWeights};
pub use route::Route;
