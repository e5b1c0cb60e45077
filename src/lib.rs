//! cityfence - Screen citizen report locations against a configured service-area boundary

pub mod boundary;
pub mod config;
pub mod geometry;
pub mod screening;

pub use geometry::{GeometryError, Polygon};
pub use screening::{Decision, Screener};
