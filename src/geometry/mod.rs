pub mod polygon;

pub use polygon::{GeometryError, Polygon};
