pub mod geojson;

pub use geojson::{load_boundary, parse_boundary};
