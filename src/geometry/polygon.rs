use thiserror::Error;

/// Errors from geometry queries that require at least one vertex
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("polygon has no points")]
    EmptyGeometry,
}

/// A service-area boundary polygon with vertices as (lat, lng) pairs
///
/// Vertex order is significant: consecutive vertices form the edges,
/// with an implicit closing edge from the last vertex back to the
/// first. The polygon is assumed simple (non-self-intersecting); this
/// is not verified.
///
/// A boundary is usable only when it has at least 3 vertices and every
/// coordinate is a finite number. `set_points` rejects anything else
/// and keeps the previously stored vertices, so callers must check
/// `is_valid()` before trusting containment results.
#[derive(Debug, Clone, Default)]
pub struct Polygon {
    points: Vec<(f64, f64)>,
    valid: bool,
}

impl Polygon {
    /// Create an empty, unusable polygon
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a polygon from a vertex list, validating it immediately
    pub fn from_points(points: Vec<(f64, f64)>) -> Self {
        let mut polygon = Self::new();
        polygon.set_points(points);
        polygon
    }

    /// Replace the vertex list
    ///
    /// The new list is rejected as a whole if it has fewer than 3
    /// points or contains a non-finite coordinate (NaN or infinity).
    /// On rejection the stored points are left untouched and
    /// `is_valid()` turns false.
    pub fn set_points(&mut self, points: Vec<(f64, f64)>) {
        if points.len() < 3 {
            self.valid = false;
            return;
        }

        if points
            .iter()
            .any(|&(lat, lng)| !lat.is_finite() || !lng.is_finite())
        {
            self.valid = false;
            return;
        }

        self.points = points;
        self.valid = true;
    }

    /// Currently stored vertices
    ///
    /// May be stale: a rejected `set_points` call leaves the previous
    /// vertices in place.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Whether the stored vertex list forms a usable boundary
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Corners of the axis-aligned bounding rectangle of the vertices
    ///
    /// # Returns
    /// * The four corners in fixed order: (min_lat, min_lng),
    ///   (min_lat, max_lng), (max_lat, max_lng), (max_lat, min_lng)
    /// * `GeometryError::EmptyGeometry` when no vertices are stored
    pub fn rectangle_points(&self) -> Result<[(f64, f64); 4], GeometryError> {
        if self.points.is_empty() {
            return Err(GeometryError::EmptyGeometry);
        }

        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;
        let mut min_lng = f64::MAX;
        let mut max_lng = f64::MIN;

        for &(lat, lng) in &self.points {
            min_lat = min_lat.min(lat);
            max_lat = max_lat.max(lat);
            min_lng = min_lng.min(lng);
            max_lng = max_lng.max(lng);
        }

        Ok([
            (min_lat, min_lng),
            (min_lat, max_lng),
            (max_lat, max_lng),
            (max_lat, min_lng),
        ])
    }

    /// Point-in-polygon test using the ray-casting algorithm
    ///
    /// Counts how many edges the axis-aligned ray from the query point
    /// crosses in (lat, lng) space; an odd count means inside. A point
    /// lying exactly on an edge or vertex is classified as contained.
    /// With fewer than 3 vertices no edge can bracket the ray, so the
    /// result degenerates to false.
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        let n = self.points.len();
        let mut crossings = 0;

        for i in 0..n {
            let (x1, y1) = self.points[i];
            let (x2, y2) = self.points[(i + 1) % n];

            // Edges with no lat extent cannot cross the ray
            if x1 == x2 {
                continue;
            }

            if lat < x1.min(x2) || lat > x1.max(x2) {
                continue;
            }

            let y_cross = y1 + (lat - x1) / (x2 - x1) * (y2 - y1);

            if y_cross < lng {
                crossings += 1;
            } else if y_cross == lng {
                // Exact comparison: a point on the edge itself counts
                // as contained
                return true;
            }
        }

        crossings % 2 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::from_points(vec![(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)])
    }

    #[test]
    fn test_empty_polygon() {
        let polygon = Polygon::new();
        assert!(!polygon.is_valid());
        assert!(polygon.points().is_empty());
        assert!(!polygon.contains(5.0, 5.0));
    }

    #[test]
    fn test_too_few_points_rejected() {
        let mut polygon = Polygon::new();
        polygon.set_points(vec![(0.0, 0.0), (1.0, 1.0)]);
        assert!(!polygon.is_valid());
        assert!(polygon.points().is_empty());
    }

    #[test]
    fn test_valid_triangle() {
        let polygon = Polygon::from_points(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]);
        assert!(polygon.is_valid());
        assert_eq!(polygon.points().len(), 3);
    }

    #[test]
    fn test_non_finite_coordinate_rejected() {
        let mut polygon = square();
        polygon.set_points(vec![(0.0, 0.0), (0.0, f64::NAN), (1.0, 0.0)]);
        assert!(!polygon.is_valid());

        polygon.set_points(vec![(0.0, 0.0), (f64::INFINITY, 1.0), (1.0, 0.0)]);
        assert!(!polygon.is_valid());
    }

    #[test]
    fn test_rejected_set_points_keeps_previous_vertices() {
        let mut polygon = square();
        let before = polygon.points().to_vec();

        polygon.set_points(vec![(1.0, 1.0)]);
        assert!(!polygon.is_valid());
        assert_eq!(polygon.points(), before.as_slice());
    }

    #[test]
    fn test_set_points_is_idempotent() {
        let points = vec![(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)];

        let mut once = Polygon::new();
        once.set_points(points.clone());

        let mut twice = Polygon::new();
        twice.set_points(points.clone());
        twice.set_points(points);

        assert_eq!(once.is_valid(), twice.is_valid());
        assert_eq!(once.points(), twice.points());
    }

    #[test]
    fn test_rectangle_points_order() {
        let polygon = Polygon::from_points(vec![(2.0, 1.0), (8.0, 3.0), (5.0, 9.0)]);
        let corners = polygon.rectangle_points().unwrap();

        assert_eq!(corners[0], (2.0, 1.0));
        assert_eq!(corners[1], (2.0, 9.0));
        assert_eq!(corners[2], (8.0, 9.0));
        assert_eq!(corners[3], (8.0, 1.0));
    }

    #[test]
    fn test_rectangle_encloses_all_vertices() {
        let polygon = Polygon::from_points(vec![(50.1, 8.6), (50.2, 8.7), (50.15, 8.5)]);
        let [(min_lat, min_lng), _, (max_lat, max_lng), _] =
            polygon.rectangle_points().unwrap();

        for &(lat, lng) in polygon.points() {
            assert!(lat >= min_lat && lat <= max_lat);
            assert!(lng >= min_lng && lng <= max_lng);
        }
    }

    #[test]
    fn test_rectangle_points_empty_errors() {
        let polygon = Polygon::new();
        assert_eq!(
            polygon.rectangle_points(),
            Err(GeometryError::EmptyGeometry)
        );
    }

    #[test]
    fn test_contains_interior_point() {
        assert!(square().contains(5.0, 5.0));
    }

    #[test]
    fn test_contains_exterior_point() {
        assert!(!square().contains(15.0, 15.0));
    }

    #[test]
    fn test_contains_point_on_edge() {
        assert!(square().contains(0.0, 5.0));
    }

    #[test]
    fn test_contains_point_on_vertex() {
        assert!(square().contains(0.0, 0.0));
    }

    #[test]
    fn test_contains_concave_polygon() {
        // A "U" shape: points in the notch are outside
        let polygon = Polygon::from_points(vec![
            (0.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
            (10.0, 6.0),
            (2.0, 6.0),
            (2.0, 4.0),
            (10.0, 4.0),
            (10.0, 0.0),
        ]);
        assert!(polygon.is_valid());
        assert!(polygon.contains(1.0, 5.0));
        assert!(!polygon.contains(5.0, 5.0));
        assert!(polygon.contains(5.0, 1.0));
        assert!(polygon.contains(5.0, 9.0));
    }

    #[test]
    fn test_contains_ignores_validity_flag() {
        // Two points cannot bracket a crossing, so the test
        // degenerates to false rather than erroring
        let mut polygon = Polygon::new();
        polygon.set_points(vec![(0.0, 0.0), (10.0, 10.0)]);
        assert!(!polygon.contains(5.0, 5.0));
    }
}
