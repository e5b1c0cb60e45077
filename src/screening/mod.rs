use crate::geometry::Polygon;

/// Rejection text used when no message is configured
pub const DEFAULT_MESSAGE: &str = "The location must be inside the service area.";

/// Outcome of screening one submitted report location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Rejected { message: String },
}

impl Decision {
    #[allow(dead_code)]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accepted)
    }
}

/// Applies the configured service-area boundary to submitted locations
///
/// An unusable boundary (see `Polygon::is_valid`) fails open: every
/// submission is accepted, since there is nothing trustworthy to check
/// against. With `strict` set, an unusable boundary rejects instead.
#[derive(Debug, Clone)]
pub struct Screener {
    boundary: Polygon,
    message: String,
    strict: bool,
}

impl Screener {
    pub fn new(boundary: Polygon, message: impl Into<String>, strict: bool) -> Self {
        Self {
            boundary,
            message: message.into(),
            strict,
        }
    }

    #[allow(dead_code)]
    pub fn boundary(&self) -> &Polygon {
        &self.boundary
    }

    /// Screen one submitted (lat, lng) location
    pub fn screen(&self, lat: f64, lng: f64) -> Decision {
        if !self.boundary.is_valid() {
            return if self.strict {
                self.reject()
            } else {
                Decision::Accepted
            };
        }

        if self.boundary.contains(lat, lng) {
            Decision::Accepted
        } else {
            self.reject()
        }
    }

    fn reject(&self) -> Decision {
        Decision::Rejected {
            message: self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::from_points(vec![(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)])
    }

    #[test]
    fn test_inside_accepted() {
        let screener = Screener::new(square(), DEFAULT_MESSAGE, false);
        assert!(screener.screen(5.0, 5.0).is_accepted());
    }

    #[test]
    fn test_outside_rejected_with_message() {
        let screener = Screener::new(square(), "Please pick a spot inside town.", false);
        assert_eq!(
            screener.screen(15.0, 15.0),
            Decision::Rejected {
                message: "Please pick a spot inside town.".to_string()
            }
        );
    }

    #[test]
    fn test_unusable_boundary_fails_open() {
        let screener = Screener::new(Polygon::new(), DEFAULT_MESSAGE, false);
        assert!(screener.screen(15.0, 15.0).is_accepted());
    }

    #[test]
    fn test_unusable_boundary_rejects_in_strict_mode() {
        let screener = Screener::new(Polygon::new(), DEFAULT_MESSAGE, true);
        assert!(!screener.screen(5.0, 5.0).is_accepted());
    }

    #[test]
    fn test_boundary_point_accepted() {
        let screener = Screener::new(square(), DEFAULT_MESSAGE, false);
        assert!(screener.screen(0.0, 5.0).is_accepted());
    }
}
