#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A stop on a route: an identifier and a position in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    pub id: i32,
    pub x: f64,
    pub y: f64,
}

impl Waypoint {
    pub fn new(id: i32, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Waypoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Total length of the open path visiting `route` in order.
///
/// Routes with fewer than two waypoints have length 0.
pub fn route_length(route: &[Waypoint]) -> f64 {
    route.windows(2).map(|leg| leg[0].distance_to(&leg[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to() {
        let a = Waypoint::new(1, 0.0, 0.0);
        let b = Waypoint::new(2, 3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_route_length_is_open_path() {
        let route = [
            Waypoint::new(1, 0.0, 0.0),
            Waypoint::new(2, 3.0, 4.0),
            Waypoint::new(3, 3.0, 0.0),
        ];
        assert_eq!(route_length(&route), 9.0);
    }

    #[test]
    fn test_route_length_of_short_routes() {
        assert_eq!(route_length(&[]), 0.0);
        assert_eq!(route_length(&[Waypoint::new(1, 5.0, 5.0)]), 0.0);
    }
}
