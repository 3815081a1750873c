//! 3D point and axis selector types

use serde::{Deserialize, Serialize};

/// A 3D body point, or a 3-axis joint angle triple
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// Create a point from its components
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product with another point
    pub fn dot(&self, other: &Point3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point3) -> f64 {
        (*self - *other).norm()
    }

    /// Unit vector in the same direction, or `None` for a zero-length vector
    pub fn unit(&self) -> Option<Point3> {
        let norm = self.norm();
        if norm > 0.0 {
            Some(Point3::new(self.x / norm, self.y / norm, self.z / norm))
        } else {
            None
        }
    }

    /// Component along the given axis
    pub fn component(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

impl std::ops::Sub for Point3 {
    type Output = Point3;

    fn sub(self, other: Point3) -> Point3 {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::Add for Point3 {
    type Output = Point3;

    fn add(self, other: Point3) -> Point3 {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

/// Rotation / coordinate axis selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes in order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_and_distance() {
        let a = Point3::new(1.0, 2.0, 2.0);
        assert!((a.norm() - 3.0).abs() < 1e-12);

        let b = Point3::new(1.0, 2.0, 5.0);
        assert!((a.distance(&b) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_vector() {
        let v = Point3::new(0.0, 0.0, 4.0);
        let u = v.unit().unwrap();
        assert!((u.norm() - 1.0).abs() < 1e-12);
        assert!((u.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_of_zero_vector_is_none() {
        assert!(Point3::default().unit().is_none());
    }

    #[test]
    fn test_component_access() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(p.component(Axis::X), 1.0);
        assert_eq!(p.component(Axis::Y), 2.0);
        assert_eq!(p.component(Axis::Z), 3.0);
    }
}
