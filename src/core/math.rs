// Math utilities and helper functions

use glam::Vec3;

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Linear interpolation
#[allow(dead_code)]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Check if two f32 values are approximately equal
#[allow(dead_code)]
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Axis-aligned bounding box in world space
///
/// Faces are inclusive: two boxes that only touch still intersect.
/// The `EMPTY` box has inverted extents and never intersects anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// A box that contains nothing
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    /// Build a box from its center and full extents
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[cfg(test)]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[cfg(test)]
    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }

    pub fn is_empty(&self) -> bool {
        self.max.x < self.min.x || self.max.y < self.min.y || self.max.z < self.min.z
    }

    /// Returns true if the boxes share any point (faces included)
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.is_empty()
            || other.is_empty()
            || self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y
            || self.max.z < other.min.z
            || self.min.z > other.max.z)
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    }

    #[test]
    fn test_approx_equal() {
        assert!(approx_equal(1.0, 1.00001, 0.0001));
        assert!(!approx_equal(1.0, 1.1, 0.01));
    }

    #[test]
    fn test_aabb_center_and_size() {
        let aabb = Aabb::from_center_size(Vec3::new(1.0, 2.0, 0.0), Vec3::new(2.0, 4.0, 1.0));
        assert_eq!(aabb.min, Vec3::new(0.0, 0.0, -0.5));
        assert_eq!(aabb.max, Vec3::new(2.0, 4.0, 0.5));
        assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(aabb.size(), Vec3::new(2.0, 4.0, 1.0));
    }

    #[test]
    fn test_aabb_intersects() {
        let a = Aabb::from_center_size(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_center_size(Vec3::new(0.5, 0.0, 0.0), Vec3::ONE);
        let c = Aabb::from_center_size(Vec3::new(3.0, 0.0, 0.0), Vec3::ONE);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_aabb_touching_faces_intersect() {
        let a = Aabb::from_center_size(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_center_size(Vec3::new(1.0, 0.0, 0.0), Vec3::ONE);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_empty_never_intersects() {
        let a = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(100.0));
        assert!(Aabb::EMPTY.is_empty());
        assert!(!Aabb::EMPTY.intersects(&a));
        assert!(!a.intersects(&Aabb::EMPTY));
        assert_eq!(Aabb::EMPTY.size(), Vec3::ZERO);
    }
}
