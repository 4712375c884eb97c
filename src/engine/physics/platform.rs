// Static stage geometry

use glam::Vec3;

use crate::core::Aabb;

/// How a platform reacts to actors touching it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKind {
    /// Blocks landing from any approach
    Solid,
    /// One-way: only supports actors arriving from above
    JumpThrough,
}

impl PlatformKind {
    pub fn is_jump_through(&self) -> bool {
        matches!(self, Self::JumpThrough)
    }
}

/// A piece of stage geometry, immutable once the stage is built
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    /// World-space bounds
    pub bounds: Aabb,
    pub kind: PlatformKind,
    /// Height of the walkable top surface
    pub top: f32,
}

impl Platform {
    pub fn new(center: Vec3, size: Vec3, kind: PlatformKind) -> Self {
        let bounds = Aabb::from_center_size(center, size);
        Self {
            bounds,
            kind,
            top: bounds.max.y,
        }
    }

    #[cfg(test)]
    pub fn solid(center: Vec3, size: Vec3) -> Self {
        Self::new(center, size, PlatformKind::Solid)
    }

    #[cfg(test)]
    pub fn jump_through(center: Vec3, size: Vec3) -> Self {
        Self::new(center, size, PlatformKind::JumpThrough)
    }

    /// Whether an actor of `size` centered at `position` still overlaps this
    /// platform horizontally and in depth
    pub fn supports(&self, position: Vec3, size: Vec3) -> bool {
        let half = size * 0.5;
        let within_x =
            position.x >= self.bounds.min.x - half.x && position.x <= self.bounds.max.x + half.x;
        let within_z =
            position.z >= self.bounds.min.z - half.z && position.z <= self.bounds.max.z + half.z;
        within_x && within_z
    }
}
