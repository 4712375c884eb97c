use glam::Vec3;
use log::{debug, trace};

use crate::core::Aabb;

use super::collision::{CollisionResult, PlatformId, StageCollision, JUMP_THROUGH_TOLERANCE};
use super::platform::{Platform, PlatformKind};

/// Stage that owns every platform and answers collision queries
#[derive(Debug, Clone, Default)]
pub struct PlatformWorld {
    platforms: Vec<Platform>,
}

impl PlatformWorld {
    /// Create an empty stage
    pub fn new() -> Self {
        Self {
            platforms: Vec::new(),
        }
    }

    /// The default street stage: a solid ground slab with its top at y = 0,
    /// two low jump-through ledges and a higher one in the middle
    pub fn street_stage() -> Self {
        let mut world = Self::new();
        world.add_platform(
            Vec3::new(0.0, -0.5, 0.0),
            Vec3::new(30.0, 1.0, 4.0),
            PlatformKind::Solid,
        );
        world.add_platform(
            Vec3::new(-7.0, 2.35, 0.0),
            Vec3::new(4.0, 0.3, 2.0),
            PlatformKind::JumpThrough,
        );
        world.add_platform(
            Vec3::new(7.0, 2.35, 0.0),
            Vec3::new(4.0, 0.3, 2.0),
            PlatformKind::JumpThrough,
        );
        world.add_platform(
            Vec3::new(0.0, 4.35, 0.0),
            Vec3::new(5.0, 0.3, 2.0),
            PlatformKind::JumpThrough,
        );
        debug!("Street stage built with {} platforms", world.len());
        world
    }

    /// Add a platform during stage setup
    pub fn add_platform(&mut self, center: Vec3, size: Vec3, kind: PlatformKind) -> PlatformId {
        self.platforms.push(Platform::new(center, size, kind));
        self.platforms.len() - 1
    }

    /// Get a platform by id
    pub fn get(&self, id: PlatformId) -> Option<&Platform> {
        self.platforms.get(id)
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }
}

#[cfg(test)]
impl PlatformWorld {
    /// All platforms in insertion order
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

impl StageCollision for PlatformWorld {
    fn resolve(
        &self,
        position: Vec3,
        velocity: Vec3,
        size: Vec3,
        standing_on: Option<PlatformId>,
    ) -> CollisionResult {
        let future_position = position + velocity;
        let candidate = Aabb::from_center_size(future_position, size);
        let prior_bottom = position.y - size.y * 0.5;

        // Only falling or resting actors can land
        if velocity.y > 0.0 {
            return CollisionResult::airborne(future_position);
        }

        let mut closest: Option<(PlatformId, f32)> = None;
        let mut can_pass_through = false;

        for (id, platform) in self.platforms.iter().enumerate() {
            if !candidate.intersects(&platform.bounds) {
                continue;
            }

            if platform.kind.is_jump_through() {
                let arrived_from_above = standing_on == Some(id)
                    || prior_bottom >= platform.top - JUMP_THROUGH_TOLERANCE;
                if !arrived_from_above {
                    can_pass_through = true;
                    continue;
                }
            }

            // Nearest landing surface wins
            let distance = (candidate.min.y - platform.top).abs();
            if closest.map_or(true, |(_, best)| distance < best) {
                closest = Some((id, distance));
            }
        }

        let Some((id, _)) = closest else {
            return CollisionResult {
                can_pass_through,
                ..CollisionResult::airborne(future_position)
            };
        };

        let platform = &self.platforms[id];
        let mut landed = future_position;
        landed.y = platform.top + size.y * 0.5;

        if !platform.supports(landed, size) {
            trace!("Slid off platform {} edge, staying airborne", id);
            return CollisionResult {
                can_pass_through,
                ..CollisionResult::airborne(future_position)
            };
        }

        CollisionResult {
            platform: Some(id),
            new_position: landed,
            is_grounded: true,
            can_pass_through,
        }
    }

    fn platform(&self, id: PlatformId) -> Option<&Platform> {
        self.get(id)
    }
}
