//! Scene Query Seam
//!
//! The rig never talks to a physics engine directly. Everything it needs
//! from the scene is a single volumetric ray cast, expressed by the
//! [`SceneQuery`] trait. Hosts implement it over their physics backend, or
//! hand the rig a closure.

use glam::Vec3;

/// Opaque identity of a scene entity.
///
/// The rig only compares ids for equality: against the tracked subject and
/// against the camera's own entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EntityId(pub u64);

impl EntityId {
    /// Create an id from a raw value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw id value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// First blocking candidate reported by a volumetric ray cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RayHit {
    /// Entity owning the collider that was hit
    pub entity: EntityId,
    /// Whether the collider is a non-solid trigger volume
    pub is_trigger: bool,
}

impl RayHit {
    /// A hit on a solid collider.
    pub fn solid(entity: EntityId) -> Self {
        Self {
            entity,
            is_trigger: false,
        }
    }

    /// A hit on a trigger volume.
    pub fn trigger(entity: EntityId) -> Self {
        Self {
            entity,
            is_trigger: true,
        }
    }
}

/// Synchronous scene query used by the occlusion resolver.
pub trait SceneQuery {
    /// Sweep a sphere of `radius` from `origin` along `direction`.
    ///
    /// `direction` is normalized by the caller. Returns the nearest hit
    /// within `max_distance`, or `None` when the sweep is unobstructed.
    fn cast_volumetric_ray(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
    ) -> Option<RayHit>;
}

impl<F> SceneQuery for F
where
    F: Fn(Vec3, f32, Vec3, f32) -> Option<RayHit>,
{
    fn cast_volumetric_ray(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
    ) -> Option<RayHit> {
        self(origin, radius, direction, max_distance)
    }
}

/// A scene with nothing in it.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyScene;

impl SceneQuery for EmptyScene {
    fn cast_volumetric_ray(&self, _: Vec3, _: f32, _: Vec3, _: f32) -> Option<RayHit> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_scene_query() {
        let wall = EntityId::new(7);
        let scene = move |_origin: Vec3, _radius: f32, _dir: Vec3, max: f32| {
            (max > 1.0).then(|| RayHit::solid(wall))
        };

        assert_eq!(
            scene.cast_volumetric_ray(Vec3::ZERO, 0.2, Vec3::Z, 2.0),
            Some(RayHit::solid(wall))
        );
        assert_eq!(scene.cast_volumetric_ray(Vec3::ZERO, 0.2, Vec3::Z, 0.5), None);
    }

    #[test]
    fn test_empty_scene_never_hits() {
        assert!(EmptyScene
            .cast_volumetric_ray(Vec3::ZERO, 1.0, Vec3::X, 1000.0)
            .is_none());
    }

    #[test]
    fn test_hit_constructors() {
        let id = EntityId::new(3);
        assert!(!RayHit::solid(id).is_trigger);
        assert!(RayHit::trigger(id).is_trigger);
        assert_eq!(RayHit::trigger(id).entity.raw(), 3);
    }
}
