//! Box Scene Collision
//!
//! A small reference [`SceneQuery`] built from axis-aligned boxes. Volumetric
//! rays are resolved by inflating every box by the probe radius and running
//! a slab-method ray test against the inflated box.
//!
//! Like the sphere casts of most physics engines, a box that already
//! contains the probe origin is not reported. That blind spot is what the
//! rig's bidirectional visibility check compensates for.
//!
//! # Example
//!
//! ```ignore
//! use orbit_cam_engine::physics::{AabbScene, EntityId, SceneQuery};
//! use glam::Vec3;
//!
//! let mut scene = AabbScene::new();
//! scene.add_solid(EntityId::new(1), Vec3::new(-1.0, 0.0, -3.0), Vec3::new(1.0, 3.0, -2.5));
//!
//! let hit = scene.cast_volumetric_ray(Vec3::new(0.0, 1.0, 0.0), 0.2, Vec3::NEG_Z, 5.0);
//! assert!(hit.is_some());
//! ```

use super::query::{EntityId, RayHit, SceneQuery};
use glam::Vec3;

/// Performs ray-AABB intersection using the slab method.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the intersection point (t >= 0)
/// * `None` - No intersection or intersection is behind the ray origin
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    // Near-zero components get a huge inverse so the slab collapses to a plane test
    let inv_dir = Vec3::new(
        if ray_dir.x.abs() > 1e-10 { 1.0 / ray_dir.x } else { f32::MAX * ray_dir.x.signum() },
        if ray_dir.y.abs() > 1e-10 { 1.0 / ray_dir.y } else { f32::MAX * ray_dir.y.signum() },
        if ray_dir.z.abs() > 1e-10 { 1.0 / ray_dir.z } else { f32::MAX * ray_dir.z.signum() },
    );

    let t1 = (aabb_min - ray_origin) * inv_dir;
    let t2 = (aabb_max - ray_origin) * inv_dir;

    let t_min = t1.min(t2).max_element();
    let t_max = t1.max(t2).min_element();

    if t_max >= t_min && t_max >= 0.0 {
        if t_min >= 0.0 { Some(t_min) } else { Some(t_max) }
    } else {
        None
    }
}

/// Whether `point` lies inside (or on the surface of) the box.
pub fn aabb_contains(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> bool {
    point.cmpge(aabb_min).all() && point.cmple(aabb_max).all()
}

/// One collider of an [`AabbScene`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBox {
    /// Owning entity
    pub entity: EntityId,
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
    /// Trigger volumes are reported but never block the view
    pub is_trigger: bool,
}

impl SceneBox {
    /// Create a box from two corners, in any order.
    pub fn new(entity: EntityId, a: Vec3, b: Vec3, is_trigger: bool) -> Self {
        Self {
            entity,
            min: a.min(b),
            max: a.max(b),
            is_trigger,
        }
    }

    /// Box centered on `center` with the given half extents.
    pub fn from_center(entity: EntityId, center: Vec3, half_extents: Vec3) -> Self {
        Self::new(entity, center - half_extents, center + half_extents, false)
    }

    /// Corners of the box grown by `radius` on every side.
    fn inflated(&self, radius: f32) -> (Vec3, Vec3) {
        (self.min - Vec3::splat(radius), self.max + Vec3::splat(radius))
    }
}

/// Brute-force box scene answering volumetric ray casts.
#[derive(Debug, Clone, Default)]
pub struct AabbScene {
    boxes: Vec<SceneBox>,
}

impl AabbScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collider.
    pub fn insert(&mut self, scene_box: SceneBox) {
        self.boxes.push(scene_box);
    }

    /// Add a solid box spanning the two corners.
    pub fn add_solid(&mut self, entity: EntityId, a: Vec3, b: Vec3) {
        self.insert(SceneBox::new(entity, a, b, false));
    }

    /// Add a trigger box spanning the two corners.
    pub fn add_trigger(&mut self, entity: EntityId, a: Vec3, b: Vec3) {
        self.insert(SceneBox::new(entity, a, b, true));
    }

    /// Remove every collider owned by `entity`. Returns how many were removed.
    pub fn remove_entity(&mut self, entity: EntityId) -> usize {
        let before = self.boxes.len();
        self.boxes.retain(|b| b.entity != entity);
        before - self.boxes.len()
    }

    /// Number of colliders.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the scene has no colliders.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Remove every collider.
    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    /// Iterate over colliders.
    pub fn iter(&self) -> impl Iterator<Item = &SceneBox> {
        self.boxes.iter()
    }

    /// Nearest box hit by the swept sphere, with its distance.
    pub fn sphere_cast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
    ) -> Option<(SceneBox, f32)> {
        let mut closest: Option<(SceneBox, f32)> = None;
        let mut closest_dist = max_distance;

        for scene_box in &self.boxes {
            let (min, max) = scene_box.inflated(radius);
            if aabb_contains(origin, min, max) {
                continue;
            }
            if let Some(t) = ray_aabb_intersect(origin, direction, min, max) {
                if t <= closest_dist {
                    closest = Some((*scene_box, t));
                    closest_dist = t;
                }
            }
        }

        closest
    }
}

impl SceneQuery for AabbScene {
    fn cast_volumetric_ray(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        max_distance: f32,
    ) -> Option<RayHit> {
        self.sphere_cast(origin, radius, direction, max_distance)
            .map(|(scene_box, _)| RayHit {
                entity: scene_box.entity,
                is_trigger: scene_box.is_trigger,
            })
    }
}
