//! Occlusion Resolver
//!
//! Keeps the camera out of scene geometry. Each tick the desired camera
//! offset is tested at full length; while the subject is not visible from
//! the candidate position the offset is shortened by a fixed step along its
//! own direction. Visibility is tested in both directions, because a sweep
//! that starts inside concave geometry does not report it.
//!
//! Custom offsets get no partial positions: if one cannot be met at full
//! length the rig falls back to the default pivot with a zero camera
//! offset.

use glam::{Quat, Vec3};

use crate::config::CollisionConfig;
use crate::physics::{EntityId, SceneQuery};

use super::intent::CameraIntent;

/// Probe segments shorter than this are considered clear.
const MIN_PROBE_LENGTH: f32 = 1e-5;

/// Upper bound on shrink steps per resolve.
const MAX_SHRINK_STEPS: u32 = 4096;

/// Inputs to one resolve pass.
#[derive(Clone, Copy, Debug)]
pub struct OcclusionProbe {
    /// Subject world position
    pub subject_position: Vec3,
    /// Heading-only rotation applied to the pivot offset
    pub heading: Quat,
    /// Full aim rotation applied to the camera offset
    pub aim: Quat,
    /// Target pivot offset
    pub pivot_offset: Vec3,
    /// Target camera offset, tested first at full length
    pub cam_offset: Vec3,
}

impl OcclusionProbe {
    /// World point the camera must be able to see.
    pub fn pivot_point(&self) -> Vec3 {
        self.subject_position + self.heading * self.pivot_offset
    }

    /// World position of the camera for a given offset.
    pub fn camera_position(&self, offset: Vec3) -> Vec3 {
        self.pivot_point() + self.aim * offset
    }
}

/// Outcome of one resolve pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    /// Collision-free camera offset (possibly zero)
    pub offset: Vec3,
    /// Number of shrink steps taken
    pub steps: u32,
    /// Set when a custom offset could not be met at full length
    pub collapsed_custom: bool,
}

impl Resolution {
    /// Unobstructed resolution of `offset`.
    pub fn clear(offset: Vec3) -> Self {
        Self {
            offset,
            steps: 0,
            collapsed_custom: false,
        }
    }

    /// `(pivot, cam)` offsets the interpolator should chase this tick.
    pub fn interpolation_targets(&self, intent: &CameraIntent) -> (Vec3, Vec3) {
        if self.collapsed_custom {
            (intent.defaults().pivot_offset, Vec3::ZERO)
        } else {
            (intent.pivot_offset, self.offset)
        }
    }
}

/// Bidirectional visibility search along the camera offset.
#[derive(Clone, Copy, Debug)]
pub struct OcclusionResolver {
    config: CollisionConfig,
    camera: EntityId,
    subject: EntityId,
}

impl OcclusionResolver {
    /// Resolver for a rig owned by `camera`, tracking `subject`.
    pub fn new(config: CollisionConfig, camera: EntityId, subject: EntityId) -> Self {
        Self {
            config,
            camera,
            subject,
        }
    }

    #[inline]
    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// Find the longest collision-free offset of the form `target - k * step`.
    ///
    /// Offsets that fall below `min_offset` collapse to zero, which puts the
    /// camera on the pivot. The search runs at most `target / step` shrinks;
    /// a step that is not a positive number allows none, so a blocked target
    /// collapses straight to zero.
    pub fn resolve<S>(&self, probe: &OcclusionProbe, custom: bool, scene: &S) -> Resolution
    where
        S: SceneQuery + ?Sized,
    {
        let target = probe.cam_offset;
        let target_len = target.length();
        let direction = target.normalize_or_zero();
        let pivot = probe.pivot_point();

        let step = self.config.shrink_step;
        let max_steps = if step > 0.0 {
            (target_len / step).ceil().min(MAX_SHRINK_STEPS as f32) as u32
        } else {
            0
        };

        let mut steps = 0u32;
        let mut length = target_len;
        let mut visible = false;

        while length >= self.config.min_offset && length > 0.0 {
            let candidate = pivot + probe.aim * (direction * length);
            if self.is_visible(candidate, pivot, scene) {
                visible = true;
                break;
            }
            if steps >= max_steps {
                break;
            }
            steps += 1;
            length = target_len - steps as f32 * step;
        }

        let offset = match (visible, steps) {
            (false, _) => Vec3::ZERO,
            (true, 0) => target,
            (true, _) => direction * length,
        };

        let collapsed_custom = custom && offset.length_squared() < target.length_squared();
        if steps > 0 || !visible {
            log::trace!(
                "OcclusionResolver: offset {:.2} -> {:.2} after {} steps{}",
                target_len,
                offset.length(),
                steps,
                if collapsed_custom { " (custom collapse)" } else { "" }
            );
        }

        Resolution {
            offset,
            steps,
            collapsed_custom,
        }
    }

    /// Both sweeps between `candidate` and `pivot` must come back clear.
    pub fn is_visible<S>(&self, candidate: Vec3, pivot: Vec3, scene: &S) -> bool
    where
        S: SceneQuery + ?Sized,
    {
        self.sweep_clear(candidate, pivot, scene, false)
            && self.sweep_clear(pivot, candidate, scene, true)
    }

    fn sweep_clear<S>(&self, from: Vec3, to: Vec3, scene: &S, ignore_camera: bool) -> bool
    where
        S: SceneQuery + ?Sized,
    {
        let delta = to - from;
        let distance = delta.length();
        if distance < MIN_PROBE_LENGTH {
            return true;
        }

        let hit =
            scene.cast_volumetric_ray(from, self.config.probe_radius, delta / distance, distance);
        match hit {
            None => true,
            Some(hit) => {
                hit.is_trigger
                    || hit.entity == self.subject
                    || (ignore_camera && hit.entity == self.camera)
            }
        }
    }
}
