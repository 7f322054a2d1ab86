//! Camera Intent
//!
//! The run-time targets the rig is steering toward: pivot and camera
//! offsets, field of view, and the vertical clamp ceiling. Control calls
//! only ever change the intent; actual motion happens later in the
//! interpolator.

use glam::Vec3;

use crate::config::RigConfig;

/// Author-configured values the intent resets to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntentDefaults {
    pub pivot_offset: Vec3,
    pub cam_offset: Vec3,
    pub fov: f32,
    pub max_vertical_angle: f32,
}

impl IntentDefaults {
    pub fn from_config(config: &RigConfig) -> Self {
        Self {
            pivot_offset: config.pivot_offset,
            cam_offset: config.cam_offset,
            fov: config.default_fov,
            max_vertical_angle: config.max_vertical_angle,
        }
    }
}

/// Consolidated camera targets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraIntent {
    /// Target pivot offset
    pub pivot_offset: Vec3,
    /// Target camera offset
    pub cam_offset: Vec3,
    /// Target field of view (degrees)
    pub fov: f32,
    /// Current upper clamp for the vertical angle (degrees)
    pub max_vertical_angle: f32,
    /// Set when offsets were replaced by a caller rather than the defaults
    pub custom_offset: bool,
    defaults: IntentDefaults,
}

impl CameraIntent {
    /// Intent sitting exactly on its defaults.
    pub fn new(defaults: IntentDefaults) -> Self {
        Self {
            pivot_offset: defaults.pivot_offset,
            cam_offset: defaults.cam_offset,
            fov: defaults.fov,
            max_vertical_angle: defaults.max_vertical_angle,
            custom_offset: false,
            defaults,
        }
    }

    pub fn from_config(config: &RigConfig) -> Self {
        Self::new(IntentDefaults::from_config(config))
    }

    #[inline]
    pub fn defaults(&self) -> &IntentDefaults {
        &self.defaults
    }

    /// Replace both offsets and mark them custom.
    pub fn set_offsets(&mut self, pivot_offset: Vec3, cam_offset: Vec3) {
        self.pivot_offset = pivot_offset;
        self.cam_offset = cam_offset;
        self.custom_offset = true;
    }

    /// Restore both offsets to the defaults and clear the custom flag.
    pub fn reset_offsets(&mut self) {
        self.pivot_offset = self.defaults.pivot_offset;
        self.cam_offset = self.defaults.cam_offset;
        self.custom_offset = false;
    }

    pub fn set_cam_offset_x(&mut self, x: f32) {
        self.cam_offset.x = x;
    }

    pub fn reset_cam_offset_x(&mut self) {
        self.cam_offset.x = self.defaults.cam_offset.x;
    }

    pub fn set_cam_offset_y(&mut self, y: f32) {
        self.cam_offset.y = y;
    }

    pub fn reset_cam_offset_y(&mut self) {
        self.cam_offset.y = self.defaults.cam_offset.y;
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    pub fn reset_fov(&mut self) {
        self.fov = self.defaults.fov;
    }

    /// Set the vertical ceiling, never below `min_vertical_angle`.
    pub fn set_max_vertical_angle(&mut self, angle: f32, min_vertical_angle: f32) {
        self.max_vertical_angle = angle.max(min_vertical_angle);
    }

    pub fn reset_max_vertical_angle(&mut self) {
        self.max_vertical_angle = self.defaults.max_vertical_angle;
    }
}
