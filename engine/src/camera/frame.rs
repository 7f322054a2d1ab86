//! Per-tick inputs and outputs of the rig.

use glam::{Quat, Vec3};

use crate::input::InputSample;

use super::orientation::heading_degrees;

/// World pose of the tracked subject, read once per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubjectPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl SubjectPose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Subject at `position` facing the given heading in degrees.
    pub fn facing(position: Vec3, heading_deg: f32) -> Self {
        Self::new(position, Quat::from_rotation_y(heading_deg.to_radians()))
    }

    /// Heading of the subject in degrees.
    pub fn heading(&self) -> f32 {
        heading_degrees(self.rotation)
    }
}

impl Default for SubjectPose {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Quat::IDENTITY)
    }
}

/// Everything one tick depends on besides the scene.
#[derive(Clone, Copy, Debug)]
pub struct TickContext<'a> {
    /// Elapsed time since the previous tick, in seconds
    pub dt: f32,
    /// Subject pose this tick
    pub subject: SubjectPose,
    /// Input sampled this tick
    pub input: &'a InputSample,
}

impl<'a> TickContext<'a> {
    pub fn new(dt: f32, subject: SubjectPose, input: &'a InputSample) -> Self {
        Self { dt, subject, input }
    }
}

/// Camera transform and lens produced by a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFrame {
    /// World position
    pub position: Vec3,
    /// World rotation; the view looks along `rotation * Vec3::Z`
    pub rotation: Quat,
    /// Vertical field of view in degrees
    pub fov: f32,
}

impl CameraFrame {
    /// View direction.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Write this frame into a host camera.
    pub fn apply_to<C: RenderCamera + ?Sized>(&self, camera: &mut C) {
        camera.set_field_of_view(self.fov);
        camera.set_transform(self.position, self.rotation);
    }
}

/// Host camera object the rig drives.
pub trait RenderCamera {
    fn set_field_of_view(&mut self, fov: f32);
    fn set_transform(&mut self, position: Vec3, rotation: Quat);
}
