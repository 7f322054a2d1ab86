//! Camera Module
//!
//! Third-person orbit camera rig. This module is window-system agnostic: it
//! only deals with camera state and math, and reaches the scene through
//! [`SceneQuery`](crate::physics::SceneQuery).
//!
//! # Submodules
//!
//! - [`controller`] - The rig itself and its control API
//! - [`orientation`] - Aim angles, horizontal clamp, direction lock
//! - [`intent`] - Target offsets, FOV, and vertical ceiling
//! - [`smoothing`] - Exponential chase of applied offsets and FOV
//! - [`occlusion`] - Bidirectional visibility search along the camera offset
//! - [`frame`] - Per-tick inputs and the produced camera frame

pub mod controller;
pub mod frame;
pub mod intent;
pub mod occlusion;
pub mod orientation;
pub mod smoothing;

pub use controller::{OrbitCameraController, RigEntities};
pub use frame::{CameraFrame, RenderCamera, SubjectPose, TickContext};
pub use intent::{CameraIntent, IntentDefaults};
pub use occlusion::{OcclusionProbe, OcclusionResolver, Resolution};
pub use orientation::{
    DirectionLock, HorizontalClamp, Orientation, angle_between, flatten, heading_degrees,
    signed_horizontal_angle,
};
pub use smoothing::OffsetSmoother;
