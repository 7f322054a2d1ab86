//! Orbit Camera Engine Library
//!
//! A third-person orbit camera rig. The rig follows a subject from an
//! offset anchor, turns touch or analog input into aim, keeps the camera
//! out of scene geometry, and eases offsets and field of view toward their
//! targets. Scene access goes through a single volumetric ray cast, so the
//! rig runs against any physics backend or none.
//!
//! # Modules
//!
//! - [`camera`] - Orbit camera controller, orientation, smoothing, occlusion
//! - [`input`] - Touch and analog input aggregation
//! - [`physics`] - Scene query seam and a box scene implementing it
//! - [`config`] - Rig configuration with JSON load/save
//! - [`error`] - Configuration errors
//!
//! # Example
//!
//! ```ignore
//! use orbit_cam_engine::{
//!     AabbScene, EntityId, InputSample, OrbitCameraController, RigConfig, RigEntities,
//!     SubjectPose, TickContext,
//! };
//! use glam::{Vec2, Vec3};
//!
//! let mut scene = AabbScene::new();
//! scene.add_solid(EntityId::new(10), Vec3::new(-2.0, 0.0, -1.6), Vec3::new(2.0, 3.0, -1.4));
//!
//! let mut rig = OrbitCameraController::new(
//!     RigConfig::default(),
//!     SubjectPose::default(),
//!     RigEntities::new(EntityId::new(1), EntityId::new(2)),
//! );
//!
//! let input = InputSample::analog(Vec2::new(0.5, 0.0));
//! let frame = rig.tick(&TickContext::new(1.0 / 60.0, SubjectPose::default(), &input), &scene);
//! println!("camera at {} looking {}", frame.position, frame.forward());
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod physics;

// Re-export the rig surface at crate level for convenience
pub use camera::{
    CameraFrame, CameraIntent, OrbitCameraController, RenderCamera, RigEntities, SubjectPose,
    TickContext,
};
pub use config::{CollisionConfig, RigConfig};
pub use error::ConfigError;
pub use input::{InputMode, InputSample, TouchContact, TouchPhase};
pub use physics::{AabbScene, EmptyScene, EntityId, RayHit, SceneQuery};
