//! Orbit Camera Controller
//!
//! Third-person rig that orbits a tracked subject. Each tick it turns input
//! into aim angles, keeps the camera out of scene geometry, and eases the
//! applied offsets and field of view toward their targets. The controller
//! is a pure function of its own state plus the [`TickContext`] and scene
//! it is handed: no globals are read.
//!
//! ## Tick order
//!
//! 1. Input aggregation → horizontal/vertical deltas
//! 2. Orientation integration, horizontal clamp compensation, vertical clamp
//! 3. Direction lock update
//! 4. Field of view smoothing
//! 5. Occlusion resolve against the target offsets
//! 6. Offset smoothing toward the resolved targets
//!
//! ## Transform
//!
//! `position = subject + heading * smoothed_pivot + aim * smoothed_cam`,
//! where `heading` is the horizontal-only rotation and `aim` adds pitch.

use glam::{Vec2, Vec3};

use crate::config::RigConfig;
use crate::error::ConfigError;
use crate::input::{AimSpeeds, InputMode, InputSample, LookInput, TouchTracker};
use crate::physics::{EntityId, SceneQuery};

use super::frame::{CameraFrame, SubjectPose, TickContext};
use super::intent::CameraIntent;
use super::occlusion::{OcclusionProbe, OcclusionResolver, Resolution};
use super::orientation::{DirectionLock, HorizontalClamp, Orientation};
use super::smoothing::OffsetSmoother;

/// Entity ids the rig compares scene hits against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RigEntities {
    /// The camera rig's own entity
    pub camera: EntityId,
    /// The tracked subject
    pub subject: EntityId,
}

impl RigEntities {
    pub fn new(camera: EntityId, subject: EntityId) -> Self {
        Self { camera, subject }
    }
}

/// Third-person orbit camera controller.
#[derive(Clone, Debug)]
pub struct OrbitCameraController {
    config: RigConfig,
    entities: RigEntities,
    look: LookInput,
    orientation: Orientation,
    clamp: HorizontalClamp,
    lock: DirectionLock,
    intent: CameraIntent,
    smoother: OffsetSmoother,
    resolver: OcclusionResolver,
    last_resolution: Resolution,
    subject: SubjectPose,
    recoil_angle: f32,
}

static_assertions::assert_impl_all!(OrbitCameraController: Send, Sync, Clone);

impl OrbitCameraController {
    /// Create a rig behind `subject`, facing the subject's heading.
    ///
    /// Applied offsets start exactly on the configured defaults. Advisory
    /// configuration warnings are logged once here, and so is a config that
    /// fails [`RigConfig::validate`]; use [`try_new`](Self::try_new) to
    /// reject one instead.
    pub fn new(config: RigConfig, subject: SubjectPose, entities: RigEntities) -> Self {
        if let Err(err) = config.validate() {
            log::warn!("OrbitCameraController: {err}");
        }
        for note in config.advisories() {
            log::warn!("OrbitCameraController: {note}");
        }

        let intent = CameraIntent::from_config(&config);
        let smoother =
            OffsetSmoother::new(config.pivot_offset, config.cam_offset, config.default_fov);
        let resolver = OcclusionResolver::new(config.collision, entities.camera, entities.subject);

        Self {
            look: LookInput::new(config.input_mode),
            orientation: Orientation::new(subject.heading(), 0.0),
            clamp: HorizontalClamp::disabled(),
            lock: DirectionLock::new(),
            last_resolution: Resolution::clear(config.cam_offset),
            intent,
            smoother,
            resolver,
            entities,
            subject,
            recoil_angle: 0.0,
            config,
        }
    }

    /// Validate `config` and create a rig.
    pub fn try_new(
        config: RigConfig,
        subject: SubjectPose,
        entities: RigEntities,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, subject, entities))
    }

    /// Throw away all transient state and start over behind `subject`.
    pub fn reinitialize(&mut self, subject: SubjectPose) {
        let input_mode = self.look.mode();
        *self = Self::new(self.config.clone(), subject, self.entities);
        self.look.set_mode(input_mode);
    }

    /// Advance the rig by one tick and return the camera frame to apply.
    pub fn tick<S>(&mut self, ctx: &TickContext<'_>, scene: &S) -> CameraFrame
    where
        S: SceneQuery + ?Sized,
    {
        let dt = if ctx.dt.is_finite() { ctx.dt.max(0.0) } else { 0.0 };
        self.subject = ctx.subject;

        self.update_orientation(ctx.input, dt);

        if self.lock.is_locked() {
            self.lock
                .update(self.config.lock_follow_rate * self.config.smooth * dt);
        }

        self.smoother.step_fov(self.intent.fov, dt);

        let probe = self.probe();
        let resolution = self
            .resolver
            .resolve(&probe, self.intent.custom_offset, scene);
        let (target_pivot, target_cam) = resolution.interpolation_targets(&self.intent);
        self.smoother
            .step_offsets(target_pivot, target_cam, self.config.smooth, dt);
        self.last_resolution = resolution;

        self.frame()
    }

    fn update_orientation(&mut self, input: &InputSample, dt: f32) {
        let speeds = AimSpeeds::new(
            self.config.horizontal_aiming_speed,
            self.config.vertical_aiming_speed,
        );
        let delta = self.look.aggregate(input, dt, speeds);
        self.orientation.h += delta.x;
        self.orientation.v += delta.y;

        if self.clamp.is_active() {
            let push = self.clamp_push(input, dt);
            let forward = self.orientation.forward();
            self.orientation.h -= self.clamp.saturation(forward, push, delta.x);
        }

        self.orientation
            .clamp_vertical(self.config.min_vertical_angle, self.intent.max_vertical_angle);
    }

    // Horizontal input magnitude used to hold rotation at a clamp limit
    fn clamp_push(&self, input: &InputSample, dt: f32) -> f32 {
        let speed = self.config.horizontal_aiming_speed;
        let direct = self.look.direct_axis(input).clamp(-1.0, 1.0) * speed;
        let analog =
            input.analog.x.clamp(-1.0, 1.0) * self.config.clamp_analog_rate * speed * dt;
        direct + analog
    }

    fn probe(&self) -> OcclusionProbe {
        OcclusionProbe {
            subject_position: self.subject.position,
            heading: self.orientation.heading_rotation(),
            aim: self.orientation.aim_rotation(),
            pivot_offset: self.intent.pivot_offset,
            cam_offset: self.intent.cam_offset,
        }
    }

    /// Frame for the current state and last seen subject pose.
    pub fn frame(&self) -> CameraFrame {
        let heading = self.orientation.heading_rotation();
        let aim = self.orientation.aim_rotation();
        CameraFrame {
            position: self.subject.position
                + heading * self.smoother.pivot()
                + aim * self.smoother.cam(),
            rotation: aim,
            fov: self.smoother.fov(),
        }
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    /// Current horizontal angle in degrees.
    #[inline]
    pub fn horizontal_angle(&self) -> f32 {
        self.orientation.h
    }

    /// Current vertical angle in degrees.
    #[inline]
    pub fn vertical_angle(&self) -> f32 {
        self.orientation.v
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Heading correction derived from the direction lock (degrees).
    #[inline]
    pub fn delta_h(&self) -> f32 {
        self.lock.delta_h()
    }

    #[inline]
    pub fn direction_lock(&self) -> &DirectionLock {
        &self.lock
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    #[inline]
    pub fn horizontal_clamp(&self) -> &HorizontalClamp {
        &self.clamp
    }

    /// Last recorded recoil bounce in degrees. The rig does not apply it.
    #[inline]
    pub fn recoil_angle(&self) -> f32 {
        self.recoil_angle
    }

    /// Distance between `final_pivot` and the applied pivot offset.
    pub fn remaining_pivot_gap(&self, final_pivot: Vec3) -> f32 {
        self.smoother.remaining_pivot_gap(final_pivot)
    }

    #[inline]
    pub fn smoothed_pivot_offset(&self) -> Vec3 {
        self.smoother.pivot()
    }

    #[inline]
    pub fn smoothed_cam_offset(&self) -> Vec3 {
        self.smoother.cam()
    }

    /// Applied field of view in degrees.
    #[inline]
    pub fn fov(&self) -> f32 {
        self.smoother.fov()
    }

    #[inline]
    pub fn intent(&self) -> &CameraIntent {
        &self.intent
    }

    /// Outcome of the most recent occlusion resolve.
    #[inline]
    pub fn last_resolution(&self) -> Resolution {
        self.last_resolution
    }

    #[inline]
    pub fn input_mode(&self) -> InputMode {
        self.look.mode()
    }

    #[inline]
    pub fn touch(&self) -> &TouchTracker {
        self.look.touch()
    }

    #[inline]
    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    #[inline]
    pub fn entities(&self) -> RigEntities {
        self.entities
    }

    // ------------------------------------------------------------------
    // Control API
    // ------------------------------------------------------------------

    /// Replace the whole intent at once.
    ///
    /// The vertical ceiling is floored at the configured minimum.
    pub fn set_intent(&mut self, mut intent: CameraIntent) {
        intent.max_vertical_angle = intent.max_vertical_angle.max(self.config.min_vertical_angle);
        self.intent = intent;
        self.enforce_vertical_range();
    }

    /// Use custom pivot and camera offsets.
    pub fn set_target_offsets(&mut self, pivot_offset: Vec3, cam_offset: Vec3) {
        log::debug!("OrbitCameraController: custom offsets pivot={pivot_offset} cam={cam_offset}");
        self.intent.set_offsets(pivot_offset, cam_offset);
    }

    /// Go back to the configured offsets.
    pub fn reset_target_offsets(&mut self) {
        if self.intent.custom_offset {
            log::debug!("OrbitCameraController: offsets reset to defaults");
        }
        self.intent.reset_offsets();
    }

    pub fn set_x_cam_offset(&mut self, x: f32) {
        self.intent.set_cam_offset_x(x);
    }

    pub fn reset_x_cam_offset(&mut self) {
        self.intent.reset_cam_offset_x();
    }

    pub fn set_y_cam_offset(&mut self, y: f32) {
        self.intent.set_cam_offset_y(y);
    }

    pub fn reset_y_cam_offset(&mut self) {
        self.intent.reset_cam_offset_y();
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.intent.set_fov(fov);
    }

    pub fn reset_fov(&mut self) {
        self.intent.reset_fov();
    }

    /// Set the vertical clamp ceiling in degrees. Takes effect immediately.
    pub fn set_max_vertical_angle(&mut self, angle: f32) {
        self.intent
            .set_max_vertical_angle(angle, self.config.min_vertical_angle);
        self.enforce_vertical_range();
    }

    pub fn reset_max_vertical_angle(&mut self) {
        self.intent.reset_max_vertical_angle();
        self.enforce_vertical_range();
    }

    fn enforce_vertical_range(&mut self) {
        self.orientation
            .clamp_vertical(self.config.min_vertical_angle, self.intent.max_vertical_angle);
    }

    /// Track `direction` instead of free aim. The first call captures the
    /// reference heading; later calls only move the target.
    pub fn lock_on_direction(&mut self, direction: Vec3) {
        if !self.lock.is_locked() {
            log::debug!("OrbitCameraController: direction lock engaged");
        }
        self.lock.lock(direction);
    }

    /// Release the direction lock and clear its state.
    pub fn unlock_on_direction(&mut self) {
        if self.lock.is_locked() {
            log::debug!("OrbitCameraController: direction lock released");
        }
        self.lock.unlock();
    }

    /// Record a vertical recoil bounce in degrees.
    pub fn bounce_vertical(&mut self, degrees: f32) {
        self.recoil_angle = degrees;
    }

    pub fn clear_recoil(&mut self) {
        self.recoil_angle = 0.0;
    }

    /// Limit horizontal rotation to `[left, right]` degrees around `reference`.
    ///
    /// A zero reference turns the clamp off.
    pub fn toggle_clamp_horizontal(&mut self, left: f32, right: f32, reference: Vec3) {
        self.clamp = HorizontalClamp::new(left, right, reference);
        log::debug!(
            "OrbitCameraController: horizontal clamp {}",
            if self.clamp.is_active() { "on" } else { "off" }
        );
    }

    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.look.set_mode(mode);
    }

    /// Add aim directly, bypassing input aggregation. The vertical clamp still applies.
    pub fn rotate(&mut self, delta: Vec2) {
        self.orientation.integrate(
            delta,
            self.config.min_vertical_angle,
            self.intent.max_vertical_angle,
        );
    }
}
