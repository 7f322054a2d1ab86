//! Orbit Rig Demo
//!
//! Run with: `cargo run --bin orbit_rig_demo [config.json]`
//!
//! Headless walkthrough of the orbit camera rig. A scripted subject walks
//! past a wall while the rig turns, locks onto a direction, clamps its
//! horizontal range, and switches to a custom shoulder offset. Each phase
//! logs the produced camera frames.
//!
//! Set `RUST_LOG=debug` (or `trace`) to see rig transitions and occlusion
//! steps.

use std::path::Path;

use glam::{Quat, Vec2, Vec3};
use orbit_cam_engine::{
    AabbScene, CameraFrame, EntityId, InputMode, InputSample, OrbitCameraController,
    RenderCamera, RigConfig, RigEntities, SubjectPose, TickContext,
};

const TICK: f32 = 1.0 / 60.0;

const CAMERA: EntityId = EntityId(1);
const SUBJECT: EntityId = EntityId(2);
const WALL: EntityId = EntityId(10);
const PILLAR: EntityId = EntityId(11);
const PICKUP_ZONE: EntityId = EntityId(12);

/// Stand-in for an engine camera object.
#[derive(Debug, Default)]
struct LogCamera {
    position: Vec3,
    rotation: Quat,
    fov: f32,
}

impl RenderCamera for LogCamera {
    fn set_field_of_view(&mut self, fov: f32) {
        self.fov = fov;
    }

    fn set_transform(&mut self, position: Vec3, rotation: Quat) {
        self.position = position;
        self.rotation = rotation;
    }
}

fn build_scene() -> AabbScene {
    let mut scene = AabbScene::new();
    // Wall behind the start position
    scene.add_solid(WALL, Vec3::new(-3.0, 0.0, -1.6), Vec3::new(3.0, 3.0, -1.4));
    // Pillar the subject walks past
    scene.add_solid(PILLAR, Vec3::new(4.2, 0.0, 2.5), Vec3::new(4.8, 4.0, 3.1));
    // Triggers never block the view
    scene.add_trigger(PICKUP_ZONE, Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 2.0, 1.0));
    scene
}

fn load_config() -> RigConfig {
    let Some(path) = std::env::args().nth(1) else {
        return RigConfig::default();
    };
    match RigConfig::load(Path::new(&path)) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Failed to load {path}: {err}, using defaults");
            RigConfig::default()
        }
    }
}

fn log_frame(phase: &str, tick: usize, frame: &CameraFrame, rig: &OrbitCameraController) {
    log::info!(
        "[{phase}] tick {tick:3} pos=({:6.2}, {:6.2}, {:6.2}) \
         fwd=({:5.2}, {:5.2}, {:5.2}) fov={:5.1} h={:7.2} v={:6.2} steps={}",
        frame.position.x,
        frame.position.y,
        frame.position.z,
        frame.forward().x,
        frame.forward().y,
        frame.forward().z,
        frame.fov,
        rig.horizontal_angle(),
        rig.vertical_angle(),
        rig.last_resolution().steps,
    );
}

/// Scripted subject, scene, and rig.
struct Demo {
    rig: OrbitCameraController,
    scene: AabbScene,
    subject: SubjectPose,
    camera: LogCamera,
}

impl Demo {
    /// Run `ticks` ticks, moving the subject by `velocity` per second.
    fn run_phase(&mut self, phase: &str, velocity: Vec3, input: &InputSample, ticks: usize) {
        for tick in 0..ticks {
            self.subject.position += velocity * TICK;
            let ctx = TickContext::new(TICK, self.subject, input);
            let frame = self.rig.tick(&ctx, &self.scene);
            frame.apply_to(&mut self.camera);
            if tick % 15 == 0 || tick + 1 == ticks {
                log_frame(phase, tick, &frame, &self.rig);
            }
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let subject = SubjectPose::default();
    let rig = match OrbitCameraController::try_new(
        load_config(),
        subject,
        RigEntities::new(CAMERA, SUBJECT),
    ) {
        Ok(rig) => rig,
        Err(err) => {
            log::error!("Invalid rig configuration: {err}");
            std::process::exit(1);
        }
    };

    let mut demo = Demo {
        rig,
        scene: build_scene(),
        subject,
        camera: LogCamera::default(),
    };
    demo.rig.set_input_mode(InputMode::Analog);

    let idle = InputSample::new();
    demo.run_phase("wall", Vec3::ZERO, &idle, 60);

    demo.run_phase("turn", Vec3::ZERO, &InputSample::analog(Vec2::new(1.0, -0.5)), 90);

    demo.rig.lock_on_direction(Vec3::new(1.0, 0.0, 1.0));
    demo.run_phase("lock", Vec3::new(1.5, 0.0, 1.0), &idle, 120);
    log::info!("[lock] delta_h = {:.2}", demo.rig.delta_h());
    demo.rig.unlock_on_direction();

    demo.rig.toggle_clamp_horizontal(-20.0, 20.0, Vec3::Z);
    demo.run_phase("clamp", Vec3::ZERO, &InputSample::analog(Vec2::new(1.0, 0.0)), 120);
    demo.rig.toggle_clamp_horizontal(0.0, 0.0, Vec3::ZERO);

    demo.rig
        .set_target_offsets(Vec3::new(0.0, 1.4, 0.0), Vec3::new(0.6, 0.2, -1.2));
    demo.rig.set_fov(45.0);
    demo.run_phase("shoulder", Vec3::ZERO, &idle, 90);

    demo.rig.reset_target_offsets();
    demo.rig.reset_fov();
    demo.run_phase("reset", Vec3::ZERO, &idle, 90);

    let (axis, angle) = demo.camera.rotation.to_axis_angle();
    log::info!(
        "Final camera: pos={} rot={:.1} deg about {} fov={:.1} remaining pivot gap={:.3}",
        demo.camera.position,
        angle.to_degrees(),
        axis,
        demo.camera.fov,
        demo.rig.remaining_pivot_gap(demo.rig.config().pivot_offset)
    );
}
