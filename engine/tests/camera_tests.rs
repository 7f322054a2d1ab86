//! Camera Tests - Orbit Rig Behaviour
//!
//! End-to-end tests for OrbitCameraController: initialization, vertical
//! bounds, horizontal clamp, direction lock, offsets, and FOV.

use glam::{Quat, Vec2, Vec3};
use orbit_cam_engine::camera::signed_horizontal_angle;
use orbit_cam_engine::{
    CameraFrame, EmptyScene, EntityId, InputMode, InputSample, OrbitCameraController,
    RenderCamera, RigConfig, RigEntities, SubjectPose, TickContext, TouchContact, TouchPhase,
};

const DT: f32 = 1.0 / 60.0;

fn entities() -> RigEntities {
    RigEntities::new(EntityId::new(1), EntityId::new(2))
}

fn analog_rig() -> OrbitCameraController {
    let mut rig =
        OrbitCameraController::new(RigConfig::default(), SubjectPose::default(), entities());
    rig.set_input_mode(InputMode::Analog);
    rig
}

fn tick(rig: &mut OrbitCameraController, input: &InputSample) -> CameraFrame {
    rig.tick(&TickContext::new(DT, SubjectPose::default(), input), &EmptyScene)
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn test_initial_state_matches_defaults() {
    let config = RigConfig::default();
    let rig = OrbitCameraController::new(config.clone(), SubjectPose::default(), entities());

    assert_eq!(rig.smoothed_pivot_offset(), config.pivot_offset);
    assert_eq!(rig.smoothed_cam_offset(), config.cam_offset);
    assert_eq!(rig.fov(), config.default_fov);
    assert!(!rig.intent().custom_offset);
    assert!(!rig.is_locked());
    assert_eq!(rig.delta_h(), 0.0);
    assert_eq!(rig.recoil_angle(), 0.0);
}

#[test]
fn test_first_tick_without_input_holds_still() {
    let mut rig = analog_rig();
    let before = rig.frame();
    let after = tick(&mut rig, &InputSample::new());

    assert!((after.position - before.position).length() < 1e-5);
    assert_eq!(after.rotation, before.rotation);
    assert_eq!(after.fov, 60.0);
}

#[test]
fn test_frame_follows_moving_subject() {
    let mut rig = analog_rig();
    let input = InputSample::new();
    let subject = SubjectPose::new(Vec3::new(5.0, 0.0, 3.0), Quat::IDENTITY);
    let frame = rig.tick(&TickContext::new(DT, subject, &input), &EmptyScene);

    let expected = subject.position + Vec3::new(0.4, 1.7, -2.0);
    assert!((frame.position - expected).length() < 1e-4);
}

// ============================================================================
// Orientation
// ============================================================================

#[test]
fn test_vertical_angle_stays_in_bounds() {
    let mut rig = analog_rig();
    for i in 0..2000 {
        // Sweep through long runs of up and down input
        let y = ((i as f32) * 0.013).sin() * 3.0;
        tick(&mut rig, &InputSample::analog(Vec2::new(0.3, y)));
        let v = rig.vertical_angle();
        assert!((-60.0..=30.0).contains(&v), "v = {v} at tick {i}");
    }
}

#[test]
fn test_analog_vertical_is_inverted() {
    let mut rig = analog_rig();
    tick(&mut rig, &InputSample::analog(Vec2::new(0.0, 1.0)));
    assert!(rig.vertical_angle() < 0.0);
    assert!(rig.frame().forward().y < 0.0);
}

#[test]
fn test_touch_look_on_right_half_only() {
    let mut rig =
        OrbitCameraController::new(RigConfig::default(), SubjectPose::default(), entities());

    let left = TouchContact::new(7, TouchPhase::Began, Vec2::new(100.0, 300.0), Vec2::ZERO);
    tick(&mut rig, &InputSample::touches(vec![left], 1000.0));
    let left_moved =
        TouchContact::new(7, TouchPhase::Moved, Vec2::new(150.0, 300.0), Vec2::new(50.0, 0.0));
    tick(&mut rig, &InputSample::touches(vec![left_moved], 1000.0));
    assert_eq!(rig.horizontal_angle(), 0.0);
    assert_eq!(rig.touch().look_contact(), None);

    let right = TouchContact::new(8, TouchPhase::Began, Vec2::new(800.0, 300.0), Vec2::ZERO);
    tick(&mut rig, &InputSample::touches(vec![right], 1000.0));
    let right_moved =
        TouchContact::new(8, TouchPhase::Moved, Vec2::new(830.0, 300.0), Vec2::new(30.0, 0.0));
    tick(&mut rig, &InputSample::touches(vec![right_moved], 1000.0));

    assert_eq!(rig.touch().look_contact(), Some(8));
    assert!((rig.horizontal_angle() - 30.0 * 6.0 * DT).abs() < 1e-4);
}

// ============================================================================
// Horizontal clamp
// ============================================================================

#[test]
fn test_clamp_holds_against_sustained_input() {
    let mut rig = analog_rig();
    rig.toggle_clamp_horizontal(-30.0, 30.0, Vec3::Z);

    let push_right = InputSample::analog(Vec2::new(1.0, 0.0));
    let mut reached_limit = false;
    for i in 0..600 {
        tick(&mut rig, &push_right);
        let flat_forward = rig.frame().forward() * Vec3::new(1.0, 0.0, 1.0);
        let signed = signed_horizontal_angle(Vec3::Z, flat_forward);
        assert!(signed <= 30.0 + 0.01, "signed angle {signed} past right limit");

        // Once at the limit the view stays there instead of springing back
        if reached_limit {
            assert!(signed >= 29.85, "fell back to {signed} at tick {i}");
        }
        reached_limit |= signed >= 29.9;
    }
    assert!(reached_limit);
    assert!((rig.horizontal_angle() - 30.0).abs() < 0.15);
}

#[test]
fn test_clamp_does_not_block_reversal() {
    let mut rig = analog_rig();
    rig.toggle_clamp_horizontal(-30.0, 30.0, Vec3::Z);
    rig.rotate(Vec2::new(35.0, 0.0));

    let push_left = InputSample::analog(Vec2::new(-1.0, 0.0));
    let mut last = rig.horizontal_angle();
    for _ in 0..30 {
        tick(&mut rig, &push_left);
        assert!(rig.horizontal_angle() < last);
        last = rig.horizontal_angle();
    }
}

#[test]
fn test_zero_reference_disables_clamp() {
    let mut rig = analog_rig();
    rig.toggle_clamp_horizontal(-10.0, 10.0, Vec3::ZERO);
    assert!(!rig.horizontal_clamp().is_active());

    let push_right = InputSample::analog(Vec2::new(1.0, 0.0));
    for _ in 0..300 {
        tick(&mut rig, &push_right);
    }
    assert!((rig.horizontal_angle() - 30.0).abs() < 1e-2);
}

// ============================================================================
// Direction lock
// ============================================================================

#[test]
fn test_lock_tracks_target_heading() {
    let mut rig = analog_rig();
    rig.lock_on_direction(Vec3::Z);
    tick(&mut rig, &InputSample::new());
    assert!(rig.is_locked());
    assert!(rig.delta_h().abs() < 1e-3);

    rig.lock_on_direction(Vec3::X);
    let mut last = rig.delta_h();
    for _ in 0..600 {
        tick(&mut rig, &InputSample::new());
        assert!(rig.delta_h() >= last - 1e-4);
        last = rig.delta_h();
    }
    assert!((rig.delta_h() - 90.0).abs() < 1.0);
    assert_eq!(rig.direction_lock().first_direction(), Vec3::Z);
}

#[test]
fn test_unlock_resets_lock_state() {
    let mut rig = analog_rig();
    rig.lock_on_direction(Vec3::new(1.0, 0.5, 1.0));
    for _ in 0..10 {
        tick(&mut rig, &InputSample::new());
    }
    rig.unlock_on_direction();

    assert!(!rig.is_locked());
    assert_eq!(rig.delta_h(), 0.0);
    assert_eq!(rig.direction_lock().first_direction(), Vec3::ZERO);
    assert_eq!(rig.direction_lock().lock_direction(), Vec3::ZERO);
}

// ============================================================================
// Offsets and FOV
// ============================================================================

#[test]
fn test_custom_offsets_converge_and_reset() {
    let mut rig = analog_rig();
    let pivot = Vec3::new(0.0, 1.4, 0.0);
    let cam = Vec3::new(0.6, 0.0, -1.2);
    rig.set_target_offsets(pivot, cam);
    assert!(rig.intent().custom_offset);

    for _ in 0..240 {
        tick(&mut rig, &InputSample::new());
    }
    assert!((rig.smoothed_pivot_offset() - pivot).length() < 1e-3);
    assert!((rig.smoothed_cam_offset() - cam).length() < 1e-3);
    assert!(rig.remaining_pivot_gap(pivot) < 1e-3);

    rig.reset_target_offsets();
    assert!(!rig.intent().custom_offset);
    for _ in 0..240 {
        tick(&mut rig, &InputSample::new());
    }
    assert!((rig.smoothed_cam_offset() - Vec3::new(0.4, 0.0, -2.0)).length() < 1e-3);
}

#[test]
fn test_single_axis_offset_overrides() {
    let mut rig = analog_rig();
    rig.set_x_cam_offset(-0.4);
    rig.set_y_cam_offset(0.3);
    assert_eq!(rig.intent().cam_offset, Vec3::new(-0.4, 0.3, -2.0));

    rig.reset_x_cam_offset();
    rig.reset_y_cam_offset();
    assert_eq!(rig.intent().cam_offset, Vec3::new(0.4, 0.0, -2.0));
}

#[test]
fn test_fov_moves_at_unit_rate() {
    let mut rig = analog_rig();
    rig.set_fov(30.0);
    let input = InputSample::new();
    rig.tick(&TickContext::new(0.25, SubjectPose::default(), &input), &EmptyScene);
    assert!((rig.fov() - 52.5).abs() < 1e-4);

    rig.reset_fov();
    assert_eq!(rig.intent().fov, 60.0);
}

#[test]
fn test_frame_applies_to_render_camera() {
    #[derive(Default)]
    struct Recorder {
        fov: f32,
        position: Vec3,
        rotation: Quat,
    }

    impl RenderCamera for Recorder {
        fn set_field_of_view(&mut self, fov: f32) {
            self.fov = fov;
        }

        fn set_transform(&mut self, position: Vec3, rotation: Quat) {
            self.position = position;
            self.rotation = rotation;
        }
    }

    let mut rig = analog_rig();
    let frame = tick(&mut rig, &InputSample::analog(Vec2::new(1.0, 0.0)));
    let mut camera = Recorder::default();
    frame.apply_to(&mut camera);

    assert_eq!(camera.fov, frame.fov);
    assert_eq!(camera.position, frame.position);
    assert_eq!(camera.rotation, frame.rotation);
}
