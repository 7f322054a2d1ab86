//! Orientation Model
//!
//! Horizontal and vertical aim angles (degrees), the optional horizontal
//! rotation clamp around a reference heading, and the direction lock used
//! during short scripted movements.
//!
//! Convention: Y is up, the view looks along local `+Z`, a positive
//! horizontal angle turns the view from `+Z` toward `+X`, and a positive
//! vertical angle tilts the view up.

use glam::{EulerRot, Quat, Vec2, Vec3};

/// Squared length below which a direction is treated as absent.
const DIRECTION_EPSILON_SQ: f32 = 1e-8;

/// Drop the vertical component of a direction.
#[inline]
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Unsigned angle between two vectors in degrees, zero if either is degenerate.
pub fn angle_between(a: Vec3, b: Vec3) -> f32 {
    let denom = (a.length_squared() * b.length_squared()).sqrt();
    if denom < DIRECTION_EPSILON_SQ {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Angle from `from` to `to` in degrees, negative when `from × to` points down.
///
/// For horizontal vectors this is positive when `to` lies toward increasing
/// horizontal angle (clockwise seen from above).
pub fn signed_horizontal_angle(from: Vec3, to: Vec3) -> f32 {
    let angle = angle_between(from, to);
    if from.cross(to).y < 0.0 { -angle } else { angle }
}

/// Heading of a rotation in degrees: the horizontal angle of its `+Z` axis.
pub fn heading_degrees(rotation: Quat) -> f32 {
    let forward = rotation * Vec3::Z;
    if flatten(forward).length_squared() < DIRECTION_EPSILON_SQ {
        return 0.0;
    }
    forward.x.atan2(forward.z).to_degrees()
}

/// Accumulated aim angles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    /// Horizontal angle (degrees), unbounded
    pub h: f32,
    /// Vertical angle (degrees), clamped on every integration
    pub v: f32,
}

impl Orientation {
    pub fn new(h: f32, v: f32) -> Self {
        Self { h, v }
    }

    /// Add `(delta_h, delta_v)` and clamp the vertical angle to `[min_v, max_v]`.
    pub fn integrate(&mut self, delta: Vec2, min_v: f32, max_v: f32) {
        self.h += delta.x;
        self.v += delta.y;
        self.clamp_vertical(min_v, max_v);
    }

    /// Clamp the vertical angle. An inverted range resolves to `min_v`.
    pub fn clamp_vertical(&mut self, min_v: f32, max_v: f32) {
        self.v = self.v.min(max_v).max(min_v);
    }

    /// Rotation about the world up axis only.
    pub fn heading_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.h.to_radians())
    }

    /// Full aim rotation: heading, then pitch.
    pub fn aim_rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.h.to_radians(), -self.v.to_radians(), 0.0)
    }

    /// View direction of the aim rotation.
    pub fn forward(&self) -> Vec3 {
        self.aim_rotation() * Vec3::Z
    }
}

/// Limits horizontal rotation to a window around a reference heading.
///
/// The window is `[left, right]` in signed degrees relative to the
/// reference, positive to the right. A zero reference disables clamping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HorizontalClamp {
    reference: Vec3,
    left: f32,
    right: f32,
}

impl HorizontalClamp {
    /// Clamp around `reference` (flattened) with the given limits.
    pub fn new(left: f32, right: f32, reference: Vec3) -> Self {
        Self {
            reference: flatten(reference),
            left,
            right,
        }
    }

    /// A clamp that never limits rotation.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Whether a usable reference heading is set.
    pub fn is_active(&self) -> bool {
        self.reference.is_finite() && self.reference.length_squared() > DIRECTION_EPSILON_SQ
    }

    /// Flattened reference heading.
    pub fn reference(&self) -> Vec3 {
        self.reference
    }

    /// `(left, right)` limits in degrees.
    pub fn limits(&self) -> (f32, f32) {
        (self.left, self.right)
    }

    /// Signed angle of `forward` relative to the reference (degrees).
    pub fn signed_angle(&self, forward: Vec3) -> f32 {
        signed_horizontal_angle(self.reference, flatten(forward))
    }

    /// Input push to take back this tick.
    ///
    /// `push` is this tick's horizontal input magnitude. Input that drives
    /// further past a limit is cancelled; input back toward the window is kept.
    /// The returned value is the whole push, which is usually much larger
    /// than the rotation the same input produced; see
    /// [`saturation`](Self::saturation) for the amount to subtract from `h`.
    pub fn compensation(&self, forward: Vec3, push: f32) -> f32 {
        if !self.is_active() {
            return 0.0;
        }
        let signed = self.signed_angle(forward);
        if (signed < self.left && push < 0.0) || (signed > self.right && push > 0.0) {
            push
        } else {
            0.0
        }
    }

    /// Horizontal angle to subtract this tick so rotation holds at a limit.
    ///
    /// `delta_h` is the rotation this tick's input already applied. Only that
    /// rotation is taken back, and only when [`compensation`](Self::compensation)
    /// cancels input in the same direction, so the view saturates at the limit
    /// instead of springing back by the full push.
    pub fn saturation(&self, forward: Vec3, push: f32, delta_h: f32) -> f32 {
        let excess = self.compensation(forward, push);
        if excess == 0.0 || excess.signum() != delta_h.signum() {
            return 0.0;
        }
        excess.signum() * excess.abs().min(delta_h.abs())
    }
}

/// Tracks an externally supplied heading while locked.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DirectionLock {
    first: Vec3,
    current: Vec3,
    target: Option<Vec3>,
    delta_h: f32,
}

impl DirectionLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock onto `direction`. The first usable direction is captured once.
    pub fn lock(&mut self, direction: Vec3) {
        let flat = flatten(direction);
        if self.first.length_squared() < DIRECTION_EPSILON_SQ {
            self.first = flat;
        }
        self.target = Some(flat);
    }

    /// Chase the lock target by `t` and refresh the heading delta.
    pub fn update(&mut self, t: f32) {
        if let Some(target) = self.target {
            self.current = flatten(self.current.lerp(target, t.clamp(0.0, 1.0)));
            self.delta_h = signed_horizontal_angle(self.first, self.current);
        }
    }

    /// Release the lock and clear all captured directions.
    pub fn unlock(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.target.is_some()
    }

    /// Heading captured when locking began.
    #[inline]
    pub fn first_direction(&self) -> Vec3 {
        self.first
    }

    /// Current smoothed lock heading.
    #[inline]
    pub fn lock_direction(&self) -> Vec3 {
        self.current
    }

    /// Signed heading correction (degrees) from the first to the current lock direction.
    #[inline]
    pub fn delta_h(&self) -> f32 {
        self.delta_h
    }
}
