//! Offset and FOV smoothing
//!
//! Exponential chase of the applied pivot offset, camera offset, and field
//! of view toward their targets. Each step moves a clamped fraction of the
//! remaining gap, so values approach targets asymptotically and never
//! overshoot.

use glam::Vec3;

/// Values actually applied to the camera transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetSmoother {
    pivot: Vec3,
    cam: Vec3,
    fov: f32,
}

impl OffsetSmoother {
    /// Start exactly on the given values.
    pub fn new(pivot: Vec3, cam: Vec3, fov: f32) -> Self {
        Self { pivot, cam, fov }
    }

    #[inline]
    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    #[inline]
    pub fn cam(&self) -> Vec3 {
        self.cam
    }

    #[inline]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Move both offsets toward their targets by `smooth * dt` of the gap.
    pub fn step_offsets(&mut self, target_pivot: Vec3, target_cam: Vec3, smooth: f32, dt: f32) {
        let t = (smooth * dt).clamp(0.0, 1.0);
        self.pivot = self.pivot.lerp(target_pivot, t);
        self.cam = self.cam.lerp(target_cam, t);
    }

    /// Move the field of view toward `target` at unit rate.
    pub fn step_fov(&mut self, target: f32, dt: f32) {
        let t = dt.clamp(0.0, 1.0);
        self.fov += (target - self.fov) * t;
    }

    /// Distance between a prospective final pivot offset and the applied one.
    pub fn remaining_pivot_gap(&self, final_pivot: Vec3) -> f32 {
        (final_pivot - self.pivot).length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_moves_fraction_of_gap() {
        let mut s = OffsetSmoother::new(Vec3::ZERO, Vec3::ZERO, 60.0);
        s.step_offsets(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 0.0, -4.0), 10.0, 0.05);
        assert!((s.pivot().y - 1.0).abs() < 1e-6);
        assert!((s.cam().z + 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_large_dt_does_not_overshoot() {
        let mut s = OffsetSmoother::new(Vec3::ZERO, Vec3::ZERO, 60.0);
        s.step_offsets(Vec3::ONE, Vec3::ONE, 10.0, 5.0);
        assert_eq!(s.pivot(), Vec3::ONE);
        s.step_fov(40.0, 3.0);
        assert_eq!(s.fov(), 40.0);
    }

    #[test]
    fn test_asymptotic_convergence() {
        let mut s = OffsetSmoother::new(Vec3::ZERO, Vec3::ZERO, 60.0);
        let target = Vec3::new(0.0, 0.0, -2.0);
        let mut last_gap = f32::MAX;
        for _ in 0..30 {
            s.step_offsets(Vec3::ZERO, target, 10.0, 1.0 / 60.0);
            let gap = (target - s.cam()).length();
            assert!(gap < last_gap);
            assert!(gap > 0.0);
            last_gap = gap;
        }
    }

    #[test]
    fn test_fov_unit_rate() {
        let mut s = OffsetSmoother::new(Vec3::ZERO, Vec3::ZERO, 60.0);
        s.step_fov(40.0, 0.25);
        assert!((s.fov() - 55.0).abs() < 1e-5);
    }

    #[test]
    fn test_remaining_pivot_gap() {
        let s = OffsetSmoother::new(Vec3::new(0.0, 1.7, 0.0), Vec3::ZERO, 60.0);
        assert!((s.remaining_pivot_gap(Vec3::new(0.0, 1.2, 0.0)) - 0.5).abs() < 1e-6);
        assert_eq!(s.remaining_pivot_gap(Vec3::new(0.0, 1.7, 0.0)), 0.0);
    }
}
