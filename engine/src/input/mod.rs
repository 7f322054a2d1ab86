//! Input Module
//!
//! Turns one tick of raw input into horizontal and vertical aim deltas
//! (degrees). The host samples its devices and hands the rig an
//! [`InputSample`]; nothing here polls a device or a global.
//!
//! # Example
//!
//! ```rust,ignore
//! use orbit_cam_engine::input::{InputMode, InputSample, LookInput, AimSpeeds};
//!
//! let mut look = LookInput::new(InputMode::Analog);
//! let sample = InputSample::analog(glam::Vec2::new(1.0, 0.0));
//! let delta = look.aggregate(&sample, 1.0 / 60.0, AimSpeeds::new(6.0, 6.0));
//! // delta.x = 0.1 degrees of horizontal aim
//! ```

pub mod touch;

pub use touch::{TouchContact, TouchPhase, TouchTracker};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which input source drives aim this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Touch contacts on the right half of the viewport
    #[default]
    Touch,
    /// Named analog axes (gamepad stick or mapped mouse axes)
    Analog,
}

/// Everything the rig reads from input devices for one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSample {
    /// Touch contacts reported this tick
    pub contacts: Vec<TouchContact>,
    /// Viewport width in pixels, used to split the screen into halves
    pub viewport_width: f32,
    /// Analog aim axes, each nominally in [-1, 1]
    pub analog: Vec2,
    /// Raw pointer axes, used by horizontal clamp compensation
    pub pointer: Vec2,
}

impl InputSample {
    /// A sample with no input at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sample carrying only analog axes.
    pub fn analog(axes: Vec2) -> Self {
        Self {
            analog: axes,
            ..Default::default()
        }
    }

    /// A sample carrying only touch contacts.
    pub fn touches(contacts: Vec<TouchContact>, viewport_width: f32) -> Self {
        Self {
            contacts,
            viewport_width,
            ..Default::default()
        }
    }

    /// Set the pointer axes.
    pub fn with_pointer(mut self, pointer: Vec2) -> Self {
        self.pointer = pointer;
        self
    }
}

/// Per-axis aim speeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimSpeeds {
    pub horizontal: f32,
    pub vertical: f32,
}

impl AimSpeeds {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Input aggregator: mode selection plus touch slot state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookInput {
    mode: InputMode,
    touch: TouchTracker,
    // Raw pixel delta of the look contact from the last touch tick
    last_look: Vec2,
}

impl LookInput {
    /// Create an aggregator in the given mode.
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            touch: TouchTracker::new(),
            last_look: Vec2::ZERO,
        }
    }

    /// Active input mode.
    #[inline]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Switch input mode. Leaving touch mode frees any held contacts.
    pub fn set_mode(&mut self, mode: InputMode) {
        if mode != self.mode {
            log::debug!("LookInput: mode {:?} -> {:?}", self.mode, mode);
            if self.mode == InputMode::Touch {
                self.touch.reset();
                self.last_look = Vec2::ZERO;
            }
            self.mode = mode;
        }
    }

    /// Touch slot state.
    #[inline]
    pub fn touch(&self) -> &TouchTracker {
        &self.touch
    }

    /// Direct horizontal pointer axis for this tick.
    ///
    /// In touch mode this is the look contact's raw delta from the last
    /// [`aggregate`](Self::aggregate) call; in analog mode it is the
    /// sample's pointer axis.
    pub fn direct_axis(&self, sample: &InputSample) -> f32 {
        match self.mode {
            InputMode::Touch => self.last_look.x,
            InputMode::Analog => sample.pointer.x,
        }
    }

    /// Produce `(delta_h, delta_v)` in degrees for this tick.
    ///
    /// Touch deltas keep their screen sign on both axes. The analog vertical
    /// axis is inverted relative to horizontal.
    pub fn aggregate(&mut self, sample: &InputSample, dt: f32, speeds: AimSpeeds) -> Vec2 {
        match self.mode {
            InputMode::Touch => {
                let look = self.touch.process(&sample.contacts, sample.viewport_width);
                self.last_look = look;
                Vec2::new(
                    look.x * speeds.horizontal * dt,
                    look.y * speeds.vertical * dt,
                )
            }
            InputMode::Analog => Vec2::new(
                sample.analog.x * speeds.horizontal * dt,
                -sample.analog.y * speeds.vertical * dt,
            ),
        }
    }
}
