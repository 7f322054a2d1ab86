//! Touch Contact Tracker
//!
//! Assigns touch contacts to slots. The first contact that begins on the
//! right half of the viewport becomes the look contact and drives camera
//! aim; the first one on the left half claims the reserved slot, which is
//! held for other gestures and never feeds aim.

use glam::Vec2;

/// Lifecycle phase of a touch contact within one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Began,
    Moved,
    Stationary,
    Ended,
    Canceled,
}

/// One touch contact as reported by the host for the current tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchContact {
    /// Host-assigned contact id, stable for the life of the contact
    pub id: u64,
    /// Phase this tick
    pub phase: TouchPhase,
    /// Screen position in pixels
    pub position: Vec2,
    /// Movement since the previous report, in pixels
    pub delta: Vec2,
}

impl TouchContact {
    /// Create a contact report.
    pub fn new(id: u64, phase: TouchPhase, position: Vec2, delta: Vec2) -> Self {
        Self {
            id,
            phase,
            position,
            delta,
        }
    }
}

/// Touch slot assignment, persisted across ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchTracker {
    look: Option<u64>,
    other: Option<u64>,
}

impl TouchTracker {
    /// Create a tracker with both slots free.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the contact driving aim, if any.
    #[inline]
    pub fn look_contact(&self) -> Option<u64> {
        self.look
    }

    /// Id of the contact holding the reserved slot, if any.
    #[inline]
    pub fn other_contact(&self) -> Option<u64> {
        self.other
    }

    /// Process this tick's contacts and return the look delta in pixels.
    ///
    /// The delta is zero when the look slot is empty after processing,
    /// including when the look contact was released this tick.
    pub fn process(&mut self, contacts: &[TouchContact], viewport_width: f32) -> Vec2 {
        let half_width = viewport_width * 0.5;
        let mut look_delta = Vec2::ZERO;

        for contact in contacts {
            match contact.phase {
                TouchPhase::Began => {
                    if contact.position.x > half_width {
                        if self.look.is_none() {
                            self.look = Some(contact.id);
                        }
                    } else if self.other.is_none() {
                        self.other = Some(contact.id);
                    }
                }
                TouchPhase::Ended | TouchPhase::Canceled => {
                    if self.other == Some(contact.id) {
                        self.other = None;
                    } else if self.look == Some(contact.id) {
                        self.look = None;
                    }
                }
                TouchPhase::Moved => {
                    if self.look == Some(contact.id) {
                        look_delta = contact.delta;
                    }
                }
                TouchPhase::Stationary => {
                    if self.look == Some(contact.id) {
                        look_delta = Vec2::ZERO;
                    }
                }
            }
        }

        if self.look.is_some() { look_delta } else { Vec2::ZERO }
    }

    /// Free both slots.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
