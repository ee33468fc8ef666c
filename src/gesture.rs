//! Swipe-to-dismiss gesture recognition
//!
//! A small per-panel state machine, fed synthetic horizontal positions rather
//! than real pointer events so it is testable in isolation: IDLE until a
//! single contact starts, TRACKING until the contact resolves (end, cancel,
//! or a completed swipe).

use crate::config::Edge;

/// Pointer displacement that qualifies a drag as a dismiss swipe
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Displacement below which a tracked contact still counts as a tap
///
/// Only used to classify the gesture outcome; dismissal is decided by
/// `SWIPE_THRESHOLD` alone.
pub const TAP_BOUNDARY: f64 = 20.0;

/// Gesture tracking state for one panel instance
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// A contact is down; `origin_x` is where it started
    Tracking { origin_x: f64 },
}

/// Classification of a tracked move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureProgress {
    /// Not tracking; the move was ignored
    Idle,
    /// Displacement within the tap boundary
    Tap,
    /// A drag that does not qualify as a dismiss swipe
    Drag,
    /// Displacement past the swipe threshold, away from the panel's edge
    Swipe,
}

impl GestureState {
    /// Begin tracking at `x`
    ///
    /// Ignored while already tracking: a second contact point does not
    /// re-seed the origin. Returns whether tracking started.
    pub fn start(&mut self, x: f64) -> bool {
        match self {
            GestureState::Idle => {
                *self = GestureState::Tracking { origin_x: x };
                true
            }
            GestureState::Tracking { .. } => false,
        }
    }

    /// Classify a move to `x` for a panel anchored at `edge`
    ///
    /// `diff = origin_x - x`: positive when the contact travels left. A
    /// left-edge panel is dismissed by `diff > SWIPE_THRESHOLD` (drag toward
    /// its hidden edge), a right-edge panel by the mirrored test. Does not
    /// change state; the caller resolves the gesture on a qualifying swipe.
    pub fn on_move(&self, x: f64, edge: Edge) -> GestureProgress {
        let GestureState::Tracking { origin_x } = self else {
            return GestureProgress::Idle;
        };

        let diff = origin_x - x;
        let swiped = match edge {
            Edge::Left => diff > SWIPE_THRESHOLD,
            Edge::Right => diff < -SWIPE_THRESHOLD,
        };

        if swiped {
            GestureProgress::Swipe
        } else if diff.abs() <= TAP_BOUNDARY {
            GestureProgress::Tap
        } else {
            GestureProgress::Drag
        }
    }

    /// Resolve the gesture, returning to IDLE
    pub fn resolve(&mut self) {
        *self = GestureState::Idle;
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self, GestureState::Tracking { .. })
    }
}
