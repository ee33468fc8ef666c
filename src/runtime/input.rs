//! Pointer input translation
//!
//! Maps winit's input vocabulary onto the controller's `InputEvent`s. The
//! host performs its own hit-testing (it knows where its panels and triggers
//! are laid out) and passes the resolved `HitTarget` in; this module only
//! decides what kind of event occurred and where horizontally.
//!
//! Mouse clicks surface on button release, matching the click semantics the
//! trigger and dismissal contracts are written against.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, TouchPhase};

use crate::messages::{HitTarget, InputEvent, InputKind};

/// Stateful translator tracking the cursor for click positions
#[derive(Debug, Clone, Copy, Default)]
pub struct InputTranslator {
    cursor_x: f64,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the cursor position from a `WindowEvent::CursorMoved`
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor_x = position.x;
    }

    /// Translate a `WindowEvent::MouseInput`
    ///
    /// Only a left-button release produces an event; presses and other
    /// buttons are not part of the contract.
    pub fn mouse_input(
        &self,
        state: ElementState,
        button: MouseButton,
        target: HitTarget,
    ) -> Option<InputEvent> {
        match (state, button) {
            (ElementState::Released, MouseButton::Left) => {
                Some(InputEvent::new(InputKind::Press, self.cursor_x, target))
            }
            _ => None,
        }
    }

    /// Translate a `WindowEvent::Touch` by phase and horizontal position
    ///
    /// Cancelled contacts resolve the gesture the same way lifted ones do.
    pub fn touch(&mut self, phase: TouchPhase, x: f64, target: HitTarget) -> InputEvent {
        self.cursor_x = x;
        let kind = match phase {
            TouchPhase::Started => InputKind::TouchStart,
            TouchPhase::Moved => InputKind::TouchMove,
            TouchPhase::Ended | TouchPhase::Cancelled => InputKind::TouchEnd,
        };
        InputEvent::new(kind, x, target)
    }
}
