//! Message types for the Elm-style architecture
//!
//! All panel state changes flow through these message types. Raw input is
//! first classified into an `InputEvent` (what happened, where it landed) and
//! the host's router turns that into per-panel `PanelMsg`s.

use crate::page::PanelId;

/// Panel-instance messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelMsg {
    /// A press on a trigger referencing this panel's identifier
    TriggerActivated,
    /// Gesture contact started inside the panel at horizontal position `x`
    GestureStart { x: f64 },
    /// Gesture contact moved while tracking
    GestureMove { x: f64 },
    /// Gesture contact lifted or cancelled
    GestureEnd,
    /// A press inside the panel (consumed for containment, no state change)
    InsidePress,
    /// A press that reached the document without hitting the panel
    OutsidePress,
    /// Programmatic close
    Hide,
    /// Programmatic open
    Show,
    /// Programmatic toggle
    Toggle,
}

/// What kind of raw input occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A click or tap (the activation event for triggers and dismissal)
    Press,
    TouchStart,
    TouchMove,
    TouchEnd,
}

/// Where a raw input event landed, as resolved by the host's hit-testing
#[derive(Debug, Clone, PartialEq)]
pub enum HitTarget {
    /// A trigger element referencing the given panel identifier
    /// (the `a[href="#panelId"]` convention)
    Trigger(PanelId),
    /// Inside the subtree of the given panel
    Panel(PanelId),
    /// Anywhere else in the document
    Outside,
}

/// A raw input event routed through the host
#[derive(Debug, Clone, PartialEq)]
pub struct InputEvent {
    pub kind: InputKind,
    /// Horizontal pointer position, used by gesture tracking
    pub x: f64,
    pub target: HitTarget,
}

impl InputEvent {
    pub fn new(kind: InputKind, x: f64, target: HitTarget) -> Self {
        Self { kind, x, target }
    }

    /// A press landing outside every panel
    pub fn press_outside(x: f64) -> Self {
        Self::new(InputKind::Press, x, HitTarget::Outside)
    }

    /// A press on the trigger for `panel`
    pub fn press_trigger(panel: impl Into<PanelId>) -> Self {
        Self::new(InputKind::Press, 0.0, HitTarget::Trigger(panel.into()))
    }

    /// A press inside `panel`
    pub fn press_inside(panel: impl Into<PanelId>, x: f64) -> Self {
        Self::new(InputKind::Press, x, HitTarget::Panel(panel.into()))
    }

    /// A touch event inside `panel`
    pub fn touch(kind: InputKind, panel: impl Into<PanelId>, x: f64) -> Self {
        Self::new(kind, x, HitTarget::Panel(panel.into()))
    }
}

/// Outcome of routing one input event
///
/// `Consumed` means a panel's own handling took the event (the
/// preventDefault/stopPropagation analog): it must not activate whatever it
/// would have clicked through to. `Bubble` means nothing claimed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Bubble,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}
