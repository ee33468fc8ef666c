//! Runtime module - winit/platform integration
//!
//! This module contains the pieces that sit between the pure controller and
//! the platform:
//! - `input` - winit touch/mouse event to `InputEvent` mapping
//! - `scheduler` - deferred post-hide resets, pumped by the host's clock

pub mod input;
pub mod scheduler;

pub use input::InputTranslator;
pub use scheduler::ResetScheduler;
