//! slideout - headless slide-out panel behavior
//!
//! This crate provides the core types and logic for a slide-out panel
//! controller in the Elm Architecture pattern: a page model, per-panel
//! messages, an update function, and commands for the one deferred side
//! effect (post-hide content reset).
//!
//! The controller owns no rendering. Its only visible output is a marker
//! class toggled on a configured target; slide animation and overlays are
//! styling reacting to that class. Hosts classify raw input into hit
//! targets, feed events through [`PanelHost::dispatch`], and pump
//! [`PanelHost::tick`] for deferred resets.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod gesture;
pub mod host;
pub mod messages;
pub mod page;
pub mod panel;
pub mod runtime;
pub mod tracing;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::{Edge, OverridesFile, PanelConfig, PanelOverrides, VisibilityTarget};
pub use gesture::{GestureProgress, GestureState, SWIPE_THRESHOLD, TAP_BOUNDARY};
pub use host::PanelHost;
pub use messages::{EventResult, HitTarget, InputEvent, InputKind, PanelMsg};
pub use page::{ClassSet, Form, FormField, Page, PanelId, PanelNode};
pub use panel::PanelInstance;
pub use runtime::{InputTranslator, ResetScheduler};
