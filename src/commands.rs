//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The only side effect a panel update can request is the deferred post-hide
//! reset; the host's scheduler executes it once the delay has elapsed.

use crate::page::PanelId;

/// Side effect requested by a panel update
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Run reset actions for `panel` after `delay_ms`
    ///
    /// Fire-and-forget: nothing cancels a scheduled reset, and a second hide
    /// before the delay elapses queues a second one. Both eventually run;
    /// resetting scroll or forms twice is harmless.
    ScheduleReset {
        panel: PanelId,
        delay_ms: u64,
        reset_scroll: bool,
        reset_forms: bool,
    },
}
