//! Deferred post-hide reset scheduling
//!
//! The original behavior is a fire-and-forget timer per hide. Here the
//! pending set is explicit and pumped with a caller-supplied `Instant`, so
//! tests control time. There is no cancellation: a second hide before the
//! first delay elapses queues a second reset and both run.

use std::time::{Duration, Instant};

use crate::commands::Cmd;
use crate::page::{Page, PanelId};

#[derive(Debug, Clone)]
struct PendingReset {
    panel: PanelId,
    due: Instant,
    reset_scroll: bool,
    reset_forms: bool,
}

/// Queue of resets waiting on their dismiss delay
#[derive(Debug, Default)]
pub struct ResetScheduler {
    queue: Vec<PendingReset>,
}

impl ResetScheduler {
    /// Record a command's reset, due `delay_ms` after `now`
    pub fn schedule(&mut self, cmd: Cmd, now: Instant) {
        let Cmd::ScheduleReset {
            panel,
            delay_ms,
            reset_scroll,
            reset_forms,
        } = cmd;

        tracing::trace!(%panel, delay_ms, "Reset scheduled");
        self.queue.push(PendingReset {
            panel,
            due: now + Duration::from_millis(delay_ms),
            reset_scroll,
            reset_forms,
        });
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Execute every reset due at `now`, returning how many ran
    ///
    /// A reset whose panel node no longer exists (detached and removed from
    /// the page) is dropped silently.
    pub fn run_due(&mut self, page: &mut Page, now: Instant) -> usize {
        let mut ran = 0;
        let mut index = 0;
        while index < self.queue.len() {
            if self.queue[index].due > now {
                index += 1;
                continue;
            }
            let reset = self.queue.remove(index);
            ran += 1;

            let Some(panel) = page.panel_mut(&reset.panel) else {
                tracing::debug!(panel = %reset.panel, "Reset dropped: panel node gone");
                continue;
            };
            if reset.reset_scroll {
                panel.reset_scroll();
            }
            if reset.reset_forms {
                panel.reset_forms();
            }
            tracing::trace!(panel = %reset.panel, "Reset ran");
        }
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PanelNode;

    fn scrolled_page() -> Page {
        let mut page = Page::new();
        let mut panel = PanelNode::new("nav");
        panel.scroll_top = 240.0;
        page.insert_panel(panel);
        page
    }

    fn reset_cmd(delay_ms: u64) -> Cmd {
        Cmd::ScheduleReset {
            panel: PanelId::from("nav"),
            delay_ms,
            reset_scroll: true,
            reset_forms: false,
        }
    }

    #[test]
    fn test_reset_waits_for_due_time() {
        let mut page = scrolled_page();
        let mut scheduler = ResetScheduler::default();
        let t0 = Instant::now();

        scheduler.schedule(reset_cmd(500), t0);

        assert_eq!(scheduler.run_due(&mut page, t0 + Duration::from_millis(499)), 0);
        assert_eq!(page.panel(&PanelId::from("nav")).unwrap().scroll_top, 240.0);

        assert_eq!(scheduler.run_due(&mut page, t0 + Duration::from_millis(500)), 1);
        assert_eq!(page.panel(&PanelId::from("nav")).unwrap().scroll_top, 0.0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_double_schedule_both_run() {
        let mut page = scrolled_page();
        let mut scheduler = ResetScheduler::default();
        let t0 = Instant::now();

        scheduler.schedule(reset_cmd(100), t0);
        scheduler.schedule(reset_cmd(200), t0);
        assert_eq!(scheduler.pending(), 2);

        assert_eq!(scheduler.run_due(&mut page, t0 + Duration::from_millis(150)), 1);
        assert_eq!(scheduler.run_due(&mut page, t0 + Duration::from_millis(250)), 1);
    }

    #[test]
    fn test_reset_for_missing_panel_is_dropped() {
        let mut page = Page::new();
        let mut scheduler = ResetScheduler::default();
        let t0 = Instant::now();

        scheduler.schedule(reset_cmd(0), t0);
        assert_eq!(scheduler.run_due(&mut page, t0), 1);
        assert_eq!(scheduler.pending(), 0);
    }
}
