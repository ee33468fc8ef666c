//! Panel host: attach registry and input event router
//!
//! A `PanelHost` is the analog of one document. It owns the page model, the
//! attached panel instances, and the deferred-reset scheduler, and it routes
//! classified input events to the right instance.
//!
//! Routing encodes the containment rule that makes outside-dismissal work
//! without geometric exclusion logic: anything hitting an attached panel's
//! subtree is consumed by that panel's own handling, so only genuinely
//! outside presses ever reach the dismissal pass.

use std::time::Instant;

use crate::commands::Cmd;
use crate::config::{PanelConfig, PanelOverrides};
use crate::messages::{EventResult, HitTarget, InputEvent, InputKind, PanelMsg};
use crate::page::{Page, PanelId};
use crate::panel::{is_open, update_panel, PanelInstance};
use crate::runtime::scheduler::ResetScheduler;

/// One document's worth of attached panels
#[derive(Debug, Default)]
pub struct PanelHost {
    page: Page,
    instances: Vec<PanelInstance>,
    scheduler: ResetScheduler,
}

impl PanelHost {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            instances: Vec::new(),
            scheduler: ResetScheduler::default(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// Attach panel behavior to the node with the given identifier
    ///
    /// Idempotent: attaching to an already-attached identifier is a no-op
    /// returning the existing instance, so listeners are never doubled.
    /// Attaching never opens the panel, and succeeds even if no node with
    /// this identifier exists yet; events for it simply match nothing.
    pub fn attach(&mut self, id: impl Into<PanelId>, overrides: PanelOverrides) -> &PanelInstance {
        let id = id.into();
        if let Some(index) = self.instance_index(&id) {
            tracing::warn!(panel = %id, "attach called twice, reusing existing instance");
            return &self.instances[index];
        }

        if self.page.panel(&id).is_none() {
            tracing::debug!(panel = %id, "Attached before panel node exists");
        }

        let config = PanelConfig::merged(&overrides);
        tracing::info!(panel = %id, ?config, "Panel attached");
        self.instances.push(PanelInstance::new(id, config));
        self.instances.last().expect("just pushed")
    }

    /// Remove an attached instance, unregistering all its event handling
    ///
    /// Already-queued resets for it become no-ops when due. Returns whether
    /// an instance was removed.
    pub fn detach(&mut self, id: &PanelId) -> bool {
        let Some(index) = self.instance_index(id) else {
            return false;
        };
        self.instances.remove(index);
        tracing::info!(panel = %id, "Panel detached");
        true
    }

    pub fn instance(&self, id: &PanelId) -> Option<&PanelInstance> {
        self.instances.iter().find(|i| &i.id == id)
    }

    pub fn is_attached(&self, id: &PanelId) -> bool {
        self.instance(id).is_some()
    }

    /// Whether the panel is logically open
    pub fn is_panel_open(&self, id: &PanelId) -> bool {
        self.instance(id)
            .map(|instance| is_open(&self.page, instance))
            .unwrap_or(false)
    }

    /// Number of resets waiting on their delay
    pub fn pending_resets(&self) -> usize {
        self.scheduler.pending()
    }

    fn instance_index(&self, id: &PanelId) -> Option<usize> {
        self.instances.iter().position(|i| &i.id == id)
    }

    /// Route a classified input event
    pub fn dispatch(&mut self, event: InputEvent) -> EventResult {
        self.dispatch_at(event, Instant::now())
    }

    /// Route a classified input event with an explicit clock
    pub fn dispatch_at(&mut self, event: InputEvent, now: Instant) -> EventResult {
        match &event.target {
            HitTarget::Trigger(id) => {
                let Some(index) = self.instance_index(id) else {
                    // A trigger for an unattached panel is just a link; the
                    // press bubbles to the document like any other
                    return self.outside_pass(event.kind, now);
                };
                if event.kind != InputKind::Press {
                    return EventResult::Bubble;
                }
                self.deliver(index, PanelMsg::TriggerActivated, now);
                EventResult::Consumed
            }

            HitTarget::Panel(id) => {
                let Some(index) = self.instance_index(id) else {
                    return self.outside_pass(event.kind, now);
                };
                let msg = match event.kind {
                    InputKind::Press => PanelMsg::InsidePress,
                    InputKind::TouchStart => PanelMsg::GestureStart { x: event.x },
                    InputKind::TouchMove => PanelMsg::GestureMove { x: event.x },
                    InputKind::TouchEnd => PanelMsg::GestureEnd,
                };
                self.deliver(index, msg, now);
                // The panel's own listeners stop propagation unconditionally
                EventResult::Consumed
            }

            HitTarget::Outside => self.outside_pass(event.kind, now),
        }
    }

    /// Document-level dismissal: hide every panel configured for it
    ///
    /// Runs only for presses and touch lift-off, and only for events nothing
    /// consumed first. Consumed is reported when at least one panel actually
    /// closed, so the press cannot also activate what it landed on.
    fn outside_pass(&mut self, kind: InputKind, now: Instant) -> EventResult {
        if !matches!(kind, InputKind::Press | InputKind::TouchEnd) {
            return EventResult::Bubble;
        }

        let mut closed_any = false;
        for index in 0..self.instances.len() {
            let was_open = is_open(&self.page, &self.instances[index]);
            self.deliver(index, PanelMsg::OutsidePress, now);
            if was_open && !is_open(&self.page, &self.instances[index]) {
                closed_any = true;
            }
        }

        if closed_any {
            EventResult::Consumed
        } else {
            EventResult::Bubble
        }
    }

    fn deliver(&mut self, index: usize, msg: PanelMsg, now: Instant) {
        let instance = &mut self.instances[index];
        if let Some(cmd) = update_panel(&mut self.page, instance, msg) {
            self.run_cmd(cmd, now);
        }
    }

    fn run_cmd(&mut self, cmd: Cmd, now: Instant) {
        match cmd {
            cmd @ Cmd::ScheduleReset { .. } => self.scheduler.schedule(cmd, now),
        }
    }

    /// Programmatic toggle, as if the panel's trigger was pressed
    pub fn toggle(&mut self, id: &PanelId) {
        self.send(id, PanelMsg::Toggle, Instant::now());
    }

    /// Programmatic open
    pub fn show(&mut self, id: &PanelId) {
        self.send(id, PanelMsg::Show, Instant::now());
    }

    /// Programmatic close
    pub fn hide(&mut self, id: &PanelId) {
        self.hide_at(id, Instant::now());
    }

    /// Programmatic close with an explicit clock
    pub fn hide_at(&mut self, id: &PanelId, now: Instant) {
        self.send(id, PanelMsg::Hide, now);
    }

    fn send(&mut self, id: &PanelId, msg: PanelMsg, now: Instant) {
        let Some(index) = self.instance_index(id) else {
            tracing::debug!(panel = %id, ?msg, "Message for unattached panel ignored");
            return;
        };
        self.deliver(index, msg, now);
    }

    /// Run every deferred reset whose delay has elapsed
    pub fn tick(&mut self) -> usize {
        self.tick_at(Instant::now())
    }

    /// Run due resets against an explicit clock, returning how many ran
    pub fn tick_at(&mut self, now: Instant) -> usize {
        self.scheduler.run_due(&mut self.page, now)
    }
}
