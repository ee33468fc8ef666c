//! Panel instance state and update handlers
//!
//! The core controller: one `PanelInstance` per attached panel, and
//! `update_panel` dispatching `PanelMsg`s against the page model. The
//! visibility marker class on the resolved target is the only open/closed
//! state; there is no shadow boolean to fall out of sync.

use crate::commands::Cmd;
use crate::config::{PanelConfig, VisibilityTarget};
use crate::gesture::{GestureProgress, GestureState};
use crate::messages::PanelMsg;
use crate::page::{ClassSet, Page, PanelId};

/// One attached panel: its configuration plus ephemeral gesture state
#[derive(Debug, Clone)]
pub struct PanelInstance {
    pub id: PanelId,
    pub config: PanelConfig,
    pub gesture: GestureState,
}

impl PanelInstance {
    pub fn new(id: impl Into<PanelId>, config: PanelConfig) -> Self {
        Self {
            id: id.into(),
            config,
            gesture: GestureState::default(),
        }
    }
}

fn target_classes<'a>(page: &'a Page, instance: &PanelInstance) -> Option<&'a ClassSet> {
    match &instance.config.visibility_target {
        VisibilityTarget::Body => Some(&page.body),
        VisibilityTarget::Panel(id) => page.panel(id).map(|p| &p.classes),
    }
}

fn target_classes_mut<'a>(page: &'a mut Page, instance: &PanelInstance) -> Option<&'a mut ClassSet> {
    match &instance.config.visibility_target {
        VisibilityTarget::Body => Some(&mut page.body),
        VisibilityTarget::Panel(id) => page.panel_mut(id).map(|p| &mut p.classes),
    }
}

/// Whether the panel is logically open (marker present on its target)
pub fn is_open(page: &Page, instance: &PanelInstance) -> bool {
    target_classes(page, instance)
        .map(|classes| classes.has(&instance.config.visible_marker))
        .unwrap_or(false)
}

/// Update function for panel messages
pub fn update_panel(page: &mut Page, instance: &mut PanelInstance, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::TriggerActivated | PanelMsg::Toggle => {
            let Some(classes) = target_classes_mut(page, instance) else {
                tracing::debug!(panel = %instance.id, "Toggle ignored: visibility target missing");
                return None;
            };
            let visible = classes.toggle(&instance.config.visible_marker);
            tracing::debug!(panel = %instance.id, visible, "Panel toggled");
            None
        }

        PanelMsg::Show => {
            let Some(classes) = target_classes_mut(page, instance) else {
                tracing::debug!(panel = %instance.id, "Show ignored: visibility target missing");
                return None;
            };
            classes.add(&instance.config.visible_marker);
            None
        }

        PanelMsg::Hide | PanelMsg::OutsidePress => {
            if msg == PanelMsg::OutsidePress && !instance.config.dismiss_on_press {
                return None;
            }
            hide(page, instance)
        }

        // Consumed for propagation containment only; a press inside the
        // panel must never reach the outside-dismissal pass
        PanelMsg::InsidePress => None,

        PanelMsg::GestureStart { x } => {
            instance.gesture.start(x);
            None
        }

        PanelMsg::GestureMove { x } => {
            match instance.gesture.on_move(x, instance.config.edge) {
                GestureProgress::Swipe if instance.config.dismiss_on_swipe => {
                    // Clear the gesture before the dismissal side effect runs
                    // so hide can never observe a stale contact
                    instance.gesture.resolve();
                    tracing::debug!(panel = %instance.id, "Swipe dismissal");
                    hide(page, instance)
                }
                _ => None,
            }
        }

        PanelMsg::GestureEnd => {
            instance.gesture.resolve();
            None
        }
    }
}

/// Close the panel
///
/// Idempotent: a panel that is already closed mutates nothing and schedules
/// nothing. The marker is removed synchronously; content reset runs only
/// after the configured delay so a CSS close transition is not disrupted.
fn hide(page: &mut Page, instance: &PanelInstance) -> Option<Cmd> {
    if !is_open(page, instance) {
        return None;
    }

    let classes = target_classes_mut(page, instance)?;
    classes.remove(&instance.config.visible_marker);
    tracing::debug!(panel = %instance.id, "Panel hidden");

    if !instance.config.reset_scroll_on_hide && !instance.config.reset_forms_on_hide {
        return None;
    }

    Some(Cmd::ScheduleReset {
        panel: instance.id.clone(),
        delay_ms: instance.config.dismiss_delay_ms,
        reset_scroll: instance.config.reset_scroll_on_hide,
        reset_forms: instance.config.reset_forms_on_hide,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PanelNode;

    fn test_setup() -> (Page, PanelInstance) {
        let mut page = Page::new();
        page.insert_panel(PanelNode::new("nav"));
        let instance = PanelInstance::new("nav", PanelConfig::default());
        (page, instance)
    }

    #[test]
    fn test_toggle_flips_marker_on_body() {
        let (mut page, mut instance) = test_setup();

        update_panel(&mut page, &mut instance, PanelMsg::Toggle);
        assert!(page.body.has("panel-visible"));
        assert!(is_open(&page, &instance));

        update_panel(&mut page, &mut instance, PanelMsg::Toggle);
        assert!(!page.body.has("panel-visible"));
    }

    #[test]
    fn test_hide_when_closed_is_noop() {
        let (mut page, mut instance) = test_setup();

        let cmd = update_panel(&mut page, &mut instance, PanelMsg::Hide);
        assert_eq!(cmd, None);
        assert!(page.body.is_empty());
    }

    #[test]
    fn test_hide_removes_marker_and_schedules_reset() {
        let (mut page, mut instance) = test_setup();
        update_panel(&mut page, &mut instance, PanelMsg::Show);

        let cmd = update_panel(&mut page, &mut instance, PanelMsg::Hide);
        assert!(!page.body.has("panel-visible"));
        assert_eq!(
            cmd,
            Some(Cmd::ScheduleReset {
                panel: PanelId::from("nav"),
                delay_ms: 500,
                reset_scroll: true,
                reset_forms: true,
            })
        );
    }

    #[test]
    fn test_hide_without_reset_flags_schedules_nothing() {
        let (mut page, _) = test_setup();
        page.body.add("panel-visible");
        let mut instance = PanelInstance::new(
            "nav",
            PanelConfig {
                reset_scroll_on_hide: false,
                reset_forms_on_hide: false,
                ..Default::default()
            },
        );

        let cmd = update_panel(&mut page, &mut instance, PanelMsg::Hide);
        assert_eq!(cmd, None);
        assert!(!page.body.has("panel-visible"));
    }

    #[test]
    fn test_outside_press_respects_dismiss_flag() {
        let (mut page, _) = test_setup();
        let mut instance = PanelInstance::new(
            "nav",
            PanelConfig {
                dismiss_on_press: false,
                ..Default::default()
            },
        );
        update_panel(&mut page, &mut instance, PanelMsg::Show);

        update_panel(&mut page, &mut instance, PanelMsg::OutsidePress);
        assert!(is_open(&page, &instance));
    }

    #[test]
    fn test_swipe_clears_gesture_before_hide() {
        let (mut page, mut instance) = test_setup();
        update_panel(&mut page, &mut instance, PanelMsg::Show);

        update_panel(&mut page, &mut instance, PanelMsg::GestureStart { x: 200.0 });
        let cmd = update_panel(&mut page, &mut instance, PanelMsg::GestureMove { x: 140.0 });

        assert!(!instance.gesture.is_tracking());
        assert!(!is_open(&page, &instance));
        assert!(cmd.is_some());
    }

    #[test]
    fn test_swipe_ignored_when_dismiss_on_swipe_off() {
        let (mut page, _) = test_setup();
        let mut instance = PanelInstance::new(
            "nav",
            PanelConfig {
                dismiss_on_swipe: false,
                ..Default::default()
            },
        );
        update_panel(&mut page, &mut instance, PanelMsg::Show);

        update_panel(&mut page, &mut instance, PanelMsg::GestureStart { x: 200.0 });
        update_panel(&mut page, &mut instance, PanelMsg::GestureMove { x: 100.0 });

        // Still open, still tracking
        assert!(is_open(&page, &instance));
        assert!(instance.gesture.is_tracking());
    }

    #[test]
    fn test_marker_on_panel_itself() {
        let mut page = Page::new();
        page.insert_panel(PanelNode::new("nav"));
        let mut instance = PanelInstance::new(
            "nav",
            PanelConfig {
                visibility_target: VisibilityTarget::Panel(PanelId::from("nav")),
                visible_marker: "open".to_string(),
                ..Default::default()
            },
        );

        update_panel(&mut page, &mut instance, PanelMsg::Toggle);
        assert!(page.panel(&PanelId::from("nav")).unwrap().classes.has("open"));
        assert!(page.body.is_empty());
    }

    #[test]
    fn test_missing_visibility_target_is_silent_noop() {
        let mut page = Page::new();
        let mut instance = PanelInstance::new(
            "nav",
            PanelConfig {
                visibility_target: VisibilityTarget::Panel(PanelId::from("gone")),
                ..Default::default()
            },
        );

        assert_eq!(update_panel(&mut page, &mut instance, PanelMsg::Toggle), None);
        assert!(!is_open(&page, &instance));
    }
}
