//! Outside-dismissal and propagation containment tests
//!
//! One document-level pass per host replaces per-element exclusion logic:
//! because in-panel interactions are consumed before they bubble, only
//! genuinely outside presses ever reach the dismissal pass.

mod common;

use common::{nav_host, nav_id};
use slideout::{EventResult, InputEvent, InputKind, PanelHost, PanelNode, PanelOverrides};

#[test]
fn test_outside_press_closes_open_panel() {
    let mut host = nav_host(PanelOverrides::default());
    let id = nav_id();
    host.show(&id);

    let result = host.dispatch(InputEvent::press_outside(640.0));

    assert!(!host.is_panel_open(&id));
    // The closing press is consumed so it cannot also activate what it hit
    assert_eq!(result, EventResult::Consumed);
}

#[test]
fn test_outside_press_on_closed_panel_bubbles() {
    let mut host = nav_host(PanelOverrides::default());

    let result = host.dispatch(InputEvent::press_outside(640.0));

    assert_eq!(result, EventResult::Bubble);
    assert_eq!(host.pending_resets(), 0);
}

#[test]
fn test_inside_press_never_reaches_outside_pass() {
    let mut host = nav_host(PanelOverrides::default());
    let id = nav_id();
    host.show(&id);

    let result = host.dispatch(InputEvent::press_inside("nav", 100.0));

    assert_eq!(result, EventResult::Consumed);
    assert!(host.is_panel_open(&id));
    assert_eq!(host.pending_resets(), 0);
}

#[test]
fn test_inside_press_does_not_close_sibling_panels() {
    // Two attached panels; a press inside one is fully contained and must
    // not run the dismissal pass that would close the other.
    let mut host = nav_host(PanelOverrides::default());
    host.page_mut().insert_panel(PanelNode::new("cart"));
    host.attach(
        "cart",
        PanelOverrides {
            visible_marker: Some("cart-visible".to_string()),
            ..Default::default()
        },
    );
    let nav = nav_id();
    let cart = "cart".into();
    host.show(&nav);
    host.show(&cart);

    host.dispatch(InputEvent::press_inside("nav", 100.0));

    assert!(host.is_panel_open(&nav));
    assert!(host.is_panel_open(&cart));

    // An actually-outside press closes both
    host.dispatch(InputEvent::press_outside(900.0));
    assert!(!host.is_panel_open(&nav));
    assert!(!host.is_panel_open(&cart));
}

#[test]
fn test_touch_end_outside_also_dismisses() {
    let mut host = nav_host(PanelOverrides::default());
    let id = nav_id();
    host.show(&id);

    host.dispatch(InputEvent::new(
        InputKind::TouchEnd,
        640.0,
        slideout::HitTarget::Outside,
    ));

    assert!(!host.is_panel_open(&id));
}

#[test]
fn test_touch_start_outside_does_not_dismiss() {
    let mut host = nav_host(PanelOverrides::default());
    let id = nav_id();
    host.show(&id);

    host.dispatch(InputEvent::new(
        InputKind::TouchStart,
        640.0,
        slideout::HitTarget::Outside,
    ));

    assert!(host.is_panel_open(&id));
}

#[test]
fn test_dismiss_on_press_disabled_leaves_panel_open() {
    let mut host = nav_host(PanelOverrides {
        dismiss_on_press: Some(false),
        ..Default::default()
    });
    let id = nav_id();
    host.show(&id);

    let result = host.dispatch(InputEvent::press_outside(640.0));

    assert!(host.is_panel_open(&id));
    assert_eq!(result, EventResult::Bubble);
}

#[test]
fn test_trigger_press_toggles_and_is_consumed() {
    let mut host = nav_host(PanelOverrides::default());
    let id = nav_id();

    let result = host.dispatch(InputEvent::press_trigger("nav"));
    assert_eq!(result, EventResult::Consumed);
    assert!(host.is_panel_open(&id));

    let result = host.dispatch(InputEvent::press_trigger("nav"));
    assert_eq!(result, EventResult::Consumed);
    assert!(!host.is_panel_open(&id));
}

#[test]
fn test_trigger_without_attached_panel_falls_through_to_dismissal() {
    // A link to a never-attached panel behaves like any outside press
    let mut host = nav_host(PanelOverrides::default());
    let id = nav_id();
    host.show(&id);

    let result = host.dispatch(InputEvent::press_trigger("missing"));

    assert!(!host.is_panel_open(&id));
    assert_eq!(result, EventResult::Consumed);
}

#[test]
fn test_empty_host_bubbles_everything() {
    let mut host = PanelHost::default();

    assert_eq!(
        host.dispatch(InputEvent::press_outside(0.0)),
        EventResult::Bubble
    );
    assert_eq!(
        host.dispatch(InputEvent::press_inside("nav", 0.0)),
        EventResult::Bubble
    );
}
