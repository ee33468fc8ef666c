//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use slideout::{Form, FormField, Page, PanelHost, PanelId, PanelNode, PanelOverrides};

/// A "nav" panel with scrolled content and a filled-in signup form
pub fn nav_panel() -> PanelNode {
    let mut panel = PanelNode::new("nav");
    panel.scroll_top = 240.0;
    let mut form = Form {
        fields: vec![
            FormField::new("email", ""),
            FormField::new("plan", "basic"),
        ],
    };
    form.fields[0].value = "user@example.com".to_string();
    form.fields[1].value = "pro".to_string();
    panel.forms.push(form);
    panel
}

/// A page containing only the nav panel
pub fn nav_page() -> Page {
    let mut page = Page::new();
    page.insert_panel(nav_panel());
    page
}

/// A host with the nav panel attached under the given overrides
pub fn nav_host(overrides: PanelOverrides) -> PanelHost {
    let mut host = PanelHost::new(nav_page());
    host.attach("nav", overrides);
    host
}

pub fn nav_id() -> PanelId {
    PanelId::from("nav")
}
