//! Panel configuration and per-panel overrides
//!
//! A `PanelConfig` is complete and immutable once a panel is attached; callers
//! supply a `PanelOverrides` with any subset of fields and the rest take
//! documented defaults (merge semantics, never replace). An overrides file at
//! `~/.config/slideout/panels.yaml` is parsed leniently: a malformed value
//! degrades to the default for that field only.

use std::collections::BTreeMap;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::page::PanelId;

/// Which screen edge the panel slides from
///
/// Determines the sign of the swipe-dismiss direction test: a panel anchored
/// to the left edge is dismissed by a leftward drag, and mirrored for right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    #[default]
    Left,
    Right,
}

/// Element that receives the visibility marker class
///
/// Usually the document body (styling reacts to `body.panel-visible`), but a
/// panel may carry the marker itself, or place it on another panel node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityTarget {
    #[default]
    Body,
    Panel(PanelId),
}

fn default_dismiss_delay_ms() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

fn default_visible_marker() -> String {
    "panel-visible".to_string()
}

/// Complete configuration of one panel instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Delay before post-hide reset actions run, so CSS close transitions
    /// are not visually disrupted by an instantaneous content reset
    #[serde(default = "default_dismiss_delay_ms")]
    pub dismiss_delay_ms: u64,

    /// Close when a press lands anywhere outside the panel
    #[serde(default = "default_true")]
    pub dismiss_on_press: bool,

    /// Close on a qualifying swipe gesture
    #[serde(default = "default_true")]
    pub dismiss_on_swipe: bool,

    /// Scroll panel content back to the top after hide
    #[serde(default = "default_true")]
    pub reset_scroll_on_hide: bool,

    /// Clear form input state inside the panel after hide
    #[serde(default = "default_true")]
    pub reset_forms_on_hide: bool,

    #[serde(default)]
    pub edge: Edge,

    #[serde(default)]
    pub visibility_target: VisibilityTarget,

    /// Class name toggled on the visibility target to represent open state
    #[serde(default = "default_visible_marker")]
    pub visible_marker: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            dismiss_delay_ms: default_dismiss_delay_ms(),
            dismiss_on_press: true,
            dismiss_on_swipe: true,
            reset_scroll_on_hide: true,
            reset_forms_on_hide: true,
            edge: Edge::default(),
            visibility_target: VisibilityTarget::default(),
            visible_marker: default_visible_marker(),
        }
    }
}

impl PanelConfig {
    /// Defaults with the given overrides applied field-by-field
    pub fn merged(overrides: &PanelOverrides) -> Self {
        let mut config = Self::default();
        if let Some(v) = overrides.dismiss_delay_ms {
            config.dismiss_delay_ms = v;
        }
        if let Some(v) = overrides.dismiss_on_press {
            config.dismiss_on_press = v;
        }
        if let Some(v) = overrides.dismiss_on_swipe {
            config.dismiss_on_swipe = v;
        }
        if let Some(v) = overrides.reset_scroll_on_hide {
            config.reset_scroll_on_hide = v;
        }
        if let Some(v) = overrides.reset_forms_on_hide {
            config.reset_forms_on_hide = v;
        }
        if let Some(v) = overrides.edge {
            config.edge = v;
        }
        if let Some(v) = &overrides.visibility_target {
            config.visibility_target = v.clone();
        }
        if let Some(v) = &overrides.visible_marker {
            config.visible_marker = v.clone();
        }
        config
    }
}

/// Lenient field deserializer: a value of the wrong shape becomes `None`
/// instead of failing the whole document.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    match T::deserialize(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            tracing::warn!("Ignoring malformed config field: {}", e);
            Ok(None)
        }
    }
}

/// Partial configuration: any subset of `PanelConfig` fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelOverrides {
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub dismiss_delay_ms: Option<u64>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub dismiss_on_press: Option<bool>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub dismiss_on_swipe: Option<bool>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub reset_scroll_on_hide: Option<bool>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub reset_forms_on_hide: Option<bool>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub edge: Option<Edge>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub visibility_target: Option<VisibilityTarget>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub visible_marker: Option<String>,
}

/// On-disk overrides, keyed by panel identifier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverridesFile {
    #[serde(default)]
    pub panels: BTreeMap<String, PanelOverrides>,
}

impl OverridesFile {
    /// Load overrides from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::overrides_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Overrides file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(overrides) => {
                    tracing::info!("Loaded panel overrides from {}", path.display());
                    overrides
                }
                Err(e) => {
                    tracing::warn!("Failed to parse overrides at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read overrides at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save overrides to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = crate::config_paths::overrides_file()
            .context("No config directory available")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize overrides")?;

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write overrides to {}", path.display()))?;

        tracing::info!("Saved panel overrides to {}", path.display());
        Ok(())
    }

    /// Overrides for one panel (empty when the file has no entry for it)
    pub fn for_panel(&self, id: &PanelId) -> PanelOverrides {
        self.panels.get(id.as_str()).cloned().unwrap_or_default()
    }
}
