use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier the widget host assigns to one placed widget instance.
///
/// Opaque to this project: the host mints it at placement time and retires
/// it when the widget is removed. We only ever use it as a lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for WidgetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for WidgetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// External signal that caused a refresh policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Periodic system time tick.
    TimeTick,

    /// The display was just powered on.
    ScreenOn,

    /// Explicit update request, e.g. on first placement or a
    /// widget-count change.
    UpdateRequested,
}

impl Trigger {
    pub fn as_str(&self) -> &str {
        match self {
            Trigger::TimeTick => "time_tick",
            Trigger::ScreenOn => "screen_on",
            Trigger::UpdateRequested => "update_requested",
        }
    }
}

/// Outcome of one refresh pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshSummary {
    /// Whether the throttle gate opened and the fetch step ran.
    pub performed: bool,

    /// Millisecond timestamp held by the throttle clock after the pass.
    /// Unchanged from the prior pass unless `performed` is true.
    pub last_update_ms: i64,

    /// Number of placed instances the pass examined.
    pub widgets_processed: usize,

    /// Number of instances whose display slot received a new image.
    pub widgets_updated: usize,
}

impl RefreshSummary {
    /// Summary for a pass that never got past the throttle gate.
    pub fn skipped(last_update_ms: i64) -> Self {
        Self {
            performed: false,
            last_update_ms,
            widgets_processed: 0,
            widgets_updated: 0,
        }
    }
}
