use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Public annotator bootstrap configuration.
///
/// This type is serializable so host applications can persist/load tooltip
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatorConfig {
    /// Horizontal pixel shift between the pointer and the label surface.
    #[serde(default)]
    pub tooltip_x_shift: f64,
    /// Vertical pixel shift between the pointer and the label surface.
    #[serde(default)]
    pub tooltip_y_shift: f64,
    /// Display mode applied to the label surface on reveal.
    #[serde(default = "default_display_mode")]
    pub display_mode: String,
    /// Identifier namespacing the emitted page markup of one plot instance.
    #[serde(default = "default_instance_ident")]
    pub instance_ident: String,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotatorConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tooltip_x_shift: 0.0,
            tooltip_y_shift: 0.0,
            display_mode: default_display_mode(),
            instance_ident: default_instance_ident(),
        }
    }

    /// Sets the pointer-to-label pixel shifts.
    #[must_use]
    pub fn with_tooltip_shift(mut self, x_shift: f64, y_shift: f64) -> Self {
        self.tooltip_x_shift = x_shift;
        self.tooltip_y_shift = y_shift;
        self
    }

    /// Sets the display mode applied to the label surface on reveal.
    #[must_use]
    pub fn with_display_mode(mut self, mode: impl Into<String>) -> Self {
        self.display_mode = mode.into();
        self
    }

    /// Sets the page-markup instance identifier.
    #[must_use]
    pub fn with_instance_ident(mut self, ident: impl Into<String>) -> Self {
        self.instance_ident = ident.into();
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_display_mode() -> String {
    "block".to_owned()
}

fn default_instance_ident() -> String {
    "plot-hover".to_owned()
}
