use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PlotError, PlotResult};

/// Parallel label/group arrays for one axes region.
///
/// Index *i* of each array corresponds to the *i*-th element of a category
/// collection in classification order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TooltipData {
    #[serde(rename = "tooltip_labels")]
    labels: Vec<String>,
    #[serde(rename = "tooltip_groups")]
    groups: Vec<Value>,
}

impl TooltipData {
    #[must_use]
    pub fn new(labels: Vec<String>, groups: Vec<Value>) -> Self {
        Self { labels, groups }
    }

    /// Builds tooltip data with default groups: each label correlates only
    /// with itself (group *i* for the element at position *i*).
    #[must_use]
    pub fn from_labels(labels: Vec<String>) -> Self {
        let groups = (0..labels.len()).map(Value::from).collect();
        Self { labels, groups }
    }

    /// Appends legend entries to both arrays, so a legend swatch shares the
    /// group of the series it names.
    #[must_use]
    pub fn with_legend_entries(mut self, entries: &[String]) -> Self {
        for entry in entries {
            self.labels.push(entry.clone());
            self.groups.push(Value::from(entry.as_str()));
        }
        self
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn groups(&self) -> &[Value] {
        &self.groups
    }
}

/// Serializable tooltip bundle consumed by page embedders.
///
/// Axes entries keep registration order so emitted documents are
/// deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    pub tooltip_x_shift: f64,
    pub tooltip_y_shift: f64,
    pub axes: IndexMap<String, TooltipData>,
}

impl PlotData {
    pub fn to_json(&self) -> PlotResult<String> {
        serde_json::to_string(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize plot data: {e}")))
    }
}
