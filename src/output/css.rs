//! Stylesheet helpers for embedding annotated plots.

use std::fmt::Write as _;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{PlotError, PlotResult};

/// Stock styles for the highlight classes and the tooltip overlay.
pub const DEFAULT_STYLESHEET: &str = "\
.plot-element {
  transition: opacity 0.2s ease;
}
.not-hovered {
  opacity: 0.25;
}
.hovered {
  opacity: 1;
}
.tooltip {
  position: absolute;
  display: none;
  pointer-events: none;
  background: #ffffff;
  border: 1px solid #cccccc;
  border-radius: 3px;
  padding: 4px 8px;
  font-family: sans-serif;
  font-size: 0.85em;
}
";

/// Renders nested rule maps to CSS text, keeping insertion order.
#[must_use]
pub fn from_map(rules: &IndexMap<String, IndexMap<String, String>>) -> String {
    let mut out = String::new();
    for (selector, declarations) in rules {
        let _ = writeln!(out, "{selector} {{");
        for (property, value) in declarations {
            let _ = writeln!(out, "  {property}: {value};");
        }
        let _ = writeln!(out, "}}");
    }
    out
}

/// Reads a stylesheet from disk.
pub fn from_file(path: impl AsRef<Path>) -> PlotResult<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| PlotError::Stylesheet {
        path: path.display().to_string(),
        source,
    })
}
