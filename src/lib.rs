//! plot-hover: hover annotation engine for pre-rendered vector plots.
//!
//! This crate takes the document tree of a plot rendered by an external
//! plotting library, classifies its graphical primitives into semantic
//! categories (bar, point, line, area), and drives a pointer-hover protocol
//! that highlights whole data series and positions a single floating
//! tooltip label.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod output;
pub mod telemetry;

pub use api::{AnnotatorConfig, PlotAnnotator};
pub use error::{PlotError, PlotResult};
