mod annotation_controller;
mod engine;
mod engine_config;
mod hover_controller;
mod tooltip_data;

pub use engine::PlotAnnotator;
pub use engine_config::AnnotatorConfig;
pub use tooltip_data::{PlotData, TooltipData};
