pub mod classify;
pub mod convention;
pub mod document;
pub mod traverse;

pub use classify::{
    ElementCategory, ElementCollection, PLOT_ELEMENT_CLASS, find_areas, find_bars, find_lines,
    find_points,
};
pub use document::{NodeId, PlotDocument};
