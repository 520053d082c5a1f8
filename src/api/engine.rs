use indexmap::IndexMap;

use crate::core::{ElementCategory, ElementCollection, NodeId, PlotDocument};
use crate::error::{PlotError, PlotResult};
use crate::interaction::{BindingId, FloatingLabel, HoverCoordinator};

use super::annotation_controller::AnnotationController;
use super::hover_controller::HoverController;
use super::{AnnotatorConfig, PlotData, TooltipData};

/// Main orchestration facade consumed by host applications.
///
/// `PlotAnnotator` owns the plot document, the hover coordinator, and the
/// per-axes tooltip registry. Classification and hover binding remain usable
/// on their own through [`crate::core::classify`] and
/// [`crate::interaction::HoverCoordinator`]; this facade is the convenience
/// composition of the two.
#[derive(Debug)]
pub struct PlotAnnotator {
    pub(super) document: PlotDocument,
    pub(super) config: AnnotatorConfig,
    pub(super) coordinator: HoverCoordinator,
    pub(super) tooltip_data: IndexMap<String, TooltipData>,
    pub(super) bindings: IndexMap<(String, ElementCategory), BindingId>,
}

impl PlotAnnotator {
    pub fn new(document: PlotDocument, config: AnnotatorConfig) -> PlotResult<Self> {
        if !config.tooltip_x_shift.is_finite() || !config.tooltip_y_shift.is_finite() {
            return Err(PlotError::InvalidData(
                "tooltip shifts must be finite".to_owned(),
            ));
        }

        let coordinator = HoverCoordinator::new(
            FloatingLabel::new(),
            config.tooltip_x_shift,
            config.tooltip_y_shift,
        );
        Ok(Self {
            document,
            config,
            coordinator,
            tooltip_data: IndexMap::new(),
            bindings: IndexMap::new(),
        })
    }

    /// Registers tooltip data for one axes region.
    pub fn add_tooltip(&mut self, axes_ident: &str, data: TooltipData) {
        AnnotationController::add_tooltip(self, axes_ident, data);
    }

    /// Classifies every category within the region and binds hover behavior
    /// for each non-empty collection against the region's tooltip data.
    pub fn enable_hover(&mut self, axes_ident: &str) -> PlotResult<()> {
        AnnotationController::enable_hover(self, axes_ident)
    }

    /// Routes a pointer-over event to the binding containing `element`.
    pub fn pointer_over(&mut self, element: NodeId, page_x: f64, page_y: f64) -> PlotResult<()> {
        HoverController::pointer_over(self, element, page_x, page_y)
    }

    /// Routes a pointer-out event to the binding containing `element`.
    pub fn pointer_out(&mut self, element: NodeId) -> PlotResult<()> {
        HoverController::pointer_out(self, element)
    }

    #[must_use]
    pub fn document(&self) -> &PlotDocument {
        &self.document
    }

    #[must_use]
    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    #[must_use]
    pub fn label(&self) -> &FloatingLabel {
        self.coordinator.label()
    }

    /// Classified collection of one (region, category) pair, when hover has
    /// been enabled for the region and the category matched anything.
    #[must_use]
    pub fn collection(
        &self,
        axes_ident: &str,
        category: ElementCategory,
    ) -> Option<&ElementCollection> {
        let id = self
            .bindings
            .get(&(axes_ident.to_owned(), category))
            .copied()?;
        self.coordinator.binding(id).map(|b| b.collection())
    }

    /// Serializable tooltip bundle for page embedders.
    #[must_use]
    pub fn plot_data(&self) -> PlotData {
        PlotData {
            tooltip_x_shift: self.config.tooltip_x_shift,
            tooltip_y_shift: self.config.tooltip_y_shift,
            axes: self.tooltip_data.clone(),
        }
    }

    /// Hands the annotated document back to the caller.
    #[must_use]
    pub fn into_document(self) -> PlotDocument {
        self.document
    }
}
