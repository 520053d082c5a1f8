use tracing::trace;

use crate::core::NodeId;
use crate::error::{PlotError, PlotResult};
use crate::interaction::BindingId;

use super::PlotAnnotator;

pub(super) struct HoverController;

impl HoverController {
    pub(super) fn pointer_over(
        engine: &mut PlotAnnotator,
        element: NodeId,
        page_x: f64,
        page_y: f64,
    ) -> PlotResult<()> {
        let id = Self::binding_for(engine, element).ok_or(PlotError::ElementNotBound)?;
        trace!(element = element.index(), page_x, page_y, "pointer over");
        engine
            .coordinator
            .pointer_over(&mut engine.document, id, element, page_x, page_y)
    }

    pub(super) fn pointer_out(engine: &mut PlotAnnotator, element: NodeId) -> PlotResult<()> {
        let id = Self::binding_for(engine, element).ok_or(PlotError::ElementNotBound)?;
        trace!(element = element.index(), "pointer out");
        engine.coordinator.pointer_out(&mut engine.document, id)
    }

    fn binding_for(engine: &PlotAnnotator, element: NodeId) -> Option<BindingId> {
        engine.bindings.values().copied().find(|&id| {
            engine
                .coordinator
                .binding(id)
                .is_some_and(|binding| binding.collection().contains(element))
        })
    }
}
