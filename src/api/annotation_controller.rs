use tracing::{debug, warn};

use crate::core::classify;
use crate::error::{PlotError, PlotResult};

use super::{PlotAnnotator, TooltipData};

pub(super) struct AnnotationController;

impl AnnotationController {
    pub(super) fn add_tooltip(engine: &mut PlotAnnotator, axes_ident: &str, data: TooltipData) {
        debug!(
            axes = axes_ident,
            labels = data.labels().len(),
            groups = data.groups().len(),
            "register tooltip data"
        );
        engine.tooltip_data.insert(axes_ident.to_owned(), data);
    }

    pub(super) fn enable_hover(engine: &mut PlotAnnotator, axes_ident: &str) -> PlotResult<()> {
        let data = engine
            .tooltip_data
            .get(axes_ident)
            .cloned()
            .ok_or_else(|| PlotError::MissingTooltipData(axes_ident.to_owned()))?;

        let bars = classify::find_bars(&mut engine.document, axes_ident);
        let points = classify::find_points(&mut engine.document, axes_ident, data.groups())?;
        let lines = classify::find_lines(&mut engine.document, axes_ident);
        let areas = classify::find_areas(&mut engine.document, axes_ident);

        debug!(
            axes = axes_ident,
            bars = bars.len(),
            points = points.len(),
            lines = lines.len(),
            areas = areas.len(),
            "classified axes region"
        );
        if bars.is_empty() && points.is_empty() && lines.is_empty() && areas.is_empty() {
            warn!(axes = axes_ident, "no plot elements matched axes region");
        }

        for collection in [bars, points, lines, areas] {
            if collection.is_empty() {
                continue;
            }
            let category = collection.category();
            let id = engine.coordinator.bind(
                collection,
                data.groups().to_vec(),
                data.labels().to_vec(),
                engine.config.display_mode.clone(),
            )?;
            // Re-enabling a region replaces its routing entries, so stale
            // bindings stop receiving events.
            engine
                .bindings
                .insert((axes_ident.to_owned(), category), id);
        }
        Ok(())
    }
}
