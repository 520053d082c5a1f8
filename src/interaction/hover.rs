//! Hover synchronization.
//!
//! Binds pointer-hover behavior to already-classified element collections.
//! On pointer-over the hovered element's group is resolved through its
//! sequence position, the whole collection is partitioned into same-group vs
//! other, and the shared floating label is revealed, positioned, and filled.
//! Pointer-out fully resets.

use serde_json::Value;

use crate::core::{ElementCollection, NodeId, PlotDocument};
use crate::error::{PlotError, PlotResult};

use super::{FloatingLabel, HoverState};

/// Class marking members of the hovered element's group.
pub const HOVERED_CLASS: &str = "hovered";

/// Class marking members outside the hovered element's group.
pub const NOT_HOVERED_CLASS: &str = "not-hovered";

/// Handle to one registered hover binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(pub(crate) usize);

/// One (category, element-collection) binding with its parallel arrays.
#[derive(Debug)]
pub struct HoverBinding {
    collection: ElementCollection,
    groups: Vec<Value>,
    labels: Vec<String>,
    display_mode: String,
    state: HoverState,
}

impl HoverBinding {
    #[must_use]
    pub fn collection(&self) -> &ElementCollection {
        &self.collection
    }

    #[must_use]
    pub fn state(&self) -> &HoverState {
        &self.state
    }

    #[must_use]
    pub fn display_mode(&self) -> &str {
        &self.display_mode
    }
}

/// Attaches pointer-hover behavior to classified element collections and
/// drives the single shared label surface.
///
/// The horizontal/vertical pixel shifts are fixed for the coordinator's
/// lifetime. When several bindings are registered, the most recent hover owns
/// the label (pointer hover is single-focus, so no arbitration is needed).
#[derive(Debug)]
pub struct HoverCoordinator {
    label: FloatingLabel,
    x_shift: f64,
    y_shift: f64,
    bindings: Vec<HoverBinding>,
}

impl HoverCoordinator {
    #[must_use]
    pub fn new(label: FloatingLabel, x_shift: f64, y_shift: f64) -> Self {
        Self {
            label,
            x_shift,
            y_shift,
            bindings: Vec::new(),
        }
    }

    /// Registers one binding.
    ///
    /// Both parallel arrays must cover every element of the collection; a
    /// shorter array is an immediate error and nothing is registered. Group
    /// values are compared with strict structural equality on hover, so `1`
    /// never matches `"1"`; explicit JSON nulls form one ordinary group.
    pub fn bind(
        &mut self,
        collection: ElementCollection,
        groups: Vec<Value>,
        labels: Vec<String>,
        display_mode: impl Into<String>,
    ) -> PlotResult<BindingId> {
        if groups.len() < collection.len() {
            return Err(PlotError::GroupSequenceTooShort {
                category: collection.category(),
                required: collection.len(),
                supplied: groups.len(),
            });
        }
        if labels.len() < collection.len() {
            return Err(PlotError::LabelSequenceTooShort {
                category: collection.category(),
                required: collection.len(),
                supplied: labels.len(),
            });
        }

        let id = BindingId(self.bindings.len());
        self.bindings.push(HoverBinding {
            collection,
            groups,
            labels,
            display_mode: display_mode.into(),
            state: HoverState::Idle,
        });
        Ok(id)
    }

    #[must_use]
    pub fn label(&self) -> &FloatingLabel {
        &self.label
    }

    #[must_use]
    pub fn binding(&self, id: BindingId) -> Option<&HoverBinding> {
        self.bindings.get(id.0)
    }

    /// Pointer entered `element` at page coordinates (`page_x`, `page_y`).
    ///
    /// Restyles the whole bound collection by group membership and reveals
    /// the label next to the pointer. The partition is recomputed on every
    /// event; nothing is cached between hovers.
    pub fn pointer_over(
        &mut self,
        doc: &mut PlotDocument,
        id: BindingId,
        element: NodeId,
        page_x: f64,
        page_y: f64,
    ) -> PlotResult<()> {
        let binding = self
            .bindings
            .get_mut(id.0)
            .ok_or_else(|| PlotError::InvalidData(format!("unknown hover binding {}", id.0)))?;
        let position = binding
            .collection
            .position_of(element)
            .ok_or(PlotError::ElementNotBound)?;
        let hovered_group = binding.groups[position].clone();

        for member in binding.collection.iter() {
            doc.remove_class(member, HOVERED_CLASS);
            doc.add_class(member, NOT_HOVERED_CLASS);
        }
        for (other, member) in binding.collection.iter().enumerate() {
            if binding.groups[other] == hovered_group {
                doc.remove_class(member, NOT_HOVERED_CLASS);
                doc.add_class(member, HOVERED_CLASS);
            }
        }

        self.label.show(&binding.display_mode);
        self.label
            .move_to(page_x + self.x_shift, page_y + self.y_shift);
        self.label.set_content(binding.labels[position].clone());

        binding.state = HoverState::Hovering {
            group: hovered_group,
        };
        Ok(())
    }

    /// Pointer left the bound collection.
    ///
    /// Clears both highlight markers from every member, hides the label, and
    /// returns the binding to idle.
    pub fn pointer_out(&mut self, doc: &mut PlotDocument, id: BindingId) -> PlotResult<()> {
        let binding = self
            .bindings
            .get_mut(id.0)
            .ok_or_else(|| PlotError::InvalidData(format!("unknown hover binding {}", id.0)))?;

        for member in binding.collection.iter() {
            doc.remove_class(member, HOVERED_CLASS);
            doc.remove_class(member, NOT_HOVERED_CLASS);
        }
        self.label.hide();
        binding.state = HoverState::Idle;
        Ok(())
    }
}
