//! Element classification.
//!
//! Locates the graphical primitives of one coordinate-axes region and tags
//! each with a semantic category marker. The preorder selection order of each
//! operation is the contract callers rely on when indexing parallel
//! group/label arrays.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::convention::{
    AXIS_GROUP_PREFIX, DATA_GROUP_ATTRIBUTE, FILL_BETWEEN_PREFIX, GROUP_TAG, LINE_PREFIX,
    PATH_COLLECTION_PREFIX, PATH_TAG, POLYGON_COLLECTION_PREFIX,
};
use crate::core::document::{NodeId, PlotDocument};
use crate::error::{PlotError, PlotResult};

/// Class shared by every classified plot element.
pub const PLOT_ELEMENT_CLASS: &str = "plot-element";

/// Semantic category of a classified plot element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementCategory {
    Bar,
    Point,
    Line,
    Area,
}

impl ElementCategory {
    pub(crate) const ALL: [ElementCategory; 4] = [
        ElementCategory::Bar,
        ElementCategory::Point,
        ElementCategory::Line,
        ElementCategory::Area,
    ];

    /// Class marker written onto elements of this category.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            ElementCategory::Bar => "bar",
            ElementCategory::Point => "point",
            ElementCategory::Line => "line",
            ElementCategory::Area => "area",
        }
    }
}

/// Ordered result of one classification call.
///
/// Members are kept in preorder document order; an element's position in the
/// collection is its stable sequence index into caller-supplied group/label
/// arrays.
#[derive(Debug, Clone)]
pub struct ElementCollection {
    category: ElementCategory,
    members: IndexSet<NodeId>,
}

impl ElementCollection {
    fn new(category: ElementCategory, members: IndexSet<NodeId>) -> Self {
        Self { category, members }
    }

    #[must_use]
    pub fn category(&self) -> ElementCategory {
        self.category
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Sequence position of `node` within the collection.
    #[must_use]
    pub fn position_of(&self, node: NodeId) -> Option<usize> {
        self.members.get_index_of(&node)
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<NodeId> {
        self.members.get_index(position).copied()
    }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.members.contains(&node)
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.members.iter().copied()
    }
}

/// Selects bar primitives: paths nested under polygon-collection groups.
///
/// Tags each match as category `bar`. An axes identifier matching no region
/// yields an empty collection.
pub fn find_bars(doc: &mut PlotDocument, axes_ident: &str) -> ElementCollection {
    let members = select_paths(doc, axes_ident, POLYGON_COLLECTION_PREFIX, false);
    apply_category(doc, &members, ElementCategory::Bar);
    ElementCollection::new(ElementCategory::Bar, members)
}

/// Selects point primitives: paths nested under path-collection groups.
///
/// The element at sequence position *i* records `groups[i]` as its group
/// correlation. A group sequence shorter than the match count is an immediate
/// [`PlotError::GroupSequenceTooShort`]; no element is tagged in that case.
pub fn find_points(
    doc: &mut PlotDocument,
    axes_ident: &str,
    groups: &[Value],
) -> PlotResult<ElementCollection> {
    let members = select_paths(doc, axes_ident, PATH_COLLECTION_PREFIX, false);
    if groups.len() < members.len() {
        return Err(PlotError::GroupSequenceTooShort {
            category: ElementCategory::Point,
            required: members.len(),
            supplied: groups.len(),
        });
    }

    apply_category(doc, &members, ElementCategory::Point);
    for (position, &node) in members.iter().enumerate() {
        doc.set_attribute(node, DATA_GROUP_ATTRIBUTE, attribute_text(&groups[position]));
    }
    Ok(ElementCollection::new(ElementCategory::Point, members))
}

/// Selects line primitives: paths nested under line groups, excluding axis
/// spine/tick strokes (paths with an axis-prefixed ancestor group).
pub fn find_lines(doc: &mut PlotDocument, axes_ident: &str) -> ElementCollection {
    let members = select_paths(doc, axes_ident, LINE_PREFIX, true);
    apply_category(doc, &members, ElementCategory::Line);
    ElementCollection::new(ElementCategory::Line, members)
}

/// Selects area primitives: paths nested under fill-between groups.
pub fn find_areas(doc: &mut PlotDocument, axes_ident: &str) -> ElementCollection {
    let members = select_paths(doc, axes_ident, FILL_BETWEEN_PREFIX, false);
    apply_category(doc, &members, ElementCategory::Area);
    ElementCollection::new(ElementCategory::Area, members)
}

/// Text form of a group correlation value written into element attributes.
///
/// Strings are written raw; other JSON values use their compact rendering.
fn attribute_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn select_paths(
    doc: &PlotDocument,
    axes_ident: &str,
    group_prefix: &str,
    exclude_axis_strokes: bool,
) -> IndexSet<NodeId> {
    let mut members = IndexSet::new();
    for region in doc.nodes_with_ident(axes_ident) {
        for node in doc.descendants(region) {
            if doc.tag(node) != PATH_TAG {
                continue;
            }
            if !has_prefixed_group_between(doc, node, region, group_prefix) {
                continue;
            }
            if exclude_axis_strokes && has_axis_group_ancestor(doc, node) {
                continue;
            }
            members.insert(node);
        }
    }
    members
}

/// True when some ancestor group strictly between `node` and `region` carries
/// the prefix.
fn has_prefixed_group_between(
    doc: &PlotDocument,
    node: NodeId,
    region: NodeId,
    prefix: &str,
) -> bool {
    for ancestor in doc.ancestors(node) {
        if ancestor == region {
            return false;
        }
        if doc.tag(ancestor) == GROUP_TAG
            && doc.ident(ancestor).is_some_and(|id| id.starts_with(prefix))
        {
            return true;
        }
    }
    false
}

/// True when any ancestor group, up to the document root, is an axis group.
fn has_axis_group_ancestor(doc: &PlotDocument, node: NodeId) -> bool {
    doc.ancestors(node).any(|ancestor| {
        doc.tag(ancestor) == GROUP_TAG
            && doc
                .ident(ancestor)
                .is_some_and(|id| id.starts_with(AXIS_GROUP_PREFIX))
    })
}

/// Replaces the category marker set on every member.
///
/// Replacing rather than appending keeps re-classification idempotent.
fn apply_category(doc: &mut PlotDocument, members: &IndexSet<NodeId>, category: ElementCategory) {
    for &node in members {
        for other in ElementCategory::ALL {
            if other != category {
                doc.remove_class(node, other.class_name());
            }
        }
        doc.add_class(node, category.class_name());
        doc.add_class(node, PLOT_ELEMENT_CLASS);
    }
}
