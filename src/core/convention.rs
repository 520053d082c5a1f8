//! Identifier naming convention of the rendered plot document.
//!
//! The external plot producer writes stable id prefixes onto the groups that
//! wrap each kind of graphical primitive. These values are the wire contract
//! this crate selects against; they are not validated or versioned here.

/// Groups wrapping bar/rectangle polygon collections.
pub const POLYGON_COLLECTION_PREFIX: &str = "PolyCollection_";

/// Groups wrapping scatter/point path collections.
pub const PATH_COLLECTION_PREFIX: &str = "PathCollection";

/// Groups wrapping individual data lines.
pub const LINE_PREFIX: &str = "line2d";

/// Groups wrapping axis spines, ticks, and tick labels.
///
/// Paths under these groups are strokes of the coordinate frame, not data.
pub const AXIS_GROUP_PREFIX: &str = "matplotlib.axis";

/// Groups wrapping filled-area collections.
pub const FILL_BETWEEN_PREFIX: &str = "FillBetweenPolyCollection";

/// Tag of grouping nodes.
pub const GROUP_TAG: &str = "g";

/// Tag of path-like graphical primitives.
pub const PATH_TAG: &str = "path";

/// Attribute recording a point element's group correlation value.
pub const DATA_GROUP_ATTRIBUTE: &str = "data-group";

/// Formats the 1-based container identifier of one coordinate-axes region.
#[must_use]
pub fn axes_ident(index: usize) -> String {
    format!("axes_{index}")
}
