//! Symmetry classification: automorphism group → point group.
//!
//! Purpose
//! - Name the automorphism group of a plane map as one of the 14 point group
//!   families (`Cn`, `Cnh`, `Cnv`, `S2n`, `Dn`, `Dnh`, `Dnd`, `T`, `Td`, `Th`,
//!   `O`, `Oh`, `I`, `Ih`) with the fold of the principal axis for the axial
//!   families.
//!
//! Method
//! - Ordered rules; the first that applies decides. Small chiral groups are
//!   cyclic. Otherwise rotation axes are probed through vertices, then faces,
//!   then edge midpoints. An axis of order > 5 forces an axial group; more than
//!   two 3-fold axes, or two different folds ≥ 3, force a polyhedral group.
//!   The group is then pinned down by its order, the number of reversing
//!   automorphisms, and which of those have fixed points.
//!
//! Layout
//! - `group.rs` (names, parsing, patterns), `axes.rs` (axis probes),
//!   `rules.rs` (the rule list).

mod axes;
mod group;
mod rules;

pub use axes::AxisCenter;
pub use group::{GroupFamily, GroupPattern, PointGroup};
pub use rules::classify;

/// Result for one map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub group: PointGroup,
    /// Number of automorphisms.
    pub order: usize,
    /// Number of orientation reversing automorphisms.
    pub reversing: usize,
}
