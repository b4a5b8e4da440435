//! Point groups of plane maps.
//!
//! A plane map is a connected simple graph together with a rotation system
//! (the cyclic order of neighbours around every vertex) describing a cellular
//! embedding in the sphere. This crate computes the combinatorial automorphism
//! group of such a map and names it as one of the 14 families of finite 3D
//! point groups.
//!
//! Pipeline (one pass per map)
//! - `plane_map`: decode a rotation code into a dart arena and trace faces.
//! - `certificate`: breadth-first fingerprints from a starting dart.
//! - `automorphism`: all automorphisms by comparing fingerprints.
//! - `classify`: ordered rules over group order, chirality and axes.
//! - `report`: one record per map for the caller to print.
//!
//! `Workspace` ties the stages together and owns every buffer that is reused
//! between maps. Use one workspace per thread.

pub mod automorphism;
pub mod certificate;
pub mod cfg;
pub mod classify;
pub mod error;
pub mod families;
pub mod plane_map;
pub mod relabel;
pub mod report;
pub mod workspace;

pub use classify::{Classification, GroupFamily, GroupPattern, PointGroup};
pub use error::{Error, Inconsistency, MalformedInput};
pub use workspace::{classify_code, Workspace};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::automorphism::{Automorphism, AutomorphismSet};
    pub use crate::certificate::{certificate, CertScratch, Orientation};
    pub use crate::cfg::BuildCfg;
    pub use crate::classify::{Classification, GroupFamily, GroupPattern, PointGroup};
    pub use crate::error::{Error, Inconsistency, MalformedInput};
    pub use crate::plane_map::{DartId, FaceId, PlaneMap, VertexId};
    pub use crate::report::Report;
    pub use crate::workspace::{classify_code, Workspace};
}
