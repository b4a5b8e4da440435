//! Plane maps: dart arena, builder, face tracing, dual and gyro.
//!
//! Purpose
//! - Decode a rotation code into an arena of darts with `next`/`prev`
//!   rotation links and `inverse` links, all stored as indices.
//! - Trace faces (`right_face`, face starts and sizes) so that rotations about
//!   face centres can be probed and the dual can be written out.
//!
//! Rotation code
//! - `code[0] = nv`, then for each vertex in order its neighbours (1-based)
//!   in rotation order, terminated by `0`.
//!
//! Layout
//! - `types.rs` (ids, darts, arena, mark epoch), `build.rs` (decode + faces),
//!   `code.rs` (rotation lists or face cycles -> code), `dual.rs` and
//!   `gyro.rs` (derived maps).

mod build;
mod code;
mod dual;
mod gyro;
mod types;

pub use build::{build_map, trace_faces};
pub use code::{encode, encode_faces, split};
pub use dual::dual_code;
pub use gyro::gyro_code;
pub use types::{Dart, DartId, FaceId, MarkEpoch, Orbit, PlaneMap, VertexId};

#[cfg(test)]
mod tests;
