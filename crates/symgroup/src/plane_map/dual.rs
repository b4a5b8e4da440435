//! Dual map.

use super::types::{FaceId, PlaneMap};

/// Rotation code of the dual: face `f` becomes vertex `f`, and its rotation
/// lists the faces across its boundary darts in boundary order.
///
/// The result is only a simple map when no two faces share more than one
/// edge and no edge has the same face on both sides (3-connected primal).
pub fn dual_code(map: &PlaneMap) -> Vec<u32> {
    let mut code = Vec::with_capacity(1 + map.num_darts() + map.num_faces());
    code.push(map.num_faces() as u32);
    for f in 0..map.num_faces() {
        for d in map.face_darts(FaceId(f)) {
            let across = map.dart(map.inverse(d)).right_face;
            code.push(across.0 as u32 + 1);
        }
        code.push(0);
    }
    code
}
