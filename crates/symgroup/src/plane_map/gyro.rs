//! Gyro map: every face becomes a pinwheel of pentagons.

use super::code::encode_faces;
use super::types::{FaceId, PlaneMap};

/// Rotation code of the gyro of `map`.
///
/// Every edge is cut twice; the cut nearer to the start of dart `d` is vertex
/// `nv + d`. Face `f` gets a centre `nv + ndarts + f`, joined to the cut
/// nearer to the start of each boundary dart. Each corner of the map turns
/// into one pentagon. Rotations of `map` survive and reflections do not,
/// although the result may gain symmetry of its own: the gyro of the
/// tetrahedron is a dodecahedron.
pub fn gyro_code(map: &PlaneMap) -> Vec<u32> {
    let nv = map.num_vertices();
    let cut = |d: usize| nv + d;
    let mut faces = Vec::with_capacity(map.num_darts());
    for f in 0..map.num_faces() {
        let center = nv + map.num_darts() + f;
        let boundary: Vec<_> = map.face_darts(FaceId(f)).collect();
        for (i, &d) in boundary.iter().enumerate() {
            let after = boundary[(i + 1) % boundary.len()];
            faces.push(vec![
                center,
                cut(d.0),
                cut(map.inverse(d).0),
                map.dart(d).end.0,
                cut(after.0),
            ]);
        }
    }
    encode_faces(nv + map.num_darts() + map.num_faces(), &faces)
}
