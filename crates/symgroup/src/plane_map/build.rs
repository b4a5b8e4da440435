//! Decoding rotation codes into the dart arena, and face tracing.

use crate::cfg::{BuildCfg, MIN_VERTICES};
use crate::error::MalformedInput;

use super::types::{Dart, DartId, FaceId, MarkEpoch, PlaneMap, VertexId};

/// Decode `code` into `map` (previous contents are discarded, allocations kept).
///
/// Inverse darts are resolved when the second endpoint is read: a dart
/// `u → v` with `v < u` is paired with the dart `v → u` already in the arena.
/// The map must be connected; faces are traced afterwards and the map must be
/// spherical. On error `map` holds a partial arena and must not be used.
pub fn build_map(
    map: &mut PlaneMap,
    epoch: &mut MarkEpoch,
    code: &[u32],
    cfg: &BuildCfg,
) -> Result<(), MalformedInput> {
    map.clear();
    let nv = *code.first().ok_or(MalformedInput::EmptyCode)? as usize;
    if nv < MIN_VERTICES {
        return Err(MalformedInput::TooFewVertices {
            nv,
            min: MIN_VERTICES,
        });
    }
    if nv > cfg.max_vertices {
        return Err(MalformedInput::TooManyVertices {
            nv,
            max: cfg.max_vertices,
        });
    }
    let mut pos = 1;
    for v in 0..nv {
        let first = map.darts.len();
        loop {
            let Some(&entry) = code.get(pos) else {
                return Err(MalformedInput::Truncated(v + 1));
            };
            pos += 1;
            if entry == 0 {
                break;
            }
            let w = entry as usize;
            if w > nv {
                return Err(MalformedInput::NeighbourOutOfRange {
                    vertex: v + 1,
                    neighbour: w,
                    nv,
                });
            }
            if w - 1 == v {
                return Err(MalformedInput::SelfLoop(v + 1));
            }
            if map.darts.len() - first == cfg.max_degree {
                return Err(MalformedInput::DegreeTooLarge {
                    vertex: v + 1,
                    max: cfg.max_degree,
                });
            }
            if map.darts.len() == cfg.max_darts {
                return Err(MalformedInput::TooManyDarts {
                    max: cfg.max_darts,
                });
            }
            let id = DartId(map.darts.len());
            map.darts.push(Dart {
                start: VertexId(v),
                end: VertexId(w - 1),
                right_face: FaceId(0),
                next: id,
                prev: id,
                inverse: id,
                index: id,
                mark: 0,
            });
            if w - 1 < v {
                pair_with_earlier(map, id)?;
            }
        }
        let last = map.darts.len();
        if last == first {
            return Err(MalformedInput::IsolatedVertex(v + 1));
        }
        for k in first..last {
            map.darts[k].next = DartId(if k + 1 == last { first } else { k + 1 });
            map.darts[k].prev = DartId(if k == first { last - 1 } else { k - 1 });
        }
        map.first_dart.push(DartId(first));
        map.degree.push(last - first);
    }
    if pos != code.len() {
        return Err(MalformedInput::TrailingEntries(code.len() - pos));
    }
    // Darts towards a later vertex that never listed us back.
    if let Some(d) = map.darts.iter().find(|d| d.inverse == d.index) {
        return Err(MalformedInput::MissingInverse {
            from: d.end.0 + 1,
            to: d.start.0 + 1,
        });
    }
    // A sphere plus a torus still sums to Euler characteristic 2.
    let reached = reachable_vertices(map, epoch);
    if reached != nv {
        return Err(MalformedInput::Disconnected { reached, nv });
    }

    trace_faces(map, epoch);

    let chi = map.euler_characteristic();
    if chi != 2 {
        return Err(MalformedInput::NotSpherical {
            chi,
            nv,
            ne: map.num_edges(),
            nf: map.num_faces(),
        });
    }
    Ok(())
}

/// Link dart `id` (`u → v`, `v < u`) with the first dart `v → u`.
fn pair_with_earlier(map: &mut PlaneMap, id: DartId) -> Result<(), MalformedInput> {
    let (u, v) = (map.darts[id.0].start, map.darts[id.0].end);
    // Darts of `v` are contiguous and already complete.
    let first = map.first_dart[v.0].0;
    let found = (first..first + map.degree[v.0]).find(|&k| map.darts[k].end == u);
    let Some(k) = found else {
        return Err(MalformedInput::MissingInverse {
            from: v.0 + 1,
            to: u.0 + 1,
        });
    };
    if map.darts[k].inverse.0 != k {
        return Err(MalformedInput::MultiEdge {
            from: v.0 + 1,
            to: u.0 + 1,
        });
    }
    map.darts[k].inverse = id;
    map.darts[id.0].inverse = DartId(k);
    Ok(())
}

/// Number of vertices reachable from vertex 0. A vertex counts as reached
/// once its first dart carries the current mark.
fn reachable_vertices(map: &mut PlaneMap, epoch: &mut MarkEpoch) -> usize {
    let mark = epoch.advance(&mut map.darts);
    let root = map.first_dart[0].0;
    map.darts[root].mark = mark;
    let mut stack = vec![VertexId(0)];
    let mut reached = 1;
    while let Some(v) = stack.pop() {
        let first = map.first_dart[v.0].0;
        for k in first..first + map.degree[v.0] {
            let w = map.darts[k].end;
            let entry = map.first_dart[w.0].0;
            if map.darts[entry].mark != mark {
                map.darts[entry].mark = mark;
                reached += 1;
                stack.push(w);
            }
        }
    }
    reached
}

/// Number the faces: every dart gets the face on its right, found by walking
/// `prev ∘ inverse` until the boundary closes.
pub fn trace_faces(map: &mut PlaneMap, epoch: &mut MarkEpoch) {
    let mark = epoch.advance(&mut map.darts);
    map.face_start.clear();
    map.face_size.clear();
    for start in 0..map.darts.len() {
        if map.darts[start].mark == mark {
            continue;
        }
        let face = FaceId(map.face_start.len());
        let mut d = DartId(start);
        let mut size = 0;
        loop {
            let dart = &mut map.darts[d.0];
            dart.right_face = face;
            dart.mark = mark;
            size += 1;
            d = map.face_step(d);
            if d.0 == start {
                break;
            }
        }
        map.face_start.push(DartId(start));
        map.face_size.push(size);
    }
}
