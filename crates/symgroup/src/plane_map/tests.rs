use super::*;
use crate::cfg::BuildCfg;
use crate::error::MalformedInput;
use crate::families;

// K4 drawn as a triangle 2-3-4 around vertex 1.
const K4: [u32; 17] = [4, 2, 3, 4, 0, 3, 1, 4, 0, 4, 1, 2, 0, 2, 1, 3, 0];

fn build(code: &[u32]) -> Result<PlaneMap, MalformedInput> {
    build_with(code, &BuildCfg::default())
}

fn build_with(code: &[u32], cfg: &BuildCfg) -> Result<PlaneMap, MalformedInput> {
    let mut map = PlaneMap::default();
    build_map(&mut map, &mut MarkEpoch::default(), code, cfg)?;
    Ok(map)
}

fn assert_links(map: &PlaneMap) {
    for dart in &map.darts {
        let d = dart.index;
        assert_eq!(map.inverse(map.inverse(d)), d);
        assert_ne!(map.inverse(d), d);
        assert_eq!(map.next(map.prev(d)), d);
        assert_eq!(map.prev(map.next(d)), d);
        assert_eq!(map.dart(map.next(d)).start, dart.start);
        let inv = map.dart(map.inverse(d));
        assert_eq!((inv.start, inv.end), (dart.end, dart.start));
    }
    for v in 0..map.num_vertices() {
        assert_eq!(map.darts_around(VertexId(v)).count(), map.degree[v]);
    }
    assert_eq!(map.face_size.iter().sum::<usize>(), map.num_darts());
    for f in 0..map.num_faces() {
        let f = FaceId(f);
        assert_eq!(map.face_darts(f).count(), map.face_size[f.0]);
        assert!(map.face_darts(f).all(|d| map.dart(d).right_face == f));
    }
    assert_eq!(map.edge_darts().count(), map.num_edges());
}

#[test]
fn k4_builds_with_four_triangles() {
    let map = build(&K4).unwrap();
    assert_eq!(map.num_vertices(), 4);
    assert_eq!(map.num_edges(), 6);
    assert_eq!(map.num_faces(), 4);
    assert!(map.face_size.iter().all(|&s| s == 3));
    assert_eq!(map.euler_characteristic(), 2);
    assert_links(&map);
}

#[test]
fn families_satisfy_link_invariants() {
    for code in [
        families::cube(),
        families::dodecahedron(),
        families::icosahedron(),
        families::prism(7),
        families::antiprism(6),
        families::chiral_antiprism(5),
        families::bipyramid(4),
    ] {
        let map = build(&code).unwrap();
        assert_links(&map);
    }
}

#[test]
fn prism_faces_are_two_caps_and_quads() {
    let map = build(&families::prism(5)).unwrap();
    let mut sizes = map.face_size.clone();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![4, 4, 4, 4, 4, 5, 5]);
}

#[test]
fn find_dart_follows_adjacency() {
    let map = build(&families::cube()).unwrap();
    let d = map.find_dart(VertexId(0), VertexId(4)).unwrap();
    assert_eq!(map.dart(d).end, VertexId(4));
    // Opposite corners of a face are not adjacent.
    assert!(map.find_dart(VertexId(0), VertexId(5)).is_none());
}

#[test]
fn rejects_empty_and_small_codes() {
    assert_eq!(build(&[]).unwrap_err(), MalformedInput::EmptyCode);
    let triangle = [3, 2, 3, 0, 1, 3, 0, 1, 2, 0];
    assert_eq!(
        build(&triangle).unwrap_err(),
        MalformedInput::TooFewVertices { nv: 3, min: 4 }
    );
}

#[test]
fn rejects_maps_above_configured_limits() {
    let cfg = BuildCfg::with_max_vertices(6);
    assert_eq!(
        build_with(&families::cube(), &cfg).unwrap_err(),
        MalformedInput::TooManyVertices { nv: 8, max: 6 }
    );
    let narrow_degree = BuildCfg {
        max_degree: 2,
        ..BuildCfg::default()
    };
    assert_eq!(
        build_with(&K4, &narrow_degree).unwrap_err(),
        MalformedInput::DegreeTooLarge { vertex: 1, max: 2 }
    );
    let few_darts = BuildCfg {
        max_darts: 6,
        ..BuildCfg::default()
    };
    assert_eq!(
        build_with(&K4, &few_darts).unwrap_err(),
        MalformedInput::TooManyDarts { max: 6 }
    );
}

#[test]
fn rejects_bad_neighbours() {
    let mut code = K4;
    code[1] = 9;
    assert_eq!(
        build(&code).unwrap_err(),
        MalformedInput::NeighbourOutOfRange {
            vertex: 1,
            neighbour: 9,
            nv: 4
        }
    );
    code[1] = 1;
    assert_eq!(build(&code).unwrap_err(), MalformedInput::SelfLoop(1));
}

#[test]
fn rejects_framing_errors() {
    assert_eq!(build(&K4[..10]).unwrap_err(), MalformedInput::Truncated(3));
    let mut long = K4.to_vec();
    long.push(7);
    assert_eq!(
        build(&long).unwrap_err(),
        MalformedInput::TrailingEntries(1)
    );
    let isolated = [4, 0, 3, 4, 0, 2, 4, 0, 2, 3, 0];
    assert_eq!(
        build(&isolated).unwrap_err(),
        MalformedInput::IsolatedVertex(1)
    );
}

#[test]
fn rejects_unpaired_and_repeated_edges() {
    // Vertex 1 does not list 2, but 2 lists 1.
    let code = [4, 3, 4, 0, 3, 1, 4, 0, 4, 1, 2, 0, 2, 1, 3, 0];
    assert_eq!(
        build(&code).unwrap_err(),
        MalformedInput::MissingInverse { from: 1, to: 2 }
    );
    // Vertex 2 does not list 1, but 1 lists 2.
    let code = [4, 2, 3, 4, 0, 3, 4, 0, 4, 1, 2, 0, 2, 1, 3, 0];
    assert_eq!(
        build(&code).unwrap_err(),
        MalformedInput::MissingInverse { from: 2, to: 1 }
    );
    let code = [4, 2, 3, 4, 2, 0, 3, 1, 4, 1, 0, 4, 1, 2, 0, 2, 1, 3, 0];
    assert_eq!(
        build(&code).unwrap_err(),
        MalformedInput::MultiEdge { from: 1, to: 2 }
    );
}

#[test]
fn rejects_toroidal_rotation_system() {
    // K4 with the rotation at vertex 1 reversed embeds in the torus.
    let code = [4, 4, 3, 2, 0, 3, 1, 4, 0, 4, 1, 2, 0, 2, 1, 3, 0];
    assert!(matches!(
        build(&code).unwrap_err(),
        MalformedInput::NotSpherical { nv: 4, ne: 6, .. }
    ));
}

/// K4 next to a 3x3 toroidal grid: Euler characteristics 2 and 0 add up to 2.
fn sphere_and_torus() -> Vec<u32> {
    let mut rot = split(&K4).unwrap();
    let grid = |i: usize, j: usize| 4 + 3 * (i % 3) + j % 3;
    for i in 0..3 {
        for j in 0..3 {
            rot.push(vec![
                grid(i + 1, j),
                grid(i, j + 1),
                grid(i + 2, j),
                grid(i, j + 2),
            ]);
        }
    }
    encode(&rot)
}

#[test]
fn rejects_disconnected_maps() {
    assert_eq!(
        build(&sphere_and_torus()).unwrap_err(),
        MalformedInput::Disconnected { reached: 4, nv: 13 }
    );
    // Two tetrahedra side by side.
    let mut rot = split(&K4).unwrap();
    let shifted = split(&K4).unwrap().into_iter();
    rot.extend(shifted.map(|r| r.into_iter().map(|w| w + 4).collect::<Vec<_>>()));
    assert_eq!(
        build(&encode(&rot)).unwrap_err(),
        MalformedInput::Disconnected { reached: 4, nv: 8 }
    );
}

#[test]
fn early_rejection_clears_the_previous_map() {
    let mut map = PlaneMap::default();
    let mut epoch = MarkEpoch::default();
    let cfg = BuildCfg::default();
    build_map(&mut map, &mut epoch, &families::cube(), &cfg).unwrap();
    assert!(build_map(&mut map, &mut epoch, &[3, 2, 3, 0, 1, 3, 0, 1, 2, 0], &cfg).is_err());
    assert_eq!(map.num_vertices(), 0);
    assert_eq!(map.num_darts(), 0);
}

#[test]
fn failed_build_can_be_followed_by_a_good_one() {
    let mut map = PlaneMap::default();
    let mut epoch = MarkEpoch::default();
    let cfg = BuildCfg::default();
    assert!(build_map(&mut map, &mut epoch, &K4[..10], &cfg).is_err());
    build_map(&mut map, &mut epoch, &families::cube(), &cfg).unwrap();
    assert_eq!(map.num_faces(), 6);
    assert_links(&map);
}

#[test]
fn mark_epoch_wrap_resets_marks() {
    let mut map = PlaneMap::default();
    let mut epoch = MarkEpoch::default();
    build_map(&mut map, &mut epoch, &families::icosahedron(), &BuildCfg::default()).unwrap();
    epoch.set(u32::MAX);
    for dart in &mut map.darts {
        dart.mark = 1;
    }
    trace_faces(&mut map, &mut epoch);
    assert_eq!(epoch.current(), 1);
    assert_eq!(map.num_faces(), 20);
    assert_links(&map);
}

#[test]
fn split_and_encode_are_inverse() {
    let code = families::antiprism(4);
    let rotations = split(&code).unwrap();
    assert_eq!(rotations.len(), 8);
    assert_eq!(encode(&rotations), code);
    assert_eq!(split(&K4[..10]).unwrap_err(), MalformedInput::Truncated(3));
    assert_eq!(split(&[]).unwrap_err(), MalformedInput::EmptyCode);
}

#[test]
fn faces_encode_to_the_same_rotations() {
    let cube = build(&families::cube()).unwrap();
    let faces: Vec<Vec<usize>> = (0..cube.num_faces())
        .map(|f| {
            cube.face_darts(FaceId(f))
                .map(|d| cube.dart(d).start.0)
                .collect()
        })
        .collect();
    let code = encode_faces(cube.num_vertices(), &faces);
    let rebuilt = build(&code).unwrap();
    assert_eq!(rebuilt.num_faces(), 6);
    // Same rotation at every vertex up to the starting neighbour.
    for v in 0..8 {
        let around = |map: &PlaneMap| -> Vec<usize> {
            map.darts_around(VertexId(v))
                .map(|d| map.dart(d).end.0)
                .collect()
        };
        let (mut a, b) = (around(&cube), around(&rebuilt));
        let shift = a.iter().position(|&w| w == b[0]).unwrap();
        a.rotate_left(shift);
        assert_eq!(a, b);
    }
}

#[test]
fn gyro_turns_corners_into_pentagons() {
    let cube = build(&families::cube()).unwrap();
    let gyro = build(&gyro_code(&cube)).unwrap();
    assert_eq!(gyro.num_vertices(), 8 + 24 + 6);
    assert_eq!(gyro.num_edges(), 60);
    assert_eq!(gyro.num_faces(), 24);
    assert!(gyro.face_size.iter().all(|&s| s == 5));
    assert_links(&gyro);
}

#[test]
fn dual_swaps_vertices_and_faces() {
    let ico = build(&families::icosahedron()).unwrap();
    let dual = build(&dual_code(&ico)).unwrap();
    assert_eq!(dual.num_vertices(), 20);
    assert_eq!(dual.num_edges(), 30);
    assert_eq!(dual.num_faces(), 12);
    assert!(dual.degree.iter().all(|&d| d == 3));
    let back = build(&dual_code(&dual)).unwrap();
    assert_eq!(back.num_vertices(), 12);
    assert!(back.degree.iter().all(|&d| d == 5));
}
