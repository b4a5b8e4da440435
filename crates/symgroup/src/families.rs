//! Rotation codes of common polyhedra and infinite families.
//!
//! Rotations list neighbours counter-clockwise as seen from outside the
//! solid. Ring indices are taken modulo the ring size.
//!
//! | family                           | group (n ≥ 3 unless noted) |
//! |----------------------------------|----------------------------|
//! | `pyramid(n)`                     | `Cnv` (`Td` for n = 3)     |
//! | `bipyramid(n)`                   | `Dnh` (`Oh` for n = 4)     |
//! | `prism(n)`                       | `Dnh` (`Oh` for n = 4)     |
//! | `antiprism(n)`                   | `Dnd` (`Oh` for n = 3)     |
//! | `gyroelongated_bipyramid(n)`     | `Dnd` (`Ih` for n = 5)     |
//! | `chiral_antiprism(n)`            | `Dn`, n ≥ 4                |
//! | `flagged_prism(n, Top)`          | `Cn`                       |
//! | `flagged_prism(n, TopAndBottom)` | `Cnh`                      |
//! | `flagged_prism(n, Alternating)`  | `S{n}`, n even             |
//! | `pyritohedral_cube()`            | `Th`                       |
//!
//! The gyro of a map (`plane_map::gyro_code`) drops its reflections: the
//! gyro of the cube has group `O`, of the icosahedron `I`, and of the
//! pyritohedral cube `T`.

use crate::plane_map::{encode, encode_faces};

#[inline]
fn ring(i: usize, delta: isize, n: usize) -> usize {
    (i as isize + delta).rem_euclid(n as isize) as usize
}

/// Cone over an `n`-gon; vertex 0 is the apex, `1..=n` the base ring.
pub fn pyramid(n: usize) -> Vec<u32> {
    assert!(n >= 3, "pyramid needs n >= 3");
    let r = |i: usize, delta: isize| 1 + ring(i, delta, n);
    let mut rot: Vec<Vec<usize>> = Vec::with_capacity(n + 1);
    rot.push((0..n).map(|i| r(i, 0)).collect());
    for i in 0..n {
        rot.push(vec![r(i, 1), 0, r(i, -1)]);
    }
    encode(&rot)
}

/// Two cones over an `n`-gon; vertex 0 and vertex `n + 1` are the apices.
pub fn bipyramid(n: usize) -> Vec<u32> {
    assert!(n >= 3, "bipyramid needs n >= 3");
    let r = |i: usize, delta: isize| 1 + ring(i, delta, n);
    let bottom = n + 1;
    let mut rot: Vec<Vec<usize>> = Vec::with_capacity(n + 2);
    rot.push((0..n).map(|i| r(i, 0)).collect());
    for i in 0..n {
        rot.push(vec![bottom, r(i, 1), 0, r(i, -1)]);
    }
    rot.push((0..n).map(|i| r(0, -(i as isize))).collect());
    encode(&rot)
}

/// `n`-gonal prism; vertices `0..n` top ring, `n..2n` bottom ring.
pub fn prism(n: usize) -> Vec<u32> {
    assert!(n >= 3, "prism needs n >= 3");
    let t = |i: usize, delta: isize| ring(i, delta, n);
    let b = |i: usize, delta: isize| n + ring(i, delta, n);
    let mut rot: Vec<Vec<usize>> = Vec::with_capacity(2 * n);
    for i in 0..n {
        rot.push(vec![b(i, 0), t(i, 1), t(i, -1)]);
    }
    for i in 0..n {
        rot.push(vec![b(i, 1), t(i, 0), b(i, -1)]);
    }
    encode(&rot)
}

/// `n`-gonal antiprism; vertices `0..n` top ring, `n..2n` bottom ring, top
/// `i` joined to bottom `i` and `i - 1`.
pub fn antiprism(n: usize) -> Vec<u32> {
    assert!(n >= 3, "antiprism needs n >= 3");
    let t = |i: usize, delta: isize| ring(i, delta, n);
    let b = |i: usize, delta: isize| n + ring(i, delta, n);
    let mut rot: Vec<Vec<usize>> = Vec::with_capacity(2 * n);
    for i in 0..n {
        rot.push(vec![b(i, 0), t(i, 1), t(i, -1), b(i, -1)]);
    }
    for i in 0..n {
        rot.push(vec![b(i, 1), t(i, 1), t(i, 0), b(i, -1)]);
    }
    encode(&rot)
}

/// Antiprism capped by a pyramid on both `n`-gons. Vertex 0 is the top apex,
/// `1..=n` the top ring, `n+1..=2n` the bottom ring, `2n + 1` the bottom apex.
pub fn gyroelongated_bipyramid(n: usize) -> Vec<u32> {
    assert!(n >= 3, "gyroelongated bipyramid needs n >= 3");
    let t = |i: usize, delta: isize| 1 + ring(i, delta, n);
    let b = |i: usize, delta: isize| 1 + n + ring(i, delta, n);
    let bottom = 2 * n + 1;
    let mut rot: Vec<Vec<usize>> = Vec::with_capacity(2 * n + 2);
    rot.push((0..n).map(|i| t(i, 0)).collect());
    for i in 0..n {
        rot.push(vec![b(i, 0), t(i, 1), 0, t(i, -1), b(i, -1)]);
    }
    for i in 0..n {
        rot.push(vec![bottom, b(i, 1), t(i, 1), t(i, 0), b(i, -1)]);
    }
    rot.push((0..n).map(|i| b(0, -(i as isize))).collect());
    encode(&rot)
}

/// Antiprism with every edge from top `i` to bottom `i` subdivided (vertex
/// `2n + i`). The subdivision breaks all reflections and keeps all rotations.
pub fn chiral_antiprism(n: usize) -> Vec<u32> {
    assert!(n >= 4, "chiral antiprism needs n >= 4");
    let t = |i: usize, delta: isize| ring(i, delta, n);
    let b = |i: usize, delta: isize| n + ring(i, delta, n);
    let s = |i: usize| 2 * n + i;
    let mut rot: Vec<Vec<usize>> = Vec::with_capacity(3 * n);
    for i in 0..n {
        rot.push(vec![s(i), t(i, 1), t(i, -1), b(i, -1)]);
    }
    for i in 0..n {
        rot.push(vec![b(i, 1), t(i, 1), s(i), b(i, -1)]);
    }
    for i in 0..n {
        rot.push(vec![t(i, 0), b(i, 0)]);
    }
    encode(&rot)
}

/// Where `flagged_prism` hangs pendant flags into the lateral quads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flags {
    /// At the top-left corner of every quad.
    Top,
    /// At the top-left and the bottom-left corner of every quad.
    TopAndBottom,
    /// Top-left in even quads, bottom-left in odd quads.
    Alternating,
}

/// `prism(n)` with pendant vertices (ids from `2n` on) hung into the lateral
/// quads. Quad `i` has corners top `i`, top `i + 1`, bottom `i + 1`,
/// bottom `i`; a flag in its left corners makes the quad chiral.
pub fn flagged_prism(n: usize, flags: Flags) -> Vec<u32> {
    assert!(n >= 3, "flagged prism needs n >= 3");
    assert!(
        flags != Flags::Alternating || n % 2 == 0,
        "alternating flags need an even n"
    );
    let t = |i: usize, delta: isize| ring(i, delta, n);
    let b = |i: usize, delta: isize| n + ring(i, delta, n);
    let mut top: Vec<Vec<usize>> = (0..n).map(|i| vec![b(i, 0), t(i, 1), t(i, -1)]).collect();
    let mut bottom: Vec<Vec<usize>> = (0..n).map(|i| vec![b(i, 1), t(i, 0), b(i, -1)]).collect();
    let mut pendants: Vec<Vec<usize>> = Vec::new();
    for i in 0..n {
        let (on_top, on_bottom) = match flags {
            Flags::Top => (true, false),
            Flags::TopAndBottom => (true, true),
            Flags::Alternating => (i % 2 == 0, i % 2 == 1),
        };
        // Position 1 of both rotations lies inside quad `i`.
        if on_top {
            top[i].insert(1, 2 * n + pendants.len());
            pendants.push(vec![t(i, 0)]);
        }
        if on_bottom {
            bottom[i].insert(1, 2 * n + pendants.len());
            pendants.push(vec![b(i, 0)]);
        }
    }
    let rot: Vec<Vec<usize>> = top.into_iter().chain(bottom).chain(pendants).collect();
    encode(&rot)
}

/// Cube with a segment inside every face, parallel to the face's next
/// coordinate axis (x-faces run along y, y-faces along z, z-faces along x).
/// Each segment end is joined to the two corners it faces.
///
/// Corner `4x + 2y + z` sits at the coordinates `x, y, z ∈ {0, 1}`.
pub fn pyritohedral_cube() -> Vec<u32> {
    let mut faces: Vec<Vec<usize>> = Vec::with_capacity(24);
    let mut nv = 8;
    for axis in 0..3 {
        for side in [1, 0] {
            let (along, across) = ((axis + 1) % 3, (axis + 2) % 3);
            let mut q: Vec<usize> = [(0, 0), (1, 0), (1, 1), (0, 1)]
                .iter()
                .map(|&(a, c)| {
                    let mut p = [0; 3];
                    p[axis] = side;
                    p[along] = a;
                    p[across] = c;
                    4 * p[0] + 2 * p[1] + p[2]
                })
                .collect();
            // Counter-clockwise from outside.
            if side == 0 {
                q.reverse();
            }
            // `near` faces the edge q1-q2, `far` the edge q3-q0.
            let (near, far) = (nv, nv + 1);
            nv += 2;
            faces.push(vec![q[1], q[2], near]);
            faces.push(vec![q[3], q[0], far]);
            faces.push(vec![q[0], q[1], near, far]);
            faces.push(vec![q[2], q[3], far, near]);
        }
    }
    encode_faces(nv, &faces)
}

pub fn tetrahedron() -> Vec<u32> {
    pyramid(3)
}

pub fn octahedron() -> Vec<u32> {
    antiprism(3)
}

pub fn cube() -> Vec<u32> {
    prism(4)
}

pub fn icosahedron() -> Vec<u32> {
    gyroelongated_bipyramid(5)
}

/// Vertices `0..5` top pentagon, `5..15` middle zig-zag ring, `15..20`
/// bottom pentagon.
pub fn dodecahedron() -> Vec<u32> {
    let a = |i: usize, delta: isize| ring(i, delta, 5);
    let m = |j: isize| 5 + ring(0, j, 10);
    let c = |i: usize, delta: isize| 15 + ring(i, delta, 5);
    let mut rot: Vec<Vec<usize>> = vec![Vec::new(); 20];
    for i in 0..5 {
        let k = 2 * i as isize;
        rot[a(i, 0)] = vec![m(k), a(i, 1), a(i, -1)];
        rot[m(k)] = vec![m(k + 1), a(i, 0), m(k - 1)];
        rot[m(k + 1)] = vec![c(i, 0), m(k + 2), m(k)];
        rot[c(i, 0)] = vec![c(i, 1), m(k + 1), c(i, -1)];
    }
    encode(&rot)
}
