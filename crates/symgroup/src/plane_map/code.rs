//! Conversions between 0-based rotation lists and rotation codes.

use crate::error::MalformedInput;

/// Rotation code of the given rotations (`rotations[v]` lists the neighbours
/// of `v` in rotation order, 0-based).
pub fn encode(rotations: &[Vec<usize>]) -> Vec<u32> {
    let len = 1 + rotations.iter().map(|r| r.len() + 1).sum::<usize>();
    let mut code = Vec::with_capacity(len);
    code.push(rotations.len() as u32);
    for rotation in rotations {
        code.extend(rotation.iter().map(|&w| w as u32 + 1));
        code.push(0);
    }
    code
}

/// Split a rotation code into 0-based rotation lists.
///
/// Only the framing is checked (length, terminators, id range); the builder
/// performs the structural checks.
pub fn split(code: &[u32]) -> Result<Vec<Vec<usize>>, MalformedInput> {
    let nv = *code.first().ok_or(MalformedInput::EmptyCode)? as usize;
    let mut rotations = Vec::with_capacity(nv);
    let mut entries = code[1..].iter();
    for v in 0..nv {
        let mut rotation = Vec::new();
        loop {
            match entries.next() {
                None => return Err(MalformedInput::Truncated(v + 1)),
                Some(&0) => break,
                Some(&w) if w as usize > nv => {
                    return Err(MalformedInput::NeighbourOutOfRange {
                        vertex: v + 1,
                        neighbour: w as usize,
                        nv,
                    })
                }
                Some(&w) => rotation.push(w as usize - 1),
            }
        }
        rotations.push(rotation);
    }
    let rest = entries.len();
    if rest != 0 {
        return Err(MalformedInput::TrailingEntries(rest));
    }
    Ok(rotations)
}

/// Rotation code of the map whose faces are given as vertex cycles, each in
/// the order of the face walk (counter-clockwise as seen from outside).
///
/// In a face `.., u, w, x, ..` the neighbour `u` follows `x` in the rotation
/// of `w`. Every dart must lie on exactly one face; otherwise the rotation of
/// an affected vertex is cut short and the builder rejects the code.
pub fn encode_faces(nv: usize, faces: &[Vec<usize>]) -> Vec<u32> {
    let mut follows: Vec<Vec<(usize, usize)>> = vec![Vec::new(); nv];
    for face in faces {
        let k = face.len();
        for i in 0..k {
            let (u, w, x) = (face[(i + k - 1) % k], face[i], face[(i + 1) % k]);
            follows[w].push((x, u));
        }
    }
    let rotations: Vec<Vec<usize>> = follows
        .iter()
        .map(|pairs| {
            let mut rotation = Vec::with_capacity(pairs.len());
            let Some(&(start, _)) = pairs.first() else {
                return rotation;
            };
            let mut w = start;
            loop {
                rotation.push(w);
                match pairs.iter().find(|&&(x, _)| x == w) {
                    Some(&(_, u)) if u != start && rotation.len() < pairs.len() => w = u,
                    _ => break,
                }
            }
            rotation
        })
        .collect();
    encode(&rotations)
}
