//! Isomorphic copies of a rotation code.
//!
//! Relabelling vertices, rotating where each rotation starts, and mirroring
//! all keep the point group; the tests and the `generate` command use them to
//! produce inputs that look nothing like the generated listing.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::MalformedInput;
use crate::plane_map::{encode, split};

/// Rename vertex `v` to `perm[v]` (0-based). `perm` must be a permutation of
/// `0..nv`.
pub fn relabel(code: &[u32], perm: &[usize]) -> Result<Vec<u32>, MalformedInput> {
    let rotations = split(code)?;
    let mut renamed = vec![Vec::new(); rotations.len()];
    for (v, rotation) in rotations.into_iter().enumerate() {
        renamed[perm[v]] = rotation.into_iter().map(|w| perm[w]).collect();
    }
    Ok(encode(&renamed))
}

/// Random relabelling plus a random starting point for every rotation.
pub fn shuffle<R: Rng>(code: &[u32], rng: &mut R) -> Result<Vec<u32>, MalformedInput> {
    let nv = split(code)?.len();
    let mut perm: Vec<usize> = (0..nv).collect();
    perm.shuffle(rng);
    let mut rotations = split(&relabel(code, &perm)?)?;
    for rotation in &mut rotations {
        if !rotation.is_empty() {
            let k = rng.gen_range(0..rotation.len());
            rotation.rotate_left(k);
        }
    }
    Ok(encode(&rotations))
}

/// Mirror image: every rotation reversed.
pub fn mirror(code: &[u32]) -> Result<Vec<u32>, MalformedInput> {
    let mut rotations = split(code)?;
    for rotation in &mut rotations {
        rotation.reverse();
    }
    Ok(encode(&rotations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn relabel_identity_is_noop() {
        let code = families::prism(5);
        let id: Vec<usize> = (0..10).collect();
        assert_eq!(relabel(&code, &id).unwrap(), code);
    }

    #[test]
    fn relabel_moves_rotations() {
        // Swap apex and first base vertex of the square pyramid.
        let code = families::pyramid(4);
        let out = relabel(&code, &[1, 0, 2, 3, 4]).unwrap();
        let rotations = split(&out).unwrap();
        assert_eq!(rotations[1], vec![0, 2, 3, 4]);
        assert_eq!(rotations[0], vec![2, 1, 4]);
    }

    #[test]
    fn mirror_twice_is_identity() {
        let code = families::chiral_antiprism(5);
        assert_ne!(mirror(&code).unwrap(), code);
        assert_eq!(mirror(&mirror(&code).unwrap()).unwrap(), code);
    }

    #[test]
    fn shuffle_keeps_degrees() {
        let code = families::gyroelongated_bipyramid(6);
        let mut rng = StdRng::seed_from_u64(42);
        let out = shuffle(&code, &mut rng).unwrap();
        assert_eq!(out.len(), code.len());
        let mut before: Vec<usize> = split(&code).unwrap().iter().map(Vec::len).collect();
        let mut after: Vec<usize> = split(&out).unwrap().iter().map(Vec::len).collect();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn malformed_codes_are_reported() {
        assert_eq!(mirror(&[]).unwrap_err(), MalformedInput::EmptyCode);
        assert_eq!(
            relabel(&[4, 2, 0], &[0, 1, 2, 3]).unwrap_err(),
            MalformedInput::Truncated(2)
        );
    }
}
