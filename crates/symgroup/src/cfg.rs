//! Size limits for plane maps.
//!
//! Policy
//! - The hard limits are build-time constants. A `BuildCfg` can narrow them
//!   for a workspace (tests, untrusted input) but never widen them.

/// Maximum number of vertices in a map.
pub const MAX_VERTICES: usize = 1000;
/// Maximum number of darts (oriented edges) of a simple plane map.
pub const MAX_DARTS: usize = 6 * MAX_VERTICES - 12;
/// Maximum number of faces of a simple plane map.
pub const MAX_FACES: usize = 2 * MAX_VERTICES - 4;
/// Maximum vertex degree.
pub const MAX_DEGREE: usize = MAX_VERTICES - 1;
/// Smallest map accepted by the builder (the tetrahedron).
pub const MIN_VERTICES: usize = 4;

/// Limits applied by the map builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildCfg {
    pub max_vertices: usize,
    pub max_degree: usize,
    pub max_darts: usize,
}

impl Default for BuildCfg {
    fn default() -> Self {
        Self {
            max_vertices: MAX_VERTICES,
            max_degree: MAX_DEGREE,
            max_darts: MAX_DARTS,
        }
    }
}

impl BuildCfg {
    /// Limits for maps with at most `max_vertices` vertices, clamped to the
    /// build-time constants.
    pub fn with_max_vertices(max_vertices: usize) -> Self {
        let nv = max_vertices.clamp(MIN_VERTICES, MAX_VERTICES);
        Self {
            max_vertices: nv,
            max_degree: nv - 1,
            max_darts: 6 * nv - 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowed_limits_follow_planar_bounds() {
        let cfg = BuildCfg::with_max_vertices(12);
        assert_eq!(cfg.max_degree, 11);
        assert_eq!(cfg.max_darts, 60);
        assert_eq!(BuildCfg::with_max_vertices(1_000_000), BuildCfg::default());
        assert_eq!(BuildCfg::with_max_vertices(0).max_vertices, MIN_VERTICES);
    }
}
