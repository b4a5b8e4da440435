//! Per-worker context owning every buffer reused between maps.

use crate::automorphism::AutomorphismSet;
use crate::certificate::{certificate, CertScratch, Orientation};
use crate::cfg::{BuildCfg, MAX_FACES};
use crate::classify::{self, Classification};
use crate::error::{MalformedInput, Result};
use crate::plane_map::{build_map, DartId, MarkEpoch, PlaneMap};

/// Map arena, certificate scratch and automorphism table for one worker.
///
/// Each `load` replaces the previous map; allocations are kept. A workspace
/// is not shared between threads; create one per worker instead.
#[derive(Clone, Debug, Default)]
pub struct Workspace {
    cfg: BuildCfg,
    map: PlaneMap,
    loaded: bool,
    epoch: MarkEpoch,
    scratch: CertScratch,
    autos: AutomorphismSet,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Workspace with narrowed limits and arenas sized for the largest map.
    pub fn with_cfg(cfg: BuildCfg) -> Self {
        let mut ws = Self {
            cfg,
            ..Self::default()
        };
        ws.map.darts.reserve(cfg.max_darts);
        ws.map.first_dart.reserve(cfg.max_vertices);
        ws.map.degree.reserve(cfg.max_vertices);
        let faces = MAX_FACES.min(2 * cfg.max_vertices);
        ws.map.face_start.reserve(faces);
        ws.map.face_size.reserve(faces);
        ws
    }

    pub fn cfg(&self) -> &BuildCfg {
        &self.cfg
    }

    /// Decode `code` into the workspace map.
    pub fn load(&mut self, code: &[u32]) -> std::result::Result<&PlaneMap, MalformedInput> {
        self.loaded = false;
        self.autos.clear();
        if let Err(err) = build_map(&mut self.map, &mut self.epoch, code, &self.cfg) {
            self.map.clear();
            return Err(err);
        }
        self.loaded = true;
        Ok(&self.map)
    }

    /// The last `load` succeeded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Most recently loaded map (empty if the last `load` failed).
    pub fn map(&self) -> &PlaneMap {
        &self.map
    }

    /// Fill the automorphism table of the loaded map. Without a loaded map
    /// the table stays empty.
    pub fn determine_automorphisms(&mut self) -> &AutomorphismSet {
        if self.loaded {
            self.autos.determine(&self.map, &mut self.scratch);
        }
        &self.autos
    }

    /// Table from the last `determine_automorphisms`.
    pub fn automorphisms(&self) -> &AutomorphismSet {
        &self.autos
    }

    /// Certificate of the loaded map from `start`, a dart of that map.
    pub fn certificate(&mut self, start: DartId, orientation: Orientation) -> Vec<u32> {
        certificate(&self.map, &mut self.scratch, start, orientation)
    }

    /// Load `code`, determine its automorphisms and name the point group.
    pub fn classify(&mut self, code: &[u32]) -> Result<Classification> {
        self.load(code)?;
        self.determine_automorphisms();
        let group = classify::classify(&self.map, &self.autos, &mut self.scratch)?;
        let classification = Classification {
            group,
            order: self.autos.order(),
            reversing: self.autos.reversing_count(),
        };
        tracing::debug!(
            nv = self.map.num_vertices(),
            ne = self.map.num_edges(),
            nf = self.map.num_faces(),
            order = classification.order,
            reversing = classification.reversing,
            group = %group,
            "classified"
        );
        Ok(classification)
    }
}

/// Classify one rotation code with a fresh workspace.
pub fn classify_code(code: &[u32]) -> Result<Classification> {
    Workspace::new().classify(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::PointGroup;
    use crate::error::Error;
    use crate::families;

    #[test]
    fn workspace_is_reusable_across_maps_and_errors() {
        let mut ws = Workspace::new();
        assert_eq!(ws.classify(&families::cube()).unwrap().group, PointGroup::Oh);
        let err = ws.classify(&[4, 2, 0]).unwrap_err();
        assert!(matches!(err, Error::Malformed(MalformedInput::Truncated(2))));
        let c = ws.classify(&families::pyramid(5)).unwrap();
        assert_eq!(c.group, PointGroup::Cnv(5));
        assert_eq!((c.order, c.reversing), (10, 5));
        assert_eq!(ws.map().num_vertices(), 6);
        assert_eq!(ws.automorphisms().order(), 10);
    }

    #[test]
    fn failed_load_leaves_nothing_to_classify() {
        let mut ws = Workspace::new();
        ws.load(&families::cube()).unwrap();
        assert_eq!(ws.determine_automorphisms().order(), 48);
        // Rejected before any vertex is read.
        assert!(ws.load(&[2, 2, 0, 1, 0]).is_err());
        assert!(!ws.is_loaded());
        assert_eq!(ws.map().num_vertices(), 0);
        assert_eq!(ws.automorphisms().order(), 0);
        // Rejected halfway through the arena.
        assert!(ws.load(&[4, 2, 3, 4, 0, 3, 1, 4, 0, 9, 0, 0, 0]).is_err());
        assert_eq!(ws.map().num_darts(), 0);
        assert_eq!(ws.determine_automorphisms().order(), 0);
        ws.load(&families::tetrahedron()).unwrap();
        assert!(ws.is_loaded());
        assert_eq!(ws.determine_automorphisms().order(), 24);
    }

    #[test]
    fn narrowed_workspace_rejects_large_maps() {
        let mut ws = Workspace::with_cfg(BuildCfg::with_max_vertices(10));
        assert_eq!(ws.cfg().max_vertices, 10);
        let err = ws.classify(&families::dodecahedron()).unwrap_err();
        assert_eq!(
            err,
            Error::Malformed(MalformedInput::TooManyVertices { nv: 20, max: 10 })
        );
        assert!(ws.classify(&families::octahedron()).is_ok());
    }

    #[test]
    fn certificate_through_workspace_matches_canonical() {
        let mut ws = Workspace::new();
        ws.load(&families::antiprism(5)).unwrap();
        let canonical = ws.determine_automorphisms().canonical_certificate().to_vec();
        let base = ws.map().first_dart[0];
        assert_eq!(ws.certificate(base, Orientation::Preserving), canonical);
    }
}
