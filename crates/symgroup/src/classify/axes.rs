//! Rotation axes through vertices, face centres and edge midpoints.
//!
//! A rotation about a vertex moves its first dart to another dart of the same
//! rotation; a rotation about a face centre moves a boundary dart along the
//! boundary; a half-turn about an edge midpoint swaps the two darts of the
//! edge. In every case it is an automorphism iff the certificates agree.

use crate::certificate::{build_certificate, CertScratch, Orientation};
use crate::plane_map::{DartId, FaceId, PlaneMap, VertexId};

/// Point of the sphere a rotation axis passes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisCenter {
    Vertex(VertexId),
    Face(FaceId),
    /// Midpoint of the edge of this dart.
    Edge(DartId),
}

pub(crate) struct AxisProbe<'a> {
    map: &'a PlaneMap,
    scratch: &'a mut CertScratch,
    base: Vec<u32>,
    rotated: Vec<u32>,
}

impl<'a> AxisProbe<'a> {
    pub(crate) fn new(map: &'a PlaneMap, scratch: &'a mut CertScratch) -> Self {
        let len = map.num_darts() + map.num_vertices();
        Self {
            map,
            scratch,
            base: Vec::with_capacity(len),
            rotated: Vec::with_capacity(len),
        }
    }

    fn load_base(&mut self, start: DartId) {
        build_certificate(
            self.map,
            self.scratch,
            start,
            Orientation::Preserving,
            &mut self.base,
        );
    }

    /// Certificate from `d` equals the loaded base certificate.
    fn matches_base(&mut self, d: DartId) -> bool {
        build_certificate(
            self.map,
            self.scratch,
            d,
            Orientation::Preserving,
            &mut self.rotated,
        );
        self.base == self.rotated
    }

    /// Order of the rotation stabiliser of `start` along `step` (1 if none):
    /// the smallest shift `i <= len / 2` that is an automorphism gives `len / i`.
    fn fold_along(
        &mut self,
        start: DartId,
        len: usize,
        step: fn(&PlaneMap, DartId) -> DartId,
    ) -> u32 {
        self.load_base(start);
        let mut image = start;
        for i in 1..=len / 2 {
            image = step(self.map, image);
            if self.matches_base(image) {
                return (len / i) as u32;
            }
        }
        1
    }

    pub(crate) fn vertex_fold(&mut self, v: VertexId) -> u32 {
        let map = self.map;
        self.fold_along(map.first_dart[v.0], map.degree[v.0], PlaneMap::next)
    }

    pub(crate) fn face_fold(&mut self, f: FaceId) -> u32 {
        let map = self.map;
        self.fold_along(map.face_start[f.0], map.face_size[f.0], PlaneMap::face_step)
    }

    /// A half-turn about the midpoint of `d`'s edge is an automorphism.
    pub(crate) fn edge_is_axis(&mut self, d: DartId) -> bool {
        self.load_base(d);
        let inverse = self.map.inverse(d);
        self.matches_base(inverse)
    }
}
