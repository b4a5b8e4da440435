//! Automorphisms of a plane map.
//!
//! All automorphisms are found by fixing one base dart, computing its
//! certificate, and comparing against the certificates (both orientations) of
//! every dart whose start vertex has the base degree. A match yields the
//! automorphism that carries the candidate dart to the base dart.

use crate::certificate::{build_certificate, CertScratch, Orientation};
use crate::plane_map::{DartId, FaceId, PlaneMap, VertexId};

/// Vertex permutation induced by a map automorphism.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Automorphism {
    /// `images[v]` is the image of vertex `v`.
    pub images: Vec<VertexId>,
    /// Reverses the orientation (a reflection or rotary reflection).
    pub reversing: bool,
}

impl Automorphism {
    pub fn identity(nv: usize) -> Self {
        Self {
            images: (0..nv).map(VertexId).collect(),
            reversing: false,
        }
    }

    #[inline]
    pub fn image(&self, v: VertexId) -> VertexId {
        self.images[v.0]
    }

    pub fn is_identity(&self) -> bool {
        !self.reversing && self.images.iter().enumerate().all(|(i, v)| v.0 == i)
    }

    /// `self ∘ other`: apply `other` first.
    pub fn compose(&self, other: &Automorphism) -> Automorphism {
        Automorphism {
            images: other.images.iter().map(|&v| self.image(v)).collect(),
            reversing: self.reversing != other.reversing,
        }
    }

    pub fn inverse(&self) -> Automorphism {
        let mut images = vec![VertexId(0); self.images.len()];
        for (v, &w) in self.images.iter().enumerate() {
            images[w.0] = VertexId(v);
        }
        Automorphism {
            images,
            reversing: self.reversing,
        }
    }

    /// Fixes a point of the sphere: a vertex, or an edge mapped onto itself
    /// with its ends swapped. A fixed point inside a face forces one of these
    /// on its boundary, and a fixed directed edge fixes its vertices.
    pub fn has_fixed_point(&self, map: &PlaneMap) -> bool {
        if self.images.iter().enumerate().any(|(v, w)| w.0 == v) {
            return true;
        }
        map.edge_darts().any(|d| {
            let dart = map.dart(d);
            self.image(dart.start) == dart.end && self.image(dart.end) == dart.start
        })
    }
}

/// Automorphism table of the current map plus the certificate buffers used
/// to fill it.
#[derive(Clone, Debug, Default)]
pub struct AutomorphismSet {
    autos: Vec<Automorphism>,
    reversing: usize,
    canonical: Vec<u32>,
    alternate: Vec<u32>,
    vertex_of_label: Vec<VertexId>,
}

impl AutomorphismSet {
    /// Replace the table with all automorphisms of `map`; the identity comes first.
    pub fn determine(&mut self, map: &PlaneMap, scratch: &mut CertScratch) {
        let nv = map.num_vertices();
        self.autos.clear();
        self.reversing = 0;
        self.autos.push(Automorphism::identity(nv));

        let base = map.first_dart[0];
        build_certificate(
            map,
            scratch,
            base,
            Orientation::Preserving,
            &mut self.canonical,
        );
        self.vertex_of_label.clear();
        self.vertex_of_label.resize(nv, VertexId(0));
        for v in 0..nv {
            let label = scratch.label(VertexId(v));
            self.vertex_of_label[label as usize] = VertexId(v);
        }

        let base_degree = map.degree[0];
        for v in 0..nv {
            if map.degree[v] != base_degree {
                continue;
            }
            for d in map.darts_around(VertexId(v)) {
                if d != base {
                    self.try_record(map, scratch, d, Orientation::Preserving);
                }
                self.try_record(map, scratch, d, Orientation::Reversing);
            }
        }
        tracing::trace!(
            order = self.autos.len(),
            reversing = self.reversing,
            "automorphisms"
        );
    }

    /// Empty the table; `order()` is 0 until the next `determine`.
    pub fn clear(&mut self) {
        self.autos.clear();
        self.reversing = 0;
        self.canonical.clear();
    }

    /// Table holding exactly `autos`, for feeding the classifier by hand.
    #[cfg(test)]
    pub(crate) fn from_table(autos: Vec<Automorphism>) -> Self {
        let reversing = autos.iter().filter(|a| a.reversing).count();
        Self {
            autos,
            reversing,
            ..Self::default()
        }
    }

    fn try_record(
        &mut self,
        map: &PlaneMap,
        scratch: &mut CertScratch,
        start: DartId,
        orientation: Orientation,
    ) {
        build_certificate(map, scratch, start, orientation, &mut self.alternate);
        if self.alternate != self.canonical {
            return;
        }
        let images = (0..map.num_vertices())
            .map(|v| self.vertex_of_label[scratch.label(VertexId(v)) as usize])
            .collect();
        let reversing = orientation.is_reversing();
        self.autos.push(Automorphism { images, reversing });
        if reversing {
            self.reversing += 1;
        }
    }

    /// Group order.
    pub fn order(&self) -> usize {
        self.autos.len()
    }

    /// Number of orientation reversing automorphisms.
    pub fn reversing_count(&self) -> usize {
        self.reversing
    }

    pub fn is_chiral(&self) -> bool {
        self.reversing == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Automorphism> {
        self.autos.iter()
    }

    pub fn as_slice(&self) -> &[Automorphism] {
        &self.autos
    }

    /// Canonical certificate (from `first_dart[0]`) of the last `determine`.
    pub fn canonical_certificate(&self) -> &[u32] {
        &self.canonical
    }

    fn reversing_iter(&self) -> impl Iterator<Item = &Automorphism> {
        self.autos.iter().filter(|a| a.reversing)
    }

    /// Some orientation reversing automorphism fixes vertex `v`.
    pub fn reversing_fixes_vertex(&self, v: VertexId) -> bool {
        self.reversing_iter().any(|a| a.image(v) == v)
    }

    /// Some orientation reversing automorphism maps face `f` onto itself.
    pub fn reversing_fixes_face(&self, map: &PlaneMap, f: FaceId) -> bool {
        let e = map.dart(map.face_start[f.0]);
        self.reversing_iter().any(|a| {
            let (from, to) = (a.image(e.start), a.image(e.end));
            // Reversal moves the face on the right of `e` to the left of its image.
            map.find_dart(from, to)
                .is_some_and(|d| map.dart(map.inverse(d)).right_face == f)
        })
    }

    /// Some orientation reversing automorphism maps the edge of `d` onto itself.
    pub fn reversing_fixes_edge(&self, map: &PlaneMap, d: DartId) -> bool {
        let e = map.dart(d);
        self.reversing_iter().any(|a| {
            let (from, to) = (a.image(e.start), a.image(e.end));
            (from == e.start && to == e.end) || (from == e.end && to == e.start)
        })
    }

    /// Some orientation reversing automorphism has a fixed point.
    pub fn any_reversing_with_fixed_point(&self, map: &PlaneMap) -> bool {
        self.reversing_iter().any(|a| a.has_fixed_point(map))
    }

    /// Number of orientation reversing automorphisms with a fixed point
    /// (reflections, as opposed to rotary reflections).
    pub fn count_reversing_with_fixed_point(&self, map: &PlaneMap) -> usize {
        self.reversing_iter()
            .filter(|a| a.has_fixed_point(map))
            .count()
    }
}

impl<'a> IntoIterator for &'a AutomorphismSet {
    type Item = &'a Automorphism;
    type IntoIter = std::slice::Iter<'a, Automorphism>;

    fn into_iter(self) -> Self::IntoIter {
        self.autos.iter()
    }
}
