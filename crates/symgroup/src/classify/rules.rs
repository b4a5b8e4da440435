//! Ordered classification rules.

use crate::automorphism::AutomorphismSet;
use crate::certificate::CertScratch;
use crate::error::Inconsistency;
use crate::plane_map::{FaceId, PlaneMap, VertexId};

use super::axes::{AxisCenter, AxisProbe};
use super::group::PointGroup;

/// Axis folds up to this value are tallied; a larger fold forces an axial group.
const MAX_POLYHEDRAL_FOLD: u32 = 5;

/// Axis tallies gathered while scanning; each axis is seen at both ends.
#[derive(Debug, Default)]
struct FoldTally {
    counts: [usize; MAX_POLYHEDRAL_FOLD as usize + 1],
    best: Option<(u32, AxisCenter)>,
}

impl FoldTally {
    fn record(&mut self, fold: u32, center: AxisCenter) {
        self.counts[fold as usize] += 1;
        if self.best.map_or(true, |(b, _)| fold > b) {
            self.best = Some((fold, center));
        }
    }

    /// More than two 3-fold ends, or two different folds `>= 3`.
    fn rules_out_axial(&self) -> bool {
        let kinds = self.counts[3..].iter().filter(|&&c| c > 0).count();
        self.counts[3] > 2 || kinds > 1
    }

    fn scan(&mut self, fold: u32, center: AxisCenter) -> Scan {
        if fold > MAX_POLYHEDRAL_FOLD {
            tracing::trace!(fold, ?center, "axis forces an axial group");
            return Scan::Axial;
        }
        self.record(fold, center);
        if self.rules_out_axial() {
            tracing::trace!(counts = ?self.counts, ?center, "axes force a polyhedral group");
            Scan::Polyhedral
        } else {
            Scan::Continue
        }
    }
}

/// Outcome of probing one axis centre.
enum Scan {
    Axial,
    Polyhedral,
    Continue,
}

/// Name the point group of `map` from its automorphism set.
///
/// `autos` must hold the automorphisms of `map`; `scratch` is reused for the
/// axis probes.
pub fn classify(
    map: &PlaneMap,
    autos: &AutomorphismSet,
    scratch: &mut CertScratch,
) -> Result<PointGroup, Inconsistency> {
    let order = autos.order();
    let reversing = autos.reversing_count();

    // D1 coincides with C2, so small chiral groups are cyclic.
    if reversing == 0 && (order < 4 || order % 2 == 1) {
        return Ok(PointGroup::Cn(order as u32));
    }
    if reversing == 1 && order == 2 {
        return Ok(PointGroup::Cnh(1));
    }

    let mut probe = AxisProbe::new(map, scratch);
    let mut tally = FoldTally::default();
    for v in (0..map.num_vertices()).map(VertexId) {
        let fold = probe.vertex_fold(v);
        match tally.scan(fold, AxisCenter::Vertex(v)) {
            Scan::Axial => return axial(map, autos, fold, AxisCenter::Vertex(v)),
            Scan::Polyhedral => return polyhedral(map, autos),
            Scan::Continue => {}
        }
    }
    for f in (0..map.num_faces()).map(FaceId) {
        let fold = probe.face_fold(f);
        match tally.scan(fold, AxisCenter::Face(f)) {
            Scan::Axial => return axial(map, autos, fold, AxisCenter::Face(f)),
            Scan::Polyhedral => return polyhedral(map, autos),
            Scan::Continue => {}
        }
    }

    // Only 2-fold axes can be left; they may pass through edge midpoints.
    for d in map.edge_darts() {
        if probe.edge_is_axis(d) {
            tally.record(2, AxisCenter::Edge(d));
        }
    }
    tracing::trace!(counts = ?tally.counts, best = ?tally.best, "axis tally");
    match tally.best {
        Some((fold, center)) => axial(map, autos, fold, center),
        None => polyhedral(map, autos),
    }
}

/// Groups with one principal axis of the given fold through `center`.
fn axial(
    map: &PlaneMap,
    autos: &AutomorphismSet,
    fold: u32,
    center: AxisCenter,
) -> Result<PointGroup, Inconsistency> {
    let order = autos.order();
    let n = fold as usize;
    if autos.is_chiral() {
        return if order == n {
            Ok(PointGroup::Cn(fold))
        } else if order == 2 * n {
            Ok(PointGroup::Dn(fold))
        } else {
            Err(Inconsistency::ChiralAxialOrder { fold, order })
        };
    }
    if order == 4 * n {
        let count = autos.count_reversing_with_fixed_point(map);
        return if count == n {
            Ok(PointGroup::Dnd(fold))
        } else if count == n + 1 {
            Ok(PointGroup::Dnh(fold))
        } else {
            Err(Inconsistency::AxialFixedPoints { fold, order, count })
        };
    }
    if order == 2 * n {
        let center_fixed = match center {
            AxisCenter::Vertex(v) => autos.reversing_fixes_vertex(v),
            AxisCenter::Face(f) => autos.reversing_fixes_face(map, f),
            AxisCenter::Edge(d) => autos.reversing_fixes_edge(map, d),
        };
        return Ok(if center_fixed {
            PointGroup::Cnv(fold)
        } else if autos.any_reversing_with_fixed_point(map) {
            PointGroup::Cnh(fold)
        } else {
            PointGroup::S2n(fold)
        });
    }
    Err(Inconsistency::AchiralAxialOrder { fold, order })
}

/// Groups with several axes of fold >= 3, told apart by order and reflections.
fn polyhedral(map: &PlaneMap, autos: &AutomorphismSet) -> Result<PointGroup, Inconsistency> {
    match autos.order() {
        120 => Ok(PointGroup::Ih),
        60 => Ok(PointGroup::I),
        48 => Ok(PointGroup::Oh),
        24 if autos.is_chiral() => Ok(PointGroup::O),
        24 => match autos.count_reversing_with_fixed_point(map) {
            6 => Ok(PointGroup::Td),
            3 => Ok(PointGroup::Th),
            count => Err(Inconsistency::PolyhedralFixedPoints { count }),
        },
        12 => Ok(PointGroup::T),
        order => Err(Inconsistency::PolyhedralOrder { order }),
    }
}
