//! Breadth-first certificates of plane maps.
//!
//! A certificate is the sequence of neighbour labels met while visiting the
//! map breadth-first from a starting dart: vertices are labelled in discovery
//! order, each vertex's rotation is read starting at the dart through which it
//! was discovered (inverted), and `END_OF_VERTEX` closes each rotation.
//!
//! Two starting darts give equal certificates iff an automorphism maps one to
//! the other (with `Orientation::Reversing`: an orientation reversing one).

use crate::plane_map::{DartId, PlaneMap, VertexId};

/// Terminates the rotation of one vertex inside a certificate.
pub const END_OF_VERTEX: u32 = u32::MAX;

/// Direction in which rotations are read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Follow `next`.
    Preserving,
    /// Follow `prev` (mirror image).
    Reversing,
}

impl Orientation {
    pub fn is_reversing(self) -> bool {
        matches!(self, Orientation::Reversing)
    }
}

/// Reusable buffers for certificate construction.
///
/// Labels are only valid for vertices stamped with the current epoch, so a
/// traversal never has to clear the arrays.
#[derive(Clone, Debug, Default)]
pub struct CertScratch {
    epoch: u32,
    stamp: Vec<u32>,
    labels: Vec<u32>,
    entry: Vec<DartId>,
    queue: Vec<VertexId>,
}

impl CertScratch {
    fn begin(&mut self, nv: usize) {
        if self.stamp.len() < nv {
            self.stamp.resize(nv, 0);
            self.labels.resize(nv, 0);
            self.entry.resize(nv, DartId(0));
        }
        if self.epoch == u32::MAX {
            self.stamp.fill(0);
            self.epoch = 0;
        }
        self.epoch += 1;
        self.queue.clear();
    }

    #[inline]
    fn is_labelled(&self, v: VertexId) -> bool {
        self.stamp[v.0] == self.epoch
    }

    #[inline]
    fn assign(&mut self, v: VertexId, entry: DartId) {
        self.stamp[v.0] = self.epoch;
        self.labels[v.0] = self.queue.len() as u32;
        self.entry[v.0] = entry;
        self.queue.push(v);
    }

    /// Label of `v` in the most recent traversal (discovery order, from 0).
    #[inline]
    pub fn label(&self, v: VertexId) -> u32 {
        debug_assert!(self.is_labelled(v), "vertex {v:?} not reached");
        self.labels[v.0]
    }

    /// Vertices of the most recent traversal in discovery order.
    pub fn discovery_order(&self) -> &[VertexId] {
        &self.queue
    }
}

/// Write the certificate of `map` from `start` into `out` (cleared first).
///
/// Runs in O(nv + ne); every vertex is visited once since maps are connected.
pub fn build_certificate(
    map: &PlaneMap,
    scratch: &mut CertScratch,
    start: DartId,
    orientation: Orientation,
    out: &mut Vec<u32>,
) {
    out.clear();
    scratch.begin(map.num_vertices());
    scratch.assign(map.dart(start).start, start);
    let mut head = 0;
    while head < scratch.queue.len() {
        let v = scratch.queue[head];
        head += 1;
        let first = scratch.entry[v.0];
        let mut d = first;
        loop {
            let w = map.dart(d).end;
            if !scratch.is_labelled(w) {
                scratch.assign(w, map.inverse(d));
            }
            out.push(scratch.labels[w.0]);
            d = match orientation {
                Orientation::Preserving => map.next(d),
                Orientation::Reversing => map.prev(d),
            };
            if d == first {
                break;
            }
        }
        out.push(END_OF_VERTEX);
    }
}

/// Allocating variant of [`build_certificate`].
pub fn certificate(
    map: &PlaneMap,
    scratch: &mut CertScratch,
    start: DartId,
    orientation: Orientation,
) -> Vec<u32> {
    let mut out = Vec::with_capacity(map.num_darts() + map.num_vertices());
    build_certificate(map, scratch, start, orientation, &mut out);
    out
}
