//! Data types for the dart arena.

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DartId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

/// Directed half-edge `start → end`.
///
/// `next`/`prev` walk the rotation around `start`; `inverse` is the same edge
/// in the opposite direction. `right_face` is valid once faces are traced.
#[derive(Clone, Debug)]
pub struct Dart {
    pub start: VertexId,
    pub end: VertexId,
    pub right_face: FaceId,
    pub next: DartId,
    pub prev: DartId,
    pub inverse: DartId,
    pub index: DartId,
    pub(crate) mark: u32,
}

/// Dart arena of one map. Darts of a vertex are contiguous and in rotation
/// order, starting at `first_dart[v]`.
#[derive(Clone, Debug, Default)]
pub struct PlaneMap {
    pub darts: Vec<Dart>,
    pub first_dart: Vec<DartId>,
    pub degree: Vec<usize>,
    pub face_start: Vec<DartId>,
    pub face_size: Vec<usize>,
}

impl PlaneMap {
    pub fn num_vertices(&self) -> usize {
        self.first_dart.len()
    }

    pub fn num_darts(&self) -> usize {
        self.darts.len()
    }

    /// Undirected edges.
    pub fn num_edges(&self) -> usize {
        self.darts.len() / 2
    }

    pub fn num_faces(&self) -> usize {
        self.face_start.len()
    }

    /// `nv − ne + nf`; 2 for a sphere.
    pub fn euler_characteristic(&self) -> isize {
        self.num_vertices() as isize - self.num_edges() as isize + self.num_faces() as isize
    }

    #[inline]
    pub fn dart(&self, d: DartId) -> &Dart {
        &self.darts[d.0]
    }

    #[inline]
    pub fn next(&self, d: DartId) -> DartId {
        self.darts[d.0].next
    }

    #[inline]
    pub fn prev(&self, d: DartId) -> DartId {
        self.darts[d.0].prev
    }

    #[inline]
    pub fn inverse(&self, d: DartId) -> DartId {
        self.darts[d.0].inverse
    }

    /// Next dart along the boundary of `right_face(d)`.
    #[inline]
    pub fn face_step(&self, d: DartId) -> DartId {
        self.prev(self.inverse(d))
    }

    /// Darts leaving `v` in rotation order, starting at `first_dart[v]`.
    pub fn darts_around(&self, v: VertexId) -> Orbit<'_> {
        Orbit::new(self, self.first_dart[v.0], PlaneMap::next)
    }

    /// Boundary darts of face `f`, starting at `face_start[f]`.
    pub fn face_darts(&self, f: FaceId) -> Orbit<'_> {
        Orbit::new(self, self.face_start[f.0], PlaneMap::face_step)
    }

    /// First dart `from → to`, if the edge exists.
    pub fn find_dart(&self, from: VertexId, to: VertexId) -> Option<DartId> {
        self.darts_around(from).find(|&d| self.darts[d.0].end == to)
    }

    /// One dart per undirected edge (the one with the smaller index).
    pub fn edge_darts(&self) -> impl Iterator<Item = DartId> + '_ {
        self.darts
            .iter()
            .filter(|d| d.index < d.inverse)
            .map(|d| d.index)
    }

    pub(crate) fn clear(&mut self) {
        self.darts.clear();
        self.first_dart.clear();
        self.degree.clear();
        self.face_start.clear();
        self.face_size.clear();
    }
}

/// Orbit of a dart under `next` (vertex rotation) or `face_step` (face boundary).
pub struct Orbit<'a> {
    map: &'a PlaneMap,
    first: DartId,
    cur: Option<DartId>,
    step: fn(&PlaneMap, DartId) -> DartId,
}

impl<'a> Orbit<'a> {
    fn new(map: &'a PlaneMap, first: DartId, step: fn(&PlaneMap, DartId) -> DartId) -> Self {
        Self {
            map,
            first,
            cur: Some(first),
            step,
        }
    }
}

impl Iterator for Orbit<'_> {
    type Item = DartId;

    fn next(&mut self) -> Option<DartId> {
        let d = self.cur?;
        let n = (self.step)(self.map, d);
        self.cur = if n == self.first { None } else { Some(n) };
        Some(d)
    }
}

/// Epoch counter for dart marks: a dart is marked iff `mark == epoch`.
///
/// Advancing the epoch unmarks every dart at once; the arena is only swept
/// when the counter wraps.
#[derive(Clone, Debug, Default)]
pub struct MarkEpoch {
    value: u32,
}

impl MarkEpoch {
    /// Start a new marking pass over `darts` and return its epoch.
    pub fn advance(&mut self, darts: &mut [Dart]) -> u32 {
        if self.value == u32::MAX {
            for d in darts.iter_mut() {
                d.mark = 0;
            }
            self.value = 0;
        }
        self.value += 1;
        self.value
    }

    pub fn current(&self) -> u32 {
        self.value
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, value: u32) {
        self.value = value;
    }
}
