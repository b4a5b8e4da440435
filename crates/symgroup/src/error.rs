//! Error types.
//!
//! Every error is fatal for the map being processed: `MalformedInput` means the
//! rotation code cannot describe a simple spherical map, `Inconsistency` means
//! the automorphism set does not fit any point group pattern.
//!
//! Vertex ids in `MalformedInput` are the 1-based ids used by the code.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedInput {
    #[error("rotation code is empty")]
    EmptyCode,

    #[error("map has {nv} vertices, at least {min} required")]
    TooFewVertices { nv: usize, min: usize },

    #[error("map has {nv} vertices, the configured maximum is {max}")]
    TooManyVertices { nv: usize, max: usize },

    #[error("map has more than {max} darts")]
    TooManyDarts { max: usize },

    #[error("vertex {vertex} has degree larger than the configured maximum {max}")]
    DegreeTooLarge { vertex: usize, max: usize },

    #[error("vertex {0} has no neighbours")]
    IsolatedVertex(usize),

    #[error("rotation code ends inside the rotation of vertex {0}")]
    Truncated(usize),

    #[error("{0} entries left after the last vertex")]
    TrailingEntries(usize),

    #[error("vertex {vertex} lists neighbour {neighbour}, outside 1..={nv}")]
    NeighbourOutOfRange {
        vertex: usize,
        neighbour: usize,
        nv: usize,
    },

    #[error("vertex {0} lists itself as a neighbour")]
    SelfLoop(usize),

    #[error("no edge from {from} to {to} while resolving inverse darts")]
    MissingInverse { from: usize, to: usize },

    #[error("edge {from}-{to} occurs more than once")]
    MultiEdge { from: usize, to: usize },

    #[error("only {reached} of {nv} vertices are reachable from vertex 1")]
    Disconnected { reached: usize, nv: usize },

    #[error("Euler characteristic is {chi} (nv={nv}, ne={ne}, nf={nf}), not a sphere")]
    NotSpherical {
        chi: isize,
        nv: usize,
        ne: usize,
        nf: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Inconsistency {
    #[error("illegal order {order} for a chiral axial group with a {fold}-fold rotation")]
    ChiralAxialOrder { fold: u32, order: usize },

    #[error("illegal order {order} for an achiral axial group with a {fold}-fold rotation")]
    AchiralAxialOrder { fold: u32, order: usize },

    #[error(
        "illegal number {count} of orientation reversing automorphisms with fixed points \
         for an axial group of order {order} with a {fold}-fold rotation"
    )]
    AxialFixedPoints { fold: u32, order: usize, count: usize },

    #[error(
        "illegal number {count} of orientation reversing automorphisms with fixed points \
         for an achiral polyhedral group of order 24"
    )]
    PolyhedralFixedPoints { count: usize },

    #[error("illegal order {order} for a polyhedral group")]
    PolyhedralOrder { order: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("malformed input: {0}")]
    Malformed(#[from] MalformedInput),

    #[error("inconsistent automorphism group: {0}")]
    Inconsistent(#[from] Inconsistency),

    #[error("illegal group name: {0}")]
    GroupName(String),
}

pub type Result<T> = std::result::Result<T, Error>;
