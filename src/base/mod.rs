mod dsu;
mod error;
mod grid;
mod pos;
mod visit;

pub use {
    dsu::DSU,
    error::{GridErr, GridRes},
    grid::Grid,
    pos::{KNIGHT, ORTHOGONAL, Pos, Step},
    visit::VisitMap,
};
