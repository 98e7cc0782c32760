//! Buffer module: Sparse styled-cell storage and its compositing algebra.
//!
//! This module contains:
//! - [`Cell`]: one display unit plus an opaque [`Style`]
//! - [`Buffer`]: the sparse row→column grid with cached cardinality
//!   and bounding box
//! - the merge/crop/diff algebra, exposed both as named methods and as
//!   `+`/`&`/`-` operators
//! - [`Recalc`]: toggles for repairing the caches after raw bulk loads

mod cell;
mod compose;
mod grid;

pub use cell::{Cell, Modifiers, Rgb, Style};
pub use grid::{Buffer, Recalc, Row};
