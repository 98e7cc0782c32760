//! # Tessera
//!
//! A sparse terminal framebuffer with set-algebra compositing.
//!
//! Tessera is the data structure beneath a terminal scene pipeline:
//! producers (a terminal-state decoder, drawing code) write styled
//! cells into sparse buffers, buffers compose into scenes with a small
//! algebra, and a renderer walks the occupied cells back out in
//! row-major order.
//!
//! ## Core Concepts
//!
//! - **Sparse storage**: only occupied coordinates take memory; the
//!   plane is unbounded and signed
//! - **Cached invariants**: cardinality and minimal bounding box are
//!   maintained incrementally across every mutation
//! - **Compositing algebra**: right-biased merge (`+`), crop against a
//!   box (`&`), and value-aware diff (`-`), each with an in-place form
//! - **External serialization**: buffers are single-threaded values;
//!   [`Versioned`] wraps one (or anything else) for shared use
//!
//! ## Example
//!
//! ```rust
//! use tessera::{Bounds, Buffer, Style};
//!
//! let mut scene = Buffer::new();
//! scene.write(0, 0, "hello", Style::DEFAULT);
//!
//! let mut overlay = Buffer::new();
//! overlay.write(4, 0, "!", Style::DEFAULT);
//!
//! let composed = &scene + &overlay;
//! assert_eq!(composed.get(4, 0).map(|c| c.ch()), Some('!'));
//! assert_eq!(composed.bounds(), Bounds::new(0, 0, 5, 1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod geometry;
pub mod sync;

// Re-exports for convenience
pub use buffer::{Buffer, Cell, Modifiers, Recalc, Rgb, Row, Style};
pub use geometry::{Bounded, Bounds};
pub use sync::Versioned;
