//! Geometry module: Bounding-box arithmetic for sparse content.
//!
//! Unlike a screen-space rectangle, [`Bounds`] tracks the extent of
//! content that can live anywhere on the integer plane, including at
//! negative coordinates. It grows to cover points, unions with `+`,
//! intersects with `&`, and collapses to a canonical empty sentinel.

mod bounds;

pub use bounds::{Bounded, Bounds};
