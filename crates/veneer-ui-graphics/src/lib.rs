//! Pure math/data for geometry & units in Veneer
//!
//! This crate contains the geometry primitives shared by every layer of the
//! framework: points, sizes, rectangles, and edge insets, together with the
//! zoom-scale arithmetic used when content is rendered inside a scaled
//! content view.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
