//! Layout contracts for Veneer components and renderers
//!
//! A [`Component`] is an immutable description of a piece of UI. Laying one
//! out under a [`Constraint`] produces a [`Renderer`]: an opaque layout
//! result that knows its total size and can answer viewport-visibility
//! queries with [`RenderableItem`]s — one value per visible leaf, carrying
//! identity, frame, and the [`ViewProvider`] that materializes and binds its
//! live view.

mod constraint;
mod contracts;
mod renderable;

pub use constraint::*;
pub use contracts::*;
pub use renderable::*;

pub mod prelude {
    pub use crate::constraint::Constraint;
    pub use crate::contracts::{Component, Renderer, ViewProvider};
    pub use crate::renderable::RenderableItem;
}
