//! Component, renderer, and view-provider capabilities.

use crate::constraint::Constraint;
use crate::renderable::RenderableItem;
use veneer_core::ViewHandle;
use veneer_ui_graphics::{Rect, Size};

/// Immutable description of a piece of UI and how to lay it out.
///
/// `layout` must be a pure function of the constraint and the component's
/// state at call time; its only allowed side effects live inside the returned
/// renderer's internal caches.
pub trait Component {
    fn layout(&self, constraint: Constraint) -> Box<dyn Renderer>;
}

/// The result of laying out a component tree.
///
/// `visible_items` may lazily compute and cache child layout, and as a side
/// effect may change the reported `size` (incremental layouts that grow on
/// demand). Callers must re-read `size` after each query.
pub trait Renderer {
    /// Total content extent.
    fn size(&self) -> Size;

    /// The renderable items intersecting `viewport`, in paint order.
    fn visible_items(&mut self, viewport: Rect) -> Vec<RenderableItem>;
}

/// Materializes and binds the live view for one renderable item.
///
/// There is no destroy hook; removal is host-managed.
pub trait ViewProvider {
    fn make_view(&self) -> ViewHandle;

    /// Binds the item's current content into `view`.
    fn update_view(&self, view: &ViewHandle);
}
