//! Live view handles.

use std::any::Any;
use std::rc::Rc;
use veneer_ui_graphics::Rect;

/// A materialized native view instance.
///
/// The engine owns a handle to each view while it is displayed; the handle's
/// pointer identity is the view's identity. Frame accessors take `&self`;
/// implementors keep the frame in a `Cell` (single-threaded UI model).
pub trait NativeView {
    fn frame(&self) -> Rect;

    fn set_frame(&self, frame: Rect);

    /// Escape hatch for content binding: view providers downcast to their
    /// concrete view type to push new content into it.
    fn as_any(&self) -> &dyn Any;
}

/// Shared handle to a live view. Cheap to clone; compared by pointer.
pub type ViewHandle = Rc<dyn NativeView>;
