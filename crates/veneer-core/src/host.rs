//! Host view adapter.

use crate::view::ViewHandle;
use veneer_ui_graphics::{EdgeInsets, Point, Rect, Size};

/// The capability surface a native scrollable container must expose to be
/// driven by the render engine.
///
/// Scroll-view semantics: `bounds().origin()` is the current content offset,
/// so scrolling moves the bounds over the content without touching subview
/// frames. A non-scrollable host reports a zero origin and a zoom scale of 1.
///
/// All methods take `&self`; a host backed by a real view system forwards to
/// it, a test host records into `Cell`/`RefCell` fields.
pub trait HostView {
    fn bounds(&self) -> Rect;

    fn content_size(&self) -> Size;

    fn set_content_size(&self, size: Size);

    fn content_offset(&self) -> Point;

    fn set_content_offset(&self, offset: Point);

    /// Content inset already adjusted for bars/safe areas by the host.
    fn adjusted_content_inset(&self) -> EdgeInsets {
        EdgeInsets::default()
    }

    fn zoom_scale(&self) -> f32 {
        1.0
    }

    /// Inserts `view` into the content container at `index`. A zoomable host
    /// forwards insertions into its nested content view. Inserting a view
    /// that is already hosted moves it; subview order is paint order.
    fn insert_view(&self, view: &ViewHandle, index: usize);

    fn remove_view(&self, view: &ViewHandle);

    /// Requests a future layout pass from the host (`setNeedsLayout`
    /// equivalent). The host is expected to eventually call back into the
    /// engine's layout entry point.
    fn set_needs_layout(&self);
}
