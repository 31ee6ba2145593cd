//! A scriptable host view.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use veneer_core::{HostView, ViewHandle};
use veneer_ui_graphics::{EdgeInsets, Point, Rect, Size};

/// Scroll-view stand-in: bounds follow the scripted content offset, subview
/// operations are applied to an ordered list, and layout requests are
/// recorded for assertions.
pub struct TestHost {
    size: Cell<Size>,
    offset: Cell<Point>,
    content_size: Cell<Size>,
    inset: Cell<EdgeInsets>,
    zoom: Cell<f32>,
    subviews: RefCell<Vec<ViewHandle>>,
    needs_layout: Cell<bool>,
}

impl TestHost {
    pub fn new(size: Size) -> Rc<Self> {
        Rc::new(Self {
            size: Cell::new(size),
            offset: Cell::new(Point::ZERO),
            content_size: Cell::new(Size::ZERO),
            inset: Cell::new(EdgeInsets::default()),
            zoom: Cell::new(1.0),
            subviews: RefCell::new(Vec::new()),
            needs_layout: Cell::new(false),
        })
    }

    /// Upcasts for engine construction.
    pub fn as_host(self: &Rc<Self>) -> Rc<dyn HostView> {
        self.clone()
    }

    pub fn set_size(&self, size: Size) {
        self.size.set(size);
    }

    pub fn set_adjusted_content_inset(&self, inset: EdgeInsets) {
        self.inset.set(inset);
    }

    pub fn set_zoom_scale(&self, zoom: f32) {
        self.zoom.set(zoom);
    }

    pub fn subviews(&self) -> Vec<ViewHandle> {
        self.subviews.borrow().clone()
    }

    pub fn subview_count(&self) -> usize {
        self.subviews.borrow().len()
    }

    /// Reads and clears the pending layout request.
    pub fn take_needs_layout(&self) -> bool {
        self.needs_layout.take()
    }
}

impl HostView for TestHost {
    fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.offset.get(), self.size.get())
    }

    fn content_size(&self) -> Size {
        self.content_size.get()
    }

    fn set_content_size(&self, size: Size) {
        self.content_size.set(size);
    }

    fn content_offset(&self) -> Point {
        self.offset.get()
    }

    fn set_content_offset(&self, offset: Point) {
        self.offset.set(offset);
    }

    fn adjusted_content_inset(&self) -> EdgeInsets {
        self.inset.get()
    }

    fn zoom_scale(&self) -> f32 {
        self.zoom.get()
    }

    fn insert_view(&self, view: &ViewHandle, index: usize) {
        let mut subviews = self.subviews.borrow_mut();
        subviews.retain(|existing| !Rc::ptr_eq(existing, view));
        let index = index.min(subviews.len());
        subviews.insert(index, view.clone());
    }

    fn remove_view(&self, view: &ViewHandle) {
        self.subviews
            .borrow_mut()
            .retain(|existing| !Rc::ptr_eq(existing, view));
    }

    fn set_needs_layout(&self) {
        self.needs_layout.set(true);
    }
}
