//! A `Cell`-backed native view for tests.

use std::any::Any;
use std::cell::{Cell, RefCell};
use veneer_core::{NativeView, ViewHandle};
use veneer_ui_graphics::Rect;

/// Stand-in for a native view: a frame, a bound-content slot, and a counter
/// for content bindings so tests can observe the minimal-churn property.
#[derive(Default)]
pub struct TestView {
    frame: Cell<Rect>,
    content: RefCell<String>,
    bind_count: Cell<usize>,
}

impl TestView {
    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }

    pub fn set_content(&self, content: impl Into<String>) {
        *self.content.borrow_mut() = content.into();
        self.bind_count.set(self.bind_count.get() + 1);
    }

    /// How many times content was bound into this view.
    pub fn bind_count(&self) -> usize {
        self.bind_count.get()
    }
}

impl NativeView for TestView {
    fn frame(&self) -> Rect {
        self.frame.get()
    }

    fn set_frame(&self, frame: Rect) {
        self.frame.set(frame);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Downcasts a live view handle to the concrete test view.
///
/// Panics if the handle is not a [`TestView`]; fixtures only ever produce
/// test views.
pub fn as_test_view(view: &ViewHandle) -> &TestView {
    view.as_any()
        .downcast_ref::<TestView>()
        .expect("live view is not a TestView")
}
