//! A recording animator.

use std::cell::RefCell;
use std::rc::Rc;
use veneer_animation::Animator;
use veneer_core::{HostView, NativeView, ViewHandle};
use veneer_ui_graphics::{Point, Rect};

/// One recorded animator hook invocation.
#[derive(Clone)]
pub enum AnimatorEvent {
    WillUpdate,
    Insert { view: ViewHandle, frame: Rect },
    Update { view: ViewHandle, frame: Rect },
    Delete { view: ViewHandle },
    Shift { view: ViewHandle, delta: Point },
}

/// Records every hook invocation while preserving the default immediate
/// behavior (frames applied on `update`, views removed on `delete`).
#[derive(Default)]
pub struct RecordingAnimator {
    events: RefCell<Vec<AnimatorEvent>>,
}

impl RecordingAnimator {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn events(&self) -> Vec<AnimatorEvent> {
        self.events.borrow().clone()
    }

    /// Reads and clears the recorded events.
    pub fn take_events(&self) -> Vec<AnimatorEvent> {
        self.events.take()
    }

    pub fn insert_count(&self) -> usize {
        self.count(|event| matches!(event, AnimatorEvent::Insert { .. }))
    }

    pub fn update_count(&self) -> usize {
        self.count(|event| matches!(event, AnimatorEvent::Update { .. }))
    }

    pub fn delete_count(&self) -> usize {
        self.count(|event| matches!(event, AnimatorEvent::Delete { .. }))
    }

    pub fn shift_count(&self) -> usize {
        self.count(|event| matches!(event, AnimatorEvent::Shift { .. }))
    }

    pub fn deleted_views(&self) -> Vec<ViewHandle> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                AnimatorEvent::Delete { view } => Some(view.clone()),
                _ => None,
            })
            .collect()
    }

    fn count(&self, matches: impl Fn(&AnimatorEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| matches(e)).count()
    }
}

impl Animator for RecordingAnimator {
    fn will_update(&self, _host: &dyn HostView) {
        self.events.borrow_mut().push(AnimatorEvent::WillUpdate);
    }

    fn insert(&self, _host: &dyn HostView, view: &ViewHandle, frame: Rect) {
        self.events.borrow_mut().push(AnimatorEvent::Insert {
            view: view.clone(),
            frame,
        });
    }

    fn update(&self, _host: &dyn HostView, view: &ViewHandle, frame: Rect) {
        self.events.borrow_mut().push(AnimatorEvent::Update {
            view: view.clone(),
            frame,
        });
        view.set_frame(frame);
    }

    fn delete(&self, host: &dyn HostView, view: &ViewHandle) {
        self.events
            .borrow_mut()
            .push(AnimatorEvent::Delete { view: view.clone() });
        host.remove_view(view);
    }

    fn shift(&self, _host: &dyn HostView, delta: Point, view: &ViewHandle, _frame: Rect) {
        self.events.borrow_mut().push(AnimatorEvent::Shift {
            view: view.clone(),
            delta,
        });
    }
}
