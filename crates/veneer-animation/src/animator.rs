//! Animator lifecycle hooks.

use veneer_core::{HostView, NativeView, ViewHandle};
use veneer_ui_graphics::{Point, Rect};

/// Strategy for how live views visually transition when the engine inserts,
/// updates, deletes, or shifts them.
///
/// Hook defaults apply changes immediately with no transition. `delete`'s
/// default removes the view from the host; a custom `delete` that animates
/// out is responsible for removing the view itself once done.
pub trait Animator {
    /// Invoked once per render pass on the engine's default animator, before
    /// any per-item hooks.
    fn will_update(&self, host: &dyn HostView) {
        let _ = host;
    }

    /// A new view was just materialized and given its initial frame.
    fn insert(&self, host: &dyn HostView, view: &ViewHandle, frame: Rect) {
        let _ = (host, view, frame);
    }

    /// The item's frame for this render. Invoked for every visible item,
    /// carried-forward or freshly inserted.
    fn update(&self, host: &dyn HostView, view: &ViewHandle, frame: Rect) {
        let _ = host;
        view.set_frame(frame);
    }

    /// The item disappeared from the visible set.
    fn delete(&self, host: &dyn HostView, view: &ViewHandle) {
        host.remove_view(view);
    }

    /// The content offset changed by `delta` during the reload that produced
    /// this render; lets a view that persists across the reload compensate so
    /// it appears stationary.
    fn shift(&self, host: &dyn HostView, delta: Point, view: &ViewHandle, frame: Rect) {
        let _ = (host, delta, view, frame);
    }
}

/// The default animator: every hook is the immediate-apply default.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateAnimator;

impl Animator for ImmediateAnimator {}
