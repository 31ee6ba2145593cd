//! The render engine.
//!
//! One [`RenderEngine`] drives one host view for the host's lifetime. The
//! host calls [`RenderEngine::layout_pass`] from its layout callback; the
//! engine resolves its dirty state in priority order (reload, then
//! size-change invalidation, then render), queries the cached renderer for
//! the items visible in the current viewport, and reconciles them against the
//! previously visible items by stable identity so that live views are reused,
//! inserted, deleted, and moved with minimal churn.
//!
//! Everything is synchronous on the UI thread. Reentrancy from animator hooks
//! is prevented by boolean guards, not locks: a render-triggering call made
//! while a pass is in flight is dropped, while dirty flags set by hooks
//! survive the pass and are honored on the next external layout pass.

mod centering;
mod identity;
mod viewport;

use identity::IdentityIndex;
use smallvec::{smallvec, SmallVec};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use veneer_animation::{Animator, ImmediateAnimator};
use veneer_core::{HostView, NativeView, ViewHandle};
use veneer_ui_graphics::{EdgeInsets, Point, Rect, Size};
use veneer_ui_layout::{Component, Constraint, RenderableItem, Renderer};

pub struct RenderEngine {
    /// Non-owning handle to the host; the host may outlive or predecease the
    /// engine, and every operation no-ops once it is gone.
    host: Weak<dyn HostView>,
    component: RefCell<Option<Rc<dyn Component>>>,
    animator: RefCell<Rc<dyn Animator>>,
    /// Cached layout result; `None` until the first successful render and
    /// after any size-affecting invalidation.
    renderer: RefCell<Option<Box<dyn Renderer>>>,
    /// The reconciliation baseline: parallel lists where index `i` in each
    /// refers to the same logical item, for the whole interval between two
    /// renders.
    visible_items: RefCell<Vec<RenderableItem>>,
    visible_views: RefCell<Vec<ViewHandle>>,
    needs_reload: Cell<bool>,
    needs_render: Cell<bool>,
    update_views_on_next_render: Cell<bool>,
    is_reloading: Cell<bool>,
    is_rendering: Cell<bool>,
    reload_count: Cell<usize>,
    last_render_bounds: Cell<Rect>,
    content_offset_delta: Cell<Point>,
    content_size: Cell<Size>,
    visible_frame_insets: Cell<EdgeInsets>,
    content_view: RefCell<Option<ViewHandle>>,
    center_content_view_horizontally: Cell<bool>,
    center_content_view_vertically: Cell<bool>,
}

impl RenderEngine {
    pub fn new(host: &Rc<dyn HostView>) -> Self {
        Self {
            host: Rc::downgrade(host),
            component: RefCell::new(None),
            animator: RefCell::new(Rc::new(ImmediateAnimator)),
            renderer: RefCell::new(None),
            visible_items: RefCell::new(Vec::new()),
            visible_views: RefCell::new(Vec::new()),
            needs_reload: Cell::new(true),
            needs_render: Cell::new(false),
            update_views_on_next_render: Cell::new(false),
            is_reloading: Cell::new(false),
            is_rendering: Cell::new(false),
            reload_count: Cell::new(0),
            last_render_bounds: Cell::new(Rect::ZERO),
            content_offset_delta: Cell::new(Point::ZERO),
            content_size: Cell::new(Size::ZERO),
            visible_frame_insets: Cell::new(EdgeInsets::default()),
            content_view: RefCell::new(None),
            center_content_view_horizontally: Cell::new(false),
            center_content_view_vertically: Cell::new(false),
        }
    }

    // ----- configuration -----

    pub fn component(&self) -> Option<Rc<dyn Component>> {
        self.component.borrow().clone()
    }

    /// Replaces the root component. Schedules a reload.
    pub fn set_component(&self, component: Option<Rc<dyn Component>>) {
        *self.component.borrow_mut() = component;
        self.set_needs_reload();
    }

    pub fn animator(&self) -> Rc<dyn Animator> {
        self.animator.borrow().clone()
    }

    /// Replaces the engine default animator. Schedules a reload.
    pub fn set_animator(&self, animator: Rc<dyn Animator>) {
        *self.animator.borrow_mut() = animator;
        self.set_needs_reload();
    }

    pub fn visible_frame_insets(&self) -> EdgeInsets {
        self.visible_frame_insets.get()
    }

    /// Insets applied to the viewport before the visible-items query.
    /// Negative values grow the viewport (prefetch margin).
    pub fn set_visible_frame_insets(&self, insets: EdgeInsets) {
        self.visible_frame_insets.set(insets);
        self.set_needs_render();
    }

    pub fn content_view(&self) -> Option<ViewHandle> {
        self.content_view.borrow().clone()
    }

    /// Installs the nested content view used for zoom support. When present,
    /// viewports are computed in its coordinate space and its frame tracks
    /// the content size.
    pub fn set_content_view(&self, view: Option<ViewHandle>) {
        *self.content_view.borrow_mut() = view;
        self.set_needs_render();
    }

    pub fn center_content_view_horizontally(&self) -> bool {
        self.center_content_view_horizontally.get()
    }

    pub fn set_center_content_view_horizontally(&self, center: bool) {
        self.center_content_view_horizontally.set(center);
        self.set_needs_render();
    }

    pub fn center_content_view_vertically(&self) -> bool {
        self.center_content_view_vertically.get()
    }

    pub fn set_center_content_view_vertically(&self, center: bool) {
        self.center_content_view_vertically.set(center);
        self.set_needs_render();
    }

    // ----- state queries -----

    pub fn content_size(&self) -> Size {
        self.content_size.get()
    }

    pub fn reload_count(&self) -> usize {
        self.reload_count.get()
    }

    pub fn has_reloaded(&self) -> bool {
        self.reload_count.get() > 0
    }

    pub fn needs_reload(&self) -> bool {
        self.needs_reload.get()
    }

    pub fn needs_render(&self) -> bool {
        self.needs_render.get()
    }

    /// The renderable items of the last render, in paint order.
    pub fn visible_items(&self) -> Vec<RenderableItem> {
        self.visible_items.borrow().clone()
    }

    /// The live views of the last render, parallel to [`visible_items`].
    ///
    /// [`visible_items`]: Self::visible_items
    pub fn visible_views(&self) -> Vec<ViewHandle> {
        self.visible_views.borrow().clone()
    }

    /// The live view currently displayed for `identity`, if visible.
    pub fn view_for_identity(&self, identity: &str) -> Option<ViewHandle> {
        let items = self.visible_items.borrow();
        let slot = items
            .iter()
            .position(|item| item.effective_identity() == identity)?;
        Some(self.visible_views.borrow()[slot].clone())
    }

    // ----- dirty-state transitions -----

    /// Marks the engine for a full reload on the next layout pass.
    pub fn set_needs_reload(&self) {
        self.needs_reload.set(true);
        if let Some(host) = self.host.upgrade() {
            host.set_needs_layout();
        }
    }

    /// Marks the engine for a re-render (no layout change) on the next
    /// layout pass.
    pub fn set_needs_render(&self) {
        self.needs_render.set(true);
        if let Some(host) = self.host.upgrade() {
            host.set_needs_layout();
        }
    }

    /// Drops the cached renderer and re-renders, recomputing layout under
    /// the current bounds. Dropped while a pass is in flight or before the
    /// first reload.
    pub fn invalidate_layout(&self) {
        if self.is_reloading.get() || self.is_rendering.get() || !self.has_reloaded() {
            return;
        }
        let Some(host) = self.host.upgrade() else {
            return;
        };
        *self.renderer.borrow_mut() = None;
        self.render_pass(&*host, false);
    }

    /// The host-triggered layout entry point. Resolves pending work in
    /// priority order: reload, then size-change invalidation, then render.
    /// Clean state with unchanged bounds performs no work.
    pub fn layout_pass(&self) {
        let Some(host) = self.host.upgrade() else {
            return;
        };
        let bounds = host.bounds();
        if self.needs_reload.get() {
            self.reload(&host, None, None);
        } else if bounds.size() != self.last_render_bounds.get().size() && self.has_reloaded() {
            self.invalidate_layout();
        } else if bounds != self.last_render_bounds.get() || self.needs_render.get() {
            self.render_pass(&*host, false);
        }
    }

    // ----- reload -----

    /// Performs a full reload: lays the component out under the current
    /// adjusted bounds, publishes the content size, applies the optional
    /// content-offset adjustment, and renders with view updating forced on.
    ///
    /// `adjust_offset` receives the new content size and returns the content
    /// offset to apply before rendering; the resulting delta is handed to
    /// the animator's `shift` hook for views that persist across the reload.
    pub fn reload_data(&self, adjust_offset: Option<&dyn Fn(Size) -> Point>) {
        let Some(host) = self.host.upgrade() else {
            return;
        };
        self.reload(&host, None, adjust_offset);
    }

    /// Fast-path reload with a caller-precomputed renderer, skipping the
    /// layout-acquisition step while still forcing the reconciliation pass.
    /// Installing a renderer inconsistent with the current component is a
    /// caller error.
    pub fn reload_with_renderer(
        &self,
        renderer: Box<dyn Renderer>,
        adjust_offset: Option<&dyn Fn(Size) -> Point>,
    ) {
        let Some(host) = self.host.upgrade() else {
            return;
        };
        self.reload(&host, Some(renderer), adjust_offset);
    }

    fn reload(
        &self,
        host: &Rc<dyn HostView>,
        prelaid: Option<Box<dyn Renderer>>,
        adjust_offset: Option<&dyn Fn(Size) -> Point>,
    ) {
        if self.is_reloading.get() || self.is_rendering.get() {
            return;
        }
        self.is_reloading.set(true);
        let installed = match prelaid {
            Some(renderer) => {
                *self.renderer.borrow_mut() = Some(renderer);
                true
            }
            None => self.acquire_renderer(&**host),
        };
        if !installed {
            // No component; the reload flag stays set for a later pass.
            self.is_reloading.set(false);
            return;
        }
        self.needs_reload.set(false);
        self.publish_content_size(&**host);

        self.content_offset_delta.set(Point::ZERO);
        let offset_before = host.content_offset();
        if let Some(adjust) = adjust_offset {
            host.set_content_offset(adjust(self.content_size.get()));
        }
        self.content_offset_delta
            .set(host.content_offset() - offset_before);

        self.update_views_on_next_render.set(true);
        self.is_reloading.set(false);

        self.render_pass(&**host, true);
        self.reload_count.set(self.reload_count.get() + 1);
    }

    // ----- measurement -----

    /// Lays the current component out under `size` and returns only the
    /// resulting size. Touches no engine state; returns zero without a
    /// component.
    pub fn size_that_fits(&self, size: Size) -> Size {
        let component = self.component.borrow().clone();
        match component {
            Some(component) => component.layout(Constraint::new(size)).size(),
            None => Size::ZERO,
        }
    }

    // ----- identity maintenance -----

    /// Relabels a currently-visible item's identity in place, so a
    /// subsequent reload recognizes the same live view under the new
    /// identity. No-op if `from` is not currently visible.
    pub fn remap_identity(&self, from: &str, to: &str) {
        let mut items = self.visible_items.borrow_mut();
        if let Some(item) = items
            .iter_mut()
            .find(|item| item.effective_identity() == from)
        {
            item.id = Some(to.to_owned());
        }
    }

    // ----- render -----

    /// Lays the component out under the inset-adjusted host bounds and
    /// caches the resulting renderer. Returns false without a component.
    fn acquire_renderer(&self, host: &dyn HostView) -> bool {
        let component = self.component.borrow().clone();
        let Some(component) = component else {
            return false;
        };
        let adjusted = host.bounds().size().deflate(host.adjusted_content_inset());
        let renderer = component.layout(Constraint::new(adjusted));
        *self.renderer.borrow_mut() = Some(renderer);
        true
    }

    /// Publishes `renderer.size * zoom` as the content size when it changed,
    /// and keeps the content view's frame in sync.
    fn publish_content_size(&self, host: &dyn HostView) {
        let size = match self.renderer.borrow().as_ref() {
            Some(renderer) => renderer.size(),
            None => return,
        };
        let scaled = size * host.zoom_scale();
        if scaled != self.content_size.get() {
            self.content_size.set(scaled);
            host.set_content_size(scaled);
            self.layout_content_view(host);
        }
    }

    fn layout_content_view(&self, host: &dyn HostView) {
        let Some(content_view) = self.content_view.borrow().clone() else {
            return;
        };
        content_view.set_frame(centering::content_view_frame(
            self.content_size.get(),
            host.bounds().size(),
            self.center_content_view_horizontally.get(),
            self.center_content_view_vertically.get(),
        ));
    }

    fn render_pass(&self, host: &dyn HostView, update_views: bool) {
        if self.is_rendering.get() {
            return;
        }
        if self.renderer.borrow().is_none() {
            if !self.acquire_renderer(host) {
                return;
            }
            self.publish_content_size(host);
        }
        self.is_rendering.set(true);
        self.needs_render.set(false);
        let update_views = update_views || self.update_views_on_next_render.take();
        let default_animator = self.animator.borrow().clone();
        default_animator.will_update(host);
        self.layout_content_view(host);

        let viewport = viewport::visible_rect(
            host.bounds(),
            self.content_view.borrow().as_ref().map(|view| view.frame()),
            host.zoom_scale(),
            self.visible_frame_insets.get(),
        );
        let mut new_items = {
            let mut renderer = self.renderer.borrow_mut();
            match renderer.as_mut() {
                Some(renderer) => renderer.visible_items(viewport),
                None => {
                    self.is_rendering.set(false);
                    return;
                }
            }
        };
        // The query may have grown the renderer (incremental layouts).
        self.publish_content_size(host);

        let index = IdentityIndex::build(&mut new_items);

        // Pass 1: carry live views forward by identity; delete the rest.
        let prev_items = self.visible_items.borrow().clone();
        let prev_views = self.visible_views.borrow().clone();
        let mut carried: SmallVec<[Option<ViewHandle>; 8]> = smallvec![None; new_items.len()];
        for (item, view) in prev_items.iter().zip(&prev_views) {
            match index.slot(item.effective_identity()) {
                Some(slot) => carried[slot] = Some(view.clone()),
                None => item
                    .animator
                    .as_deref()
                    .unwrap_or(&*default_animator)
                    .delete(host, view),
            }
        }

        // Pass 2: update carried views, materialize the rest, restore paint
        // order. Carried views in a pure viewport-scroll render are left
        // untouched apart from the `update` hook.
        let offset_delta = self.content_offset_delta.get();
        let mut new_views = Vec::with_capacity(new_items.len());
        for (slot, item) in new_items.iter().enumerate() {
            let animator = item.animator.as_deref().unwrap_or(&*default_animator);
            let view = match carried[slot].take() {
                Some(view) => {
                    if update_views {
                        item.provider.update_view(&view);
                        animator.shift(host, offset_delta, &view, item.frame);
                    }
                    view
                }
                None => {
                    let view = item.provider.make_view();
                    item.provider.update_view(&view);
                    view.set_frame(item.frame);
                    animator.insert(host, &view, item.frame);
                    view
                }
            };
            animator.update(host, &view, item.frame);
            host.insert_view(&view, slot);
            new_views.push(view);
        }

        *self.visible_items.borrow_mut() = new_items;
        *self.visible_views.borrow_mut() = new_views;
        self.last_render_bounds.set(host.bounds());
        self.is_rendering.set(false);
    }
}
