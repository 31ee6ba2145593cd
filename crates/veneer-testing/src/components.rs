//! Minimal components and renderers for driving the engine.

use crate::view::{as_test_view, TestView};
use std::cell::Cell;
use std::rc::Rc;
use veneer_animation::Animator;
use veneer_core::ViewHandle;
use veneer_ui_graphics::{Rect, Size};
use veneer_ui_layout::{Component, Constraint, RenderableItem, Renderer, ViewProvider};

/// Binds a fixed text into a [`TestView`].
pub struct LabelProvider {
    pub text: String,
}

impl LabelProvider {
    pub fn new(text: impl Into<String>) -> Rc<Self> {
        Rc::new(Self { text: text.into() })
    }
}

impl ViewProvider for LabelProvider {
    fn make_view(&self) -> ViewHandle {
        Rc::new(TestView::default())
    }

    fn update_view(&self, view: &ViewHandle) {
        as_test_view(view).set_content(self.text.clone());
    }
}

/// A fixed-size leaf with an explicit identity.
#[derive(Clone)]
pub struct Plaque {
    identity: String,
    size: Size,
    animator: Option<Rc<dyn Animator>>,
}

impl Plaque {
    pub fn new(identity: impl Into<String>, size: Size) -> Self {
        Self {
            identity: identity.into(),
            size,
            animator: None,
        }
    }

    /// Per-item animator override carried on this plaque's renderable item.
    pub fn with_animator(mut self, animator: Rc<dyn Animator>) -> Self {
        self.animator = Some(animator);
        self
    }
}

impl Component for Plaque {
    fn layout(&self, constraint: Constraint) -> Box<dyn Renderer> {
        let size = constraint.constrain(self.size);
        let mut item = RenderableItem::new(
            "plaque",
            LabelProvider::new(self.identity.clone()),
            Rect::from_size(size),
        )
        .with_id(self.identity.clone());
        if let Some(animator) = &self.animator {
            item = item.with_animator(animator.clone());
        }
        Box::new(PlaqueRenderer { size, item })
    }
}

struct PlaqueRenderer {
    size: Size,
    item: RenderableItem,
}

impl Renderer for PlaqueRenderer {
    fn size(&self) -> Size {
        self.size
    }

    fn visible_items(&mut self, viewport: Rect) -> Vec<RenderableItem> {
        if self.item.frame.intersects(&viewport) {
            vec![self.item.clone()]
        } else {
            Vec::new()
        }
    }
}

/// A vertical stack of plaques with real viewport culling.
pub struct TestColumn {
    children: Vec<Plaque>,
}

impl TestColumn {
    pub fn new(children: Vec<Plaque>) -> Self {
        Self { children }
    }

    /// Convenience: `count` plaques of `height`, identified `"0"`, `"1"`, …
    pub fn numbered(count: usize, width: f32, height: f32) -> Self {
        Self::new(
            (0..count)
                .map(|i| Plaque::new(i.to_string(), Size::new(width, height)))
                .collect(),
        )
    }
}

impl Component for TestColumn {
    fn layout(&self, constraint: Constraint) -> Box<dyn Renderer> {
        let child_constraint =
            Constraint::new(Size::new(constraint.max_size.width, f32::INFINITY));
        let mut entries = Vec::new();
        let mut width = 0.0f32;
        let mut y = 0.0;
        for child in &self.children {
            let mut renderer = child.layout(child_constraint);
            let child_size = renderer.size();
            for mut item in renderer.visible_items(Rect::from_size(child_size)) {
                item.frame = item.frame.translate(0.0, y);
                entries.push(item);
            }
            width = width.max(child_size.width);
            y += child_size.height;
        }
        Box::new(ColumnRenderer {
            size: Size::new(width, y),
            entries,
        })
    }
}

struct ColumnRenderer {
    size: Size,
    entries: Vec<RenderableItem>,
}

impl Renderer for ColumnRenderer {
    fn size(&self) -> Size {
        self.size
    }

    fn visible_items(&mut self, viewport: Rect) -> Vec<RenderableItem> {
        self.entries
            .iter()
            .filter(|item| item.frame.intersects(&viewport))
            .cloned()
            .collect()
    }
}

/// An endless feed whose renderer grows on demand: querying near the end of
/// the laid-out content appends another page, changing the reported size as
/// a side effect of the query.
pub struct GrowingFeed {
    pub item_height: f32,
    pub page_size: usize,
}

impl Component for GrowingFeed {
    fn layout(&self, constraint: Constraint) -> Box<dyn Renderer> {
        let width = if constraint.has_bounded_width() {
            constraint.max_size.width
        } else {
            300.0
        };
        Box::new(GrowingFeedRenderer {
            width,
            item_height: self.item_height,
            page_size: self.page_size,
            count: Cell::new(self.page_size),
        })
    }
}

struct GrowingFeedRenderer {
    width: f32,
    item_height: f32,
    page_size: usize,
    count: Cell<usize>,
}

impl Renderer for GrowingFeedRenderer {
    fn size(&self) -> Size {
        Size::new(self.width, self.count.get() as f32 * self.item_height)
    }

    fn visible_items(&mut self, viewport: Rect) -> Vec<RenderableItem> {
        while (self.count.get() as f32) * self.item_height < viewport.max_y() {
            self.count.set(self.count.get() + self.page_size);
        }
        let first = (viewport.y.max(0.0) / self.item_height).floor() as usize;
        let last = ((viewport.max_y() / self.item_height).ceil() as usize).min(self.count.get());
        (first..last)
            .map(|index| {
                let identity = format!("feed-{index}");
                let frame = Rect::new(
                    0.0,
                    index as f32 * self.item_height,
                    self.width,
                    self.item_height,
                );
                RenderableItem::new("feed", LabelProvider::new(identity.clone()), frame)
                    .with_id(identity)
            })
            .filter(|item| item.frame.intersects(&viewport))
            .collect()
    }
}
