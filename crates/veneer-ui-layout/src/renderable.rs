//! Renderable items: one value per visible leaf.

use crate::contracts::ViewProvider;
use std::rc::Rc;
use veneer_animation::Animator;
use veneer_ui_graphics::Rect;

/// Describes one visible leaf of a laid-out component tree.
///
/// `key` is the structural fallback identity (typically derived from the
/// producing component's kind and position); `id` is an explicit override for
/// identity that must stay stable across reloads, such as list-item identity.
#[derive(Clone)]
pub struct RenderableItem {
    pub id: Option<String>,
    pub key: String,
    pub animator: Option<Rc<dyn Animator>>,
    pub provider: Rc<dyn ViewProvider>,
    pub frame: Rect,
}

impl RenderableItem {
    pub fn new(key: impl Into<String>, provider: Rc<dyn ViewProvider>, frame: Rect) -> Self {
        Self {
            id: None,
            key: key.into(),
            animator: None,
            provider,
            frame,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_animator(mut self, animator: Rc<dyn Animator>) -> Self {
        self.animator = Some(animator);
        self
    }

    /// The identity the engine reconciles by: `id` when set, else `key`.
    pub fn effective_identity(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.key)
    }
}

impl std::fmt::Debug for RenderableItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderableItem")
            .field("id", &self.id)
            .field("key", &self.key)
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_core::ViewHandle;

    struct NullProvider;

    impl ViewProvider for NullProvider {
        fn make_view(&self) -> ViewHandle {
            unreachable!("not materialized in this test")
        }

        fn update_view(&self, _view: &ViewHandle) {}
    }

    #[test]
    fn test_effective_identity_prefers_id() {
        let item = RenderableItem::new("cell", Rc::new(NullProvider), Rect::ZERO);
        assert_eq!(item.effective_identity(), "cell");
        let item = item.with_id("row-3");
        assert_eq!(item.effective_identity(), "row-3");
    }
}
