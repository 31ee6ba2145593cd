//! Identity index for one reconciliation pass.

use rustc_hash::FxHashMap;
use veneer_ui_layout::RenderableItem;

/// Maps each visible item's effective identity to its slot in the new
/// visible list.
///
/// Identities colliding within one query are a producer error, not a fault:
/// the first-seen item keeps its identity, every later duplicate is renamed
/// by appending an incrementing numeric suffix, re-checked against the
/// identities seen so far until unique. The chosen identity is written back
/// into the item's `id` so the next render diffs against what this render
/// recorded.
pub(crate) struct IdentityIndex {
    slots: FxHashMap<String, usize>,
}

impl IdentityIndex {
    pub(crate) fn build(items: &mut [RenderableItem]) -> Self {
        let mut slots =
            FxHashMap::with_capacity_and_hasher(items.len(), Default::default());
        for (slot, item) in items.iter_mut().enumerate() {
            let mut identity = item.effective_identity().to_owned();
            if slots.contains_key(&identity) {
                let base = identity;
                let mut suffix = 1usize;
                identity = format!("{base}{suffix}");
                while slots.contains_key(&identity) {
                    suffix += 1;
                    identity = format!("{base}{suffix}");
                }
                log::warn!(
                    "duplicate renderable identity {base:?}; renamed to {identity:?}"
                );
                item.id = Some(identity.clone());
            }
            slots.insert(identity, slot);
        }
        Self { slots }
    }

    pub(crate) fn slot(&self, identity: &str) -> Option<usize> {
        self.slots.get(identity).copied()
    }

    #[allow(dead_code)] // Used by the tests below
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use veneer_core::ViewHandle;
    use veneer_ui_graphics::Rect;
    use veneer_ui_layout::ViewProvider;

    struct NullProvider;

    impl ViewProvider for NullProvider {
        fn make_view(&self) -> ViewHandle {
            unreachable!("not materialized in identity tests")
        }

        fn update_view(&self, _view: &ViewHandle) {}
    }

    fn item(id: &str) -> RenderableItem {
        RenderableItem::new("test", Rc::new(NullProvider), Rect::ZERO).with_id(id)
    }

    #[test]
    fn test_unique_identities_keep_their_slots() {
        let mut items = vec![item("a"), item("b"), item("c")];
        let index = IdentityIndex::build(&mut items);
        assert_eq!(index.slot("a"), Some(0));
        assert_eq!(index.slot("b"), Some(1));
        assert_eq!(index.slot("c"), Some(2));
        assert_eq!(index.slot("d"), None);
    }

    #[test]
    fn test_duplicate_renamed_first_keeps_original() {
        let mut items = vec![item("a"), item("a")];
        let index = IdentityIndex::build(&mut items);
        assert_eq!(index.len(), 2);
        assert_eq!(index.slot("a"), Some(0));
        assert_eq!(index.slot("a1"), Some(1));
        assert_eq!(items[0].effective_identity(), "a");
        assert_eq!(items[1].effective_identity(), "a1");
    }

    #[test]
    fn test_suffix_skips_preexisting_identity() {
        // "a1" is taken by a real item, so the renamed duplicate of "a"
        // must advance past it.
        let mut items = vec![item("a"), item("a1"), item("a")];
        let index = IdentityIndex::build(&mut items);
        assert_eq!(index.len(), 3);
        assert_eq!(index.slot("a"), Some(0));
        assert_eq!(index.slot("a1"), Some(1));
        assert_eq!(index.slot("a2"), Some(2));
    }

    #[test]
    fn test_fallback_to_key_when_no_id() {
        let mut items = vec![
            RenderableItem::new("label", Rc::new(NullProvider), Rect::ZERO),
            RenderableItem::new("label", Rc::new(NullProvider), Rect::ZERO),
        ];
        let index = IdentityIndex::build(&mut items);
        assert_eq!(index.slot("label"), Some(0));
        assert_eq!(index.slot("label1"), Some(1));
    }
}
