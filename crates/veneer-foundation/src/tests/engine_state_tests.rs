//! Dirty-state machine tests for the render engine.

use crate::RenderEngine;
use std::rc::Rc;
use veneer_testing::prelude::*;
use veneer_ui_graphics::Size;

fn column() -> Rc<TestColumn> {
    Rc::new(TestColumn::numbered(3, 300.0, 50.0))
}

#[test]
fn test_new_engine_starts_dirty_and_empty() {
    let host = TestHost::new(Size::new(300.0, 300.0));
    let engine = RenderEngine::new(&host.as_host());

    assert!(engine.needs_reload());
    assert!(!engine.needs_render());
    assert!(!engine.has_reloaded());
    assert_eq!(engine.content_size(), Size::ZERO);
    assert!(engine.visible_items().is_empty());
    assert!(engine.visible_views().is_empty());
}

#[test]
fn test_set_component_requests_a_host_layout_pass() {
    let host = TestHost::new(Size::new(300.0, 300.0));
    let engine = RenderEngine::new(&host.as_host());
    host.take_needs_layout();

    engine.set_component(Some(column()));

    assert!(engine.needs_reload());
    assert!(host.take_needs_layout());
}

#[test]
fn test_layout_pass_without_component_keeps_the_reload_flag() {
    let host = TestHost::new(Size::new(300.0, 300.0));
    let engine = RenderEngine::new(&host.as_host());

    engine.layout_pass();

    assert!(engine.needs_reload());
    assert!(!engine.has_reloaded());
    assert_eq!(host.subview_count(), 0);
}

#[test]
fn test_reload_clears_flags_and_implies_a_render() {
    let host = TestHost::new(Size::new(300.0, 300.0));
    let engine = RenderEngine::new(&host.as_host());
    engine.set_component(Some(column()));
    engine.set_needs_render();

    engine.layout_pass();

    assert!(!engine.needs_reload());
    assert!(!engine.needs_render());
    assert_eq!(engine.reload_count(), 1);
    assert_eq!(host.subview_count(), 3);
}

#[test]
fn test_clean_pass_with_unchanged_bounds_does_no_work() {
    let host = TestHost::new(Size::new(300.0, 300.0));
    let engine = Rc::new(RenderEngine::new(&host.as_host()));
    let animator = RecordingAnimator::new();
    engine.set_animator(animator.clone());
    engine.set_component(Some(column()));
    engine.layout_pass();
    animator.take_events();

    engine.layout_pass();

    assert!(animator.events().is_empty());
    assert_eq!(engine.reload_count(), 1);
}

#[test]
fn test_invalidate_before_first_reload_is_dropped() {
    let host = TestHost::new(Size::new(300.0, 300.0));
    let engine = RenderEngine::new(&host.as_host());
    engine.set_component(Some(column()));

    engine.invalidate_layout();

    assert_eq!(host.subview_count(), 0);
    assert!(engine.needs_reload());
}

#[test]
fn test_set_animator_schedules_a_reload() {
    let host = TestHost::new(Size::new(300.0, 300.0));
    let engine = RenderEngine::new(&host.as_host());
    engine.set_component(Some(column()));
    engine.layout_pass();
    assert!(!engine.needs_reload());

    engine.set_animator(RecordingAnimator::new());

    assert!(engine.needs_reload());
    engine.layout_pass();
    assert_eq!(engine.reload_count(), 2);
}
