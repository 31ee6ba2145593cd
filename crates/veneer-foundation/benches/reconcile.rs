use criterion::{criterion_group, criterion_main, Criterion};
use std::rc::Rc;
use veneer_core::HostView;
use veneer_foundation::RenderEngine;
use veneer_testing::prelude::*;
use veneer_ui_graphics::{Point, Size};

fn steady_state_render(c: &mut Criterion) {
    let host = TestHost::new(Size::new(300.0, 600.0));
    let engine = RenderEngine::new(&host.as_host());
    engine.set_component(Some(Rc::new(TestColumn::numbered(1000, 300.0, 50.0))));
    engine.layout_pass();

    c.bench_function("steady_state_render", |b| {
        b.iter(|| {
            engine.set_needs_render();
            engine.layout_pass();
        });
    });
}

fn scroll_render(c: &mut Criterion) {
    let host = TestHost::new(Size::new(300.0, 600.0));
    let engine = RenderEngine::new(&host.as_host());
    engine.set_component(Some(Rc::new(TestColumn::numbered(1000, 300.0, 50.0))));
    engine.layout_pass();

    let mut offset = 0.0;
    c.bench_function("scroll_render", |b| {
        b.iter(|| {
            offset = (offset + 130.0) % 40_000.0;
            host.set_content_offset(Point::new(0.0, offset));
            engine.layout_pass();
        });
    });
}

fn reload_reconcile(c: &mut Criterion) {
    let host = TestHost::new(Size::new(300.0, 600.0));
    let engine = RenderEngine::new(&host.as_host());
    engine.set_component(Some(Rc::new(TestColumn::numbered(1000, 300.0, 50.0))));
    engine.layout_pass();

    c.bench_function("reload_reconcile", |b| {
        b.iter(|| {
            engine.set_component(Some(Rc::new(TestColumn::numbered(1000, 300.0, 50.0))));
            engine.layout_pass();
        });
    });
}

criterion_group!(benches, steady_state_render, scroll_render, reload_reconcile);
criterion_main!(benches);
