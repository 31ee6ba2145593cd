//! Render engine and reconciliation for Veneer
//!
//! [`RenderEngine`] owns the render loop for one host view: it decides
//! between reload, layout invalidation, and re-render on each host layout
//! pass, turns the current component tree into the list of renderable items
//! intersecting the viewport, diffs that list against the previously visible
//! items by stable identity, and performs minimal-churn updates to the live
//! view pool while driving the configured animator.

mod engine;

#[cfg(test)]
mod tests;

pub use engine::RenderEngine;
