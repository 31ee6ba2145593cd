//! Animator contract for Veneer view transitions
//!
//! The render engine invokes an [`Animator`] at defined lifecycle points
//! while it reconciles live views. Animators are pluggable per engine and
//! overridable per renderable item; every hook has a sensible immediate-apply
//! default, so a custom animator implements only the transitions it cares
//! about.

mod animator;

pub use animator::*;
