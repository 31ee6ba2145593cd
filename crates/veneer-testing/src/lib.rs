//! Testing utilities and fixtures for Veneer
//!
//! A scriptable host view, a `Cell`-backed native view, a recording
//! animator, and a handful of minimal components and renderers — enough to
//! drive the render engine end to end without a real view system.

pub mod animator;
pub mod components;
pub mod host;
pub mod view;

pub use animator::*;
pub use components::*;
pub use host::*;
pub use view::*;

pub mod prelude {
    pub use crate::animator::{AnimatorEvent, RecordingAnimator};
    pub use crate::components::{GrowingFeed, LabelProvider, Plaque, TestColumn};
    pub use crate::host::TestHost;
    pub use crate::view::{as_test_view, TestView};
}
