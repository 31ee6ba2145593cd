//! View-system capability surface for Veneer
//!
//! The render engine drives an abstract native view system through two
//! capability traits: [`NativeView`] for individual live views and
//! [`HostView`] for the scrollable container that hosts them. Everything is
//! single-threaded and cooperative; trait methods take `&self` and
//! implementors use interior mutability (`Cell`/`RefCell`), so handles can be
//! shared freely on the UI thread.

mod host;
mod view;

pub use host::*;
pub use view::*;

pub mod prelude {
    pub use crate::host::HostView;
    pub use crate::view::{NativeView, ViewHandle};
}
