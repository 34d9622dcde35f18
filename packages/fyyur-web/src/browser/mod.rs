//! Browser bindings (feature `web`)
//!
//! Connects the host-independent handlers to the real document: elements are
//! `web_sys::Element`s, the host is the window, and the delegation root is
//! `document.body`.

mod element;
mod mount;
mod window;

pub use mount::*;
pub use window::*;
