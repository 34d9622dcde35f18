//! Element model and delegated event registration

mod delegate;
mod element;
mod memory;
mod selector;

pub use delegate::*;
pub use element::*;
pub use memory::*;
pub use selector::*;

/// DOM event type for mouse clicks
pub const CLICK: &str = "click";
