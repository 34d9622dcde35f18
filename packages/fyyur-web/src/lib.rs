//! Fyyur - page interaction handlers
//!
//! Delegated click handlers for the server-rendered venue and artist pages.
//! Three controls are wired against the document body:
//!
//! - `#edit-venue` navigates to `/venues/{id}/edit`
//! - `#edit-artist` navigates to `/artists/{id}/edit`
//! - `.venue-btn-delete` confirms, sends `DELETE /venues/{id}`, then
//!   returns to `/` on success
//!
//! The decision layer ([`page`]) and the effect layer ([`runtime`]) are
//! host-independent, so the same code runs in the browser (`web` feature)
//! and natively against [`dom::MemoryElement`] trees.
//!
//! ## Building
//!
//! Browser bundle:
//! ```bash
//! wasm-pack build packages/fyyur-web --target web --features web
//! ```

pub mod api;
pub mod config;
pub mod dom;
pub mod page;
pub mod routes;
pub mod runtime;
pub mod telemetry;

#[cfg(feature = "web")]
pub mod browser;

pub use api::{DeleteOutcome, VenueApi, VenueClient};
pub use config::Config;
pub use page::{bind_page_handlers, PageCommand, VenueTarget};
pub use routes::Route;
pub use runtime::{CommandOutcome, PageHost, PageRuntime, PendingDelete, Step};
