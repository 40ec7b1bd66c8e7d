//! # Dogdex TUI
//!
//! A single-screen terminal app that fetches the list of dog breeds from the
//! Dog CEO API and renders the breed names in a 3-column grid.
//!
//! ## Behavior
//! - One button, one grid. Pressing the fetch key starts one HTTP GET.
//! - Every trigger starts an independent fetch; overlapping fetches are
//!   neither de-duplicated nor cancelled, and whichever completes last owns
//!   the published list.
//! - Failures are logged and otherwise invisible: the grid keeps its
//!   previous content.
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use error::{FetchError, FetchErrorKind};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::BreedsResponse;
pub use network::NetworkActor;
