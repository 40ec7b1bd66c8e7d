//! Network layer - HTTP request execution in the Tokio runtime
//!
//! The Network actor receives fetch commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
