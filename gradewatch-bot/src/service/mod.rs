//! Service layer
//!
//! Trait seams between the poll loop and the outside world: one for the
//! status fetch, one for the outbound notification. Production wires them
//! to the typed HTTP clients; tests substitute in-memory fakes.

mod notify;
mod source;

// Re-export traits
pub use notify::Notifier;
pub use source::StatusSource;

// Re-export implementations
pub use notify::BestEffortNotifier;
