//! Scheduler layer for the bot
//!
//! This layer drives the timed fetch → validate → decide → notify cycle
//! and owns the process-lifetime dedup state.

pub mod poller;

pub use poller::StatusPoller;
