//! Observability setup for hosts embedding the core.
//!
//! The library itself only emits `tracing` spans and events; this module
//! wires up a subscriber for processes that want to see them.

pub mod init;

pub use init::init_tracing;
