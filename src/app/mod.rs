//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! host shim (a page binding or the preview binary) and the domain layer. It
//! implements the event-driven architecture that keeps the displayed article
//! set, the URL, and the filter panel consistent under interaction.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Interaction → Event → Event Handler → State Mutations → Actions → Host
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effect commands emitted by the event handler
//! - [`filter`]: pure filter/sort engine and selection types
//! - [`handler`]: event processing logic and state transition coordinator
//! - [`modes`]: panel and overlay state machine types
//! - [`overlay`]: overlay controllers with timed close transitions
//! - [`state`]: central state container and view model computation

pub mod actions;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod overlay;
pub mod state;

pub use actions::Action;
pub use filter::{FilterSelection, Heading};
pub use handler::{handle_event, Event};
pub use modes::{Overlay, OverlayPhase, PanelMode};
pub use overlay::OverlayController;
pub use state::AppState;
