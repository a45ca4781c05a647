//! Mode and phase state types for the application.
//!
//! This module defines the small state machine enums that control the filter
//! panel and the two overlay surfaces. They determine which draft edits are
//! accepted, which view elements render, and which close transitions are in
//! flight.

/// Open/closed state of the filter panel.
///
/// The draft selection is only meaningful while the panel is open; opening
/// the panel resets the draft to the active selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    /// Panel hidden; draft edits are ignored.
    Closed,

    /// Panel visible; draft edits accumulate until applied or discarded.
    Open,
}

/// Names the two independent overlay surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Informational dialog (colophon-style static content).
    Info,

    /// Document viewer showing a loaded URL and title.
    DocumentViewer,
}

/// Lifecycle phase of one overlay.
///
/// `Closing` keeps the surface painted while its exit animation runs; the
/// host reports the elapsed transition via an `OverlayDetach` event, which
/// moves the phase back to `Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    /// Fully detached; not rendered, not interactive.
    #[default]
    Hidden,

    /// Shown and interactive.
    Visible,

    /// Exit transition in flight; rendered but no longer interactive.
    Closing,
}
