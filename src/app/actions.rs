//! Actions representing side effects to be executed by the host.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input.
//! Actions bridge pure state transformations and effectful operations the
//! core cannot perform itself: rewriting the address bar, scrolling, timers,
//! and the clipboard.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The host executes
//! them in sequence inside the same callback.

use super::modes::Overlay;

/// Commands representing side effects to be executed by the host.
///
/// Actions are produced by the event handler and executed by the embedding
/// layer. They represent the boundary between pure state transformations and
/// the environment (address bar, viewport, timers, clipboard).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replaces the current history entry's URL with the given query string.
    ///
    /// The query carries no leading `?`; an empty string means the bare path
    /// (all filters at their defaults). Replacement, not push: filter changes
    /// do not grow the back-button history.
    ReplaceUrl {
        /// Serialized query string, empty at defaults.
        query: String,
    },

    /// Scrolls the results region back into view.
    ///
    /// Emitted by show-less so the user is not left staring at the bottom of
    /// a collapsed list.
    ScrollToResults,

    /// Asks the host to report back after an overlay's exit transition.
    ///
    /// The host should feed an `OverlayDetach` event for the same overlay
    /// once the delay elapses, letting the closing animation finish before
    /// the surface detaches from interaction.
    ScheduleOverlayDetach {
        /// Overlay whose close transition is running.
        overlay: Overlay,
        /// Transition duration in milliseconds.
        delay_ms: u64,
    },

    /// Copies the given text to the system clipboard.
    ///
    /// `text` carries the canonical query string under the same contract as
    /// [`Action::ReplaceUrl`]: the core does not know the page location, so
    /// the host prepends its path (and a `?` when the query is non-empty)
    /// to form the shareable link. Clipboard availability is
    /// environment-dependent; the host reports the outcome via a
    /// `ClipboardResult` event, and failures are logged rather than
    /// surfaced.
    CopyToClipboard {
        /// Serialized query string for the share link, empty at defaults.
        text: String,
    },
}
