//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! translating it into state changes and action sequences. It is the primary
//! control flow coordinator for the portfolio core.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Interactions arrive from the host as [`Event`] values
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Panel**: `OpenPanel`, `ClosePanel`, `TogglePanel`
//! - **Draft edits**: `ToggleDraftTopic`, `ToggleDraftGenre`, the clear
//!   variants
//! - **Commits**: `ApplyDraft`, `ClearActiveFilters`
//! - **Pagination**: `ShowMore`, `ShowLess`
//! - **Overlays**: `OpenDocument`, `OpenInfo`, `CloseOverlay`,
//!   `BackdropClick`, `Escape`, `OverlayDetach`
//! - **Environment**: `CopyShareLink`, `ClipboardResult`

use crate::domain::error::Result;

use super::actions::Action;
use super::modes::{Overlay, PanelMode};
use super::state::AppState;

/// Interactions and host callbacks driving the state machine.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them synchronously, so the
/// displayed set, the URL, and the panel UI stay consistent within one
/// callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Opens the filter panel (resets the draft to the active selection).
    OpenPanel,
    /// Closes the filter panel, discarding any uncommitted draft.
    ClosePanel,
    /// Toggles the filter panel between open and closed.
    TogglePanel,

    /// Toggles a topic in the draft selection.
    ToggleDraftTopic(String),
    /// Selects a genre in the draft, or clears it when reselected.
    ToggleDraftGenre(String),
    /// Clears the draft topic selection.
    ClearDraftTopics,
    /// Clears the draft genre selection.
    ClearDraftGenre,
    /// Clears the whole draft selection.
    ClearDraft,

    /// Commits the draft, reruns the filter pass, and closes the panel.
    ApplyDraft,
    /// Resets the active (and draft) selection to defaults.
    ClearActiveFilters,

    /// Extends the visible window by one page.
    ShowMore,
    /// Collapses the visible window back to one page.
    ShowLess,

    /// Opens the document viewer with a resolved document URL and title.
    OpenDocument {
        /// Document to load.
        url: String,
        /// Title shown above the viewer.
        title: String,
    },
    /// Opens the informational dialog.
    OpenInfo,
    /// Begins closing a specific overlay (its close button).
    CloseOverlay(Overlay),
    /// Backdrop click on an overlay; same close semantics as its button.
    BackdropClick(Overlay),
    /// Escape key: begins closing whichever overlays are visible.
    Escape,
    /// Host callback: an overlay's exit transition elapsed.
    OverlayDetach(Overlay),

    /// Requests copying the canonical query string to the clipboard (the
    /// host completes it into a share link; see `Action::CopyToClipboard`).
    CopyShareLink,
    /// Host callback reporting the clipboard outcome. Failures are logged
    /// and otherwise ignored.
    ClipboardResult {
        /// Whether the copy succeeded.
        ok: bool,
    },
}

/// Processes an event, mutates application state, and returns actions.
///
/// # Returns
///
/// `(render_needed, actions)`: the flag tells the host whether to recompute
/// and repaint the view model; the actions are side effects to execute in
/// order within the same callback.
///
/// # Errors
///
/// Currently infallible in practice; the `Result` keeps the seam open for
/// state mutations that can fail.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::OpenPanel => {
            state.open_panel();
            Ok((true, vec![]))
        }
        Event::ClosePanel => {
            if state.panel == PanelMode::Closed {
                return Ok((false, vec![]));
            }
            state.close_panel();
            Ok((true, vec![]))
        }
        Event::TogglePanel => {
            match state.panel {
                PanelMode::Closed => state.open_panel(),
                PanelMode::Open => state.close_panel(),
            }
            Ok((true, vec![]))
        }

        Event::ToggleDraftTopic(topic) => Ok(edit_draft(state, |draft| draft.toggle_topic(topic))),
        Event::ToggleDraftGenre(genre) => Ok(edit_draft(state, |draft| draft.toggle_genre(genre))),
        Event::ClearDraftTopics => Ok(edit_draft(state, super::filter::FilterSelection::clear_topics)),
        Event::ClearDraftGenre => Ok(edit_draft(state, super::filter::FilterSelection::clear_genre)),
        Event::ClearDraft => Ok(edit_draft(state, super::filter::FilterSelection::clear)),

        Event::ApplyDraft => {
            if state.panel == PanelMode::Closed {
                return Ok((false, vec![]));
            }
            state.commit_draft();
            state.close_panel();
            tracing::debug!(
                topics = state.active.topics.len(),
                genre = ?state.active.genre,
                results = state.filtered.len(),
                "draft applied"
            );
            Ok((
                true,
                vec![Action::ReplaceUrl {
                    query: state.canonical_query(),
                }],
            ))
        }
        Event::ClearActiveFilters => {
            state.active.clear();
            state.draft.clear();
            state.apply_filters();
            Ok((
                true,
                vec![Action::ReplaceUrl {
                    query: state.canonical_query(),
                }],
            ))
        }

        Event::ShowMore => {
            state.show_more();
            Ok((true, vec![]))
        }
        Event::ShowLess => {
            state.show_less();
            Ok((true, vec![Action::ScrollToResults]))
        }

        Event::OpenDocument { url, title } => {
            state.overlays.open_viewer(url.clone(), title.clone());
            Ok((true, vec![]))
        }
        Event::OpenInfo => {
            state.overlays.open_info();
            Ok((true, vec![]))
        }
        Event::CloseOverlay(overlay) | Event::BackdropClick(overlay) => {
            state.overlays.begin_close(*overlay).map_or_else(
                || Ok((false, vec![])),
                |action| Ok((true, vec![action])),
            )
        }
        Event::Escape => {
            let actions = state.overlays.close_all();
            Ok((!actions.is_empty(), actions))
        }
        Event::OverlayDetach(overlay) => {
            state.overlays.finish_close(*overlay);
            Ok((true, vec![]))
        }

        Event::CopyShareLink => Ok((
            false,
            vec![Action::CopyToClipboard {
                text: state.canonical_query(),
            }],
        )),
        Event::ClipboardResult { ok } => {
            if !ok {
                tracing::debug!("clipboard copy failed, ignoring");
            }
            Ok((false, vec![]))
        }
    }
}

/// Applies a draft edit while the panel is open; no-op otherwise.
///
/// Draft state is only ever read while the panel is open, so edits arriving
/// with the panel closed (stray host events) are dropped rather than staged.
fn edit_draft(
    state: &mut AppState,
    edit: impl FnOnce(&mut super::filter::FilterSelection),
) -> (bool, Vec<Action>) {
    if state.panel == PanelMode::Closed {
        tracing::debug!("draft edit ignored while panel closed");
        return (false, vec![]);
    }
    edit(&mut state.draft);
    state.panel_dirty = true;
    (true, vec![])
}
