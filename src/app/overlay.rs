//! Overlay controllers for the informational dialog and document viewer.
//!
//! Each overlay is an independent two-state machine with a timed closing
//! transition: `Hidden → Visible → Closing → Hidden`. Beginning a close emits
//! an [`Action::ScheduleOverlayDetach`] so the host can let the exit
//! animation finish; the host answers with an `OverlayDetach` event that
//! completes the transition. Mutual exclusion between the two overlays is
//! not enforced.
//!
//! Closing the viewer clears its loaded URL immediately, so a backgrounded
//! viewer never keeps fetching or rendering its document.

use super::actions::Action;
use super::modes::{Overlay, OverlayPhase};

/// Exit transition duration before an overlay detaches from interaction.
pub const OVERLAY_DETACH_DELAY_MS: u64 = 250;

/// Document viewer overlay state.
///
/// `url` is empty whenever the viewer is not showing a document; this is the
/// load-bearing part of the close contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerState {
    /// Lifecycle phase of the viewer surface.
    pub phase: OverlayPhase,
    /// Currently loaded document URL, empty when unloaded.
    pub url: String,
    /// Title shown above the document.
    pub title: String,
}

/// State for both overlay surfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayController {
    /// Informational dialog phase (no payload).
    pub info: OverlayPhase,
    /// Document viewer phase plus loaded document.
    pub viewer: ViewerState,
}

impl OverlayController {
    /// Opens the informational dialog.
    pub fn open_info(&mut self) {
        self.info = OverlayPhase::Visible;
    }

    /// Opens the document viewer with the given document and title.
    pub fn open_viewer(&mut self, url: String, title: String) {
        tracing::debug!(url = %url, title = %title, "opening document viewer");
        self.viewer.url = url;
        self.viewer.title = title;
        self.viewer.phase = OverlayPhase::Visible;
    }

    /// Begins closing an overlay, returning the detach timer to schedule.
    ///
    /// No-op (returns `None`) unless the overlay is currently visible. The
    /// viewer's URL is cleared here, not when the timer fires, so the
    /// document unloads even while the exit animation runs.
    pub fn begin_close(&mut self, overlay: Overlay) -> Option<Action> {
        let phase = self.phase_mut(overlay);
        if *phase != OverlayPhase::Visible {
            return None;
        }
        *phase = OverlayPhase::Closing;

        if overlay == Overlay::DocumentViewer {
            self.viewer.url.clear();
        }

        Some(Action::ScheduleOverlayDetach {
            overlay,
            delay_ms: OVERLAY_DETACH_DELAY_MS,
        })
    }

    /// Completes a close transition after the host's detach timer fires.
    ///
    /// Ignores stale timers for overlays that were reopened in the meantime.
    pub fn finish_close(&mut self, overlay: Overlay) {
        let phase = self.phase_mut(overlay);
        if *phase == OverlayPhase::Closing {
            *phase = OverlayPhase::Hidden;
        }
    }

    /// Begins closing every visible overlay (escape key behavior).
    pub fn close_all(&mut self) -> Vec<Action> {
        [Overlay::Info, Overlay::DocumentViewer]
            .into_iter()
            .filter_map(|overlay| self.begin_close(overlay))
            .collect()
    }

    /// Current phase of the given overlay.
    #[must_use]
    pub fn phase(&self, overlay: Overlay) -> OverlayPhase {
        match overlay {
            Overlay::Info => self.info,
            Overlay::DocumentViewer => self.viewer.phase,
        }
    }

    fn phase_mut(&mut self, overlay: Overlay) -> &mut OverlayPhase {
        match overlay {
            Overlay::Info => &mut self.info,
            Overlay::DocumentViewer => &mut self.viewer.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_the_viewer_unloads_the_document() {
        let mut overlays = OverlayController::default();
        overlays.open_viewer("assets/pdfs/a1.pdf".to_string(), "A Story".to_string());
        assert_eq!(overlays.viewer.url, "assets/pdfs/a1.pdf");

        let action = overlays.begin_close(Overlay::DocumentViewer).unwrap();
        assert_eq!(
            action,
            Action::ScheduleOverlayDetach {
                overlay: Overlay::DocumentViewer,
                delay_ms: OVERLAY_DETACH_DELAY_MS,
            }
        );
        // Unloaded as soon as closing begins, before the detach timer.
        assert!(overlays.viewer.url.is_empty());
        assert_eq!(overlays.viewer.phase, OverlayPhase::Closing);

        overlays.finish_close(Overlay::DocumentViewer);
        assert_eq!(overlays.viewer.phase, OverlayPhase::Hidden);
    }

    #[test]
    fn closing_a_hidden_overlay_is_a_no_op() {
        let mut overlays = OverlayController::default();
        assert!(overlays.begin_close(Overlay::Info).is_none());
        assert_eq!(overlays.info, OverlayPhase::Hidden);
    }

    #[test]
    fn close_all_targets_only_visible_overlays() {
        let mut overlays = OverlayController::default();
        overlays.open_info();
        let actions = overlays.close_all();
        assert_eq!(actions.len(), 1);
        assert_eq!(overlays.info, OverlayPhase::Closing);
        assert_eq!(overlays.viewer.phase, OverlayPhase::Hidden);
    }

    #[test]
    fn stale_detach_timer_does_not_hide_a_reopened_viewer() {
        let mut overlays = OverlayController::default();
        overlays.open_viewer("a".to_string(), "A".to_string());
        overlays.begin_close(Overlay::DocumentViewer);
        overlays.open_viewer("b".to_string(), "B".to_string());
        overlays.finish_close(Overlay::DocumentViewer);
        assert_eq!(overlays.viewer.phase, OverlayPhase::Visible);
        assert_eq!(overlays.viewer.url, "b");
    }
}
