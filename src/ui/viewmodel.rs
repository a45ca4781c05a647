//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering and contain pre-resolved display
//! information: asset URLs, formatted dates, and control visibility flags.
//! They carry no business logic.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by whatever presentation binding embeds the core (a templated page, or
//! the plain-text renderer used by the preview binary). Recomputing the view
//! model after every handled event keeps the displayed set, the controls,
//! and the overlays consistent by construction.

use crate::app::modes::OverlayPhase;

/// Complete view model for one paint of the portfolio.
#[derive(Debug, Clone)]
pub struct PortfolioViewModel {
    /// Heading above the result grid ("All Work" and friends).
    pub heading: String,

    /// Cards for the currently visible slice of the filtered list.
    pub cards: Vec<CardViewModel>,

    /// Empty-state indicator, replacing the grid when no article matches.
    pub empty_state: Option<EmptyState>,

    /// Pagination control visibility.
    pub pagination: PaginationViewModel,

    /// Filter panel contents and state.
    pub filter_panel: FilterPanelViewModel,

    /// Whether the active-filters banner (with its clear control) shows.
    pub active_filters_banner: bool,

    /// Informational dialog overlay state.
    pub info_overlay: OverlayViewModel,

    /// Document viewer overlay state.
    pub viewer_overlay: ViewerViewModel,
}

/// Display information for a single article card.
///
/// All asset resolution and date formatting happens before this struct is
/// built; the renderer only copies fields into place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardViewModel {
    /// Stable article id (useful as a render key).
    pub id: String,

    /// Article title.
    pub title: String,

    /// Short summary paragraph.
    pub summary: String,

    /// Publication name.
    pub publication: String,

    /// Publication date formatted as "Month Year".
    pub display_date: String,

    /// Resolved card image URL (override or derived from the id).
    pub image_url: String,

    /// Placeholder image substituted by the host when `image_url` fails.
    pub fallback_image_url: String,

    /// Resolved document URL the read-more action opens in the viewer.
    pub document_url: String,
}

/// Empty state message display information.
///
/// Shown instead of the grid when the filtered list is empty.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Pagination control visibility.
///
/// The whole control row hides when one page covers the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationViewModel {
    /// Whether the control row renders at all.
    pub visible: bool,

    /// Whether "show more" renders (more results remain).
    pub show_more: bool,

    /// Whether "show less" renders (more than one page shown).
    pub show_less: bool,
}

/// One selectable filter button in the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    /// Button label (topic or genre).
    pub label: String,

    /// Whether the draft selection currently includes this label.
    pub selected: bool,
}

/// Filter panel contents and state.
#[derive(Debug, Clone)]
pub struct FilterPanelViewModel {
    /// Whether the panel is open.
    pub open: bool,

    /// Topic buttons: the composite security topic merged into the store's
    /// tag vocabulary, the whole row sorted. Selection reflects the draft.
    pub topics: Vec<FilterButton>,

    /// Genre buttons from the store's sorted genre vocabulary.
    pub genres: Vec<FilterButton>,

    /// Whether the apply button renders (draft edited since panel open).
    pub apply_visible: bool,
}

/// Informational dialog overlay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayViewModel {
    /// Current lifecycle phase.
    pub phase: OverlayPhase,
}

/// Document viewer overlay state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerViewModel {
    /// Current lifecycle phase.
    pub phase: OverlayPhase,

    /// Loaded document URL, empty when unloaded.
    pub url: String,

    /// Title above the document.
    pub title: String,
}
