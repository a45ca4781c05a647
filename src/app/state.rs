//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! portfolio core, along with methods for filter application, pagination,
//! panel draft editing, and UI view model generation. It is the single
//! source of truth for all transient UI state; nothing here touches a host
//! environment.
//!
//! # State Components
//!
//! - **Store**: validated, immutable article collection and curation table
//! - **Active selection**: committed topic/genre filters driving the result
//!   list and the URL
//! - **Draft selection**: panel-local staging copy, committed on apply and
//!   discarded on close
//! - **Filtered list**: derived result of the filter engine
//! - **Visible count**: pagination window over the filtered list
//! - **Overlays**: phase machines for the info dialog and document viewer
//!
//! # Invariants
//!
//! `visible_count <= filtered.len()` holds after every mutation, and the
//! draft selection is only read while the panel is open (it is reset to the
//! active selection on every open).

use crate::domain::{Article, ArticleStore, CurationContext};
use crate::ui::viewmodel::{
    CardViewModel, EmptyState, FilterButton, FilterPanelViewModel, OverlayViewModel,
    PaginationViewModel, PortfolioViewModel, ViewerViewModel,
};
use crate::Config;

use super::filter::{self, FilterSelection, Heading, COMPOSITE_SECURITY_TOPIC};
use super::modes::PanelMode;
use super::overlay::OverlayController;

/// Central application state container.
///
/// Holds all transient UI state. Mutated by the event handler in response to
/// user input; view models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable article collection and curation table.
    pub store: ArticleStore,

    /// Committed filter selection, mirrored into the URL.
    pub active: FilterSelection,

    /// Panel-local draft selection. Only meaningful while the panel is open.
    pub draft: FilterSelection,

    /// Result of the last filter pass, in display order.
    pub filtered: Vec<Article>,

    /// Number of filtered results currently rendered.
    ///
    /// Reset to one page by `apply_filters()`, grown by `show_more()`, and
    /// always clamped to the filtered length.
    pub visible_count: usize,

    /// Heading for the branch the last filter pass took.
    pub heading: Heading,

    /// Filter panel open/closed state.
    pub panel: PanelMode,

    /// Whether the draft changed since the panel opened (shows the apply
    /// button).
    pub panel_dirty: bool,

    /// Curation context seeded once from the initial URL, if any.
    pub curation: Option<CurationContext>,

    /// Overlay phase machines (info dialog and document viewer).
    pub overlays: OverlayController,

    /// Host configuration (asset root, page size, placeholder image).
    pub config: Config,
}

impl AppState {
    /// Creates application state over a store and runs the first filter pass.
    #[must_use]
    pub fn new(config: Config, store: ArticleStore) -> Self {
        let mut state = Self {
            store,
            active: FilterSelection::default(),
            draft: FilterSelection::default(),
            filtered: vec![],
            visible_count: 0,
            heading: Heading::AllWork,
            panel: PanelMode::Closed,
            panel_dirty: false,
            curation: None,
            overlays: OverlayController::default(),
            config,
        };
        state.apply_filters();
        state
    }

    /// Recomputes the filtered list from the active selection.
    ///
    /// Wraps the pure engine in [`filter`] and applies its two state side
    /// effects: the heading is stored and `visible_count` resets to one page
    /// (clamped to the filtered length).
    pub fn apply_filters(&mut self) {
        let (filtered, heading) = filter::filter_and_sort(
            self.store.articles(),
            &self.active,
            self.curation.as_ref(),
        );
        self.filtered = filtered;
        self.heading = heading;
        self.visible_count = self.config.page_size.min(self.filtered.len());
    }

    /// Grows the visible window by one page, clamped to the filtered length.
    pub fn show_more(&mut self) {
        self.visible_count = (self.visible_count + self.config.page_size).min(self.filtered.len());
    }

    /// Collapses the visible window back to one page.
    pub fn show_less(&mut self) {
        self.visible_count = self.config.page_size.min(self.filtered.len());
    }

    /// Opens the filter panel, resetting the draft to the active selection.
    pub fn open_panel(&mut self) {
        self.draft = self.active.clone();
        self.panel_dirty = false;
        self.panel = PanelMode::Open;
    }

    /// Closes the filter panel. An uncommitted draft is simply abandoned;
    /// the next open overwrites it.
    pub fn close_panel(&mut self) {
        self.panel = PanelMode::Closed;
    }

    /// Commits the draft selection and reruns the filter pass.
    pub fn commit_draft(&mut self) {
        self.active = self.draft.clone();
        self.apply_filters();
    }

    /// Whether any active filter is set (drives the banner and URL).
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.active.is_default()
    }

    /// Serializes the active selection to its canonical query string.
    #[must_use]
    pub fn canonical_query(&self) -> String {
        crate::infrastructure::query::serialize(&self.active)
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Projects the first `visible_count` filtered articles into cards,
    /// resolves assets and dates, and derives every control visibility flag.
    /// Pure with respect to state: repeated calls yield equal view models.
    #[must_use]
    pub fn compute_viewmodel(&self) -> PortfolioViewModel {
        let cards: Vec<CardViewModel> = self.filtered[..self.visible_count]
            .iter()
            .map(|article| self.compute_card(article))
            .collect();

        let empty_state = self.filtered.is_empty().then(|| EmptyState {
            message: "No matching work found".to_string(),
            subtitle: "Adjust or clear the active filters to see more".to_string(),
        });

        let pagination_visible =
            !self.filtered.is_empty() && self.filtered.len() > self.config.page_size;
        let pagination = PaginationViewModel {
            visible: pagination_visible,
            show_more: pagination_visible && self.visible_count < self.filtered.len(),
            show_less: pagination_visible && self.visible_count > self.config.page_size,
        };

        PortfolioViewModel {
            heading: self.heading.label().to_string(),
            cards,
            empty_state,
            pagination,
            filter_panel: self.compute_filter_panel(),
            active_filters_banner: self.has_active_filters(),
            info_overlay: OverlayViewModel {
                phase: self.overlays.info,
            },
            viewer_overlay: ViewerViewModel {
                phase: self.overlays.viewer.phase,
                url: self.overlays.viewer.url.clone(),
                title: self.overlays.viewer.title.clone(),
            },
        }
    }

    /// Projects one article into its card view model.
    fn compute_card(&self, article: &Article) -> CardViewModel {
        CardViewModel {
            id: article.id.clone(),
            title: article.title.clone(),
            summary: article.summary.clone(),
            publication: article.publication.clone(),
            display_date: article.display_date(),
            image_url: article.image_asset(&self.config.asset_root),
            fallback_image_url: self.config.placeholder_image_url.clone(),
            document_url: article.document_asset(&self.config.asset_root),
        }
    }

    /// Builds the filter panel view: button vocabularies from the store with
    /// the composite security topic merged in, selection from the draft.
    fn compute_filter_panel(&self) -> FilterPanelViewModel {
        let mut topic_labels = vec![COMPOSITE_SECURITY_TOPIC.to_string()];
        topic_labels.extend(self.store.topics());
        // One sorted row of buttons; the composite sits alphabetically
        // among the plain tags.
        topic_labels.sort();
        topic_labels.dedup();

        let topics = topic_labels
            .into_iter()
            .map(|label| {
                let selected = self.draft.topics.iter().any(|t| t == &label);
                FilterButton { label, selected }
            })
            .collect();

        let genres = self
            .store
            .genres()
            .into_iter()
            .map(|label| {
                let selected = self.draft.genre.as_deref() == Some(label.as_str());
                FilterButton { label, selected }
            })
            .collect();

        let open = self.panel == PanelMode::Open;
        FilterPanelViewModel {
            open,
            topics,
            genres,
            apply_visible: open && self.panel_dirty,
        }
    }
}
