//! Pressdeck: the filtering and presentation core of a static press portfolio.
//!
//! Pressdeck keeps a portfolio page's displayed article set, address-bar
//! query string, and filter-panel UI consistent under user interaction. It
//! provides:
//! - Topic (AND-combined) and genre filtering over an immutable article store
//! - Default-view ordering with featured and curated boosting
//! - Page-sized result windowing with show-more / show-less
//! - Immutable card view models with resolved assets and formatted dates
//! - A bidirectional URL query codec and one-shot curation seeding
//! - Overlay state machines for an info dialog and a document viewer
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host Shim (page binding, or main.rs preview CLI)   │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling         - Filter engine           │
//! │  - Action dispatching     - View model computation  │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌────────────────┐   ┌──────────────────┐
//! │ UI Layer      │   │ Domain Layer   │   │ Infrastructure   │
//! │ (ui/)         │   │ (domain/)      │   │ (infrastructure/)│
//! │ - View models │   │ - Articles     │   │ - URL query codec│
//! │ - Text render │   │ - Curation     │   │                  │
//! └───────────────┘   └────────────────┘   └──────────────────┘
//! ```
//!
//! All state transitions occur synchronously inside host callbacks; the core
//! performs no I/O and spawns no threads. Side effects the core cannot
//! perform itself (URL replacement, scrolling, timers, clipboard) come back
//! to the host as [`Action`] values.
//!
//! # Example
//!
//! ```rust
//! use pressdeck::{handle_event, initialize, ArticleStore, Config, Event};
//!
//! let store = ArticleStore::default();
//! let mut state = initialize(Config::default(), store, "topics=Fraud&genre=Feature");
//!
//! let (render_needed, actions) = handle_event(&mut state, &Event::ShowMore)?;
//! if render_needed {
//!     let viewmodel = state.compute_viewmodel();
//!     // hand the view model to the presentation binding, execute actions
//! }
//! # let _ = actions;
//! # Ok::<(), pressdeck::PressdeckError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, FilterSelection, Heading, Overlay, OverlayPhase, PanelMode};
pub use domain::{
    Article, ArticleStore, CurationContext, CurationGroup, CurationTable, PressdeckError, Result,
};
pub use ui::PortfolioViewModel;

/// Host configuration for the portfolio core.
///
/// Values are supplied by the embedding layer; every field has a sensible
/// default matching the reference deployment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root under which default assets live (`<root>/images`, `<root>/pdfs`).
    pub asset_root: String,

    /// Number of results per pagination page.
    pub page_size: usize,

    /// Image substituted by the host when a card image fails to load.
    pub placeholder_image_url: String,

    /// Tracing level for [`observability::init_tracing`]. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_root: "assets".to_string(),
            page_size: 6,
            placeholder_image_url:
                "https://placehold.co/600x400/cccccc/FFFFFF?text=Image+Not+Found".to_string(),
            trace_level: None,
        }
    }
}

/// Initializes application state from a store and the initial query string.
///
/// Parses the query permissively, consumes the one-shot `curate` parameter
/// to seed the curation context via the store's keyword table, sets the
/// active and draft selections to the parsed values, and runs the first
/// filter pass.
///
/// The `curate` parameter is never written back; subsequent
/// [`Action::ReplaceUrl`] emissions carry only `topics` and `genre`.
#[must_use]
pub fn initialize(config: Config, store: ArticleStore, initial_query: &str) -> AppState {
    let parsed = infrastructure::query::parse(initial_query);
    tracing::debug!(
        topics = parsed.selection.topics.len(),
        genre = ?parsed.selection.genre,
        curate = ?parsed.curate,
        "initializing from query"
    );

    let curation = parsed
        .curate
        .as_deref()
        .and_then(|entity| store.curation().resolve(entity));
    if let Some(context) = &curation {
        tracing::debug!(entity = %context.entity, curated = context.curated_ids.len(), "curation context seeded");
    }

    let mut state = AppState::new(config, store);
    state.curation = curation;
    state.active = parsed.selection.clone();
    state.draft = parsed.selection;
    state.apply_filters();
    state
}
