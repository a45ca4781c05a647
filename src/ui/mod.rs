//! Presentation layer: view models and the text renderer.
//!
//! The application layer computes [`viewmodel`] values; [`render`] projects
//! them to text for the preview binary. A real page embedding the core would
//! replace `render` with its own templating while consuming the same view
//! models.

pub mod render;
pub mod viewmodel;

pub use render::render_text;
pub use viewmodel::{CardViewModel, PortfolioViewModel};
