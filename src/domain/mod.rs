//! Core domain types for the portfolio core.
//!
//! This module groups the externally supplied data model ([`Article`] and the
//! validated [`ArticleStore`]), the curation lookup types, and the crate-wide
//! error type. Everything here is independent of the application state
//! machine and carries no UI concerns.

pub mod article;
pub mod curation;
pub mod error;

pub use article::{Article, ArticleStore};
pub use curation::{CurationContext, CurationGroup, CurationTable};
pub use error::{PressdeckError, Result};
