//! UI components for the AutoCaption application.
//!
//! # Layout Components
//! - [`Header`] - Logo, account badge and logout
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Workflow Components
//! - [`UploadSection`] - Video picker with drag & drop and file info
//! - [`StyleSection`] - Caption style cards (multi-select)
//! - [`LanguageSection`] - Caption language dropdown
//! - [`ActionSection`] - Generate button
//! - [`ProgressSection`] - Upload/process progress bar
//! - [`ResultsSection`] - Per-style previews and downloads
//! - [`ErrorSection`] - Failure message and retry
//!
//! # Pages
//! - [`LoginPage`], [`RegisterPage`] - Account forms

mod header;
mod hero;
mod footer;
mod upload;
mod style;
mod language;
mod action;
mod progress;
mod results;
mod error;
mod auth;

pub use header::*;
pub use hero::*;
pub use footer::*;
pub use upload::*;
pub use style::*;
pub use language::*;
pub use action::*;
pub use progress::*;
pub use results::*;
pub use error::*;
pub use auth::*;
