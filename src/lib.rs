//! # Vitae - a personal academic portfolio
//!
//! Vitae renders one person's academic and professional portfolio as a single
//! static HTML page, and lets you browse the same content in the terminal.
//!
//! ## Features
//!
//! - **Publications**: grouped by category, with the owner's name emphasised
//!   in every author list
//! - **Citations**: a cite dialog that copies the plain-text citation to the
//!   clipboard, with transient "Copied!" feedback
//! - **Experience**: the first entry is shown, the rest sit behind a
//!   "Show N more" toggle
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a default .vitae.toml
//! vitae init
//!
//! # Render the page to site.output (dist/index.html)
//! vitae render
//!
//! # Print the citation of the second publication and copy it
//! vitae cite 2 --copy
//!
//! # Browse interactively
//! vitae tui
//! ```
//!
//! ## Modules
//!
//! - [`markup`]: inline rich text (strong, emphasis, links)
//! - [`model`]: content records
//! - [`content`]: the embedded portfolio tables
//! - [`publications`]: grouping and author-name emphasis
//! - [`view`]: disclosure and cite-dialog state machines
//! - [`render`]: the static HTML page
//! - [`tui`]: terminal viewer

/// Command-line interface definitions using clap.
pub mod cli;

/// Clipboard access behind a small trait.
pub mod clipboard;

/// Configuration loading and management.
///
/// Handles `.vitae.toml` files and project discovery.
pub mod config;

/// Embedded portfolio content.
pub mod content;

/// Error types and result aliases.
///
/// Defines `VitaeError` enum and `Result<T>` type alias.
pub mod error;

pub mod logging;

/// Inline rich text used in citations, bullets and paragraphs.
pub mod markup;

/// Data models: publications, experience entries, media items and the profile.
pub mod model;

pub mod publications;

/// Static HTML rendering and atomic file output.
pub mod render;

/// Terminal user interface.
///
/// Interactive TUI built with ratatui for browsing the portfolio.
pub mod tui;

/// View state shared by the page script and the terminal viewer.
pub mod view;
