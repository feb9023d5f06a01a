//! Terminal viewer for the portfolio.
//!
//! ## Usage
//!
//! ```bash
//! vitae tui
//! ```
//!
//! ## Keybindings
//!
//! - `Tab/→`, `Shift-Tab/←`: Next/previous section
//! - `1`-`8`: Jump to section
//! - `↑/↓`: Scroll, or select a publication in Publications
//! - `m`: Show more/less experience
//! - `c`/`Enter`: Open the cite dialog for the selected publication
//! - `o`: Open the selected publication's PDF
//! - `y`/`Enter`: Copy the citation (cite dialog)
//! - `Esc`/`q`/`x`: Close the cite dialog; clicking outside it also closes
//! - `?`: Help
//! - `q`: Quit

pub mod app;
mod handlers;
pub mod theme;
mod ui;
mod ui_modals;
mod ui_utils;

pub use app::{App, InputMode, Section, run_tui};
