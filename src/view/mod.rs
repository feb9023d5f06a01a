//! Component-scoped view state shared by the terminal viewer.
//!
//! - [`Disclosure`]: show-more/show-less over older experience entries
//! - [`CiteModal`]: citation dialog with clipboard export and timed feedback

mod cite;
mod disclosure;

pub use cite::{CiteModal, CloseReason, CopyFeedback};
pub use disclosure::Disclosure;
