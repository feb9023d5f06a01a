//! Data models for the portfolio.
//!
//! This module defines the content records:
//!
//! - [`Portfolio`]: Every content table of the page
//! - [`ExperienceEntry`]: Employment, education and research cards
//! - [`PublicationRecord`]: A publication with its citation and optional PDF
//! - [`Category`]: Publication grouping key (pending, journal, conference)
//! - [`MediaItem`], [`SkillGroup`], [`Grant`]: Smaller display records
//! - [`Profile`], [`Contact`], [`ProfileLink`]: Biographical header and contact details

mod portfolio;
mod records;
mod types;

pub use portfolio::{Contact, Portfolio, Profile, ProfileLink};
pub use records::{ExperienceEntry, Grant, MediaItem, PublicationRecord, SkillGroup};
pub use types::{Category, LinkKind};
