use crate::error::{Result, VitaeError};
use crate::markup::Markup;
use serde::{Deserialize, Serialize};

use super::records::{ExperienceEntry, Grant, MediaItem, PublicationRecord, SkillGroup};
use super::types::LinkKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub kind: LinkKind,
    pub url: String,
}

impl ProfileLink {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    /// Phone number as displayed.
    pub phone: String,
    /// Phone number as dialled, used for the `tel:` link.
    pub phone_dial: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub links: Vec<ProfileLink>,
}

impl Contact {
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone_dial)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<Markup>,
    pub contact: Contact,
}

/// Every content table of the page, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education_note: Option<Markup>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub research: Vec<ExperienceEntry>,
    #[serde(default)]
    pub grants: Vec<Grant>,
    #[serde(default)]
    pub publications: Vec<PublicationRecord>,
    #[serde(default)]
    pub presentations: Vec<Markup>,
    #[serde(default)]
    pub services: Vec<Markup>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
    #[serde(default)]
    pub affiliations: Option<Markup>,
    #[serde(default)]
    pub certificates: Vec<Markup>,
}

impl Portfolio {
    /// Look up a publication by its 1-based position in declaration order.
    pub fn publication(&self, number: usize) -> Result<&PublicationRecord> {
        number
            .checked_sub(1)
            .and_then(|idx| self.publications.get(idx))
            .ok_or_else(|| {
                VitaeError::NotFound(format!(
                    "publication #{} (there are {})",
                    number,
                    self.publications.len()
                ))
            })
    }
}
