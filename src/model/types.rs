use crate::error::{Result, VitaeError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Publication grouping key. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pending,
    Journal,
    Conference,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Pending, Category::Journal, Category::Conference];

    /// Subsection heading used by every renderer.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Pending => "Pending",
            Category::Journal => "Journal Articles",
            Category::Conference => "Conference Proceedings",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Pending => write!(f, "pending"),
            Category::Journal => write!(f, "journal"),
            Category::Conference => write!(f, "conference"),
        }
    }
}

impl FromStr for Category {
    type Err = VitaeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pending" | "in-review" | "under-review" => Ok(Category::Pending),
            "journal" | "article" => Ok(Category::Journal),
            "conference" | "proceedings" => Ok(Category::Conference),
            _ => Err(VitaeError::Content(format!("Invalid category: {}", s))),
        }
    }
}

/// External profile kinds shown in the contact section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKind {
    #[serde(rename = "linkedin")]
    LinkedIn,
    Facebook,
    GoogleScholar,
    Orcid,
    HuggingFace,
}

impl LinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::LinkedIn => "LinkedIn",
            LinkKind::Facebook => "Facebook",
            LinkKind::GoogleScholar => "Google Scholar",
            LinkKind::Orcid => "ORCID",
            LinkKind::HuggingFace => "Hugging Face",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
