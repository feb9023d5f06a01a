use crate::error::Result;
use crate::markup::Markup;
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use super::types::Category;

/// One card in the experience, education or research sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    #[serde(rename = "date")]
    pub date_range: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<Markup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
}

impl ExperienceEntry {
    pub fn new(
        role: impl Into<String>,
        company: impl Into<String>,
        date_range: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            company: company.into(),
            date_range: date_range.into(),
            location: None,
            description: None,
            bullets: Vec::new(),
            meta: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_bullets(mut self, bullets: Vec<Markup>) -> Self {
        self.bullets = bullets;
        self
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationRecord {
    pub category: Category,
    pub title: String,
    pub authors: String,
    pub month_year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub citation: Markup,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub pdf_link: Option<String>,
}

impl PublicationRecord {
    pub fn new(
        category: Category,
        title: impl Into<String>,
        authors: impl Into<String>,
        month_year: impl Into<String>,
        citation: Markup,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            authors: authors.into(),
            month_year: month_year.into(),
            venue: None,
            citation,
            pdf_link: None,
        }
    }

    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    pub fn with_pdf_link(mut self, link: impl Into<String>) -> Self {
        let link = link.into();
        self.pdf_link = if link.trim().is_empty() {
            None
        } else {
            Some(link)
        };
        self
    }

    /// The PDF link, if there is one. An absent link disables "View PDF".
    pub fn pdf(&self) -> Option<&str> {
        self.pdf_link.as_deref().filter(|l| !l.trim().is_empty())
    }

    /// Plain-text citation, as it goes to the clipboard.
    pub fn plain_citation(&self) -> String {
        self.citation.to_plain_text()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub title: String,
    pub url: String,
    pub outlet: String,
    /// Domain used for the favicon lookup.
    pub domain: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,
}

impl MediaItem {
    pub fn favicon_url(&self, endpoint: &str) -> Result<Url> {
        let url = Url::parse_with_params(endpoint, &[("domain", self.domain.as_str()), ("sz", "32")])?;
        Ok(url)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grant {
    pub title: String,
    pub body: Markup,
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pdf_link_is_absent() {
        let record: PublicationRecord = toml::from_str(
            r#"
            category = "journal"
            title = "T"
            authors = "A."
            month_year = "2020"
            citation = "A. (2020). <em>T</em>."
            pdf_link = ""
            "#,
        )
        .unwrap();
        assert_eq!(record.pdf_link, None);
        assert_eq!(record.pdf(), None);
    }

    #[test]
    fn test_with_pdf_link_blank_is_none() {
        let record = PublicationRecord::new(
            Category::Conference,
            "T",
            "A.",
            "2020",
            Markup::text("A."),
        )
        .with_pdf_link("   ");
        assert!(record.pdf().is_none());

        let record = record.with_pdf_link("papers/t.pdf");
        assert_eq!(record.pdf(), Some("papers/t.pdf"));
    }

    #[test]
    fn test_plain_citation() {
        let record = PublicationRecord::new(
            Category::Journal,
            "Title",
            "A.",
            "2020",
            Markup::parse("A. (2020). <em>Title</em>."),
        );
        assert_eq!(record.plain_citation(), "A. (2020). Title.");
    }

    #[test]
    fn test_favicon_url() {
        let item = MediaItem {
            title: "Story".to_string(),
            url: "https://www.rappler.com".to_string(),
            outlet: "Rappler".to_string(),
            domain: "rappler.com".to_string(),
            date: "Sep 6, 2023".to_string(),
            credit: None,
        };
        let url = item
            .favicon_url("https://www.google.com/s2/favicons")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.google.com/s2/favicons?domain=rappler.com&sz=32"
        );
    }

    #[test]
    fn test_favicon_url_rejects_bad_endpoint() {
        let item = MediaItem {
            title: "Story".to_string(),
            url: "https://x.org".to_string(),
            outlet: "X".to_string(),
            domain: "x.org".to_string(),
            date: "2024".to_string(),
            credit: None,
        };
        assert!(item.favicon_url("not a url").is_err());
    }
}
