//! Publication grouping and author-name emphasis.

use crate::markup::{Inline, Markup};
use crate::model::{Category, PublicationRecord};
use regex::Regex;

/// One labelled subsection of the publication list.
#[derive(Debug, Clone)]
pub struct PublicationGroup<'a> {
    pub category: Category,
    /// Records with their position in the full list, in declaration order.
    pub records: Vec<(usize, &'a PublicationRecord)>,
}

impl PublicationGroup<'_> {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Split publications into the fixed Pending, Journal, Conference groups.
///
/// Each group is a stable filter of the input: nothing is re-sorted, and an
/// empty category still yields an (empty) group.
pub fn group_by_category(records: &[PublicationRecord]) -> Vec<PublicationGroup<'_>> {
    Category::ALL
        .iter()
        .map(|&category| PublicationGroup {
            category,
            records: records
                .iter()
                .enumerate()
                .filter(|(_, r)| r.category == category)
                .collect(),
        })
        .collect()
}

/// Wrap every literal occurrence of `name` in `authors` in strong emphasis.
///
/// Matching is case-sensitive and non-overlapping; the name is escaped so
/// punctuation such as the periods in initials matches literally.
pub fn emphasize_name(authors: &str, name: &str) -> Markup {
    if name.is_empty() {
        return Markup::text(authors);
    }

    let re = match Regex::new(&regex::escape(name)) {
        Ok(r) => r,
        Err(_) => return Markup::text(authors),
    };

    let mut nodes = Vec::new();
    let mut last = 0;
    for m in re.find_iter(authors) {
        if m.start() > last {
            nodes.push(Inline::Text(authors[last..m.start()].to_string()));
        }
        nodes.push(Inline::Strong(vec![Inline::Text(m.as_str().to_string())]));
        last = m.end();
    }
    if last < authors.len() {
        nodes.push(Inline::Text(authors[last..].to_string()));
    }
    Markup::new(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: Category, title: &str) -> PublicationRecord {
        PublicationRecord::new(
            category,
            title,
            "Catapang, J.K.",
            "2024",
            Markup::text(format!("{}.", title)),
        )
    }

    #[test]
    fn test_grouping_is_order_preserving_partition() {
        let records = vec![
            record(Category::Conference, "c1"),
            record(Category::Journal, "j1"),
            record(Category::Pending, "p1"),
            record(Category::Journal, "j2"),
            record(Category::Conference, "c2"),
            record(Category::Journal, "j3"),
        ];
        let groups = group_by_category(&records);

        let titles: Vec<Vec<&str>> = groups
            .iter()
            .map(|g| g.records.iter().map(|(_, r)| r.title.as_str()).collect())
            .collect();
        assert_eq!(
            titles,
            vec![vec!["p1"], vec!["j1", "j2", "j3"], vec!["c1", "c2"]]
        );

        let mut seen: Vec<usize> = groups
            .iter()
            .flat_map(|g| g.records.iter().map(|(idx, _)| *idx))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..records.len()).collect::<Vec<_>>());

        for group in &groups {
            assert!(group.records.windows(2).all(|w| w[0].0 < w[1].0));
            assert!(group.records.iter().all(|(_, r)| r.category == group.category));
        }
    }

    #[test]
    fn test_empty_category_still_grouped() {
        let records = vec![record(Category::Journal, "j1")];
        let groups = group_by_category(&records);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].category, Category::Pending);
        assert!(groups[0].is_empty());
        assert_eq!(groups[0].label(), "Pending");
        assert!(groups[2].is_empty());
    }

    #[test]
    fn test_emphasize_single_occurrence() {
        let m = emphasize_name("Catapang, J.K., & Visperas, M.", "Catapang, J.K.");
        assert_eq!(
            m.to_html(),
            "<strong>Catapang, J.K.</strong>, &amp; Visperas, M."
        );
    }

    #[test]
    fn test_emphasize_every_occurrence() {
        let m = emphasize_name("Catapang, J.K. and Catapang, J.K.", "Catapang, J.K.");
        assert_eq!(
            m.nodes(),
            &[
                Inline::Strong(vec![Inline::Text("Catapang, J.K.".to_string())]),
                Inline::Text(" and ".to_string()),
                Inline::Strong(vec![Inline::Text("Catapang, J.K.".to_string())]),
            ]
        );
    }

    #[test]
    fn test_emphasize_leaves_other_text_unaltered() {
        let authors = "Isip-Tan, I.T., Cleofas, J.V., Catapang, J.K.";
        let m = emphasize_name(authors, "Catapang, J.K.");
        assert_eq!(m.raw_text(), authors);
    }

    #[test]
    fn test_emphasize_is_case_sensitive() {
        let m = emphasize_name("catapang, j.k.", "Catapang, J.K.");
        assert_eq!(m.nodes(), &[Inline::Text("catapang, j.k.".to_string())]);
    }

    #[test]
    fn test_emphasize_escapes_pattern_characters() {
        // Unescaped, "J.K." would also match "JxKy".
        let m = emphasize_name("Catapang, JxKy", "Catapang, J.K.");
        assert_eq!(m.nodes(), &[Inline::Text("Catapang, JxKy".to_string())]);

        let m = emphasize_name("(Lab) [A+B]", "[A+B]");
        assert_eq!(m.to_html(), "(Lab) <strong>[A+B]</strong>");
    }

    #[test]
    fn test_emphasize_empty_name() {
        let m = emphasize_name("Someone, A.", "");
        assert_eq!(m.to_html(), "Someone, A.");
    }
}
