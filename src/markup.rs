//! Restricted inline markup used by rich-text content fields.
//!
//! Bullets, citations and prose in the content tables carry a small subset
//! of HTML: `<strong>`/`<b>`, `<em>`/`<i>` and `<a href>`. The text is parsed
//! once at load time into a [`Markup`] tree, so rendering and plain-text
//! extraction are folds over typed nodes instead of string scraping.
//!
//! Parsing is total. Unknown tags are dropped but their children are kept,
//! unbalanced closing tags are ignored, unclosed tags close at end of input,
//! and a `<` that does not start a tag is literal text.
//!
//! Entities are content: `&lt;b&gt;` is the literal text `<b>` in
//! [`Markup::to_plain_text`], never a tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single inline node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Link { href: String, children: Vec<Inline> },
}

/// A parsed rich-text fragment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Markup {
    nodes: Vec<Inline>,
}

impl Markup {
    pub fn new(nodes: Vec<Inline>) -> Self {
        Self { nodes }
    }

    /// Plain text with no markup at all.
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.is_empty() {
            return Self::default();
        }
        Self {
            nodes: vec![Inline::Text(s)],
        }
    }

    pub fn parse(source: &str) -> Self {
        Parser::new(source).run()
    }

    pub fn nodes(&self) -> &[Inline] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Concatenated text of every node, exactly as stored.
    pub fn raw_text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.nodes, &mut out);
        out
    }

    /// Text content with whitespace runs collapsed to single spaces and trimmed.
    pub fn to_plain_text(&self) -> String {
        collapse_whitespace(&self.raw_text())
    }

    /// Render as escaped HTML. Links open in a new browsing context.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_html(&self.nodes, &mut out);
        out
    }
}

impl From<String> for Markup {
    fn from(source: String) -> Self {
        Markup::parse(&source)
    }
}

impl From<&str> for Markup {
    fn from(source: &str) -> Self {
        Markup::parse(source)
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.to_html()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_text())
    }
}

pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Escape text for use in HTML element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn collect_text(nodes: &[Inline], out: &mut String) {
    for node in nodes {
        match node {
            Inline::Text(t) => out.push_str(t),
            Inline::Strong(children)
            | Inline::Emphasis(children)
            | Inline::Link { children, .. } => collect_text(children, out),
        }
    }
}

fn write_html(nodes: &[Inline], out: &mut String) {
    for node in nodes {
        match node {
            Inline::Text(t) => out.push_str(&escape_html(t)),
            Inline::Strong(children) => {
                out.push_str("<strong>");
                write_html(children, out);
                out.push_str("</strong>");
            }
            Inline::Emphasis(children) => {
                out.push_str("<em>");
                write_html(children, out);
                out.push_str("</em>");
            }
            Inline::Link { href, children } => {
                out.push_str("<a href=\"");
                out.push_str(&escape_html(href));
                out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
                write_html(children, out);
                out.push_str("</a>");
            }
        }
    }
}

/// Append text, merging with a trailing text node.
fn push_text(nodes: &mut Vec<Inline>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Inline::Text(last)) = nodes.last_mut() {
        last.push_str(text);
    } else {
        nodes.push(Inline::Text(text.to_string()));
    }
}

fn push_node(nodes: &mut Vec<Inline>, node: Inline) {
    match node {
        Inline::Text(t) => push_text(nodes, &t),
        other => nodes.push(other),
    }
}

fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let decoded = ENTITIES
            .iter()
            .find(|(name, _)| tail.starts_with(name));
        match decoded {
            Some((name, value)) => {
                out.push_str(value);
                rest = &tail[name.len()..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

const ENTITIES: &[(&str, &str)] = &[
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&nbsp;", "\u{a0}"),
];

#[derive(Debug)]
enum FrameKind {
    Root,
    Strong(String),
    Emphasis(String),
    Link(String, String),
    Other(String),
}

impl FrameKind {
    fn tag(&self) -> Option<&str> {
        match self {
            FrameKind::Root => None,
            FrameKind::Strong(tag)
            | FrameKind::Emphasis(tag)
            | FrameKind::Link(tag, _)
            | FrameKind::Other(tag) => Some(tag),
        }
    }
}

struct Frame {
    kind: FrameKind,
    children: Vec<Inline>,
}

const VOID_TAGS: &[&str] = &["br", "hr", "img", "wbr"];

struct Parser<'a> {
    src: &'a str,
    stack: Vec<Frame>,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            stack: vec![Frame {
                kind: FrameKind::Root,
                children: Vec::new(),
            }],
        }
    }

    fn current(&mut self) -> &mut Vec<Inline> {
        // The root frame is never popped.
        let last = self.stack.len() - 1;
        &mut self.stack[last].children
    }

    fn run(mut self) -> Markup {
        let mut rest = self.src;
        while !rest.is_empty() {
            let Some(lt) = rest.find('<') else {
                let text = decode_entities(rest);
                push_text(self.current(), &text);
                break;
            };

            if lt > 0 {
                let text = decode_entities(&rest[..lt]);
                push_text(self.current(), &text);
            }
            rest = &rest[lt..];

            match tag_extent(rest) {
                Some(end) => {
                    self.handle_tag(&rest[1..end]);
                    rest = &rest[end + 1..];
                }
                None => {
                    push_text(self.current(), "<");
                    rest = &rest[1..];
                }
            }
        }

        while self.stack.len() > 1 {
            self.pop_frame();
        }
        let root = self.stack.pop().map(|f| f.children).unwrap_or_default();
        Markup { nodes: root }
    }

    fn handle_tag(&mut self, inner: &str) {
        if inner.starts_with('!') {
            // comments and doctypes carry no content
            return;
        }

        if let Some(name) = inner.strip_prefix('/') {
            let name = name.trim().to_ascii_lowercase();
            let open_at = self
                .stack
                .iter()
                .rposition(|frame| frame.kind.tag() == Some(name.as_str()));
            if let Some(pos) = open_at {
                while self.stack.len() > pos {
                    self.pop_frame();
                }
            }
            return;
        }

        let self_closing = inner.ends_with('/');
        let inner = inner.trim_end_matches('/');
        let (name, attrs) = match inner.find(|c: char| c.is_whitespace()) {
            Some(pos) => (&inner[..pos], &inner[pos..]),
            None => (inner, ""),
        };
        let name = name.to_ascii_lowercase();

        if VOID_TAGS.contains(&name.as_str()) {
            if name == "br" {
                push_text(self.current(), " ");
            }
            return;
        }
        if self_closing {
            return;
        }

        let kind = match name.as_str() {
            "strong" | "b" => FrameKind::Strong(name),
            "em" | "i" => FrameKind::Emphasis(name),
            "a" => {
                let href = attribute(attrs, "href").unwrap_or_default();
                FrameKind::Link(name, href)
            }
            _ => FrameKind::Other(name),
        };
        self.stack.push(Frame {
            kind,
            children: Vec::new(),
        });
    }

    fn pop_frame(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        let parent = self.current();
        match frame.kind {
            FrameKind::Root => {}
            FrameKind::Strong(_) => parent.push(Inline::Strong(frame.children)),
            FrameKind::Emphasis(_) => parent.push(Inline::Emphasis(frame.children)),
            FrameKind::Link(_, href) => parent.push(Inline::Link {
                href,
                children: frame.children,
            }),
            FrameKind::Other(_) => {
                for child in frame.children {
                    push_node(parent, child);
                }
            }
        }
    }
}

/// Byte index of the `>` closing a tag that starts at `s[0] == '<'`.
///
/// A quoted attribute value may contain `<` and `>`. An unquoted `<` before
/// the closing `>` means `s` does not start a tag at all.
fn tag_extent(s: &str) -> Option<usize> {
    let mut chars = s[1..].chars();
    let starts_tag = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '!' => true,
        Some('/') => chars.next().is_some_and(|c| c.is_ascii_alphabetic()),
        _ => false,
    };
    if !starts_tag {
        return None;
    }

    let mut quote: Option<char> = None;
    let mut after_equals = false;
    for (i, c) in s.char_indices().skip(1) {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '"' | '\'' if after_equals => quote = Some(c),
                '>' => return Some(i),
                '<' => return None,
                _ => {}
            },
        }
        if !c.is_whitespace() {
            after_equals = quote.is_none() && c == '=';
        }
    }
    None
}

fn attribute(attrs: &str, key: &str) -> Option<String> {
    let lower = attrs.to_ascii_lowercase();
    let needle = format!("{}=", key);
    let mut search_from = 0;
    while let Some(found) = lower[search_from..].find(&needle) {
        let start = search_from + found;
        let boundary = start == 0 || lower[..start].ends_with(char::is_whitespace);
        let value_start = start + needle.len();
        if boundary {
            let value = &attrs[value_start..];
            let raw = match value.chars().next() {
                Some(q @ ('"' | '\'')) => {
                    let body = &value[1..];
                    &body[..body.find(q).unwrap_or(body.len())]
                }
                _ => {
                    let end = value.find(char::is_whitespace).unwrap_or(value.len());
                    &value[..end]
                }
            };
            return Some(decode_entities(raw));
        }
        search_from = value_start;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_text() {
        let m = Markup::parse("Just text");
        assert_eq!(m.nodes(), &[Inline::Text("Just text".to_string())]);
    }

    #[test]
    fn test_parse_strong_and_emphasis() {
        let m = Markup::parse("<strong>MyPage Agent:</strong> Lead <em>execution</em>.");
        assert_eq!(
            m.nodes(),
            &[
                Inline::Strong(vec![Inline::Text("MyPage Agent:".to_string())]),
                Inline::Text(" Lead ".to_string()),
                Inline::Emphasis(vec![Inline::Text("execution".to_string())]),
                Inline::Text(".".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_link_href() {
        let m = Markup::parse(r#"See <a href="https://doi.org/10.1/x?a=1&amp;b=2">DOI</a>"#);
        match &m.nodes()[1] {
            Inline::Link { href, children } => {
                assert_eq!(href, "https://doi.org/10.1/x?a=1&b=2");
                assert_eq!(children, &vec![Inline::Text("DOI".to_string())]);
            }
            other => panic!("expected link, got {:?}", other),
        }
    }

    #[test]
    fn test_citation_plain_text() {
        let m = Markup::parse("A. (2020). <em>Title</em>.");
        assert_eq!(m.to_plain_text(), "A. (2020). Title.");
    }

    #[test]
    fn test_plain_text_collapses_whitespace() {
        let m = Markup::parse("  A.\n  (2020).\t\t<em> Title </em>  ");
        assert_eq!(m.to_plain_text(), "A. (2020). Title");
    }

    #[test]
    fn test_plain_text_idempotent_on_plain_input() {
        let input = "  Catapang,   J.K. (2025).\nLanguage  ";
        let once = Markup::parse(input).to_plain_text();
        assert_eq!(once, "Catapang, J.K. (2025). Language");
        assert_eq!(Markup::parse(&once).to_plain_text(), once);
    }

    #[test]
    fn test_plain_text_has_no_tag_delimiters() {
        let inputs = [
            "<strong>Bold</strong> and <em>em</em>",
            r#"<a href="https://x.org"><em>Nested</em> link</a>"#,
            "<span class=\"x\">unknown</span> tag<br/>break",
            "<b><i>unclosed",
        ];
        for input in inputs {
            let plain = Markup::parse(input).to_plain_text();
            assert!(!plain.contains('<') && !plain.contains('>'), "{}", plain);
        }
    }

    #[test]
    fn test_unknown_tags_keep_children() {
        let m = Markup::parse("<span>inside <strong>bold</strong></span> after");
        assert_eq!(
            m.nodes(),
            &[
                Inline::Text("inside ".to_string()),
                Inline::Strong(vec![Inline::Text("bold".to_string())]),
                Inline::Text(" after".to_string()),
            ]
        );
    }

    #[test]
    fn test_stray_angle_bracket_is_text() {
        let m = Markup::parse("a < b and c <= d");
        assert_eq!(m.to_plain_text(), "a < b and c <= d");
    }

    #[test]
    fn test_unbalanced_closing_tag_ignored() {
        let m = Markup::parse("text</em> more");
        assert_eq!(m.nodes(), &[Inline::Text("text more".to_string())]);
    }

    #[test]
    fn test_unclosed_tag_closes_at_end() {
        let m = Markup::parse("<em>open ended");
        assert_eq!(
            m.nodes(),
            &[Inline::Emphasis(vec![Inline::Text("open ended".to_string())])]
        );
    }

    #[test]
    fn test_entities_decoded() {
        let m = Markup::parse("Catapang, J.K., &amp; Go, M.A.C.");
        assert_eq!(m.to_plain_text(), "Catapang, J.K., & Go, M.A.C.");
    }

    #[test]
    fn test_to_html_escapes_text() {
        let m = Markup::new(vec![
            Inline::Text("a < b & ".to_string()),
            Inline::Emphasis(vec![Inline::Text("c".to_string())]),
        ]);
        assert_eq!(m.to_html(), "a &lt; b &amp; <em>c</em>");
    }

    #[test]
    fn test_to_html_link_isolated() {
        let m = Markup::parse(r#"<a href="https://x.org">x</a>"#);
        assert_eq!(
            m.to_html(),
            r#"<a href="https://x.org" target="_blank" rel="noopener noreferrer">x</a>"#
        );
    }

    #[test]
    fn test_html_reparses_to_same_tree() {
        let m = Markup::parse("<b>Bold</b> &amp; <i>italic</i>");
        assert_eq!(Markup::parse(&m.to_html()), m);
    }

    #[test]
    fn test_quoted_href_may_contain_angle_brackets() {
        let m = Markup::parse(
            r#"Doe, J. (1998). Title. <a href="https://doi.org/10.1002/(SICI)1097-4571(199806)49:8<693::AID-ASI4>3.0.CO;2-O">DOI</a>"#,
        );
        let plain = m.to_plain_text();
        assert_eq!(plain, "Doe, J. (1998). Title. DOI");
        assert!(!plain.contains(['<', '>', '"']));
        match m.nodes().last() {
            Some(Inline::Link { href, children }) => {
                assert!(href.ends_with("49:8<693::AID-ASI4>3.0.CO;2-O"));
                assert_eq!(children, &vec![Inline::Text("DOI".to_string())]);
            }
            other => panic!("expected link, got {:?}", other),
        }
        assert!(m.to_html().contains("49:8&lt;693::AID-ASI4&gt;3.0.CO;2-O"));
    }

    #[test]
    fn test_literal_lt_does_not_swallow_next_tag() {
        let m = Markup::parse("x <y and <em>T</em>");
        assert_eq!(
            m.nodes(),
            &[
                Inline::Text("x <y and ".to_string()),
                Inline::Emphasis(vec![Inline::Text("T".to_string())]),
            ]
        );
    }

    #[test]
    fn test_apostrophe_in_literal_text_is_not_a_quote() {
        let m = Markup::parse("i <think it's <strong>fine</strong>");
        assert_eq!(m.to_plain_text(), "i <think it's fine");
        assert!(matches!(m.nodes().last(), Some(Inline::Strong(_))));
    }

    #[test]
    fn test_plain_text_rescans_without_tags() {
        let literals = ["a < b", "x <y and", "3<4", "<", "i <3 u", "p <q r's"];
        let tags = [
            "<em>T</em>",
            "<strong>S</strong>",
            r#"<a href="https://e.x/?q=<1>">L</a>"#,
            "<i>it</i> <b>bold</b>",
        ];
        for literal in literals {
            for tag in tags {
                for source in [
                    format!("{} {} {}", literal, tag, literal),
                    format!("{} {}", tag, literal),
                ] {
                    let plain = Markup::parse(&source).to_plain_text();
                    assert!(!plain.contains("</"), "{:?} -> {:?}", source, plain);
                    assert!(!plain.contains("href"), "{:?} -> {:?}", source, plain);
                    assert_eq!(
                        Markup::parse(&plain),
                        Markup::text(plain.clone()),
                        "{:?} -> {:?}",
                        source,
                        plain
                    );
                }
            }
        }
    }

    #[test]
    fn test_escaped_brackets_are_literal_content() {
        let m = Markup::parse("A. (2020). <em>Title</em> &lt;b&gt;.");
        assert_eq!(m.to_plain_text(), "A. (2020). Title <b>.");
        assert_eq!(m.nodes().len(), 3);
        assert!(m.to_html().ends_with("</em> &lt;b&gt;."));
    }
}
