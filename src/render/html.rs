//! Static HTML rendering of the portfolio.
//!
//! The output is one self-contained document: markup, a small stylesheet and
//! an inline script that drives the cite dialogs and the experience toggle.

use crate::config::VitaeConfig;
use crate::error::Result;
use crate::markup::{Markup, escape_html};
use crate::model::{ExperienceEntry, MediaItem, Portfolio, PublicationRecord};
use crate::publications::{emphasize_name, group_by_category};
use crate::view::Disclosure;
use chrono::Datelike;

/// Section anchors, in page order.
pub const SECTION_IDS: &[&str] = &[
    "about",
    "experience",
    "education",
    "skills",
    "research",
    "grants",
    "publications",
    "services",
    "media",
    "certificates",
    "contact",
];

const NAV: &[(&str, &str)] = &[
    ("about", "About"),
    ("experience", "Experience"),
    ("research", "Research"),
    ("publications", "Publications"),
    ("media", "Media"),
    ("contact", "Contact"),
];

const EXTERNAL: &str = r#"target="_blank" rel="noopener noreferrer""#;

pub struct HtmlRenderer<'a> {
    portfolio: &'a Portfolio,
    config: &'a VitaeConfig,
    year: i32,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(portfolio: &'a Portfolio, config: &'a VitaeConfig) -> Self {
        Self {
            portfolio,
            config,
            year: chrono::Local::now().year(),
        }
    }

    /// Override the footer year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn render(&self) -> Result<String> {
        let p = self.portfolio;
        let mut out = String::with_capacity(64 * 1024);

        out.push_str(&format!(
            "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n",
            escape_html(&self.config.site.lang),
            escape_html(&p.profile.name),
            STYLE
        ));

        self.nav(&mut out);
        out.push_str("<main>\n");
        self.hero(&mut out);
        self.about(&mut out);
        self.experience(&mut out);
        self.education(&mut out);
        self.skills(&mut out);
        self.research(&mut out);
        self.grants(&mut out);
        self.publications(&mut out);
        self.services(&mut out);
        self.media(&mut out)?;
        self.certificates(&mut out);
        self.contact(&mut out);
        out.push_str("</main>\n");

        out.push_str(&format!(
            "<footer>&copy; {} {}</footer>\n",
            self.year,
            escape_html(&p.profile.name)
        ));
        out.push_str("<script>\n");
        out.push_str(&SCRIPT.replace(
            "__FEEDBACK_MS__",
            &self.config.tui.copied_feedback_ms.to_string(),
        ));
        out.push_str("</script>\n</body>\n</html>\n");
        Ok(out)
    }

    fn nav(&self, out: &mut String) {
        out.push_str("<header><nav>\n");
        for (id, label) in NAV {
            out.push_str(&format!("<a href=\"#{}\">{}</a>\n", id, label));
        }
        out.push_str("</nav></header>\n");
    }

    fn hero(&self, out: &mut String) {
        let profile = &self.portfolio.profile;
        out.push_str(&format!(
            "<section id=\"hero\">\n<h1>{}</h1>\n<p class=\"headline\">{}</p>\n<p class=\"tagline\">{}</p>\n</section>\n",
            escape_html(&profile.name),
            escape_html(&profile.headline),
            escape_html(&profile.tagline)
        ));
    }

    fn about(&self, out: &mut String) {
        open_section(out, "about", "About");
        for paragraph in &self.portfolio.profile.about {
            out.push_str(&format!("<p>{}</p>\n", paragraph.to_html()));
        }
        close_section(out);
    }

    fn experience(&self, out: &mut String) {
        let entries = &self.portfolio.experience;
        open_section(out, "experience", "Experience");

        let mut disclosure = Disclosure::new(entries.len());
        for entry in disclosure.visible(entries) {
            entry_card(out, entry);
        }

        if disclosure.has_toggle() {
            let more = disclosure.label();
            disclosure.toggle();
            let less = disclosure.label();

            out.push_str("<div id=\"experience-more\" hidden>\n");
            for entry in &entries[1..] {
                entry_card(out, entry);
            }
            out.push_str("</div>\n");
            out.push_str(&format!(
                "<button type=\"button\" class=\"toggle\" aria-expanded=\"false\" \
                 aria-controls=\"experience-more\" data-more=\"{0}\" data-less=\"{1}\">{0}</button>\n",
                escape_html(&more),
                escape_html(&less)
            ));
        }
        close_section(out);
    }

    fn education(&self, out: &mut String) {
        open_section(out, "education", "Education");
        for entry in &self.portfolio.education {
            entry_card(out, entry);
        }
        if let Some(note) = &self.portfolio.education_note {
            out.push_str(&format!("<p class=\"note\">{}</p>\n", note.to_html()));
        }
        close_section(out);
    }

    fn skills(&self, out: &mut String) {
        open_section(out, "skills", "Technical Skills");
        out.push_str("<div class=\"skills\">\n");
        for group in &self.portfolio.skills {
            out.push_str(&format!(
                "<div class=\"skill\"><h4>{}</h4><p>{}</p></div>\n",
                escape_html(&group.title),
                escape_html(&group.text)
            ));
        }
        out.push_str("</div>\n");
        close_section(out);
    }

    fn research(&self, out: &mut String) {
        open_section(out, "research", "Research & Consulting");
        for entry in &self.portfolio.research {
            entry_card(out, entry);
        }
        close_section(out);
    }

    fn grants(&self, out: &mut String) {
        open_section(out, "grants", "Grants");
        for grant in &self.portfolio.grants {
            out.push_str(&format!(
                "<div class=\"grant\"><h4>{}</h4><p>{}</p></div>\n",
                escape_html(&grant.title),
                grant.body.to_html()
            ));
        }
        close_section(out);
    }

    fn publications(&self, out: &mut String) {
        open_section(out, "publications", "Publications");
        for group in group_by_category(&self.portfolio.publications) {
            out.push_str(&format!("<h3>{}</h3>\n<ul class=\"publications\">\n", group.label()));
            for (idx, record) in &group.records {
                self.publication_card(out, *idx, record);
            }
            out.push_str("</ul>\n");
        }

        if !self.portfolio.presentations.is_empty() {
            out.push_str("<h3>Conference Presentations &amp; Lectures</h3>\n<ul class=\"presentations\">\n");
            for item in &self.portfolio.presentations {
                out.push_str(&format!("<li>{}</li>\n", item.to_html()));
            }
            out.push_str("</ul>\n");
        }
        close_section(out);
    }

    fn publication_card(&self, out: &mut String, idx: usize, record: &PublicationRecord) {
        let authors = emphasize_name(&record.authors, &self.config.site.self_name);
        out.push_str(&format!("<li class=\"publication\" id=\"pub-{}\">\n", idx));
        out.push_str(&format!(
            "<p class=\"pub-title\">{}</p>\n<p class=\"pub-authors\">{}</p>\n",
            escape_html(&record.title),
            authors.to_html()
        ));

        let venue = match &record.venue {
            Some(v) => format!("{} · {}", escape_html(v), escape_html(&record.month_year)),
            None => escape_html(&record.month_year),
        };
        out.push_str(&format!("<p class=\"pub-venue\">{}</p>\n", venue));

        out.push_str("<div class=\"pub-actions\">\n");
        match record.pdf() {
            Some(link) => out.push_str(&format!(
                "<a class=\"pdf\" href=\"{}\" {}>View PDF</a>\n",
                escape_html(link),
                EXTERNAL
            )),
            None => out.push_str(
                "<span class=\"pdf disabled\" aria-disabled=\"true\">View PDF</span>\n",
            ),
        }
        out.push_str(&format!(
            "<button type=\"button\" class=\"cite\" data-dialog=\"cite-{}\">Cite</button>\n</div>\n",
            idx
        ));
        cite_dialog(out, idx, &record.citation);
        out.push_str("</li>\n");
    }

    fn services(&self, out: &mut String) {
        open_section(out, "services", "Professional Services");
        for item in &self.portfolio.services {
            out.push_str(&format!("<p>{}</p>\n", item.to_html()));
        }
        close_section(out);
    }

    fn media(&self, out: &mut String) -> Result<()> {
        open_section(out, "media", "Media & Affiliations");
        out.push_str("<ul class=\"media\">\n");
        for item in &self.portfolio.media {
            self.media_item(out, item)?;
        }
        out.push_str("</ul>\n");
        if let Some(affiliations) = &self.portfolio.affiliations {
            out.push_str(&format!("<p>{}</p>\n", affiliations.to_html()));
        }
        close_section(out);
        Ok(())
    }

    fn media_item(&self, out: &mut String, item: &MediaItem) -> Result<()> {
        let favicon = item.favicon_url(&self.config.site.favicon_endpoint)?;
        out.push_str(&format!(
            "<li><img class=\"favicon\" src=\"{}\" alt=\"\" width=\"16\" height=\"16\" loading=\"lazy\"> \
             <a href=\"{}\" {}>{}</a>. <em>{}</em>, {}.",
            escape_html(favicon.as_str()),
            escape_html(&item.url),
            EXTERNAL,
            escape_html(&item.title),
            escape_html(&item.outlet),
            escape_html(&item.date)
        ));
        if let Some(credit) = &item.credit {
            out.push_str(&format!(" <span class=\"credit\">{}</span>", escape_html(credit)));
        }
        out.push_str("</li>\n");
        Ok(())
    }

    fn certificates(&self, out: &mut String) {
        open_section(out, "certificates", "Certificates & Qualifications");
        for item in &self.portfolio.certificates {
            out.push_str(&format!("<p>{}</p>\n", item.to_html()));
        }
        close_section(out);
    }

    fn contact(&self, out: &mut String) {
        let contact = &self.portfolio.profile.contact;
        open_section(out, "contact", "Contact");
        out.push_str(&format!(
            "<p class=\"contact\"><a href=\"{}\">{}</a> <a href=\"{}\">{}</a></p>\n",
            escape_html(&contact.mailto_href()),
            escape_html(&contact.email),
            escape_html(&contact.tel_href()),
            escape_html(&contact.phone)
        ));
        out.push_str("<p class=\"links\">\n");
        for link in &contact.links {
            out.push_str(&format!(
                "<a class=\"icon-link\" href=\"{}\" {} aria-label=\"{2}\" title=\"{2}\">{2}</a>\n",
                escape_html(&link.url),
                EXTERNAL,
                link.label()
            ));
        }
        out.push_str("</p>\n");
        if let Some(address) = &contact.address {
            out.push_str(&format!("<p class=\"address\">{}</p>\n", escape_html(address)));
        }
        close_section(out);
    }
}

fn open_section(out: &mut String, id: &str, title: &str) {
    out.push_str(&format!(
        "<section id=\"{}\">\n<h2>{}</h2>\n",
        id,
        escape_html(title)
    ));
}

fn close_section(out: &mut String) {
    out.push_str("</section>\n");
}

fn entry_card(out: &mut String, entry: &ExperienceEntry) {
    out.push_str(&format!(
        "<article class=\"entry\">\n<div class=\"entry-head\"><h3>{}</h3><span class=\"company\">{}</span><span class=\"date\">{}</span></div>\n",
        escape_html(&entry.role),
        escape_html(&entry.company),
        escape_html(&entry.date_range)
    ));
    if let Some(location) = &entry.location {
        out.push_str(&format!("<p class=\"location\">{}</p>\n", escape_html(location)));
    }
    if let Some(description) = &entry.description {
        out.push_str(&format!("<p>{}</p>\n", escape_html(description)));
    }
    if !entry.bullets.is_empty() {
        out.push_str("<ul>\n");
        for bullet in &entry.bullets {
            out.push_str(&format!("<li>{}</li>\n", bullet.to_html()));
        }
        out.push_str("</ul>\n");
    }
    if let Some(meta) = &entry.meta {
        out.push_str(&format!("<p class=\"meta\">{}</p>\n", escape_html(meta)));
    }
    out.push_str("</article>\n");
}

fn cite_dialog(out: &mut String, idx: usize, citation: &Markup) {
    out.push_str(&format!(
        "<dialog id=\"cite-{0}\" class=\"cite-dialog\" role=\"dialog\" aria-modal=\"true\" \
         aria-labelledby=\"cite-{0}-title\" data-plain=\"{1}\">\n\
         <div class=\"dialog-body\">\n<h4 id=\"cite-{0}-title\">Cite this work (APA)</h4>\n\
         <p class=\"citation\">{2}</p>\n\
         <div class=\"dialog-actions\"><button type=\"button\" class=\"copy\">Copy</button>\
         <button type=\"button\" class=\"close\">Close</button></div>\n</div>\n</dialog>\n",
        idx,
        escape_html(&citation.to_plain_text()),
        citation.to_html()
    ));
}

const STYLE: &str = r#"
body{margin:0;font-family:Georgia,serif;color:#111;line-height:1.6}
header{position:sticky;top:0;background:rgba(255,255,255,.92);border-bottom:1px solid #e5e7eb}
nav{display:flex;flex-wrap:wrap;justify-content:center;gap:1rem;padding:1.5rem}
nav a{font:500 .85rem sans-serif;text-transform:uppercase;letter-spacing:.1em;color:#4b5563;text-decoration:none}
main,footer{max-width:65ch;margin:0 auto;padding:0 1.5rem}
section{padding:2.5rem 0;border-bottom:1px solid #e5e7eb}
#hero{text-align:center}
h2{font:600 1.25rem sans-serif;text-transform:uppercase;letter-spacing:.1em;color:#4b5563}
.entry-head{display:flex;flex-wrap:wrap;gap:1rem;align-items:baseline}
.entry-head h3{margin:0}.date{margin-left:auto;color:#4b5563}
.location,.meta,.note,.pub-venue{color:#4b5563;font-size:.9rem}
.skills{display:grid;gap:1.5rem;grid-template-columns:repeat(auto-fit,minmax(12rem,1fr))}
.skill,.grant{padding:1rem;border-left:4px solid #1d4ed8;background:#f8fafc}
.pub-actions{display:flex;gap:.75rem}
.pdf.disabled{color:#9ca3af;cursor:not-allowed}
dialog{padding:0;border:0;border-radius:.5rem;max-width:40rem}
dialog::backdrop{background:rgba(0,0,0,.4)}
.dialog-body{padding:1.5rem}
footer{padding:1.5rem;text-align:center;color:#4b5563;font-size:.9rem}
"#;

const SCRIPT: &str = r#"(function () {
  var FEEDBACK_MS = __FEEDBACK_MS__;
  document.querySelectorAll('button.cite').forEach(function (btn) {
    btn.addEventListener('click', function () {
      var dialog = document.getElementById(btn.dataset.dialog);
      if (dialog) dialog.showModal();
    });
  });
  document.querySelectorAll('dialog.cite-dialog').forEach(function (dialog) {
    var copy = dialog.querySelector('button.copy');
    var timer = null;
    function reset() {
      if (timer) { clearTimeout(timer); timer = null; }
      copy.textContent = 'Copy';
    }
    function feedback(label) {
      if (!dialog.open) return;
      copy.textContent = label;
      if (timer) clearTimeout(timer);
      timer = setTimeout(function () { timer = null; copy.textContent = 'Copy'; }, FEEDBACK_MS);
    }
    dialog.addEventListener('click', function (e) { if (e.target === dialog) dialog.close(); });
    dialog.querySelector('.dialog-body').addEventListener('click', function (e) { e.stopPropagation(); });
    dialog.querySelector('button.close').addEventListener('click', function () { dialog.close(); });
    dialog.addEventListener('close', reset);
    copy.addEventListener('click', function () {
      if (!navigator.clipboard) { feedback('Copy failed'); return; }
      navigator.clipboard.writeText(dialog.dataset.plain).then(
        function () { feedback('Copied!'); },
        function () { feedback('Copy failed'); }
      );
    });
  });
  document.querySelectorAll('button.toggle').forEach(function (btn) {
    btn.addEventListener('click', function () {
      var target = document.getElementById(btn.getAttribute('aria-controls'));
      var expanded = btn.getAttribute('aria-expanded') === 'true';
      target.hidden = expanded;
      btn.setAttribute('aria-expanded', String(!expanded));
      btn.textContent = expanded ? btn.dataset.more : btn.dataset.less;
    });
  });
})();
"#;
