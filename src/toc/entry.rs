use serde::Serialize;

use crate::dom::{Document, NodeId};
use crate::toc::parser::Heading;
use crate::toc::types::{TocLevel, TocOptions};

/// One navigation entry: a grouping element wrapping a single link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub level: TocLevel,
    /// Id of the heading the link points at
    pub target: String,
    pub label: String,
}

impl TocEntry {
    /// Entry for a top-level heading
    pub fn top(target: &str, label: &str) -> Self {
        Self {
            level: TocLevel::Top,
            target: target.to_string(),
            label: label.to_string(),
        }
    }

    /// Entry for a sub-level heading
    pub fn sub(target: &str, label: &str) -> Self {
        Self {
            level: TocLevel::Sub,
            target: target.to_string(),
            label: label.to_string(),
        }
    }

    pub fn from_heading(heading: &Heading) -> Self {
        Self {
            level: heading.level,
            target: heading.id.clone(),
            label: heading.text.clone(),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }

    /// Build the entry as detached nodes and return the grouping element.
    pub fn build(&self, doc: &mut Document, options: &TocOptions) -> NodeId {
        let href = self.href();
        let wrapper = doc.create_element(options.wrapper_for(self.level), &[]);
        let link = doc.create_element("a", &[("href", href.as_str())]);
        let label = doc.create_text(&self.label);
        // Freshly created nodes cannot form a cycle
        let _ = doc.append_child(link, label);
        let _ = doc.append_child(wrapper, link);
        wrapper
    }

    /// Render the entry as markup without a document
    pub fn to_html(&self, options: &TocOptions) -> String {
        let wrapper = options.wrapper_for(self.level);
        format!(
            "<{wrapper}><a href=\"{}\">{}</a></{wrapper}>",
            html_escape::encode_double_quoted_attribute(&self.href()),
            html_escape::encode_text(&self.label),
        )
    }
}

/// Render entries back to back, in the order given
pub fn render_entries(entries: &[TocEntry], options: &TocOptions) -> String {
    entries.iter().map(|entry| entry.to_html(options)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_constructors() {
        assert_eq!(TocEntry::top("intro", "Intro").level, TocLevel::Top);
        assert_eq!(TocEntry::sub("setup", "Setup").level, TocLevel::Sub);
        assert_eq!(TocEntry::top("intro", "Intro").href(), "#intro");
    }

    #[test]
    fn test_to_html_matches_built_nodes() {
        let options = TocOptions::default();
        let entry = TocEntry::sub("a&b", "Fish & <Chips>");
        let mut doc = Document::new();
        let node = entry.build(&mut doc, &options);
        assert_eq!(doc.outer_html(node), entry.to_html(&options));
        assert_eq!(
            entry.to_html(&options),
            r##"<dd><a href="#a&amp;b">Fish &amp; &lt;Chips&gt;</a></dd>"##
        );
    }

    #[test]
    fn test_render_entries_keeps_order() {
        let options = TocOptions::default();
        let html = render_entries(
            &[TocEntry::top("intro", "Introduction"), TocEntry::sub("setup", "Setup")],
            &options,
        );
        assert_eq!(
            html,
            r##"<dt><a href="#intro">Introduction</a></dt><dd><a href="#setup">Setup</a></dd>"##
        );
    }
}
