use serde::Serialize;

use crate::dom::Document;
use crate::toc::types::{TocLevel, TocOptions};

/// A heading eligible for the table of contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: TocLevel,
    /// Lowercased tag name the heading was written with
    pub tag: String,
    pub id: String,
    /// Text content, entity-decoded and untrimmed
    pub text: String,
}

/// Collect the indexed headings that carry a non-empty id, in document order.
pub fn collect_headings(doc: &Document, options: &TocOptions) -> Vec<Heading> {
    doc.elements()
        .filter_map(|node| {
            let tag = doc.tag_name(node)?;
            let level = options.level_of(tag)?;
            let id = doc.attr(node, "id").filter(|id| !id.is_empty())?;
            Some(Heading {
                level,
                tag: tag.to_string(),
                id: id.to_string(),
                text: doc.text_content(node),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_headings_in_document_order() {
        let html = r#"
            <h1 id="title">Title</h1>
            <h2 id="chapter-1">Chapter 1</h2>
            <section><h3 id="section-1-1">Section <code>1.1</code></h3></section>
            <h4 id="deep">Too deep</h4>
            <h2 id="chapter-2">Chapter 2</h2>
        "#;
        let doc = Document::parse(html);
        let headings = collect_headings(&doc, &TocOptions::default());

        let summary: Vec<_> = headings
            .iter()
            .map(|h| (h.level, h.id.as_str(), h.text.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (TocLevel::Top, "chapter-1", "Chapter 1"),
                (TocLevel::Sub, "section-1-1", "Section 1.1"),
                (TocLevel::Top, "chapter-2", "Chapter 2"),
            ]
        );
    }

    #[test]
    fn test_headings_without_id_are_skipped() {
        let doc = Document::parse(r#"<h2>No id</h2><h2 id="">Empty id</h2><h3 id="ok">Ok</h3><h2 class="x">Class</h2>"#);
        let headings = collect_headings(&doc, &TocOptions::default());
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].id, "ok");
    }

    #[test]
    fn test_custom_levels() {
        let mut options = TocOptions::default();
        options.top_level.heading = "h1".to_string();
        options.sub_level.heading = "h4".to_string();
        let doc = Document::parse(r#"<h1 id="a">A</h1><h2 id="b">B</h2><H4 ID="c">C</H4>"#);
        let ids: Vec<_> = collect_headings(&doc, &options).into_iter().map(|h| h.id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let doc = Document::parse("<h2 id=\"w\">\n  Spaced &lt;out&gt;\n</h2>");
        let headings = collect_headings(&doc, &TocOptions::default());
        assert_eq!(headings[0].text, "\n  Spaced <out>\n");
    }
}
