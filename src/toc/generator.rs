use log::{debug, warn};

use crate::dom::Document;
use crate::toc::entry::TocEntry;
use crate::toc::parser::collect_headings;
use crate::toc::types::TocOptions;

/// Append a table of contents entry to the container for every eligible heading.
///
/// Call once after the markup is available. The headings are snapshotted
/// before the container is touched, so the entries never index themselves.
/// A missing container or an empty heading list leaves the document
/// untouched. Calling this again appends a second copy of every entry.
///
/// Returns the number of entries appended.
pub fn generate_toc(doc: &mut Document, options: &TocOptions) -> usize {
    let Some(container) = doc.get_element_by_id(&options.container_id) else {
        debug!("No #{} container, skipping table of contents", options.container_id);
        return 0;
    };

    let headings = collect_headings(doc, options);
    if headings.is_empty() {
        debug!("No headings with ids found for #{}", options.container_id);
        return 0;
    }

    let mut appended = 0;
    for heading in &headings {
        let entry = TocEntry::from_heading(heading);
        let node = entry.build(doc, options);
        match doc.append_child(container, node) {
            Ok(()) => appended += 1,
            Err(e) => warn!("Skipping entry for #{}: {}", heading.id, e),
        }
    }

    debug!("Appended {} entries to #{}", appended, options.container_id);
    appended
}

/// Parse `html`, generate the table of contents and serialize the result.
pub fn generate_toc_html(html: &str, options: &TocOptions) -> String {
    let mut doc = Document::parse(html);
    generate_toc(&mut doc, options);
    doc.to_html()
}
