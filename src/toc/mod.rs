//! Table of contents generation for HTML documents.
//!
//! Headings of two levels (`h2`/`h3` by default) that carry an `id` are
//! turned into `<dt><a href="#id">text</a></dt>` and `<dd>...</dd>` entries
//! appended, in document order, to the element with id `toc`.

mod entry;
mod generator;
mod parser;
mod types;

pub use entry::{render_entries, TocEntry};
pub use generator::{generate_toc, generate_toc_html};
pub use parser::{collect_headings, Heading};
pub use types::{LevelMapping, TocLevel, TocOptions, DEFAULT_CONTAINER_ID};
