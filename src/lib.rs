//! Table of contents generation for HTML documents.
//!
//! ```
//! use tocgen::{generate_toc, Document, TocOptions};
//!
//! let mut doc = Document::parse(r#"<dl id="toc"></dl><h2 id="intro">Introduction</h2>"#);
//! assert_eq!(generate_toc(&mut doc, &TocOptions::default()), 1);
//! assert!(doc.to_html().starts_with(r##"<dl id="toc"><dt><a href="#intro">Introduction</a></dt></dl>"##));
//! ```

pub mod cli;
pub mod config;
pub mod dom;
pub mod toc;
pub mod utils;

pub use dom::Document;
pub use toc::{collect_headings, generate_toc, generate_toc_html, Heading, TocEntry, TocLevel, TocOptions};
