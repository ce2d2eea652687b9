//! A small arena-backed HTML document model.
//!
//! Enough of the DOM to locate elements by id, walk them in document order,
//! read their text, build new elements and write the result back out.
//! Markup the caller never touches is serialized exactly as it was read.

mod document;
mod node;
mod parser;
mod serialize;

pub use document::{Descendants, Document};
pub use node::{is_raw_text_tag, is_void_tag, Attribute, ElementData, EndTag, Node, NodeData, NodeId};
pub use parser::parse_html;
