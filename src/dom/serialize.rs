use crate::dom::document::Document;
use crate::dom::node::{ElementData, EndTag, NodeData, NodeId};

impl Document {
    /// Serialize the whole document back to markup
    pub fn to_html(&self) -> String {
        self.inner_html(self.root())
    }

    /// Markup of `id` including its own tags
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        write_node(self, id, &mut out);
        out
    }

    /// Markup of the children of `id`
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for child in self.children(id) {
            write_node(self, *child, &mut out);
        }
        out
    }
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    match &doc.node(id).data {
        NodeData::Document => {
            for child in doc.children(id) {
                write_node(doc, *child, out);
            }
        }
        NodeData::Doctype(inner) => {
            out.push_str("<!");
            out.push_str(inner);
            out.push('>');
        }
        NodeData::Comment(inner) => {
            out.push_str("<!--");
            out.push_str(inner);
            out.push_str("-->");
        }
        NodeData::Text(raw) | NodeData::Raw(raw) => out.push_str(raw),
        NodeData::Element(element) => {
            write_start_tag(element, out);
            for child in doc.children(id) {
                write_node(doc, *child, out);
            }
            match &element.end_tag {
                EndTag::Written(raw) => out.push_str(raw),
                EndTag::Omitted => {}
                EndTag::Synthesized => {
                    if !element.is_void() && !element.self_closing {
                        out.push_str("</");
                        out.push_str(&element.tag_name);
                        out.push('>');
                    }
                }
            }
        }
    }
}

fn write_start_tag(element: &ElementData, out: &mut String) {
    if let Some(raw) = &element.raw_start {
        out.push_str(raw);
        return;
    }

    out.push('<');
    out.push_str(&element.tag_name);
    for attr in &element.attrs {
        out.push(' ');
        out.push_str(&attr.name);
        if let Some(value) = &attr.value {
            out.push_str("=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(value));
            out.push('"');
        }
    }
    if element.self_closing {
        out.push_str(" /");
    }
    out.push('>');
}
