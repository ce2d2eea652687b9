use lazy_static::lazy_static;
use regex::Regex;

use crate::dom::document::Document;
use crate::dom::node::{is_raw_text_tag, Attribute, ElementData, EndTag, NodeData, NodeId};

lazy_static! {
    static ref START_TAG_REGEX: Regex =
        Regex::new(r#"^<([A-Za-z][^\s/>]*)((?:[^>"']|"[^"]*"|'[^']*')*)>"#).unwrap();

    static ref END_TAG_REGEX: Regex = Regex::new(r"^</([A-Za-z][^\s/>]*)[^>]*>").unwrap();

    static ref ATTR_REGEX: Regex = Regex::new(
        r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#
    ).unwrap();
}

/// Tags that close an open `<p>` when they start
const CLOSES_PARAGRAPH: [&str; 24] = [
    "address", "article", "aside", "blockquote", "details", "div", "dl", "fieldset", "figure",
    "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "main", "nav", "ol",
    "p", "ul",
];

/// Elements that stop the search for an open `<p>`
const BUTTON_SCOPE_BOUNDARIES: [&str; 11] = [
    "applet", "button", "caption", "html", "marquee", "object", "table", "td", "template", "th",
    "svg",
];

/// Build a [`Document`] from markup.
///
/// This is a tolerant scanner, not an HTML5 tree builder: it tracks an
/// open-element stack, honours void and raw-text elements, and closes the
/// few elements whose end tags are commonly omitted (`p`, `li`, `dt`, `dd`,
/// and a heading interrupted by another heading).
/// End tags without a matching open element are kept verbatim.
pub fn parse_html(html: &str) -> Document {
    let mut doc = Document::new();
    let mut stack: Vec<NodeId> = vec![doc.root()];
    let mut i = 0usize;
    let mut text_start = 0usize;

    while i < html.len() {
        let rest = &html[i..];
        if !rest.starts_with('<') {
            i += rest.find('<').unwrap_or(rest.len());
            continue;
        }

        let consumed = if rest.starts_with("<!--") {
            flush_text(&mut doc, &stack, &html[text_start..i]);
            let end = rest[4..].find("-->").map(|p| p + 4);
            let (inner, len) = match end {
                Some(p) => (&rest[4..p], p + 3),
                None => (&rest[4..], rest.len()),
            };
            append(&mut doc, &stack, NodeData::Comment(inner.to_string()));
            Some(len)
        } else if rest.starts_with("<!") || rest.starts_with("<?") {
            flush_text(&mut doc, &stack, &html[text_start..i]);
            let len = rest.find('>').map(|p| p + 1).unwrap_or(rest.len());
            let inner = rest[2..len].trim_end_matches('>');
            let is_doctype = inner
                .get(..7)
                .is_some_and(|head| head.eq_ignore_ascii_case("doctype"));
            if rest.starts_with("<!") && is_doctype {
                append(&mut doc, &stack, NodeData::Doctype(inner.to_string()));
            } else {
                append(&mut doc, &stack, NodeData::Raw(rest[..len].to_string()));
            }
            Some(len)
        } else if let Some(cap) = END_TAG_REGEX.captures(rest) {
            flush_text(&mut doc, &stack, &html[text_start..i]);
            let raw = cap.get(0).map_or("", |m| m.as_str());
            close_element(&mut doc, &mut stack, &cap[1].to_ascii_lowercase(), raw);
            Some(raw.len())
        } else if let Some(cap) = START_TAG_REGEX.captures(rest) {
            flush_text(&mut doc, &stack, &html[text_start..i]);
            let raw = cap.get(0).map_or("", |m| m.as_str());
            let tag = cap[1].to_ascii_lowercase();
            let attr_source = cap.get(2).map_or("", |m| m.as_str());

            close_implied(&doc, &mut stack, &tag);

            let mut element = ElementData::new(&tag, parse_attributes(attr_source));
            element.raw_start = Some(raw.to_string());
            element.end_tag = EndTag::Omitted;
            element.self_closing = attr_source.trim_end().ends_with('/');
            let is_leaf = element.is_void() || element.self_closing;
            let node = append(&mut doc, &stack, NodeData::Element(element));

            let mut len = raw.len();
            if !is_leaf {
                if is_raw_text_tag(&tag) {
                    len += consume_raw_text(&mut doc, node, &tag, &rest[len..]);
                } else {
                    stack.push(node);
                }
            }
            Some(len)
        } else {
            None
        };

        match consumed {
            Some(len) => {
                i += len;
                text_start = i;
            }
            // A '<' that starts no markup is ordinary text
            None => i += 1,
        }
    }

    flush_text(&mut doc, &stack, &html[text_start..]);
    doc
}

fn append(doc: &mut Document, stack: &[NodeId], data: NodeData) -> NodeId {
    let node = doc.create_node(data);
    let parent = stack.last().copied().unwrap_or_else(|| doc.root());
    // Parents on the stack are always elements or the root
    let _ = doc.append_child(parent, node);
    node
}

fn flush_text(doc: &mut Document, stack: &[NodeId], text: &str) {
    if !text.is_empty() {
        append(doc, stack, NodeData::Text(text.to_string()));
    }
}

/// Pop the stack down to the nearest open element named `tag`.
fn close_element(doc: &mut Document, stack: &mut Vec<NodeId>, tag: &str, raw: &str) {
    let position = stack
        .iter()
        .rposition(|id| doc.tag_name(*id) == Some(tag));

    match position {
        Some(pos) if pos > 0 => {
            let node = stack[pos];
            stack.truncate(pos);
            if let NodeData::Element(element) = doc.node_data_mut(node) {
                element.end_tag = EndTag::Written(raw.to_string());
            }
        }
        _ => {
            append(doc, stack, NodeData::Raw(raw.to_string()));
        }
    }
}

/// Close elements whose end tag is implied by the start of `tag`.
fn close_implied(doc: &Document, stack: &mut Vec<NodeId>, tag: &str) {
    if CLOSES_PARAGRAPH.contains(&tag) {
        close_paragraph_in_button_scope(doc, stack);
    }

    let Some(&top) = stack.last() else {
        return;
    };
    let Some(open) = doc.tag_name(top) else {
        return;
    };

    let implied = match open {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => is_heading_tag(tag),
        "li" => tag == "li",
        "dt" | "dd" => tag == "dt" || tag == "dd",
        "option" => tag == "option",
        _ => false,
    };
    if implied {
        stack.pop();
    }
}

/// Pop through the nearest open `<p>` unless a scope boundary comes first.
fn close_paragraph_in_button_scope(doc: &Document, stack: &mut Vec<NodeId>) {
    for pos in (1..stack.len()).rev() {
        match doc.tag_name(stack[pos]) {
            Some("p") => {
                stack.truncate(pos);
                return;
            }
            Some(open) if BUTTON_SCOPE_BOUNDARIES.contains(&open) => return,
            _ => {}
        }
    }
}

fn is_heading_tag(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

/// Store everything up to `</tag` as a single text child; returns bytes used.
fn consume_raw_text(doc: &mut Document, node: NodeId, tag: &str, rest: &str) -> usize {
    let needle = format!("</{}", tag);
    let lowered = rest.to_ascii_lowercase();
    let content_end = lowered.find(&needle).unwrap_or(rest.len());

    if content_end > 0 {
        let text = doc.create_node(NodeData::Text(rest[..content_end].to_string()));
        let _ = doc.append_child(node, text);
    }

    let after = &rest[content_end..];
    match END_TAG_REGEX.find(after) {
        Some(m) => {
            if let NodeData::Element(element) = doc.node_data_mut(node) {
                element.end_tag = EndTag::Written(m.as_str().to_string());
            }
            content_end + m.end()
        }
        None => content_end,
    }
}

/// Parse the attribute portion of a start tag, decoding values.
pub fn parse_attributes(source: &str) -> Vec<Attribute> {
    let mut attrs: Vec<Attribute> = Vec::new();
    for cap in ATTR_REGEX.captures_iter(source) {
        let name = cap[1].to_ascii_lowercase();
        // First occurrence wins, as in browsers
        if attrs.iter().any(|a| a.name == name) {
            continue;
        }
        let value = cap
            .get(2)
            .or_else(|| cap.get(3))
            .or_else(|| cap.get(4))
            .map(|m| html_escape::decode_html_entities(m.as_str()).into_owned());
        attrs.push(Attribute { name, value });
    }
    attrs
}
