/// Index of a node inside a [`Document`](super::Document) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// A single attribute, value already entity-decoded.
///
/// `value` is `None` for bare attributes such as `<input disabled>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

impl Attribute {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            value: Some(value.to_string()),
        }
    }
}

/// How an element's end tag is written back out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndTag {
    /// End tag as it appeared in the source
    Written(String),
    /// Source never closed the element explicitly
    Omitted,
    /// Element was built in memory; emit `</tag>` unless void
    Synthesized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// Lowercased tag name
    pub tag_name: String,
    pub attrs: Vec<Attribute>,
    /// Start tag exactly as parsed; cleared when attributes change
    pub raw_start: Option<String>,
    pub end_tag: EndTag,
    pub self_closing: bool,
}

impl ElementData {
    pub fn new(tag_name: &str, attrs: Vec<Attribute>) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            attrs,
            raw_start: None,
            end_tag: EndTag::Synthesized,
            self_closing: false,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .map(|a| a.value.as_deref().unwrap_or(""))
    }

    pub fn is_void(&self) -> bool {
        is_void_tag(&self.tag_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Document,
    /// Contents between `<!` and `>`, e.g. `DOCTYPE html`
    Doctype(String),
    /// Contents between `<!--` and `-->`
    Comment(String),
    Element(ElementData),
    /// Character data as written in the source (entities not decoded)
    Text(String),
    /// Markup kept verbatim that contributes no text, e.g. a stray end tag
    Raw(String),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub data: NodeData,
}

const VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const RAW_TEXT_TAGS: [&str; 4] = ["script", "style", "textarea", "title"];

pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Elements whose content is not parsed as markup
pub fn is_raw_text_tag(tag: &str) -> bool {
    RAW_TEXT_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}
