use crate::dom::node::{Attribute, ElementData, Node, NodeData, NodeId};
use crate::dom::parser;
use crate::utils::error::TocError;

/// An HTML document held as an arena of nodes.
///
/// Nodes are never freed; detached nodes simply have no parent. Node ids
/// are only meaningful for the document that created them.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                data: NodeData::Document,
            }],
            root: NodeId(0),
        }
    }

    /// Parse markup into a document. Parsing is lenient and never fails.
    pub fn parse(html: &str) -> Self {
        parser::parse_html(html)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.nodes[id.0].data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match &mut self.nodes[id.0].data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag_name.as_str())
    }

    /// Attribute value; bare attributes read as the empty string
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.attr(name))
    }

    /// Set or replace an attribute. Returns false if `id` is not an element.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) -> bool {
        let Some(element) = self.element_mut(id) else {
            return false;
        };
        match element.attrs.iter_mut().find(|a| a.name.eq_ignore_ascii_case(name)) {
            Some(existing) => existing.value = Some(value.to_string()),
            None => element.attrs.push(Attribute::new(name, value)),
        }
        element.raw_start = None;
        true
    }

    /// Pre-order traversal of everything below `id`, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        stack.reverse();
        Descendants { doc: self, stack }
    }

    /// All elements attached to the document, in document order
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.descendants(self.root)
            .filter(move |id| self.element(*id).is_some())
    }

    /// First element in document order whose `id` attribute equals `id`
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.elements().find(|node| self.attr(*node, "id") == Some(id))
    }

    /// Concatenated, entity-decoded text of every text node below `id`
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        match &self.nodes[id.0].data {
            NodeData::Text(raw) => out.push_str(&html_escape::decode_html_entities(raw)),
            NodeData::Document | NodeData::Element(_) => {
                for node in self.descendants(id) {
                    if let NodeData::Text(raw) = &self.nodes[node.0].data {
                        out.push_str(&html_escape::decode_html_entities(raw));
                    }
                }
            }
            _ => {}
        }
        out
    }

    fn push_node(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            data,
        });
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag_name: &str, attrs: &[(&str, &str)]) -> NodeId {
        let attrs = attrs.iter().map(|(n, v)| Attribute::new(n, v)).collect();
        self.push_node(NodeData::Element(ElementData::new(tag_name, attrs)))
    }

    /// Create a detached text node holding `text` literally
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push_node(NodeData::Text(html_escape::encode_text(text).into_owned()))
    }

    pub(crate) fn node_data_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0].data
    }

    pub(crate) fn create_node(&mut self, data: NodeData) -> NodeId {
        self.push_node(data)
    }

    /// Append `child` as the last child of `parent`, detaching it first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TocError> {
        if child == self.root {
            return Err(TocError::Generic("cannot append the document root".to_string()));
        }
        if !matches!(self.nodes[parent.0].data, NodeData::Document | NodeData::Element(_)) {
            return Err(TocError::Generic("append target cannot have children".to_string()));
        }

        let mut cursor = Some(parent);
        while let Some(node) = cursor {
            if node == child {
                return Err(TocError::Generic("append would create a cycle".to_string()));
            }
            cursor = self.parent(node);
        }

        if let Some(old_parent) = self.parent(child) {
            self.nodes[old_parent.0].children.retain(|id| *id != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }
}

/// Iterator returned by [`Document::descendants`]
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let next = self.stack.pop()?;
        self.stack
            .extend(self.doc.children(next).iter().rev().copied());
        Some(next)
    }
}
