//! In-memory document
//!
//! Arena of element nodes addressed by [`NodeId`]. Covers just enough of the
//! DOM for tab selection: tree structure, attributes, the class list (kept in
//! the `class` attribute) and HTML label association.
//!
//! The first root created is the document tree; `element_by_id` only searches
//! there. Later roots are detached subtrees.

use crate::document::TabDocument;
use crate::error::{Result, TabSelectionError};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    tag_name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: HashMap<String, String>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new element under `parent` (or as a new root) and returns it.
    pub fn create_element(&mut self, parent: Option<NodeId>, tag_name: &str) -> Result<NodeId> {
        if let Some(parent) = parent {
            self.node(parent)?;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag_name: tag_name.to_ascii_lowercase(),
            parent,
            children: Vec::new(),
            attributes: HashMap::new(),
        });
        match parent {
            Some(parent) => self.node_mut(parent)?.children.push(id),
            None => self.roots.push(id),
        }
        Ok(id)
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        self.node_mut(node)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node).ok()?.attributes.get(name).map(String::as_str)
    }

    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.node(node).ok().map(|n| n.tag_name.as_str())
    }

    /// Tokens of the `class` attribute
    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.attribute(node, "class")
            .map(|value| value.split_whitespace().map(String::from).collect())
            .unwrap_or_default()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).ok()?.parent
    }

    fn node(&self, node: NodeId) -> Result<&Node> {
        self.nodes
            .get(node.0)
            .ok_or_else(|| TabSelectionError::Dom(format!("unknown node {node:?}")))
    }

    fn node_mut(&mut self, node: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(node.0)
            .ok_or_else(|| TabSelectionError::Dom(format!("unknown node {node:?}")))
    }

    fn root_of(&self, mut node: NodeId) -> NodeId {
        while let Some(parent) = self.parent(node) {
            node = parent;
        }
        node
    }

    /// `root` and its descendants in tree order
    fn tree_order(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let Ok(n) = self.node(node) else { continue };
            out.push(node);
            stack.extend(n.children.iter().rev().copied());
        }
        out
    }

    fn find_by_id_in(&self, root: NodeId, id: &str) -> Option<NodeId> {
        self.tree_order(root)
            .into_iter()
            .find(|&n| self.attribute(n, "id") == Some(id))
    }

    fn is_tag(&self, node: NodeId, tag: &str) -> bool {
        self.tag_name(node) == Some(tag)
    }

    /// `<input type=hidden>` is the only input that is not labelable
    fn is_labelable(&self, node: NodeId) -> bool {
        self.is_tag(node, "input")
            && !self
                .attribute(node, "type")
                .is_some_and(|t| t.eq_ignore_ascii_case("hidden"))
    }

    /// Target of a label within its own tree: the element named by `for`,
    /// otherwise the first labelable input inside the label.
    fn labeled_control(&self, label: NodeId) -> Option<NodeId> {
        let control = match self.attribute(label, "for") {
            Some(target) => self.find_by_id_in(self.root_of(label), target)?,
            None => self
                .tree_order(label)
                .into_iter()
                .skip(1)
                .find(|&n| self.is_labelable(n))?,
        };
        self.is_labelable(control).then_some(control)
    }
}

impl TabDocument for MemoryDocument {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let document = *self.roots.first()?;
        self.find_by_id_in(document, id)
    }

    fn input_descendants(&self, container: &NodeId) -> Vec<NodeId> {
        self.tree_order(*container)
            .into_iter()
            .skip(1)
            .filter(|&n| self.is_tag(n, "input"))
            .collect()
    }

    fn first_label(&self, input: &NodeId) -> Option<NodeId> {
        if !self.is_labelable(*input) {
            return None;
        }
        self.tree_order(self.root_of(*input))
            .into_iter()
            .filter(|&n| self.is_tag(n, "label"))
            .find(|&label| self.labeled_control(label) == Some(*input))
    }

    fn parent_element(&self, node: &NodeId) -> Option<NodeId> {
        self.parent(*node)
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.classes(*node).iter().any(|c| c == class)
    }

    fn add_class(&mut self, node: &NodeId, class: &str) -> Result<()> {
        self.node(*node)?;
        let mut classes = self.classes(*node);
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
        self.set_attribute(*node, "class", &classes.join(" "))
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) -> Result<()> {
        self.node(*node)?;
        let mut classes = self.classes(*node);
        classes.retain(|c| c != class);
        self.set_attribute(*node, "class", &classes.join(" "))
    }

    fn describe(&self, node: &NodeId) -> String {
        let tag = self.tag_name(*node).unwrap_or("?");
        match self.attribute(*node, "id") {
            Some(id) => format!("<{} id=\"{}\">", tag, id),
            None => format!("<{}>", tag),
        }
    }
}
