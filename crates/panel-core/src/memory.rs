//! In-memory [`Dom`] used by host-side tests and tooling.

use crate::dom::Dom;
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Index of an element inside a [`MemoryDom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug, Default)]
pub struct MemoryElement {
    pub id: Option<String>,
    pub classes: SmallVec<[String; 4]>,
    pub display: Option<String>,
    pub attributes: FnvHashMap<String, String>,
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_display(mut self, value: &str) -> Self {
        self.display = Some(value.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Flat, document-ordered element list with an id index.
#[derive(Clone, Debug, Default)]
pub struct MemoryDom {
    elements: Vec<MemoryElement>,
    ids: FnvHashMap<String, NodeId>,
    root_attributes: FnvHashMap<String, String>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element; the first element registered under an id wins lookups.
    pub fn push(&mut self, element: MemoryElement) -> NodeId {
        let node = NodeId(self.elements.len());
        if let Some(id) = &element.id {
            self.ids.entry(id.clone()).or_insert(node);
        }
        self.elements.push(element);
        node
    }

    /// Append a plain element carrying only an id.
    pub fn push_id(&mut self, id: &str) -> NodeId {
        self.push(MemoryElement::new().with_id(id))
    }

    pub fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.root_attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, node: NodeId) -> Option<&MemoryElement> {
        self.elements.get(node.0)
    }

    pub fn by_id(&self, id: &str) -> Option<&MemoryElement> {
        self.ids.get(id).and_then(|n| self.get(*n))
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut MemoryElement> {
        self.elements.get_mut(node.0)
    }

    fn select(&self, pred: impl Fn(&MemoryElement) -> bool) -> Vec<NodeId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| pred(el))
            .map(|(i, _)| NodeId(i))
            .collect()
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.select(|el| el.has_class(class))
    }

    fn elements_with_attribute(&self, name: &str) -> Vec<NodeId> {
        self.select(|el| el.attributes.contains_key(name))
    }

    fn node_id(&self, node: &NodeId) -> Option<String> {
        self.get(*node).and_then(|el| el.id.clone())
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.get(*node).and_then(|el| el.attributes.get(name).cloned())
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.get(*node).is_some_and(|el| el.has_class(class))
    }

    fn display(&self, node: &NodeId) -> Option<String> {
        self.get(*node).and_then(|el| el.display.clone())
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        if let Some(el) = self.get_mut(*node) {
            if !el.has_class(class) {
                el.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        if let Some(el) = self.get_mut(*node) {
            el.classes.retain(|c| c != class);
        }
    }

    fn toggle_class(&mut self, node: &NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            self.has_class(node, class)
        }
    }

    fn set_display(&mut self, node: &NodeId, value: &str) {
        if let Some(el) = self.get_mut(*node) {
            el.display = Some(value.to_string());
        }
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root_attributes.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_id_wins() {
        let mut dom = MemoryDom::new();
        let first = dom.push(MemoryElement::new().with_id("dup").with_class("a"));
        dom.push(MemoryElement::new().with_id("dup").with_class("b"));
        assert_eq!(dom.element_by_id("dup"), Some(first));
    }

    #[test]
    fn toggle_reports_presence() {
        let mut dom = MemoryDom::new();
        let n = dom.push_id("menu");
        assert!(dom.toggle_class(&n, "show"));
        assert!(!dom.toggle_class(&n, "show"));
        assert!(dom.get(n).is_some_and(|el| el.classes.is_empty()));
    }
}
