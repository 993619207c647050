//! Minimal view of a document: a queryable, mutable tree of labeled nodes.
//!
//! The browser front-end implements [`Dom`] over `web_sys::Document`; tests use
//! [`crate::MemoryDom`]. The controller only ever talks to this trait, so every
//! page behavior can be exercised without a live page runtime.

/// Handle-based access to the elements a page controller reads and mutates.
pub trait Dom {
    /// Cheap handle to an element. Handles stay valid for the page lifetime.
    type Node: Clone;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    /// All elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Node>;
    /// All elements carrying attribute `name`, in document order.
    fn elements_with_attribute(&self, name: &str) -> Vec<Self::Node>;

    fn node_id(&self, node: &Self::Node) -> Option<String>;
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    /// Inline `display` value, `None` when unset.
    fn display(&self, node: &Self::Node) -> Option<String>;

    fn add_class(&mut self, node: &Self::Node, class: &str);
    fn remove_class(&mut self, node: &Self::Node, class: &str);
    /// Flip `class`; returns whether the class is present afterwards.
    fn toggle_class(&mut self, node: &Self::Node, class: &str) -> bool;
    fn set_display(&mut self, node: &Self::Node, value: &str);

    /// Attribute on the document root element (`<html>`).
    fn root_attribute(&self, name: &str) -> Option<String>;
}

/// A single change to apply to the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mutation<N> {
    AddClass { node: N, class: String },
    RemoveClass { node: N, class: String },
    ToggleClass { node: N, class: String },
    SetDisplay { node: N, value: String },
}

/// Apply `mutations` in order.
pub fn apply<D: Dom>(dom: &mut D, mutations: &[Mutation<D::Node>]) {
    for m in mutations {
        match m {
            Mutation::AddClass { node, class } => dom.add_class(node, class),
            Mutation::RemoveClass { node, class } => dom.remove_class(node, class),
            Mutation::ToggleClass { node, class } => {
                dom.toggle_class(node, class);
            }
            Mutation::SetDisplay { node, value } => dom.set_display(node, value),
        }
    }
}
