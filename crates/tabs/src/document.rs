use crate::error::Result;
use std::fmt::Debug;

/// Minimal DOM surface the tab controller needs.
///
/// Implemented over `web_sys::Document` in the browser and by
/// [`crate::MemoryDocument`] everywhere else.
pub trait TabDocument {
    /// Handle to an element. Equality must be node identity.
    type Node: Clone + PartialEq + Debug;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// All `<input>` descendants of `container`, in document order.
    fn input_descendants(&self, container: &Self::Node) -> Vec<Self::Node>;

    /// First entry of the input's `labels` list.
    fn first_label(&self, input: &Self::Node) -> Option<Self::Node>;

    fn parent_element(&self, node: &Self::Node) -> Option<Self::Node>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn add_class(&mut self, node: &Self::Node, class: &str) -> Result<()>;

    fn remove_class(&mut self, node: &Self::Node, class: &str) -> Result<()>;

    /// Short human-readable form for log output
    fn describe(&self, node: &Self::Node) -> String;
}
