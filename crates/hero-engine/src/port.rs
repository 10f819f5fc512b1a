//! Rendering port: the narrow DOM surface the renderer and controller drive.

use std::fmt;

/// Opaque handle to a node owned by a [`RenderPort`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Build a handle from a port-specific index.
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// Port-specific index behind this handle.
    pub fn raw(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Host events the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomEvent {
    /// Primary activation of a button.
    Click,
    /// Pointer moved onto the node.
    PointerEnter,
    /// Pointer moved off the node.
    PointerLeave,
}

/// Minimal node-building API.
///
/// Implementations own the node storage; handles are only meaningful to the
/// port that created them. All operations are infallible: a port that cannot
/// honour a call drops it.
pub trait RenderPort: Send + Sync {
    /// Create a detached element.
    fn create_element(&self, tag: &str) -> NodeId;
    /// Create a detached text node.
    fn create_text(&self, text: &str) -> NodeId;
    /// Set or replace an attribute.
    fn set_attribute(&self, node: NodeId, name: &str, value: &str);
    /// Replace the node's children with a single text node.
    fn set_text(&self, node: NodeId, text: &str);
    /// Set an inline style property, including custom properties (`--name`).
    fn set_style_property(&self, node: NodeId, name: &str, value: &str);
    /// Append `child` as the last child of `parent`.
    fn append_child(&self, parent: NodeId, child: NodeId);
    /// Hint that an image will be needed soon.
    fn preload_image(&self, _src: &str) {}
}
