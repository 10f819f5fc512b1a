//! In-memory host page with an isolated mount point.

use std::sync::Arc;

use hero_engine::{MemoryDom, NodeId, RenderPort};

/// `<body>` holding a single host element whose shadow root receives the widget.
pub struct Page {
    pub dom: Arc<MemoryDom>,
    pub body: NodeId,
    /// Shadow root of the host element.
    pub root: NodeId,
}

impl Page {
    /// Build the page with a host element carrying `target_id`.
    pub fn new(target_id: &str) -> Self {
        let dom = Arc::new(MemoryDom::new());
        let body = dom.create_root("body");
        let host = dom.create_element("div");
        dom.set_attribute(host, "id", target_id);
        dom.append_child(body, host);
        let root = dom.attach_shadow(host);
        Self { dom, body, root }
    }

    pub fn to_html(&self) -> String {
        self.dom.to_html(self.body)
    }
}
