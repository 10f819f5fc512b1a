//! In-memory document implementing [`RenderPort`].
//!
//! `MemoryDom` is the host adapter used by the `hero` binary and by tests. It
//! stores nodes in an arena guarded by a mutex, supports attaching an open
//! shadow root to an element, and serializes to HTML with shadow roots
//! rendered as declarative `<template shadowrootmode="open">` blocks.

use std::fmt::Write as _;

use parking_lot::Mutex;

use crate::port::{NodeId, RenderPort};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

#[derive(Debug, Clone)]
enum Kind {
    Element(String),
    Text(String),
    ShadowRoot,
}

#[derive(Debug, Clone)]
struct Node {
    kind: Kind,
    /// Attributes in insertion order.
    attrs: Vec<(String, String)>,
    /// Inline style properties in insertion order.
    style: Vec<(String, String)>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    /// Shadow root attached to this element, if any.
    shadow: Option<NodeId>,
}

impl Node {
    fn new(kind: Kind) -> Self {
        Self {
            kind,
            attrs: Vec::new(),
            style: Vec::new(),
            children: Vec::new(),
            parent: None,
            shadow: None,
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    nodes: Vec<Node>,
    preloads: Vec<String>,
}

impl Inner {
    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.get(child).and_then(|n| n.parent) else {
            return;
        };
        if let Some(p) = self.get_mut(parent) {
            p.children.retain(|c| *c != child);
        }
        if let Some(c) = self.get_mut(child) {
            c.parent = None;
        }
    }

    /// Whether `node` is `ancestor` or lies below it.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.get(id).and_then(|n| n.parent);
        }
        false
    }

    fn text_into(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else { return };
        if let Kind::Text(t) = &node.kind {
            out.push_str(t);
        }
        for c in &node.children {
            self.text_into(*c, out);
        }
    }

    fn html_into(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else { return };
        match &node.kind {
            Kind::Text(t) => out.push_str(&escape(t, false)),
            Kind::ShadowRoot => {
                out.push_str("<template shadowrootmode=\"open\">");
                for c in &node.children {
                    self.html_into(*c, out);
                }
                out.push_str("</template>");
            }
            Kind::Element(tag) => {
                let _ignored = write!(out, "<{}", tag);
                let mut style_done = false;
                for (k, v) in &node.attrs {
                    let v = if k == "style" {
                        style_done = true;
                        merged_style(v, &node.style)
                    } else {
                        v.clone()
                    };
                    let _ignored = write!(out, " {}=\"{}\"", k, escape(&v, true));
                }
                if !style_done && !node.style.is_empty() {
                    let _ignored = write!(out, " style=\"{}\"", escape(&merged_style("", &node.style), true));
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }
                if let Some(shadow) = node.shadow {
                    self.html_into(shadow, out);
                }
                // Raw text elements keep their content verbatim.
                let raw = tag == "style" || tag == "script";
                for c in &node.children {
                    match self.get(*c).map(|n| &n.kind) {
                        Some(Kind::Text(t)) if raw => out.push_str(t),
                        _ => self.html_into(*c, out),
                    }
                }
                let _ignored = write!(out, "</{}>", tag);
            }
        }
    }
}

fn merged_style(attr: &str, props: &[(String, String)]) -> String {
    let mut parts: Vec<String> = Vec::new();
    let attr = attr.trim().trim_end_matches(';');
    if !attr.is_empty() {
        parts.push(attr.to_string());
    }
    parts.extend(props.iter().map(|(k, v)| format!("{}:{}", k, v)));
    parts.join(";")
}

fn escape(s: &str, attr: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Arena-backed document.
#[derive(Debug, Default)]
pub struct MemoryDom {
    inner: Mutex<Inner>,
}

impl MemoryDom {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached element to act as a document root or mount host.
    pub fn create_root(&self, tag: &str) -> NodeId {
        self.create_element(tag)
    }

    /// Attach an open shadow root to `host` and return it. Returns the existing
    /// root if one is already attached.
    pub fn attach_shadow(&self, host: NodeId) -> NodeId {
        let mut g = self.inner.lock();
        if let Some(existing) = g.get(host).and_then(|n| n.shadow) {
            return existing;
        }
        let mut root = Node::new(Kind::ShadowRoot);
        root.parent = Some(host);
        let id = g.push(root);
        if let Some(h) = g.get_mut(host) {
            h.shadow = Some(id);
        }
        id
    }

    /// Shadow root attached to `host`, if any.
    pub fn shadow_root(&self, host: NodeId) -> Option<NodeId> {
        self.inner.lock().get(host).and_then(|n| n.shadow)
    }

    /// Element tag name; `None` for text nodes and shadow roots.
    pub fn tag(&self, node: NodeId) -> Option<String> {
        match self.inner.lock().get(node).map(|n| &n.kind) {
            Some(Kind::Element(tag)) => Some(tag.clone()),
            _ => None,
        }
    }

    /// Whether `node` is a text node.
    pub fn is_text(&self, node: NodeId) -> bool {
        matches!(
            self.inner.lock().get(node).map(|n| &n.kind),
            Some(Kind::Text(_))
        )
    }

    /// Attribute value, if set.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        let g = self.inner.lock();
        g.get(node)?
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    /// Inline style property value, if set.
    pub fn style_property(&self, node: NodeId, name: &str) -> Option<String> {
        let g = self.inner.lock();
        g.get(node)?
            .style
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    /// Light-tree children in order.
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.inner
            .lock()
            .get(node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    /// Parent node; a shadow root's parent is its host.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.inner.lock().get(node).and_then(|n| n.parent)
    }

    /// Concatenated text of `node` and its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.inner.lock().text_into(node, &mut out);
        out
    }

    /// Descendants of `root` (depth first, excluding `root`) whose `class`
    /// attribute contains `class`.
    pub fn find_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        let g = self.inner.lock();
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = g
            .get(root)
            .map(|n| n.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(id) = stack.pop() {
            let Some(node) = g.get(id) else { continue };
            let hit = node
                .attrs
                .iter()
                .any(|(k, v)| k == "class" && v.split_whitespace().any(|c| c == class));
            if hit {
                found.push(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        found
    }

    /// Image sources passed to [`RenderPort::preload_image`], in order.
    pub fn preloaded(&self) -> Vec<String> {
        self.inner.lock().preloads.clone()
    }

    /// Serialize `node` and its subtree (including shadow roots) to HTML.
    pub fn to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.inner.lock().html_into(node, &mut out);
        out
    }
}

impl RenderPort for MemoryDom {
    fn create_element(&self, tag: &str) -> NodeId {
        self.inner
            .lock()
            .push(Node::new(Kind::Element(tag.to_ascii_lowercase())))
    }

    fn create_text(&self, text: &str) -> NodeId {
        self.inner.lock().push(Node::new(Kind::Text(text.to_string())))
    }

    fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        let mut g = self.inner.lock();
        let Some(n) = g.get_mut(node) else { return };
        match n.attrs.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => n.attrs.push((name.to_string(), value.to_string())),
        }
    }

    fn set_text(&self, node: NodeId, text: &str) {
        let mut g = self.inner.lock();
        let old = match g.get_mut(node) {
            Some(n) => std::mem::take(&mut n.children),
            None => return,
        };
        for c in old {
            if let Some(child) = g.get_mut(c) {
                child.parent = None;
            }
        }
        let mut t = Node::new(Kind::Text(text.to_string()));
        t.parent = Some(node);
        let id = g.push(t);
        if let Some(n) = g.get_mut(node) {
            n.children.push(id);
        }
    }

    fn set_style_property(&self, node: NodeId, name: &str, value: &str) {
        let mut g = self.inner.lock();
        let Some(n) = g.get_mut(node) else { return };
        match n.style.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => n.style.push((name.to_string(), value.to_string())),
        }
    }

    fn append_child(&self, parent: NodeId, child: NodeId) {
        let mut g = self.inner.lock();
        if g.get(parent).is_none() || g.get(child).is_none() || g.contains(child, parent) {
            return;
        }
        g.detach(child);
        if let Some(c) = g.get_mut(child) {
            c.parent = Some(parent);
        }
        if let Some(p) = g.get_mut(parent) {
            p.children.push(child);
        }
    }

    fn preload_image(&self, src: &str) {
        self.inner.lock().preloads.push(src.to_string());
    }
}
