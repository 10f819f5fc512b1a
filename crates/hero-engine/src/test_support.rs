//! Test support utilities for hero-engine unit and integration tests.
//! These helpers are public to avoid dead_code warnings and are lightweight.

use std::sync::Arc;

use config::StaticSource;

use crate::{HeroView, MemoryDom, Mount, NodeId, mount};

/// A document with a host element and an attached shadow root.
pub struct TestPage {
    /// Document holding the page.
    pub dom: Arc<MemoryDom>,
    /// Host element carrying the shadow root.
    pub host: NodeId,
    /// Shadow root the widget mounts into.
    pub root: NodeId,
}

impl TestPage {
    /// Fresh document with an empty shadow root.
    pub fn new() -> Self {
        let dom = Arc::new(MemoryDom::new());
        let host = dom.create_root("div");
        let root = dom.attach_shadow(host);
        Self { dom, host, root }
    }

    /// Mount a widget from an inline JSON document into the shadow root.
    pub async fn mount_json(&self, json: &str) -> Mount {
        let source = StaticSource::new(json);
        mount(self.dom.clone(), self.root, &source).await
    }

    /// Indices of the dots currently marked `aria-current="true"`.
    pub fn current_dots(&self, view: &HeroView) -> Vec<usize> {
        view.dots
            .iter()
            .enumerate()
            .filter(|(_, d)| self.dom.attribute(**d, "aria-current").as_deref() == Some("true"))
            .map(|(i, _)| i)
            .collect()
    }
}

impl Default for TestPage {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON document with `n` image-only slides.
pub fn slides_json(n: usize, autoplay: bool, interval_ms: Option<u64>) -> String {
    let slides: Vec<String> = (0..n)
        .map(|i| format!(r#"{{"src":"slide-{i}.jpg","alt":"Slide {i}"}}"#))
        .collect();
    let interval = interval_ms
        .map(|ms| format!(r#","interval":{ms}"#))
        .unwrap_or_default();
    format!(
        r#"{{"slides":[{}],"autoplay":{}{}}}"#,
        slides.join(","),
        autoplay,
        interval
    )
}
