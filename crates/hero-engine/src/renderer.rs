//! Build the hero tree from a configuration.

use config::{CarouselConfig, SlideSpec};
use tracing::debug;

use crate::{
    port::{NodeId, RenderPort},
    style::{HEIGHT_PROPERTY, stylesheet},
};

/// Handles to the nodes the controller drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroView {
    /// The injected `<style>` element.
    pub style: NodeId,
    /// `section.hero`: pointer enter/leave target.
    pub hero: NodeId,
    /// `div.track`: translated to show the current slide.
    pub track: NodeId,
    /// Previous-slide button.
    pub prev: NodeId,
    /// Next-slide button.
    pub next: NodeId,
    /// One `article.slide` per configured slide, in order.
    pub slides: Vec<NodeId>,
    /// One `button.dot` per configured slide, in order.
    pub dots: Vec<NodeId>,
}

impl HeroView {
    /// Number of rendered slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// Create an element with a class attribute.
fn el(port: &dyn RenderPort, tag: &str, class: &str) -> NodeId {
    let n = port.create_element(tag);
    if !class.is_empty() {
        port.set_attribute(n, "class", class);
    }
    n
}

fn render_caption(port: &dyn RenderPort, slide: &SlideSpec) -> NodeId {
    let cap = el(port, "div", "caption");
    if let Some(title) = &slide.title {
        let h = el(port, "h2", "");
        port.set_attribute(h, "style", "margin:0 0 .25rem");
        port.set_text(h, title);
        port.append_child(cap, h);
    }
    if let Some(subtitle) = &slide.subtitle {
        let p = el(port, "p", "");
        port.set_attribute(p, "style", "margin:0");
        port.set_text(p, subtitle);
        port.append_child(cap, p);
    }
    if let Some(href) = &slide.href {
        let a = el(port, "a", "");
        port.set_attribute(a, "href", href);
        port.set_attribute(
            a,
            "style",
            "display:inline-block;margin-top:.75rem;color:white;text-decoration:underline",
        );
        port.set_text(a, slide.cta_or_default());
        port.append_child(cap, a);
    }
    cap
}

fn render_slide(port: &dyn RenderPort, slide: &SlideSpec) -> NodeId {
    let s = el(port, "article", "slide");
    let img = el(port, "img", "");
    port.set_attribute(img, "alt", &slide.alt);
    port.set_attribute(img, "src", &slide.src);
    port.set_attribute(img, "loading", "eager");
    port.set_attribute(img, "decoding", "async");
    port.append_child(s, img);
    if slide.has_caption() {
        let cap = render_caption(port, slide);
        port.append_child(s, cap);
    }
    s
}

fn nav_button(port: &dyn RenderPort, label: &str, glyph: &str) -> NodeId {
    let b = el(port, "button", "btn");
    port.set_attribute(b, "aria-label", label);
    port.set_text(b, glyph);
    b
}

/// Append a style block and the hero region to `container`.
///
/// Existing children of `container` are left in place. Navigation is not
/// wired here; the returned view is handed to the controller.
pub fn render(port: &dyn RenderPort, container: NodeId, cfg: &CarouselConfig) -> HeroView {
    let style = port.create_element("style");
    port.set_text(style, &stylesheet(cfg.css_or_empty()));
    port.append_child(container, style);

    let hero = el(port, "section", "hero");
    port.set_attribute(hero, "role", "region");
    port.set_attribute(hero, "aria-label", cfg.aria_label_or_default());
    let track = el(port, "div", "track");
    port.append_child(hero, track);

    let slides: Vec<NodeId> = cfg
        .slides
        .iter()
        .map(|slide| {
            let s = render_slide(port, slide);
            port.append_child(track, s);
            s
        })
        .collect();

    let nav = el(port, "div", "nav");
    let prev = nav_button(port, "Previous", "\u{25C0}");
    let next = nav_button(port, "Next", "\u{25B6}");
    port.append_child(nav, prev);
    port.append_child(nav, next);
    port.append_child(hero, nav);

    let dots_box = el(port, "div", "dots");
    let dots: Vec<NodeId> = (0..slides.len())
        .map(|i| {
            let d = el(port, "button", "dot");
            port.set_attribute(d, "aria-label", &format!("Go to slide {}", i + 1));
            port.append_child(dots_box, d);
            d
        })
        .collect();
    port.append_child(hero, dots_box);

    port.append_child(container, hero);

    if let Some(height) = &cfg.height {
        port.set_style_property(hero, HEIGHT_PROPERTY, height);
    }
    if let Some(second) = cfg.slides.get(1) {
        port.preload_image(&second.src);
    }

    debug!(slides = slides.len(), "hero_rendered");
    HeroView {
        style,
        hero,
        track,
        prev,
        next,
        slides,
        dots,
    }
}
