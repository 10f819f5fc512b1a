//! Hero Engine
//!
//! The core of the hero carousel widget:
//! - [`RenderPort`]: the node-building surface a host provides
//! - [`render`]: builds the style block and hero region from a configuration
//! - [`CarouselController`]: cyclic navigation, auto-advance, and hover pause
//! - [`mount`]: the load, render, attach sequence with its fallback path
//!
//! [`MemoryDom`] is an in-memory [`RenderPort`] used by the `hero` binary and tests.

mod controller;
mod dom;
mod mount;
mod port;
mod renderer;
pub mod style;
pub mod test_support;
mod ticker;

pub use controller::{CarouselController, CarouselState, Trigger};
pub use dom::MemoryDom;
pub use mount::{FALLBACK_TEXT, Hero, LOG_TARGET, Mount, mount, render_fallback};
pub use port::{DomEvent, NodeId, RenderPort};
pub use renderer::{HeroView, render};
pub use ticker::Ticker;
