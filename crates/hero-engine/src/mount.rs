//! Mount sequence: load configuration, render, attach the controller, or fall
//! back to a diagnostic message.

use std::sync::Arc;

use config::{ConfigSource, Error};
use tracing::error;

use crate::{
    controller::{CarouselController, CarouselState},
    port::{DomEvent, NodeId, RenderPort},
    renderer::{HeroView, render},
};

/// Text shown in the container when the configuration cannot be loaded.
pub const FALLBACK_TEXT: &str = "Hero failed to load.";

/// Tracing target for the widget's load-failure diagnostic.
pub const LOG_TARGET: &str = "hero_widget";

/// A rendered, running carousel.
pub struct Hero {
    view: HeroView,
    controller: CarouselController,
}

impl Hero {
    /// Nodes built by the renderer.
    pub fn view(&self) -> &HeroView {
        &self.view
    }

    /// The controller driving this widget.
    pub fn controller(&self) -> &CarouselController {
        &self.controller
    }

    /// Route a host event; see [`CarouselController::dispatch`].
    pub fn dispatch(&self, node: NodeId, event: DomEvent) -> bool {
        self.controller.dispatch(node, event)
    }

    /// Snapshot of the carousel state.
    pub fn state(&self) -> CarouselState {
        self.controller.state()
    }

    /// Stop auto-advance for good. Call before removing the widget from the page.
    pub fn dispose(&self) {
        self.controller.dispose();
    }
}

/// Outcome of [`mount`].
pub enum Mount {
    /// The widget was rendered and its controller attached.
    Ready(Hero),
    /// The fallback message was rendered; carries the load error.
    Fallback(Error),
}

impl Mount {
    /// The mounted widget, if loading succeeded.
    pub fn hero(&self) -> Option<&Hero> {
        match self {
            Self::Ready(h) => Some(h),
            Self::Fallback(_) => None,
        }
    }
}

/// Append the fallback message to `container`.
pub fn render_fallback(port: &dyn RenderPort, container: NodeId) -> NodeId {
    let msg = port.create_element("pre");
    port.set_text(msg, FALLBACK_TEXT);
    port.append_child(container, msg);
    msg
}

/// Load the configuration from `source` and build the widget inside `container`.
///
/// On failure the fallback message is rendered, one error is logged under
/// [`LOG_TARGET`], and no controller is created.
pub async fn mount(
    port: Arc<dyn RenderPort>,
    container: NodeId,
    source: &dyn ConfigSource,
) -> Mount {
    let cfg = match config::load(source).await {
        Ok(cfg) => cfg,
        Err(e) => {
            render_fallback(&*port, container);
            error!(target: LOG_TARGET, location = source.location(), error = %e, "hero_load_failed");
            return Mount::Fallback(e);
        }
    };
    let view = render(&*port, container, &cfg);
    let controller = CarouselController::new(port, &view, cfg.autoplay_interval());
    Mount::Ready(Hero { view, controller })
}
