//! Capture tracing events into a shared buffer.
//!
//! [`CaptureLayer`] renders every event it sees with [`crate::fmt::render_event`]
//! and appends it to a [`Captured`] buffer. Hosts can drain the buffer to relay
//! widget diagnostics elsewhere; tests use it to assert on emitted logs.
//!
//! ```ignore
//! let (layer, captured) = logging::capture::layer();
//! let subscriber = tracing_subscriber::registry().with(layer);
//! let _guard = tracing::subscriber::set_default(subscriber);
//! ```

use std::{mem, sync::Arc};

use parking_lot::Mutex;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::fmt::{RenderedLog, render_event};

/// Shared handle to the events recorded by a [`CaptureLayer`].
#[derive(Debug, Clone, Default)]
pub struct Captured {
    /// Events in emission order.
    events: Arc<Mutex<Vec<RenderedLog>>>,
}

impl Captured {
    /// Snapshot of all recorded events.
    pub fn events(&self) -> Vec<RenderedLog> {
        self.events.lock().clone()
    }

    /// Recorded events emitted under `target`.
    pub fn for_target(&self, target: &str) -> Vec<RenderedLog> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.target == target)
            .cloned()
            .collect()
    }

    /// Remove and return all recorded events.
    pub fn drain(&self) -> Vec<RenderedLog> {
        mem::take(&mut *self.events.lock())
    }
}

/// Tracing layer that records rendered events.
#[derive(Debug, Clone)]
pub struct CaptureLayer {
    /// Destination buffer.
    sink: Captured,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let r = render_event(event);
        self.sink.events.lock().push(r);
    }
}

/// Create a capture layer together with the handle used to read what it records.
pub fn layer() -> (CaptureLayer, Captured) {
    let sink = Captured::default();
    (CaptureLayer { sink: sink.clone() }, sink)
}
