//! Carousel state machine: cyclic navigation, auto-advance, and hover pause.
//!
//! The controller owns the current index and the single auto-advance timer.
//! User input reaches it either as a [`Trigger`] or through
//! [`CarouselController::dispatch`], which resolves a host event on a node
//! against the bindings registered at construction.
//!
//! States are Idle (no timer) and Playing (timer scheduled). Playing is only
//! reachable when autoplay is configured and there is at least one slide.

use std::{
    sync::{
        Arc, Weak,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, trace};

use crate::{
    port::{DomEvent, NodeId, RenderPort},
    renderer::HeroView,
    ticker::Ticker,
};

/// Snapshot of the runtime state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    /// Always `< slide_count` when `slide_count > 0`; zero otherwise.
    pub current_index: usize,
    /// Number of configured slides.
    pub slide_count: usize,
    /// Whether auto-advance is scheduled.
    pub timer_active: bool,
}

/// Named transitions of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Show the previous slide, wrapping from the first to the last.
    Prev,
    /// Show the next slide, wrapping from the last to the first.
    Next,
    /// Jump to a slide; any integer is accepted and wrapped.
    GoTo(i64),
    /// Pointer entered the hero region: pause.
    PointerEnter,
    /// Pointer left the hero region: resume if autoplay is configured.
    PointerLeave,
}

/// A host event on a node that maps to a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Binding {
    node: NodeId,
    event: DomEvent,
    trigger: Trigger,
}

/// Position within the slides plus the nodes that reflect it.
#[derive(Debug)]
struct Track {
    index: usize,
    count: usize,
    track: NodeId,
    dots: Vec<NodeId>,
    /// Publishes the index after every transition.
    changes: watch::Sender<usize>,
}

impl Track {
    /// Move to `i` modulo the slide count and update the visual state.
    fn go(&mut self, port: &dyn RenderPort, i: i64) {
        if self.count == 0 {
            return;
        }
        // count fits in i64 for any realistic slide list.
        self.index = i.rem_euclid(self.count as i64) as usize;
        let offset = -100 * self.index as i64;
        port.set_style_property(self.track, "transform", &format!("translateX({}%)", offset));
        for (j, dot) in self.dots.iter().enumerate() {
            let current = if j == self.index { "true" } else { "false" };
            port.set_attribute(*dot, "aria-current", current);
        }
        self.changes.send_replace(self.index);
        trace!(index = self.index, "slide");
    }

    fn step(&mut self, port: &dyn RenderPort, delta: i64) {
        let target = self.index as i64 + delta;
        self.go(port, target);
    }
}

/// Drives one rendered hero.
///
/// Dropping the controller cancels the auto-advance timer. Once disposed,
/// the controller never schedules auto-advance again.
pub struct CarouselController {
    port: Arc<dyn RenderPort>,
    track: Arc<Mutex<Track>>,
    ticker: Ticker,
    /// Effective period when autoplay is configured.
    autoplay: Option<Duration>,
    bindings: Vec<Binding>,
    disposed: AtomicBool,
}

impl CarouselController {
    /// Attach to a rendered view, show the first slide, and start auto-advance
    /// when `autoplay` is set.
    ///
    /// Must be called from within a tokio runtime when `autoplay` is set and
    /// the view has slides.
    pub fn new(port: Arc<dyn RenderPort>, view: &HeroView, autoplay: Option<Duration>) -> Self {
        let mut bindings = vec![
            Binding {
                node: view.prev,
                event: DomEvent::Click,
                trigger: Trigger::Prev,
            },
            Binding {
                node: view.next,
                event: DomEvent::Click,
                trigger: Trigger::Next,
            },
            Binding {
                node: view.hero,
                event: DomEvent::PointerEnter,
                trigger: Trigger::PointerEnter,
            },
            Binding {
                node: view.hero,
                event: DomEvent::PointerLeave,
                trigger: Trigger::PointerLeave,
            },
        ];
        bindings.extend(view.dots.iter().enumerate().map(|(i, dot)| Binding {
            node: *dot,
            event: DomEvent::Click,
            trigger: Trigger::GoTo(i as i64),
        }));

        let ctl = Self {
            port,
            track: Arc::new(Mutex::new(Track {
                index: 0,
                count: view.slide_count(),
                track: view.track,
                dots: view.dots.clone(),
                changes: watch::channel(0).0,
            })),
            ticker: Ticker::new(),
            autoplay,
            bindings,
            disposed: AtomicBool::new(false),
        };
        ctl.go_to(0);
        ctl.play();
        debug!(
            slides = view.slide_count(),
            autoplay_ms = autoplay.map(|d| d.as_millis() as u64),
            "carousel_attached"
        );
        ctl
    }

    /// Show slide `i` modulo the slide count. Does not change play state.
    pub fn go_to(&self, i: i64) {
        self.track.lock().go(&*self.port, i);
    }

    /// Show the next slide.
    pub fn next(&self) {
        self.track.lock().step(&*self.port, 1);
    }

    /// Show the previous slide.
    pub fn prev(&self) {
        self.track.lock().step(&*self.port, -1);
    }

    /// Enter Playing if autoplay is configured, there are slides, and the
    /// controller has not been disposed. Any previously scheduled timer is
    /// cancelled first.
    pub fn play(&self) {
        self.ticker.stop();
        if self.disposed.load(Ordering::SeqCst) {
            return;
        }
        let Some(interval) = self.autoplay else {
            return;
        };
        if self.track.lock().count == 0 {
            return;
        }
        let track: Weak<Mutex<Track>> = Arc::downgrade(&self.track);
        let port = self.port.clone();
        self.ticker.start(interval, move || {
            if let Some(track) = track.upgrade() {
                track.lock().step(&*port, 1);
            }
        });
        trace!("carousel_playing");
    }

    /// Enter Idle. Idempotent.
    pub fn pause(&self) {
        self.ticker.stop();
    }

    /// Pause while the pointer is over the hero region.
    pub fn pointer_enter(&self) {
        self.pause();
    }

    /// Resume auto-advance with a fresh period.
    pub fn pointer_leave(&self) {
        if self.autoplay.is_some() {
            self.play();
        }
    }

    /// Apply a named transition.
    pub fn handle(&self, trigger: Trigger) {
        trace!(?trigger, "trigger");
        match trigger {
            Trigger::Prev => self.prev(),
            Trigger::Next => self.next(),
            Trigger::GoTo(i) => self.go_to(i),
            Trigger::PointerEnter => self.pointer_enter(),
            Trigger::PointerLeave => self.pointer_leave(),
        }
    }

    /// Route a host event on `node` to its bound trigger. Returns whether a
    /// binding matched.
    pub fn dispatch(&self, node: NodeId, event: DomEvent) -> bool {
        let found = self
            .bindings
            .iter()
            .find(|b| b.node == node && b.event == event)
            .map(|b| b.trigger);
        match found {
            Some(trigger) => {
                self.handle(trigger);
                true
            }
            None => false,
        }
    }

    /// Receiver that observes the current index after every transition,
    /// including auto-advance ticks.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.track.lock().changes.subscribe()
    }

    /// Snapshot of the index, slide count, and timer state.
    pub fn state(&self) -> CarouselState {
        let t = self.track.lock();
        CarouselState {
            current_index: t.index,
            slide_count: t.count,
            timer_active: self.ticker.is_active(),
        }
    }

    /// Cancel auto-advance for good. Manual navigation keeps working, but
    /// [`Self::play`] and pointer-leave no longer schedule a timer.
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
        self.ticker.stop();
        debug!("carousel_disposed");
    }
}

impl Drop for CarouselController {
    fn drop(&mut self) {
        self.ticker.stop();
    }
}
