//! Carousel configuration: data model, JSON parsing, and configuration sources.
#![allow(missing_docs)]

mod defaults;
mod error;
mod loader;
pub mod test_support;
mod types;

#[cfg(test)]
mod test_loader;
#[cfg(test)]
mod test_parse;

pub use defaults::{
    DEFAULT_ARIA_LABEL, DEFAULT_CONFIG_LOCATION, DEFAULT_CTA, DEFAULT_INTERVAL_MS,
    MIN_INTERVAL_MS,
};
pub use error::{Error, Result, excerpt_at};
pub use loader::{
    ConfigSource, FileSource, HttpSource, StaticSource, load, load_from_str, source_for,
};
pub use types::{CarouselConfig, SlideSpec};
