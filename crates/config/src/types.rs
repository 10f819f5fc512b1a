use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

use crate::defaults::{
    DEFAULT_ARIA_LABEL, DEFAULT_CTA, DEFAULT_INTERVAL_MS, MIN_INTERVAL_MS,
};

// ===== FIELD HELPERS =====

/// Accept a string, `null`, or a missing key. Empty strings are treated as not provided.
fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Accept a value or `null`, mapping `null` to the type's default.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ===== SLIDE =====

/// One slide: an image plus an optional caption and link.
///
/// Optional text fields are `None` when the key is missing, `null`, or the
/// empty string; a present value is always non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSpec {
    /// Image locator.
    pub src: String,
    /// Alternative text for the image.
    #[serde(default, deserialize_with = "de_null_default")]
    pub alt: String,
    #[serde(default, deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Link target for the caption.
    #[serde(default, deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Link label; only rendered together with `href`.
    #[serde(default, deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
}

impl SlideSpec {
    /// Create a slide showing only the image at `src`.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }

    /// Whether any caption field is present.
    pub fn has_caption(&self) -> bool {
        self.title.is_some() || self.subtitle.is_some() || self.href.is_some()
    }

    /// Link text for the caption.
    pub fn cta_or_default(&self) -> &str {
        self.cta.as_deref().unwrap_or(DEFAULT_CTA)
    }
}

// ===== CAROUSEL =====

/// Parsed carousel configuration document. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Slides in display order.
    #[serde(default, deserialize_with = "de_null_default")]
    pub slides: Vec<SlideSpec>,
    /// Whether the carousel advances on its own.
    #[serde(default, deserialize_with = "de_null_default")]
    pub autoplay: bool,
    /// Requested auto-advance period in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<f64>,
    /// CSS length overriding the slide height.
    #[serde(default, deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    /// Extra style rules appended after the base stylesheet.
    #[serde(default, deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
}

impl CarouselConfig {
    /// Number of slides in the document.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Auto-advance period after defaults and the lower bound are applied.
    ///
    /// A missing, zero, or non-finite interval takes the default.
    pub fn effective_interval(&self) -> Duration {
        let requested = match self.interval {
            Some(ms) if ms.is_finite() && ms != 0.0 => ms,
            _ => DEFAULT_INTERVAL_MS as f64,
        };
        let ms = requested.max(MIN_INTERVAL_MS as f64).round() as u64;
        Duration::from_millis(ms)
    }

    /// Auto-advance period, or `None` when autoplay is disabled.
    pub fn autoplay_interval(&self) -> Option<Duration> {
        self.autoplay.then(|| self.effective_interval())
    }

    pub fn aria_label_or_default(&self) -> &str {
        self.aria_label.as_deref().unwrap_or(DEFAULT_ARIA_LABEL)
    }

    pub fn css_or_empty(&self) -> &str {
        self.css.as_deref().unwrap_or("")
    }
}
