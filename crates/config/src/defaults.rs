// Defaults and constants for carousel configuration

/// Auto-advance period used when the document omits `interval`.
pub const DEFAULT_INTERVAL_MS: u64 = 5000;

/// Lower bound applied to every auto-advance period.
pub const MIN_INTERVAL_MS: u64 = 1500;

/// Accessible label for the hero region when `ariaLabel` is absent.
pub const DEFAULT_ARIA_LABEL: &str = "Featured";

/// Link text used when a slide has an `href` but no `cta`.
pub const DEFAULT_CTA: &str = "Learn more";

/// Location the host adapter falls back to when none is configured.
pub const DEFAULT_CONFIG_LOCATION: &str = "hero/config.json";
