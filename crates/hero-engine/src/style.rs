//! Stylesheet for the hero widget.

/// Custom property controlling slide height.
pub const HEIGHT_PROPERTY: &str = "--hero-height";

/// Base rules. Scoped by the host's isolated root, so selectors stay short.
pub const BASE_CSS: &str = r#"
:host, .hero { display:block; position:relative; overflow:hidden; }
.track { display:flex; transition:transform 600ms ease; will-change:transform; }
.slide { min-width:100%; height:var(--hero-height, 60vh); position:relative; }
.slide img { width:100%; height:100%; object-fit:cover; display:block; }
.caption { position:absolute; inset:auto 0 0 0; padding:2rem; color:white;
           background:linear-gradient(transparent, rgba(0,0,0,.55)); font:600 1rem/1.3 system-ui; }
.nav { position:absolute; inset:0; display:flex; justify-content:space-between; align-items:center; pointer-events:none; }
.btn { pointer-events:auto; background:rgba(0,0,0,.35); border:none; color:white; padding:.6rem .8rem; margin:.5rem; border-radius:.75rem; cursor:pointer; }
.dots { position:absolute; inset:auto 0 1rem 0; display:flex; gap:.5rem; justify-content:center; }
.dot { width:.6rem; height:.6rem; border-radius:50%; background:rgba(255,255,255,.5); border:none; cursor:pointer; }
.dot[aria-current="true"]{ background:white; }
"#;

/// Base rules followed by `extra`, so later declarations in `extra` win.
pub fn stylesheet(extra: &str) -> String {
    let mut css = String::with_capacity(BASE_CSS.len() + extra.len());
    css.push_str(BASE_CSS);
    css.push_str(extra);
    css
}
