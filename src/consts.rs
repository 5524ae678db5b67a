/// Key width; non-ortho layouts use `key_h` for the width as well.
pub const KEY_W: u32 = 60;
pub const KEY_H: u32 = 56;

// The following are evaluated once from the constants above. Overriding
// `key_w`/`key_h` on a config value does not move them.

/// Gap between the two halves for the ortho layout generator.
pub const SPLIT_GAP: u32 = KEY_W / 2;

/// Combo box width.
pub const COMBO_W: u32 = KEY_W / 2 - 2;
/// Combo box height.
pub const COMBO_H: u32 = KEY_H / 2 - 2;

/// Curvature of rounded key rectangles.
pub const KEY_RX: u32 = 6;
pub const KEY_RY: u32 = 6;

/// Padding between keys.
pub const INNER_PAD_W: u32 = 2;
pub const INNER_PAD_H: u32 = 2;

/// Padding between layers.
pub const OUTER_PAD_W: u32 = KEY_W / 2;
pub const OUTER_PAD_H: u32 = KEY_H;

/// Spacing between lines of multi-line key labels.
pub const LINE_SPACING: u32 = 18;

/// Curve radius for combo dendrons.
pub const ARC_RADIUS: u32 = 6;

/// Length multiplier for combo dendrons.
pub const ARC_SCALE: f64 = 1.0;

/// Run the keymap preprocessor before structural parsing.
pub const PREPROCESS: bool = true;

pub const SKIP_BINDING_PARSING: bool = false;

/// Stylesheet embedded in every rendered SVG. Downstream rendering refers to
/// the `held`, `combo`, `ghost`, `label` and `small` classes by name.
pub const SVG_STYLE: &str = r#"/* font and background color specifications */
svg {
    font-family: SFMono-Regular,Consolas,Liberation Mono,Menlo,monospace;
    font-size: 14px;
    font-kerning: normal;
    text-rendering: optimizeLegibility;
    fill: #24292e;
}

/* default key styling */
rect {
    fill: #f6f8fa;
    stroke: #d6d8da;
    stroke-width: 1;
}

/* color accent for held keys */
.held {
    fill: #fdd;
}

/* color accent for combo boxes */
.combo {
    fill: #cdf;
}

/* color accent for ghost (optional) keys */
.ghost {
    fill: #ddd;
}

text {
    text-anchor: middle;
    dominant-baseline: middle;
}

/* styling for layer labels */
.label {
    font-weight: bold;
    text-anchor: start;
    stroke: white;
    stroke-width: 2;
    paint-order: stroke;
}

/* styling for combo box label text */
.small {
    font-size: 80%;
}

/* styling for combo dendrons */
path {
    stroke-width: 1;
    stroke: gray;
    fill: none;
}
"#;
