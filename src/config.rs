//! Drawing and parsing settings with their defaults.
//!
//! All three types are plain values. They are built from defaults plus an
//! optional override dict and are not recomputed afterwards: in particular
//! the size fields derived from `key_w`/`key_h` keep their default numbers
//! when only `key_w`/`key_h` are overridden.
//!
//! Override dicts are checked by the derived `Deserialize`: unknown names and
//! mistyped values fail with the dotted path of the field. Types are strict,
//! so `"60"` is not an integer and `0` is not a boolean.

use crate::consts;
use crate::env::collect_env_overrides;
use crate::error::{KdResult, KeymapDrawerError};
use crate::keycodes::default_keycode_map;
use crate::overrides::{self, finite_f64, merge_overrides, Overrides};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

// Lays an override dict over the current value and re-validates the whole
// thing. `$depth` is how many levels of nested groups are merged rather
// than replaced.
macro_rules! impl_overrides {
    ($ty:ty, $group:expr, $depth:expr) => {
        impl $ty {
            pub fn from_overrides(overrides: &Overrides) -> KdResult<Self> {
                let mut config = Self::default();
                config.apply_overrides(overrides)?;
                Ok(config)
            }

            /// Nothing is changed unless the merged result validates.
            pub fn apply_overrides(&mut self, overrides: &Overrides) -> KdResult<()> {
                let mut merged = self.to_overrides()?;
                merge_overrides(&mut merged, overrides, $depth);
                *self = overrides::from_overrides(merged)?;
                debug!("Applied {} override(s) to {}", overrides.len(), $group);
                Ok(())
            }

            /// Fails only for values JSON cannot hold, such as a NaN `arc_scale`.
            pub fn to_overrides(&self) -> KdResult<Overrides> {
                overrides::to_overrides(self)
            }
        }
    };
}

/// SVG drawing settings: key sizes, paddings, combo and dendron geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DrawConfig {
    pub key_w: u32,
    pub key_h: u32,
    pub split_gap: u32,
    pub combo_w: u32,
    pub combo_h: u32,
    pub key_rx: u32,
    pub key_ry: u32,
    pub inner_pad_w: u32,
    pub inner_pad_h: u32,
    pub outer_pad_w: u32,
    pub outer_pad_h: u32,
    pub line_spacing: u32,
    pub arc_radius: u32,
    #[serde(serialize_with = "finite_f64")]
    pub arc_scale: f64,
    pub svg_style: String,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            key_w: consts::KEY_W,
            key_h: consts::KEY_H,
            split_gap: consts::SPLIT_GAP,
            combo_w: consts::COMBO_W,
            combo_h: consts::COMBO_H,
            key_rx: consts::KEY_RX,
            key_ry: consts::KEY_RY,
            inner_pad_w: consts::INNER_PAD_W,
            inner_pad_h: consts::INNER_PAD_H,
            outer_pad_w: consts::OUTER_PAD_W,
            outer_pad_h: consts::OUTER_PAD_H,
            line_spacing: consts::LINE_SPACING,
            arc_radius: consts::ARC_RADIUS,
            arc_scale: consts::ARC_SCALE,
            svg_style: consts::SVG_STYLE.to_string(),
        }
    }
}

impl_overrides!(DrawConfig, "draw_config", 0);

/// Settings for reading QMK/ZMK keymaps. A `keycode_map` override replaces
/// the whole default table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseConfig {
    pub preprocess: bool,
    pub skip_binding_parsing: bool,
    pub keycode_map: HashMap<String, String>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            preprocess: consts::PREPROCESS,
            skip_binding_parsing: consts::SKIP_BINDING_PARSING,
            keycode_map: default_keycode_map(),
        }
    }
}

impl_overrides!(ParseConfig, "parse_config", 0);

impl ParseConfig {
    /// Glyph for a keycode identifier. Tries the exact spelling first, then
    /// the uppercased one.
    pub fn glyph(&self, keycode: &str) -> Option<&str> {
        self.keycode_map
            .get(keycode)
            .or_else(|| self.keycode_map.get(&keycode.to_ascii_uppercase()))
            .map(String::as_str)
    }

    /// The glyph if one is mapped, otherwise the keycode itself.
    pub fn display_label<'a>(&'a self, keycode: &'a str) -> &'a str {
        self.glyph(keycode).unwrap_or(keycode)
    }
}

/// Every setting used by the parser and the renderer. Group overrides are
/// merged field by field into the current group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub draw_config: DrawConfig,
    pub parse_config: ParseConfig,
}

impl_overrides!(Config, "config", 1);

impl Config {
    /// Absent groups take their defaults.
    pub fn new(draw_config: Option<DrawConfig>, parse_config: Option<ParseConfig>) -> Self {
        Self {
            draw_config: draw_config.unwrap_or_default(),
            parse_config: parse_config.unwrap_or_default(),
        }
    }

    /// Defaults plus whatever `KEYMAP_*` variables the process environment sets.
    pub fn from_env() -> KdResult<Self> {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
        Self::from_env_vars(vars)
    }

    pub fn from_env_vars<I, K, V>(vars: I) -> KdResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        config.apply_env_vars(vars)?;
        Ok(config)
    }

    pub fn apply_env_vars<I, K, V>(&mut self, vars: I) -> KdResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let overrides = collect_env_overrides(&self.to_overrides()?, vars)?;
        self.apply_overrides(&overrides)
    }

    /// Reads a JSON settings file shaped like [`Config::to_overrides`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KdResult<Self> {
        let content = fs::read_to_string(&path)?;
        let document: Value = serde_json::from_str(&content)?;
        let Value::Object(overrides) = document else {
            return Err(KeymapDrawerError::validation(
                "<root>",
                "settings file must hold a JSON object",
            ));
        };

        info!("Loading settings from {:?}", path.as_ref());
        Self::from_overrides(&overrides)
    }
}
