//! Environment variable binding.
//!
//! Each field is bound to `KEYMAP_<FIELD>`, matched case-insensitively, so
//! `KEYMAP_KEY_W`, `keymap_key_w` and `Keymap_Key_W` all set `key_w`. Field
//! names are unique across the drawing and parsing groups, which keeps the
//! namespace flat. Variables that do not name a known field are ignored. A
//! field bound by two spellings at once is rejected, since the order in
//! which the environment is listed is platform-defined.

use crate::error::{KdResult, KeymapDrawerError};
use crate::overrides::{parse_env_value, Overrides};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

pub const ENV_PREFIX: &str = "KEYMAP_";

/// Lowercased field name carried by `var`, if it has the prefix.
pub fn env_field_name(var: &str) -> Option<String> {
    let lowered = var.to_ascii_lowercase();
    let field = lowered.strip_prefix(&ENV_PREFIX.to_ascii_lowercase())?;
    (!field.is_empty()).then(|| field.to_string())
}

/// The variable bound to a field, in its canonical uppercase spelling.
pub fn env_var_name(field: &str) -> String {
    format!("{}{}", ENV_PREFIX, field.to_ascii_uppercase())
}

/// Collects the bound variables into an override dict shaped like `current`,
/// a config's override form. Values are read as the type of the field they
/// replace.
pub fn collect_env_overrides<I, K, V>(current: &Overrides, vars: I) -> KdResult<Overrides>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut bound_by: HashMap<String, String> = HashMap::new();
    let mut overrides = Overrides::new();

    for (var, raw) in vars {
        let var = var.as_ref();
        let Some(name) = env_field_name(var) else {
            continue;
        };

        let Some((group, template)) = current.iter().find_map(|(group, fields)| {
            fields.as_object()?.get(&name).map(|template| (group, template))
        }) else {
            continue;
        };

        let path = format!("{}.{}", group, name);
        if let Some(previous) = bound_by.insert(name.clone(), var.to_string()) {
            return Err(KeymapDrawerError::validation(
                path,
                format!("bound by both {} and {}", previous, var),
            ));
        }

        let value = parse_env_value(&path, template, raw.as_ref())?;
        debug!("Env binding: {} -> {}", var, path);

        if let Value::Object(fields) = overrides
            .entry(group.clone())
            .or_insert_with(|| Value::Object(Overrides::new()))
        {
            fields.insert(name, value);
        }
    }

    Ok(overrides)
}
