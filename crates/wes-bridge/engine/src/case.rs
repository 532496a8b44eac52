//! camelCase → snake_case key conversion
//!
//! The conversion is purely per character: every upper-case character gets
//! an underscore in front and is lower-cased, then leading underscores are
//! stripped. Runs of capitals are not treated as words, so `URIPath`
//! becomes `u_r_i_path`. Downstream WES consumers expect exactly this shape.

use serde_json::Value;

/// Convert a single key
pub fn to_snake_case(key: &str) -> String {
    let mut converted = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_uppercase() {
            converted.push('_');
            converted.extend(c.to_lowercase());
        } else {
            converted.push(c);
        }
    }
    converted.trim_start_matches('_').to_string()
}

/// Convert every mapping key in `value`, at any depth
pub fn snake_case_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (to_snake_case(&key), snake_case_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(snake_case_keys).collect()),
        scalar => scalar,
    }
}
