//! Display helpers shared by the HTML and text renderers.
//!
//! Sub-field parsing never fails: anything that is not the expected JSON
//! shape falls back to the raw text.

use serde_json::Value;

pub const FULL_STAR: &str = "⭐";
pub const HALF_STAR: &str = "½";
pub const NOT_AVAILABLE: &str = "N/A";

/// Star glyphs for a 0-5 rating.
///
/// One glyph per whole point, plus a half glyph when the fractional part is
/// at least 0.5. Smaller fractions are dropped rather than rounded.
/// Ratings above 5 are shown as 5.
pub fn star_rating(rating: Option<f64>) -> String {
    let rating = match rating {
        Some(r) if r.is_finite() && r > 0.0 => r.min(5.0),
        _ => return format!("{} {}", FULL_STAR, NOT_AVAILABLE),
    };

    let full = rating.trunc() as usize;
    let mut stars = FULL_STAR.repeat(full);
    if rating.fract() >= 0.5 {
        stars.push_str(HALF_STAR);
    }
    if stars.is_empty() {
        // a rating below 0.5 still shows that it was rated
        stars.push_str(FULL_STAR);
    }
    stars
}

/// Numeric rating to one decimal, or N/A.
pub fn rating_value(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r.is_finite() && r > 0.0 => format!("{:.1}", r),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Minutes as "45 min", "2h" or "1h 30m".
pub fn format_time(minutes: Option<i64>) -> String {
    let minutes = match minutes {
        Some(m) if m > 0 => m,
        _ => return NOT_AVAILABLE.to_string(),
    };

    if minutes < 60 {
        return format!("{} min", minutes);
    }

    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest > 0 {
        format!("{}h {}m", hours, rest)
    } else {
        format!("{}h", hours)
    }
}

/// Lines of an ingredients or instructions field.
///
/// A JSON array, either literal or encoded in a string, is used as is.
/// Anything else is split on newlines and semicolons. Commas are left alone
/// since they routinely appear inside a single ingredient ("1 onion, diced").
pub fn parse_text_list(raw: Option<&Value>) -> Vec<String> {
    match raw {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(value_text).collect(),
        Some(Value::String(text)) => parse_text_list_str(text),
        Some(other) => parse_text_list_str(&other.to_string()),
    }
}

/// String form of [`parse_text_list`].
pub fn parse_text_list_str(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(text) {
        return items.iter().map(value_text).collect();
    }

    text.split(['\n', ';'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Nutrient summary as "key: value, key: value".
///
/// Objects, literal or encoded in a string, are flattened in document
/// order. Other text is returned unchanged; empty input yields `None`.
pub fn parse_nutrients(raw: Option<&Value>) -> Option<String> {
    match raw? {
        Value::Null => None,
        Value::Object(map) => join_pairs(map),
        Value::String(text) => parse_nutrients_str(text),
        other => non_empty(other.to_string()),
    }
}

/// String form of [`parse_nutrients`].
pub fn parse_nutrients_str(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => join_pairs(&map),
        _ => Some(text.to_string()),
    }
}

fn join_pairs(map: &serde_json::Map<String, Value>) -> Option<String> {
    let joined = map
        .iter()
        .map(|(key, value)| format!("{}: {}", key, value_text(value)))
        .collect::<Vec<_>>()
        .join(", ");
    non_empty(joined)
}

fn non_empty(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}

/// Strings without their JSON quotes, everything else as JSON text.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
