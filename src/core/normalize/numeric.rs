use crate::models::FieldValue;

const SUFFIXES: [char; 5] = ['%', 'K', 'M', 'B', 'T'];

/// Convert an actual / forecast / previous cell.
///
/// - blank → `None`
/// - `"150K|160K"` → only the part before the first pipe is considered
/// - `%`, `K`, `M`, `B`, `T` are stripped; the magnitude is *not* applied
/// - anything that still is not a finite number → the raw text, unchanged
pub fn normalize_numeric(raw: &str) -> Option<FieldValue> {
    if raw.trim().is_empty() {
        return None;
    }

    let primary = raw.split('|').next().unwrap_or(raw);
    let stripped = primary.trim().trim_end_matches(SUFFIXES).trim();

    match stripped.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(FieldValue::Number(n)),
        _ => Some(FieldValue::Text(raw.to_string())),
    }
}
