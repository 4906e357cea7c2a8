use crate::models::Impact;

/// Map the impact label (usually the icon's title, e.g. "High Impact
/// Expected") to an [`Impact`] category.
///
/// First match wins; "Very High" is tested before "High" since it contains it.
pub fn normalize_impact(raw: Option<&str>) -> Impact {
    let label = match raw.map(str::trim) {
        None | Some("") | Some("Non-Economic") => return Impact::None,
        Some(label) => label,
    };

    const ORDER: [(&str, Impact); 4] = [
        ("Low", Impact::Low),
        ("Medium", Impact::Medium),
        ("Very High", Impact::VeryHigh),
        ("High", Impact::High),
    ];

    ORDER
        .iter()
        .find(|(needle, _)| label.contains(needle))
        .map(|(_, impact)| *impact)
        .unwrap_or(Impact::Unknown)
}
