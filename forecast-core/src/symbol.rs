//! Weather-condition symbols.

/// Symbol used when no keyword rule matches.
pub const FALLBACK_SYMBOL: &str = "🌈";

/// Keyword rules checked in order; the first hit wins.
///
/// The order is part of the contract: "Rain, Partially cloudy" maps to the
/// partly-cloudy symbol because the cloud rule precedes the rain rule.
const SYMBOL_RULES: &[(&[&str], &str)] = &[
    (&["clear", "sun"], "☀️"),
    (&["partly", "cloud"], "⛅"),
    (&["rain"], "🌧️"),
    (&["snow"], "❄️"),
    (&["storm", "thunder"], "⛈️"),
    (&["fog"], "🌫️"),
];

/// Map a free-text condition description to its display symbol.
///
/// Matching is case-insensitive substring containment against the ordered
/// rule list.
pub fn condition_symbol(condition: &str) -> &'static str {
    let lowered = condition.to_lowercase();
    SYMBOL_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(_, symbol)| *symbol)
        .unwrap_or(FALLBACK_SYMBOL)
}
