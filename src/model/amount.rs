/// Parses free-form input text as a plain decimal number.
///
/// Spaces and ASCII control characters around the number are ignored.
/// Anything else that is not a finite decimal (empty text, letters, a lone
/// `-`, `inf`, `NaN`, an exponent that overflows) yields `0.0`. Parsing is
/// locale independent: `.` is always the decimal point and grouping
/// separators are not accepted.
pub fn parse_amount(text: &str) -> f64 {
    text.trim_matches(|c: char| c <= ' ')
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Like [`parse_amount`], treating missing text as `0.0`.
pub fn parse_optional_amount(text: Option<&str>) -> f64 {
    text.map_or(0.0, parse_amount)
}
