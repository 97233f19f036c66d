use regex::Regex;
use std::sync::LazyLock;

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("valid length pattern")
});

/// Reads a wire length the way a lenient form field would: the leading number
/// wins ("65.5 ft" is 65.5) and anything unreadable becomes 0.
pub fn parse_length(text: &str) -> f64 {
    LEADING_NUMBER
        .find(text.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
