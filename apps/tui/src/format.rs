//! Number and delta formatting shared by both popup variants.
//!
//! Parsing accepts either `,` or `.` as decimal separator; display always
//! uses `,` (Spanish locale) with `.` for thousands grouping.

use crate::domain::DifClass;

/// Values that mean "no data"; passed through verbatim, never
/// sign-prefixed, always classified [`DifClass::Default`].
pub const NEUTRAL_SENTINELS: [&str; 4] = ["Sense dades", "-", "0%", "0,0%"];

pub fn is_neutral(value: &str) -> bool {
    NEUTRAL_SENTINELS.contains(&value)
}

/// Lenient prefix parse, like JS `parseFloat`: reads an optional sign,
/// digits and at most one decimal separator, ignores whatever follows
/// (trailing `%` included).
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in normalized.char_indices() {
        match c {
            '+' | '-' if i == 0 => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            c if c.is_ascii_digit() => {
                seen_digit = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    normalized[..end].trim_end_matches('.').parse().ok()
}

/// Converts the internal decimal point back to the display comma.
/// Only the first `.` is touched, thousands groups stay intact.
pub fn to_display_decimal(raw: &str) -> String {
    raw.replacen('.', ",", 1)
}

/// Inserts `.` every 3 digits from the right of the leading integer digit
/// run. Anything after that run (a `,` decimal part, a `%`, a unit) is
/// left untouched.
pub fn format_thousands(raw: &str) -> String {
    let raw = raw.trim();
    let (sign, rest) = raw
        .strip_prefix('-')
        .map_or(("", raw), |stripped| ("-", stripped));
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (int_part, tail) = rest.split_at(digits_end);
    if int_part.is_empty() {
        return raw.to_string();
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}{tail}")
}

pub fn format_count(number: i64) -> String {
    format_thousands(&number.to_string())
}

/// Prefixes `+` to a formatted delta. Negative values, already-prefixed
/// values and neutral sentinels pass through verbatim, so applying this
/// twice never double-prefixes.
pub fn sign_prefix(value: &str) -> String {
    if value.is_empty()
        || is_neutral(value)
        || value.starts_with('-')
        || value.starts_with('+')
    {
        return value.to_string();
    }
    format!("+{value}")
}

/// Styling class for a delta value. Missing and neutral values are
/// `default`, a leading minus is `negative`, everything else `positive`.
pub fn dif_class(value: Option<&str>) -> DifClass {
    match value {
        None => DifClass::Default,
        Some(v) if v.is_empty() || is_neutral(v) => DifClass::Default,
        Some(v) if v.starts_with('-') => DifClass::Negative,
        Some(_) => DifClass::Positive,
    }
}

/// Percentage display for the income variant: rounded to one decimal
/// place before grouping, comma decimal, sign-prefixed, `%` appended.
pub fn format_percentage_1dp(raw: &str) -> Option<String> {
    if is_neutral(raw) {
        return Some(raw.to_string());
    }
    let value = parse_decimal(raw)?;
    let rounded = format!("{:.1}", (value * 10.0).round() / 10.0);
    let grouped = format_thousands(&to_display_decimal(&rounded));
    Some(format!("{}%", sign_prefix(&grouped)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separator_groups_from_the_right() {
        assert_eq!(format_count(1_234_567), "1.234.567");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1.000");
        assert_eq!(format_count(-1_234_567), "-1.234.567");
    }

    #[test]
    fn thousands_separator_leaves_decimal_part_alone() {
        assert_eq!(format_thousands("1234,5"), "1.234,5");
        assert_eq!(format_thousands("12,3456"), "12,3456");
    }

    #[test]
    fn sign_prefix_is_added_at_most_once() {
        let once = sign_prefix("1,2%");
        assert_eq!(once, "+1,2%");
        assert_eq!(sign_prefix(&once), "+1,2%");
    }

    #[test]
    fn sign_prefix_leaves_negative_values_alone() {
        assert_eq!(sign_prefix("-0,4%"), "-0,4%");
    }

    #[test]
    fn neutral_sentinels_are_never_prefixed() {
        for sentinel in NEUTRAL_SENTINELS {
            assert_eq!(sign_prefix(sentinel), sentinel);
            assert_eq!(dif_class(Some(sentinel)), DifClass::Default);
        }
    }

    #[test]
    fn dif_class_covers_the_three_buckets() {
        assert_eq!(dif_class(None), DifClass::Default);
        assert_eq!(dif_class(Some("")), DifClass::Default);
        assert_eq!(dif_class(Some("-2,1%")), DifClass::Negative);
        assert_eq!(dif_class(Some("2,1%")), DifClass::Positive);
        assert_eq!(dif_class(Some("+2,1%")), DifClass::Positive);
    }

    #[test]
    fn parse_decimal_accepts_comma_and_trailing_noise() {
        assert_eq!(parse_decimal("12,3%"), Some(12.3));
        assert_eq!(parse_decimal("12.3"), Some(12.3));
        assert_eq!(parse_decimal("-4,05"), Some(-4.05));
        assert_eq!(parse_decimal("Sense dades"), None);
        assert_eq!(parse_decimal(""), None);
    }

    #[test]
    fn display_decimal_uses_comma() {
        assert_eq!(to_display_decimal("64.5"), "64,5");
        assert_eq!(to_display_decimal("64,5"), "64,5");
    }

    #[test]
    fn percentage_1dp_rounds_before_grouping() {
        assert_eq!(format_percentage_1dp("12,37").as_deref(), Some("+12,4%"));
        assert_eq!(format_percentage_1dp("-3,04").as_deref(), Some("-3,0%"));
        assert_eq!(
            format_percentage_1dp("1234,56").as_deref(),
            Some("+1.234,6%")
        );
        assert_eq!(
            format_percentage_1dp("Sense dades").as_deref(),
            Some("Sense dades")
        );
        assert_eq!(format_percentage_1dp("n/a"), None);
    }
}
