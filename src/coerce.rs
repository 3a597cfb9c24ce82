//! Culture-invariant text conversions shared by [`crate::value::Value`].
//!
//! Numbers always use `.` as the decimal point and never carry grouping
//! separators, so text produced by [`format_number`] parses back to the same
//! number on every host.

/// Parses `text` as a floating point literal, ignoring surrounding whitespace.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let unsigned = trimmed.trim_start_matches(|c| c == '+' || c == '-');
    let is_word = unsigned.eq_ignore_ascii_case("infinity") || unsigned.eq_ignore_ascii_case("nan");
    // f64::from_str also takes `inf`; only the exponent marker may be a letter
    if !is_word
        && unsigned
            .chars()
            .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses `true` / `false` in any letter case, ignoring surrounding whitespace.
pub fn parse_boolean(text: &str) -> Option<bool> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

pub fn format_number(number: f64) -> String {
    if number.is_nan() {
        "NaN".to_string()
    } else if number.is_infinite() {
        if number > 0f64 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        // Display for f64 is the shortest text that round-trips
        number.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_accepts_invariant_literals() {
        assert_eq!(Some(30f64), parse_number("30"));
        assert_eq!(Some(-2.5), parse_number("-2.5"));
        assert_eq!(Some(1500f64), parse_number("1.5e3"));
        assert_eq!(Some(0.5), parse_number(" .5 "));
        assert_eq!(Some(f64::INFINITY), parse_number("Infinity"));
        assert_eq!(Some(f64::NEG_INFINITY), parse_number("-Infinity"));
        assert_eq!(Some(f64::INFINITY), parse_number("iNfInItY"));
        assert!(parse_number("NaN").map_or(false, f64::is_nan));
    }

    #[test]
    fn parse_number_rejects_everything_else() {
        assert_eq!(None, parse_number(""));
        assert_eq!(None, parse_number("   "));
        assert_eq!(None, parse_number("abc"));
        assert_eq!(None, parse_number("1,000"));
        assert_eq!(None, parse_number("1,5"));
        assert_eq!(None, parse_number("true"));
        assert_eq!(None, parse_number("inf"));
        assert_eq!(None, parse_number("+inf"));
        assert_eq!(None, parse_number("-INF"));
        assert_eq!(None, parse_number("infin"));
        assert_eq!(None, parse_number("--1"));
    }

    #[test]
    fn parse_boolean_is_case_insensitive() {
        assert_eq!(Some(true), parse_boolean("true"));
        assert_eq!(Some(true), parse_boolean(" TRUE "));
        assert_eq!(Some(false), parse_boolean("False"));
        assert_eq!(None, parse_boolean("1"));
        assert_eq!(None, parse_boolean("yes"));
        assert_eq!(None, parse_boolean(""));
    }

    #[test]
    fn format_number_is_invariant() {
        assert_eq!("31", format_number(31f64));
        assert_eq!("0.1", format_number(0.1));
        assert_eq!("-2.5", format_number(-2.5));
        assert_eq!("1000000", format_number(1_000_000f64));
        assert_eq!("NaN", format_number(f64::NAN));
        assert_eq!("Infinity", format_number(f64::INFINITY));
        assert_eq!("-Infinity", format_number(f64::NEG_INFINITY));
    }

    #[test]
    fn formatted_numbers_parse_back() {
        for n in &[
            0f64,
            -0f64,
            1f64 / 3f64,
            std::f64::consts::PI,
            1e300,
            -4.9e-324,
            f64::MAX,
            f64::INFINITY,
        ] {
            assert_eq!(Some(*n), parse_number(&format_number(*n)), "{}", n);
        }
    }
}
