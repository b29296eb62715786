//! Lenient operand parsing and result formatting.
//!
//! Operands are read with a leading-prefix rule: the longest prefix that
//! forms a decimal literal is parsed and anything after it is ignored, so
//! `"5.5 apples"` reads as `5.5`. Results are printed in the shortest form
//! that round-trips, with integers shown without a fractional part and very
//! large or very small magnitudes in exponent form (`1e+21`, `1.5e-7`).

/// Largest decimal exponent printed without exponent notation.
const MAX_PLAIN_EXPONENT: i32 = 21;
/// Smallest decimal exponent printed without exponent notation.
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Parse the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped. Returns `None` when no digits start the
/// input or the literal is not finite (e.g. `1e400`).
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start_matches(is_leading_space);
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    // An exponent only counts when it has digits: "1e" reads as 1.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Whitespace skipped before a number: Unicode `White_Space` plus the byte
/// order mark, minus NEL (U+0085).
fn is_leading_space(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Render a result value for the report line.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        // Covers negative zero as well.
        return "0".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value < 0.0 {
        return format!("-{}", format_number(-value));
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "2.75e0".
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let len = digits.len() as i32;
    // Position of the decimal point relative to the start of `digits`.
    let point = exponent + 1;

    if len <= point && point <= MAX_PLAIN_EXPONENT {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{int_part}.{frac_part}")
    } else if MIN_PLAIN_EXPONENT < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{sign}{}", exponent.abs())
        } else {
            format!("{first}.{rest}e{sign}{}", exponent.abs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_literals() {
        assert_eq!(parse_leading_number("5"), Some(5.0));
        assert_eq!(parse_leading_number("-3.25"), Some(-3.25));
        assert_eq!(parse_leading_number("+7"), Some(7.0));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("5."), Some(5.0));
        assert_eq!(parse_leading_number("  42"), Some(42.0));
    }

    #[test]
    fn skips_byte_order_mark_and_unicode_spaces() {
        assert_eq!(parse_leading_number("\u{FEFF}5"), Some(5.0));
        assert_eq!(parse_leading_number("\u{00A0}\u{3000}\t7.5"), Some(7.5));
        assert_eq!(parse_leading_number("\u{2028}-2"), Some(-2.0));
    }

    #[test]
    fn next_line_control_is_not_whitespace() {
        assert_eq!(parse_leading_number("\u{0085}5"), None);
    }

    #[test]
    fn ignores_trailing_garbage() {
        assert_eq!(parse_leading_number("5.5 apples"), Some(5.5));
        assert_eq!(parse_leading_number("12abc"), Some(12.0));
        assert_eq!(parse_leading_number("1.2.3"), Some(1.2));
        assert_eq!(parse_leading_number("3-4"), Some(3.0));
    }

    #[test]
    fn exponent_requires_digits() {
        assert_eq!(parse_leading_number("1e3x"), Some(1000.0));
        assert_eq!(parse_leading_number("2E-2"), Some(0.02));
        assert_eq!(parse_leading_number("1e"), Some(1.0));
        assert_eq!(parse_leading_number("1e+"), Some(1.0));
    }

    #[test]
    fn rejects_inputs_without_leading_digits() {
        for raw in ["", "abc", "-", "+", ".", "-.", "e5", "Infinity", "NaN", "x5"] {
            assert_eq!(parse_leading_number(raw), None, "input {raw:?}");
        }
    }

    #[test]
    fn rejects_non_finite_literals() {
        assert_eq!(parse_leading_number("1e400"), None);
        assert_eq!(parse_leading_number("-1e400"), None);
    }

    #[test]
    fn formats_integers_without_fraction() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-15.0), "-15");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1.23e20), "123000000000000000000");
    }

    #[test]
    fn formats_fractions_with_shortest_digits() {
        assert_eq!(format_number(2.75), "2.75");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(10.0 / 3.0), "3.3333333333333335");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn formats_extreme_magnitudes_in_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(-2.5e30), "-2.5e+30");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
