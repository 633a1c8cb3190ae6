//! Magnitude-aware display formatting for conversion results.
//!
//! Purely presentational: callers chain arithmetic on the raw f64 and only
//! format the final value for display.

/// Render a conversion result with precision appropriate to its magnitude.
///
/// - exactly zero renders as `"0"`;
/// - `|v| >= 1e6` renders in exponential notation with 6 fractional digits;
/// - `|v| >= 1000` renders with comma-grouped digits and up to 6 fractional
///   digits, trailing zeros stripped;
/// - `|v| >= 1` renders the plain shortest representation;
/// - fractional values render with 8 fractional digits, trailing zeros (and
///   a bare decimal point) stripped.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        return format!("{value:.6e}");
    }
    if magnitude >= 1000.0 {
        return group_thousands(value);
    }
    if magnitude >= 1.0 {
        return value.to_string();
    }

    let rendered = format!("{value:.8}");
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

fn group_thousands(value: f64) -> String {
    let rendered = format!("{value:.6}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');

    let (integer_part, fraction) = match rendered.split_once('.') {
        Some((integer_part, fraction)) => (integer_part, Some(fraction)),
        None => (rendered, None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_renders_bare() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn large_values_use_exponential_notation() {
        assert_eq!(format_number(1_500_000.0), "1.500000e6");
        assert_eq!(format_number(-2_340_000_000.0), "-2.340000e9");
    }

    #[test]
    fn thousands_are_comma_grouped() {
        assert_eq!(format_number(1500.0), "1,500");
        assert_eq!(format_number(123_456.789), "123,456.789");
        assert_eq!(format_number(-98_765.4321), "-98,765.4321");
    }

    #[test]
    fn mid_range_values_render_plainly() {
        assert_eq!(format_number(999.5), "999.5");
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-12.25), "-12.25");
    }

    #[test]
    fn small_fractions_strip_trailing_zeros() {
        assert_eq!(format_number(0.001), "0.001");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-0.00012345), "-0.00012345");
    }

    #[test]
    fn tiny_fractions_round_at_eight_digits() {
        assert_eq!(format_number(0.000000004), "0");
        assert_eq!(format_number(0.123456789), "0.12345679");
    }
}
