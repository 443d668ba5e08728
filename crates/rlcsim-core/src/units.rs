//! Engineering units and SI prefix handling.

/// Parse a SPICE-style value with optional SI suffix.
///
/// Supported suffixes (case-insensitive):
/// - T (tera, 1e12)
/// - G (giga, 1e9)
/// - MEG (mega, 1e6)
/// - K (kilo, 1e3)
/// - M (milli, 1e-3)
/// - U (micro, 1e-6)
/// - N (nano, 1e-9)
/// - P (pico, 1e-12)
/// - F (femto, 1e-15)
///
/// A trailing unit letter after the prefix is tolerated (`10mH`, `150nF`,
/// `4.7kOhm`). `F` is always femto, so `1F` is `1e-15`; one farad is
/// written `1`. Returns `None` for anything that is not a finite number.
pub fn parse_value(s: &str) -> Option<f64> {
    let s = s.trim().to_uppercase();

    if let Ok(v) = s.parse::<f64>() {
        return v.is_finite().then_some(v);
    }

    let num_end = s
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-' && c != '+' && c != 'E')
        .unwrap_or(s.len());

    if num_end == 0 {
        return None;
    }

    let (num_str, suffix) = s.split_at(num_end);
    let value: f64 = num_str.parse().ok()?;

    let multiplier = if suffix.starts_with("MEG") {
        1e6
    } else {
        match suffix.chars().next()? {
            'T' => 1e12,
            'G' => 1e9,
            'K' => 1e3,
            'M' => 1e-3,
            'U' => 1e-6,
            'N' => 1e-9,
            'P' => 1e-12,
            'F' => 1e-15,
            // Bare unit with no prefix: "50V", "80OHM", "2S"
            'V' | 'A' | 'H' | 'O' | 'S' => 1.0,
            _ => return None,
        }
    };

    let scaled = value * multiplier;
    scaled.is_finite().then_some(scaled)
}

/// Format a value with appropriate SI prefix.
pub fn format_value(value: f64) -> String {
    let abs_value = value.abs();

    let (scaled, suffix) = if abs_value >= 1e12 {
        (value / 1e12, "T")
    } else if abs_value >= 1e9 {
        (value / 1e9, "G")
    } else if abs_value >= 1e6 {
        (value / 1e6, "M")
    } else if abs_value >= 1e3 {
        (value / 1e3, "k")
    } else if abs_value >= 1.0 {
        (value, "")
    } else if abs_value >= 1e-3 {
        (value * 1e3, "m")
    } else if abs_value >= 1e-6 {
        (value * 1e6, "u")
    } else if abs_value >= 1e-9 {
        (value * 1e9, "n")
    } else if abs_value >= 1e-12 {
        (value * 1e12, "p")
    } else if abs_value >= 1e-15 {
        (value * 1e15, "f")
    } else {
        (value, "")
    };

    format!("{:.4}{}", scaled, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|v| (v - b).abs() < b.abs() * 1e-10 + 1e-20)
    }

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_value("1.5"), Some(1.5));
        assert_eq!(parse_value("-2.5"), Some(-2.5));
        assert_eq!(parse_value("1e-3"), Some(1e-3));
        assert_eq!(parse_value("  80 "), Some(80.0));
    }

    #[test]
    fn test_parse_with_suffix() {
        assert!(approx_eq(parse_value("1k"), 1e3));
        assert!(approx_eq(parse_value("4.7K"), 4.7e3));
        assert!(approx_eq(parse_value("10m"), 10e-3));
        assert!(approx_eq(parse_value("10MEG"), 10e6));
        assert!(approx_eq(parse_value("150n"), 150e-9));
        assert!(approx_eq(parse_value("1u"), 1e-6));
        assert!(approx_eq(parse_value("10p"), 10e-12));
    }

    #[test]
    fn test_parse_with_unit_letters() {
        assert!(approx_eq(parse_value("10mH"), 10e-3));
        assert!(approx_eq(parse_value("150nF"), 150e-9));
        assert!(approx_eq(parse_value("50V"), 50.0));
        assert!(approx_eq(parse_value("80ohm"), 80.0));
    }

    #[test]
    fn test_trailing_f_is_femto() {
        assert!(approx_eq(parse_value("1F"), 1e-15));
        assert!(approx_eq(parse_value("1fF"), 1e-15));
        assert!(approx_eq(parse_value("100nF"), 100e-9));
        assert_eq!(parse_value("1"), Some(1.0));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("1x"), None);
        assert_eq!(parse_value("NaN"), None);
        assert_eq!(parse_value("inf"), None);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1000.0), "1.0000k");
        assert_eq!(format_value(0.001), "1.0000m");
        assert_eq!(format_value(1e-9), "1.0000n");
        assert_eq!(format_value(0.0), "0.0000");
    }
}
