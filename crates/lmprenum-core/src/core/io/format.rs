/// Decimal exponents at or above this value switch to scientific notation.
const SCIENTIFIC_EXPONENT_LIMIT: i32 = 6;
/// Decimal exponents below this value switch to scientific notation.
const SCIENTIFIC_EXPONENT_FLOOR: i32 = -4;

/// Formats a float in the general shortest form used by data-file writers.
///
/// The value is reduced to the shortest digit string that parses back to the
/// same `f64`. It is then written in plain decimal unless its decimal exponent
/// is below -4 or at least 6, in which case scientific notation with a signed
/// two-digit exponent is used (`1e+06`, `2.5e-07`).
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let shortest = format!("{:e}", value);
    let (negative, body) = match shortest.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, shortest.as_str()),
    };
    let Some((mantissa, exponent)) = body.split_once('e') else {
        return shortest;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return shortest;
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }
    if exponent < SCIENTIFIC_EXPONENT_FLOOR || exponent >= SCIENTIFIC_EXPONENT_LIMIT {
        write_scientific(&mut out, &digits, exponent);
    } else {
        write_plain(&mut out, &digits, exponent);
    }
    out
}

fn write_scientific(out: &mut String, digits: &str, exponent: i32) {
    let (lead, rest) = digits.split_at(1);
    out.push_str(lead);
    if !rest.is_empty() {
        out.push('.');
        out.push_str(rest);
    }
    out.push('e');
    out.push(if exponent < 0 { '-' } else { '+' });
    out.push_str(&format!("{:02}", exponent.unsigned_abs()));
}

fn write_plain(out: &mut String, digits: &str, exponent: i32) {
    if exponent < 0 {
        out.push_str("0.");
        for _ in 0..(-exponent - 1) {
            out.push('0');
        }
        out.push_str(digits);
        return;
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        out.push_str(digits);
        for _ in digits.len()..int_len {
            out.push('0');
        }
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_decimal_point() {
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(1.0), "1");
        assert_eq!(format_general(-12.0), "-12");
        assert_eq!(format_general(100000.0), "100000");
    }

    #[test]
    fn negative_zero_keeps_its_sign() {
        assert_eq!(format_general(-0.0), "-0");
    }

    #[test]
    fn fractions_use_shortest_digits() {
        assert_eq!(format_general(0.1), "0.1");
        assert_eq!(format_general(-0.8476), "-0.8476");
        assert_eq!(format_general(12.345678), "12.345678");
        assert_eq!(format_general(0.0001), "0.0001");
    }

    #[test]
    fn large_exponents_switch_to_scientific() {
        assert_eq!(format_general(1e6), "1e+06");
        assert_eq!(format_general(1234567.0), "1.234567e+06");
        assert_eq!(format_general(-2.25e10), "-2.25e+10");
        assert_eq!(format_general(1e100), "1e+100");
    }

    #[test]
    fn small_exponents_switch_to_scientific() {
        assert_eq!(format_general(0.00001), "1e-05");
        assert_eq!(format_general(2.5e-7), "2.5e-07");
    }

    #[test]
    fn non_finite_values_are_spelled_out() {
        assert_eq!(format_general(f64::NAN), "NaN");
        assert_eq!(format_general(f64::INFINITY), "+Inf");
        assert_eq!(format_general(f64::NEG_INFINITY), "-Inf");
    }

    #[test]
    fn output_parses_back_to_same_value() {
        for value in [3.14159, -1.0e-9, 6.02214076e23, 0.5, 123456.789] {
            let text = format_general(value);
            assert_eq!(text.parse::<f64>().unwrap(), value, "{text}");
        }
    }
}
