//! Fixed-point rendering of report values
//!
//! Values are rounded half-up on their shortest round-trip decimal digits,
//! so `0.25`, `0.15` and `0.35` render at one decimal as `0.3`, `0.2` and
//! `0.4`. The `{:.N}` formatter rounds the exact binary value instead and
//! would give `0.2`, `0.1` and `0.3`.

/// Render `value` with exactly `precision` decimals, rounding half-up
pub fn format_half_up(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format!("{value:.precision$}");
    }

    // `Display` for f64 never uses exponent notation
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().collect();
    let frac = frac_part.as_bytes();
    let mut int_len = digits.len();

    if frac.len() <= precision {
        digits.extend_from_slice(frac);
        digits.resize(int_len + precision, b'0');
    } else {
        digits.extend_from_slice(&frac[..precision]);
        if frac[precision] >= b'5' && increment(&mut digits) {
            digits.insert(0, b'1');
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|&d| d as char));
    if precision > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|&d| d as char));
    }
    out
}

/// Add one to the last digit. Returns true when the carry runs off the front.
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_ties_round_up() {
        assert_eq!(format_half_up(0.25, 1), "0.3");
        assert_eq!(format_half_up(0.15, 1), "0.2");
        assert_eq!(format_half_up(0.35, 1), "0.4");
        assert_eq!(format_half_up(-0.25, 1), "-0.3");
        assert_eq!(format_half_up(0.00005, 4), "0.0001");
    }

    #[test]
    fn test_below_tie_rounds_down() {
        assert_eq!(format_half_up(0.24, 1), "0.2");
        assert_eq!(format_half_up(-0.12344, 4), "-0.1234");
        assert_eq!(format_half_up(1e-5, 4), "0.0000");
        assert_eq!(format_half_up(1e-20, 4), "0.0000");
    }

    #[test]
    fn test_carry_into_integer_part() {
        assert_eq!(format_half_up(0.95, 1), "1.0");
        assert_eq!(format_half_up(99.96, 1), "100.0");
        assert_eq!(format_half_up(-9.99995, 4), "-10.0000");
    }

    #[test]
    fn test_padding_and_integers() {
        assert_eq!(format_half_up(4.0, 1), "4.0");
        assert_eq!(format_half_up(0.0, 4), "0.0000");
        assert_eq!(format_half_up(-1.5, 4), "-1.5000");
        assert_eq!(format_half_up(2.5, 0), "3");
        assert_eq!(format_half_up(1e21, 1), "1000000000000000000000.0");
    }

    #[test]
    fn test_negative_zero_keeps_sign() {
        assert_eq!(format_half_up(-0.0, 1), "-0.0");
        assert_eq!(format_half_up(-0.04, 1), "-0.0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_half_up(f64::NAN, 1), "NaN");
        assert_eq!(format_half_up(f64::INFINITY, 4), "inf");
    }
}
