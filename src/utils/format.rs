/// Formats `value` with `places` decimals, rounding its shortest decimal
/// form half-up.
///
/// `format!("{:.2}", x)` rounds the exact binary value, so `1.325` (stored as
/// `1.32499999...`) comes out as `1.32`. Screens show the rounding a person
/// would do on the printed number, which gives `1.33`.
pub fn fixed_half_up(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let shortest = format!("{}", value.abs());
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(places))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part.as_bytes().get(places).is_some_and(|d| *d >= b'5');
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - places;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|d| char::from(b'0' + d)));
    if places > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|d| char::from(b'0' + d)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_up_on_decimal_digits() {
        assert_eq!(fixed_half_up(0.5 * 2.65, 2), "1.33");
        assert_eq!(format!("{:.2}", 0.5 * 2.65), "1.32");
        assert_eq!(fixed_half_up(1.005, 2), "1.01");
        assert_eq!(fixed_half_up(2.675, 2), "2.68");
    }

    #[test]
    fn test_padding_and_carry() {
        assert_eq!(fixed_half_up(39.0, 2), "39.00");
        assert_eq!(fixed_half_up(397.5, 2), "397.50");
        assert_eq!(fixed_half_up(0.0, 2), "0.00");
        assert_eq!(fixed_half_up(9.995, 2), "10.00");
        assert_eq!(fixed_half_up(99.9, 0), "100");
        assert_eq!(fixed_half_up(1.234, 2), "1.23");
    }

    #[test]
    fn test_negative_and_non_finite() {
        assert_eq!(fixed_half_up(-1.325, 2), "-1.33");
        assert_eq!(fixed_half_up(f64::INFINITY, 2), "inf");
        assert_eq!(fixed_half_up(f64::NAN, 2), "NaN");
    }
}
