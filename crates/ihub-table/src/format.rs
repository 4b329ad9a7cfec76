//! Display formatting shared by every view.

/// Direction of a move, as shown by the colour of a change cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Zero counts as up.
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

/// Thousands-grouped number with at most three fraction digits, trailing
/// zeros dropped (`1234.5` -> `1,234.5`, `50000` -> `50,000`).
pub fn grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = fixed(value.abs(), 3);
    let (int, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac = frac.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + int.len() / 3 + 1);
    if value < 0.0 && (int != "0" || !frac.is_empty()) {
        out.push('-');
    }
    let digits = int.len();
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Price cell: sub-cent prices get 8 decimals, sub-dollar prices 6, the rest
/// are grouped.
pub fn price(value: f64) -> String {
    if value < 0.01 {
        fixed(value, 8)
    } else if value < 1.0 {
        fixed(value, 6)
    } else {
        grouped(value)
    }
}

/// Two decimals and a trailing `%`.
pub fn percentage(value: f64) -> String {
    format!("{}%", fixed(positive_zero(value), 2))
}

/// Two decimals, no suffix.
pub fn fixed2(value: f64) -> String {
    fixed(positive_zero(value), 2)
}

/// `digits` decimals, rounded on the exact binary value with ties going away
/// from zero (`1.0625` -> `1.063`).
pub fn fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // every f64 has a terminating expansion shorter than this
    let exact = format!("{:.1100}", value.abs());
    let (int, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int.bytes().chain(frac.bytes().take(digits)).collect();
    if frac.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..split].iter().map(|&d| d as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[split..].iter().map(|&d| d as char));
    }
    out
}

// -0.0 prints as "-0.00"
fn positive_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_precision_depends_on_magnitude() {
        assert_eq!(price(0.0000001234), "0.00000012");
        assert_eq!(price(0.5), "0.500000");
        assert_eq!(price(1234.5), "1,234.5");
        assert_eq!(price(0.01), "0.010000");
        assert_eq!(price(1.0), "1");
        assert_eq!(price(97_123.456_78), "97,123.457");
    }

    #[test]
    fn percentage_has_two_decimals() {
        assert_eq!(percentage(-3.456), "-3.46%");
        assert_eq!(percentage(0.0), "0.00%");
        assert_eq!(percentage(-0.0), "0.00%");
        assert_eq!(percentage(12.0), "12.00%");
    }

    #[test]
    fn zero_is_up() {
        assert_eq!(Trend::of(0.0), Trend::Up);
        assert_eq!(Trend::of(0.01), Trend::Up);
        assert_eq!(Trend::of(-3.456), Trend::Down);
    }

    #[test]
    fn grouping() {
        assert_eq!(grouped(0.0), "0");
        assert_eq!(grouped(999.0), "999");
        assert_eq!(grouped(1_000.0), "1,000");
        assert_eq!(grouped(1_923_456_789_012.0), "1,923,456,789,012");
        assert_eq!(grouped(45_678.9), "45,678.9");
        assert_eq!(grouped(-1_234_567.891), "-1,234,567.891");
        assert_eq!(grouped(-0.0001), "0");
    }

    #[test]
    fn fixed_two_decimals() {
        assert_eq!(fixed2(1523.4567), "1523.46");
        assert_eq!(fixed2(-0.0), "0.00");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(grouped(1.0625), "1.063");
        assert_eq!(grouped(2.0625), "2.063");
        assert_eq!(grouped(-1.0625), "-1.063");
        assert_eq!(price(0.5078125), "0.507813");
        assert_eq!(percentage(0.125), "0.13%");
        assert_eq!(fixed2(-0.125), "-0.13");
    }

    #[test]
    fn near_ties_follow_the_binary_value() {
        // 1.005 is stored just below the tie
        assert_eq!(fixed2(1.005), "1.00");
        assert_eq!(fixed(0.0005, 3), "0.001");
        assert_eq!(fixed(9.9995, 3), "9.999");
    }

    #[test]
    fn carry_reaches_the_integer_part() {
        assert_eq!(fixed(9.9996, 3), "10.000");
        assert_eq!(grouped(999_999.9996), "1,000,000");
        assert_eq!(fixed(2.5, 0), "3");
    }
}
