/// Число с разделителем тысяч (точка), для логов
///
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// ```
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;
    let mut groups: Vec<&str> = Vec::with_capacity(digits.len() / 3 + 1);
    if head > 0 {
        groups.push(&digits[..head]);
    }
    groups.extend(
        digits.as_bytes()[head..]
            .chunks(3)
            .filter_map(|c| std::str::from_utf8(c).ok()),
    );
    groups.join(".")
}

/// Цена с точностью до цента
pub fn round_price(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(52_430), "52.430");
        assert_eq!(format_number(1_234_567), "1.234.567");
    }

    #[test]
    fn test_round_price() {
        assert_eq!(round_price(2.499), 2.5);
        assert_eq!(round_price(3.0), 3.0);
        assert_eq!(round_price(1.005_1), 1.01);
    }
}
