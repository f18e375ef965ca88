//! Display formatting for won amounts and areas (ko-KR conventions)

/// Square meters per 평
pub const SQM_PER_PYEONG: f64 = 3.3058;

/// Group an integer by thousands: 1350000 -> "1,350,000"
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// "1,350,000원"
pub fn format_won(amount: f64) -> String {
    format!("{}원", group_thousands(amount.round() as i64))
}

/// "약 135만원"; exactly zero renders as "0원"
pub fn format_man(amount: f64) -> String {
    if amount == 0.0 {
        return "0원".to_string();
    }
    let man = (amount / 10_000.0).round() as i64;
    format!("약 {}만원", group_thousands(man))
}

/// Area with thousands grouping and at most one decimal: 1234.56 -> "1,234.6"
pub fn format_area(sqm: f64) -> String {
    let tenths = (sqm * 10.0).round() as i64;
    let sign = if tenths < 0 { "-" } else { "" };
    let abs = tenths.unsigned_abs();
    let whole = group_thousands((abs / 10) as i64);
    match abs % 10 {
        0 => format!("{sign}{whole}"),
        frac => format!("{sign}{whole}.{frac}"),
    }
}

/// m² to 평, one decimal
pub fn sqm_to_pyeong(sqm: f64) -> f64 {
    (sqm / SQM_PER_PYEONG * 10.0).round() / 10.0
}

/// 평 to m², one decimal
pub fn pyeong_to_sqm(pyeong: f64) -> f64 {
    (pyeong * SQM_PER_PYEONG * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_350_000), "1,350,000");
        assert_eq!(group_thousands(-12_345), "-12,345");
    }

    #[test]
    fn test_format_won() {
        assert_eq!(format_won(4_500_000.0), "4,500,000원");
        assert_eq!(format_won(0.0), "0원");
    }

    #[test]
    fn test_format_man() {
        assert_eq!(format_man(1_050_000.0), "약 105만원");
        assert_eq!(format_man(12_345_000.0), "약 1,235만원");
        assert_eq!(format_man(0.0), "0원");
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(1234.56), "1,234.6");
        assert_eq!(format_area(300.0), "300");
        assert_eq!(format_area(0.04), "0");
    }

    #[test]
    fn test_pyeong_conversion() {
        assert_eq!(sqm_to_pyeong(100.0), 30.2);
        assert_eq!(pyeong_to_sqm(30.0), 99.2);
    }
}
