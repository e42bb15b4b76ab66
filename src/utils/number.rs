/// Render an integer with comma thousands grouping: `1234567` -> `1,234,567`
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Render a day-over-day change with an explicit sign: `+1,200`, `-5`, `+0`
pub fn format_delta(delta: i64) -> String {
    if delta < 0 {
        format_thousands(delta)
    } else {
        format!("+{}", format_thousands(delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(12345), "12,345");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-1234), "-1,234");
        assert_eq!(format_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(10), "+10");
        assert_eq!(format_delta(1200), "+1,200");
        assert_eq!(format_delta(0), "+0");
        assert_eq!(format_delta(-5), "-5");
    }
}
