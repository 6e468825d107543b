//! pt-BR display formatting for reports.

const NBSP: char = '\u{a0}';

/// `3200.0` -> `"R$ 3.200,00"` (non-breaking space after the symbol).
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}R${NBSP}{},{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

/// `45000` -> `"45.000"`.
pub fn format_number(value: u64) -> String {
    group_thousands(value)
}

/// `2.78` -> `"2.78%"`.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency() {
        assert_eq!(format_currency(3200.0), "R$\u{a0}3.200,00");
        assert_eq!(format_currency(2.5), "R$\u{a0}2,50");
        assert_eq!(format_currency(1234567.891), "R$\u{a0}1.234.567,89");
        assert_eq!(format_currency(-10.0), "-R$\u{a0}10,00");
        assert_eq!(format_currency(0.0), "R$\u{a0}0,00");
    }

    #[test]
    fn numbers() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(45000), "45.000");
        assert_eq!(format_number(1_000_000), "1.000.000");
    }

    #[test]
    fn percentage() {
        assert_eq!(format_percentage(2.78), "2.78%");
        assert_eq!(format_percentage(100.0), "100.00%");
    }
}
