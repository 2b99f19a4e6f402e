/// Format a float the Swedish way with a currency suffix: 1 234,56 kr
pub fn money(val: f64, currency: &str) -> String {
    let negative = val < 0.0 && format!("{:.2}", val.abs()) != "0.00";
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    if currency.is_empty() {
        format!("{sign}{grouped},{dec_part}")
    } else {
        format!("{sign}{grouped},{dec_part} {currency}")
    }
}

/// Like [`money`] but always shows the sign, for differences.
pub fn signed_money(val: f64, currency: &str) -> String {
    let s = money(val, currency);
    if s.starts_with('-') || s.starts_with("0,00") {
        s
    } else {
        format!("+{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(1234.56, "kr"), "1 234,56 kr");
        assert_eq!(money(-500.00, "kr"), "-500,00 kr");
        assert_eq!(money(0.0, "kr"), "0,00 kr");
        assert_eq!(money(1000000.99, "kr"), "1 000 000,99 kr");
        assert_eq!(money(42.10, ""), "42,10");
        assert_eq!(money(-0.001, "kr"), "0,00 kr");
    }

    #[test]
    fn test_signed_money() {
        assert_eq!(signed_money(30000.0, "kr"), "+30 000,00 kr");
        assert_eq!(signed_money(-50000.0, "kr"), "-50 000,00 kr");
        assert_eq!(signed_money(0.0, "kr"), "0,00 kr");
    }
}
