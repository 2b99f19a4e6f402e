// ---------------------------------------------------------------------------
// Swedish number normalization
// ---------------------------------------------------------------------------

const UNICODE_MINUS: char = '\u{2212}';

/// Normalize a Swedish-formatted number such as `"1 234,56"`, `"−813"` or
/// `"813-"` into an `f64`.
///
/// Blank or unparseable input yields `None` when `allow_null` is set and
/// `Some(0.0)` otherwise. Never fails.
pub fn normalize_number(raw: &str, allow_null: bool) -> Option<f64> {
    let fallback = if allow_null { None } else { Some(0.0) };

    // char::is_whitespace covers U+00A0 and U+202F as well as ASCII space
    let mut s: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == UNICODE_MINUS { '-' } else { c })
        .collect();
    if s.is_empty() {
        return fallback;
    }

    if s.len() > 1 && s.ends_with('-') && !s[..s.len() - 1].contains('-') {
        s.pop();
        s.insert(0, '-');
    }

    match s.replace(',', ".").parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => fallback,
    }
}

/// Debit/credit cells: blank means zero.
pub fn parse_amount(raw: &str) -> f64 {
    normalize_number(raw, false).unwrap_or(0.0)
}

/// Saldo cells: blank means no balance was recorded.
pub fn parse_balance(raw: &str) -> Option<f64> {
    normalize_number(raw, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nbsp_thousands_and_comma_decimal() {
        assert_eq!(normalize_number("1\u{a0}234,56", false), Some(1234.56));
        assert_eq!(normalize_number("1 234 567,5", false), Some(1234567.5));
        assert_eq!(normalize_number("12\u{202f}000", false), Some(12000.0));
    }

    #[test]
    fn test_unicode_minus() {
        assert_eq!(normalize_number("\u{2212}813", false), Some(-813.0));
        assert_eq!(normalize_number("\u{2212}1\u{a0}000,25", true), Some(-1000.25));
    }

    #[test]
    fn test_trailing_minus_moves_to_front() {
        assert_eq!(normalize_number("813-", false), Some(-813.0));
        assert_eq!(normalize_number("2 500,00 -", false), Some(-2500.0));
        assert_eq!(normalize_number("45\u{2212}", true), Some(-45.0));
    }

    #[test]
    fn test_blank_respects_allow_null() {
        assert_eq!(normalize_number("", true), None);
        assert_eq!(normalize_number("", false), Some(0.0));
        assert_eq!(normalize_number(" \u{a0} ", true), None);
        assert_eq!(normalize_number("   ", false), Some(0.0));
    }

    #[test]
    fn test_garbage_falls_back() {
        assert_eq!(normalize_number("abc", true), None);
        assert_eq!(normalize_number("abc", false), Some(0.0));
        assert_eq!(normalize_number("-", true), None);
        assert_eq!(normalize_number("1,2,3", false), Some(0.0));
        assert_eq!(normalize_number("inf", true), None);
        assert_eq!(normalize_number("NaN", false), Some(0.0));
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(normalize_number("0", true), Some(0.0));
        assert_eq!(normalize_number("-42,5", false), Some(-42.5));
        assert_eq!(normalize_number("100", false), Some(100.0));
    }

    #[test]
    fn test_wrappers() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("4\u{a0}000,00"), 4000.0);
        assert_eq!(parse_balance(""), None);
        assert_eq!(parse_balance("0,00"), Some(0.0));
    }
}
