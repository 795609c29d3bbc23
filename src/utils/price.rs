// src/utils/price.rs

//! Price text parsing.
//!
//! Listing prices arrive as display text in Brazilian format
//! ("R$ 1.234,56", "1.299", "a partir de R$ 89,90 em 10x"). Dots are
//! thousands separators and the comma is the decimal mark. Only the first
//! numeric token counts; anything after it is installment noise.

use regex::Regex;

/// Parse a raw price string into a numeric value.
///
/// Returns `None` when the text carries no numeric token ("Grátis",
/// "indisponível", empty strings).
pub fn parse_price(raw: &str) -> Option<f64> {
    let pattern = Regex::new(r"\d[\d.]*(?:,\d+)?").ok()?;
    let token = pattern.find(raw)?.as_str();
    let normalized = token.replace('.', "").replace(',', ".");
    normalized.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integer() {
        assert_eq!(parse_price("35"), Some(35.0));
    }

    #[test]
    fn parses_currency_with_decimal_comma() {
        assert_eq!(parse_price("R$ 89,90"), Some(89.9));
    }

    #[test]
    fn parses_thousands_separator() {
        assert_eq!(parse_price("R$ 1.234,56"), Some(1234.56));
        assert_eq!(parse_price("1.299"), Some(1299.0));
    }

    #[test]
    fn takes_first_token_only() {
        assert_eq!(
            parse_price("R$ 1.234,56 em 10x de R$ 123,46"),
            Some(1234.56)
        );
    }

    #[test]
    fn rejects_text_without_numbers() {
        assert_eq!(parse_price("Grátis"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("indisponível"), None);
    }
}
