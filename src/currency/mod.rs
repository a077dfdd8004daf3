//! Display formatting for amounts.
//!
//! Amounts are stored as plain `f64`; these helpers only affect how they are
//! rendered in the shell.

/// Separators used when rendering numbers for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormat {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl LocaleFormat {
    /// Picks separators from a language tag such as `es-CO` or `en-US`.
    /// Languages that group with a period get `.`/`,`; everything else gets
    /// `,`/`.`.
    pub fn for_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "es" | "pt" | "de" | "it" | "nl" | "id" => Self {
                decimal_separator: ',',
                grouping_separator: '.',
            },
            _ => Self::default(),
        }
    }
}

impl Default for LocaleFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

pub fn symbol_for(code: &str) -> &str {
    match code {
        "COP" | "USD" | "MXN" | "ARS" | "CLP" => "$",
        "EUR" => "€",
        "GBP" => "£",
        _ => code,
    }
}

/// Formats `value` with grouping. Whole numbers are printed without decimals,
/// anything else with two.
pub fn format_amount(value: f64, locale: &str) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let format = LocaleFormat::for_tag(locale);
    let rounded = (value * 100.0).round() / 100.0;
    let precision = if rounded.fract() == 0.0 { 0 } else { 2 };
    let body = format!("{:.*}", precision, rounded.abs());
    let (int_part, fraction) = match body.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (body.as_str(), None),
    };
    let mut rendered = String::new();
    if rounded < 0.0 {
        rendered.push('-');
    }
    rendered.push_str(&group_digits(int_part, format.grouping_separator));
    if let Some(fraction) = fraction {
        rendered.push(format.decimal_separator);
        rendered.push_str(fraction);
    }
    rendered
}

/// Formats `value` prefixed with the currency symbol, e.g. `$ 1.500.000`.
pub fn format_currency(value: f64, code: &str, locale: &str) -> String {
    format!("{} {}", symbol_for(code), format_amount(value, locale))
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_locale_groups_with_periods() {
        assert_eq!(format_amount(1_500_000.0, "es-CO"), "1.500.000");
        assert_eq!(format_amount(-20_000.0, "es-CO"), "-20.000");
        assert_eq!(format_amount(1234.5, "es-CO"), "1.234,50");
    }

    #[test]
    fn english_locale_groups_with_commas() {
        assert_eq!(format_amount(1_500_000.0, "en-US"), "1,500,000");
        assert_eq!(format_amount(999.0, "en-US"), "999");
        assert_eq!(format_amount(0.125, "en-US"), "0.13");
    }

    #[test]
    fn currency_prefix_uses_symbol_or_code() {
        assert_eq!(format_currency(300_000.0, "COP", "es-CO"), "$ 300.000");
        assert_eq!(format_currency(10.0, "JPY", "en-US"), "JPY 10");
    }
}
