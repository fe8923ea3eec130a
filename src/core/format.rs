//! Display strings derived from country fields.

use indexmap::IndexMap;

use crate::models::{Country, Currency};

/// Marker rendered wherever a value is absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// Languages shown on a summary card before eliding the rest.
const SHORT_LANGUAGE_COUNT: usize = 2;

/// Code of the first listed currency.
pub fn currency_code(currencies: Option<&IndexMap<String, Currency>>) -> String {
    currencies
        .and_then(|currencies| currencies.keys().next())
        .cloned()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Every currency as `name (symbol)`, falling back to the code without a symbol.
pub fn currency_detail(currencies: Option<&IndexMap<String, Currency>>) -> String {
    match currencies {
        Some(currencies) if !currencies.is_empty() => currencies
            .iter()
            .map(|(code, currency)| {
                let symbol = currency
                    .symbol
                    .as_deref()
                    .filter(|symbol| !symbol.is_empty())
                    .unwrap_or(code.as_str());
                format!("{} ({})", currency.name, symbol)
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// First two languages, with a trailing `...` when more exist.
pub fn languages_short(languages: Option<&IndexMap<String, String>>) -> String {
    let Some(languages) = languages else {
        return NOT_AVAILABLE.to_string();
    };
    let names: Vec<&str> = languages.values().map(String::as_str).collect();
    if names.len() > SHORT_LANGUAGE_COUNT {
        format!("{}, ...", names[..SHORT_LANGUAGE_COUNT].join(", "))
    } else {
        names.join(", ")
    }
}

pub fn languages_full(languages: Option<&IndexMap<String, String>>) -> String {
    match languages {
        Some(languages) => languages.values().map(String::as_str).collect::<Vec<_>>().join(", "),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Group the integer part in thousands and keep up to three fraction digits.
pub fn format_number(value: f64) -> String {
    let thousandths = (value.abs() * 1000.0).round() as u128;
    let whole = thousandths / 1000;
    let fraction = thousandths % 1000;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    if value < 0.0 && thousandths > 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if fraction > 0 {
        let fraction = format!("{fraction:03}");
        grouped.push('.');
        grouped.push_str(fraction.trim_end_matches('0'));
    }
    grouped
}

// Zero is treated like an absent value.
pub fn population(population: Option<f64>) -> String {
    match population {
        Some(population) if population > 0.0 => format_number(population),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn area(area: Option<f64>) -> String {
    match area {
        Some(area) if area > 0.0 => format!("{} km²", format_number(area)),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn capital(country: &Country) -> &str {
    country.capital().unwrap_or(NOT_AVAILABLE)
}

/// `region` or `region - subregion`.
pub fn region_line(country: &Country) -> String {
    match country.subregion() {
        Some(subregion) => format!("{} - {}", country.region, subregion),
        None => country.region.clone(),
    }
}
