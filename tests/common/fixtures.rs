use country_explorer::core::{FixedCountrySource, load_dataset};
use country_explorer::{Country, Explorer, PersonDraft};
use serde_json::json;

/// Builds a country the way the service would send it, with only the given fields.
pub fn make_country(common: &str, region: &str, code: &str) -> Country {
    serde_json::from_value(json!({
        "name": { "common": common, "official": format!("Official {common}") },
        "region": region,
        "flags": { "png": format!("https://flagcdn.com/w320/{}.png", code.to_lowercase()), "svg": "" },
        "cca2": code,
    }))
    .expect("Failed to build test country")
}

/// Germany, Ghana and France, deliberately unsorted.
pub fn sample_countries() -> Vec<Country> {
    vec![
        make_country("Germany", "Europe", "DE"),
        make_country("Ghana", "Africa", "GH"),
        make_country("France", "Europe", "FR"),
    ]
}

/// `count` countries in `region`, named so they already sort in order.
pub fn numbered_countries(count: usize, region: &str) -> Vec<Country> {
    (0..count)
        .map(|i| make_country(&format!("Land {i:03}"), region, &format!("L{i}")))
        .collect()
}

/// An explorer that finished loading `countries` through the regular loader.
pub async fn loaded_explorer(countries: Vec<Country>) -> Explorer {
    let mut explorer = Explorer::new();
    explorer.finish_load(load_dataset(&FixedCountrySource::ok(countries)).await);
    explorer
}

pub fn make_draft(full_name: &str, email: &str, country_name: &str) -> PersonDraft {
    PersonDraft {
        full_name: full_name.to_string(),
        email: email.to_string(),
        country_name: country_name.to_string(),
        ..Default::default()
    }
}

pub fn names<'a>(countries: impl IntoIterator<Item = &'a Country>) -> Vec<&'a str> {
    countries.into_iter().map(Country::common_name).collect()
}
