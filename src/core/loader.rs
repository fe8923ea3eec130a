use std::future::Future;

use anyhow::Context;

use crate::core::collate::CollationKey;
use crate::core::error::LoadError;
use crate::models::Country;

/// Progress of the one-shot dataset load. There is no way back to `Loading`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    /// Loading finished but produced no dataset (the fetch failed).
    ReadyEmpty,
}

impl LoadStatus {
    pub fn is_loading(self) -> bool {
        matches!(self, LoadStatus::Loading)
    }
}

/// Somewhere the country dataset can be read from.
pub trait CountrySource {
    fn fetch_countries(&self) -> impl Future<Output = anyhow::Result<Vec<Country>>> + Send;
}

/// Reads the dataset from the remote country service with a single GET.
#[derive(Debug, Clone)]
pub struct HttpCountrySource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCountrySource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    async fn fetch_body(&self) -> Result<String, LoadError> {
        let resp = self.client.get(&self.endpoint).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

impl CountrySource for HttpCountrySource {
    async fn fetch_countries(&self) -> anyhow::Result<Vec<Country>> {
        tracing::debug!(endpoint = %self.endpoint, "fetching countries");
        let body = self
            .fetch_body()
            .await
            .with_context(|| format!("Failed to fetch {}", self.endpoint))?;
        let countries = parse_countries(&body).context("Malformed country dataset")?;
        Ok(countries)
    }
}

/// A source with a predetermined outcome, for offline use and tests.
#[derive(Debug, Clone)]
pub enum FixedCountrySource {
    Countries(Vec<Country>),
    Failing(String),
}

impl FixedCountrySource {
    pub fn ok(countries: Vec<Country>) -> Self {
        Self::Countries(countries)
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self::Failing(reason.into())
    }
}

impl CountrySource for FixedCountrySource {
    async fn fetch_countries(&self) -> anyhow::Result<Vec<Country>> {
        match self {
            FixedCountrySource::Countries(countries) => Ok(countries.clone()),
            FixedCountrySource::Failing(reason) => Err(anyhow::anyhow!("{reason}")),
        }
    }
}

/// Decode the service's JSON array of countries.
pub fn parse_countries(body: &str) -> Result<Vec<Country>, LoadError> {
    Ok(serde_json::from_str(body)?)
}

/// Order countries by common name using locale-aware comparison.
pub fn sort_countries(countries: &mut [Country]) {
    countries.sort_by_cached_key(|country| CollationKey::new(country.common_name()));
}

/// Fetch from `source` and return the sorted working dataset.
pub async fn load_dataset<S: CountrySource>(source: &S) -> anyhow::Result<Vec<Country>> {
    let mut countries = source.fetch_countries().await?;
    sort_countries(&mut countries);
    Ok(countries)
}
