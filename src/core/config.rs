use crate::core::loader::HttpCountrySource;

/// Country service endpoint with the field projection the explorer needs.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=name,capital,region,subregion,languages,currencies,flags,cca2,population,area";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    pub endpoint: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ExplorerConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn source(&self) -> HttpCountrySource {
        HttpCountrySource::new(&self.endpoint)
    }
}
