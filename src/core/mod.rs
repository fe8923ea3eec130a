pub mod collate;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod loader;
pub mod records;
pub mod session;

pub use config::{DEFAULT_ENDPOINT, ExplorerConfig};
pub use error::{LoadError, SubmitError};
pub use filter::{Criteria, DISPLAY_CAP, DisplayPage, filter_countries};
pub use loader::{
    CountrySource, FixedCountrySource, HttpCountrySource, LoadStatus, load_dataset,
    parse_countries, sort_countries,
};
pub use records::RecordManager;
pub use session::{Explorer, Intent};
