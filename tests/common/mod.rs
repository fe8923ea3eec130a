#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from country_explorer for tests
pub use country_explorer::core::{
    Criteria, DISPLAY_CAP, DisplayPage, FixedCountrySource, HttpCountrySource, LoadStatus,
    RecordManager, filter_countries, load_dataset, parse_countries,
};
pub use country_explorer::{Category, Country, DraftField, Explorer, Intent, PersonDraft, PersonId};
