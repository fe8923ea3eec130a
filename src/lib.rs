pub mod core;
pub mod models;

pub use models::{Category, Country, Currency, DraftField, Person, PersonDraft, PersonId};
pub use self::core::{
    Criteria, DisplayPage, Explorer, ExplorerConfig, Intent, LoadStatus, RecordManager,
};

#[cfg(feature = "gui")]
pub mod gui;
