//! Session state owned by the top-level controller.
//!
//! Every user intent goes through [`Explorer::handle`], which mutates the
//! state and then recomputes the filtered view. Nothing recomputes lazily.

use std::fmt::Display;

use crate::core::filter::{self, Criteria, DisplayPage};
use crate::core::loader::LoadStatus;
use crate::core::records::RecordManager;
use crate::models::{Category, Country, DraftField, Person, PersonDraft, PersonId};

/// Something the user asked the explorer to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SetQuery(String),
    SelectCategory(Category),
    /// Open the detail view of the country with this `cca2` code.
    OpenDetails(String),
    CloseDetails,
    EditDraft(DraftField, String),
    SubmitDraft,
    RemovePerson(PersonId),
    ToggleDarkMode,
    IncrementCounter,
    DecrementCounter,
}

#[derive(Debug, Clone, Default)]
pub struct Explorer {
    dataset: Vec<Country>,
    status: LoadStatus,
    criteria: Criteria,
    /// Indices into `dataset` passing `criteria`.
    matches: Vec<usize>,
    records: RecordManager,
    draft: PersonDraft,
    selected: Option<usize>,
    dark_mode: bool,
    counter: i64,
}

impl Explorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the result of the startup load. Expects the loader's sorted output.
    ///
    /// Only the first call has any effect; the dataset is never replaced.
    pub fn finish_load<E: Display>(&mut self, result: Result<Vec<Country>, E>) {
        if !self.status.is_loading() {
            tracing::warn!(status = ?self.status, "ignoring repeated dataset load");
            return;
        }

        match result {
            Ok(countries) => {
                tracing::info!(count = countries.len(), "countries loaded");
                self.dataset = countries;
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                tracing::error!(error = %format!("{e:#}"), "error fetching countries");
                self.status = LoadStatus::ReadyEmpty;
            }
        }
        self.recompute();
    }

    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::SetQuery(query) => self.criteria.query = query,
            Intent::SelectCategory(category) => self.criteria.category = category,
            Intent::OpenDetails(code) => {
                match self.dataset.iter().position(|country| country.code() == code) {
                    Some(idx) => self.selected = Some(idx),
                    None => tracing::debug!(%code, "no country with this code"),
                }
            }
            Intent::CloseDetails => self.selected = None,
            Intent::EditDraft(field, value) => self.draft.set(field, value),
            Intent::SubmitDraft => {
                self.records.submit(&mut self.draft);
            }
            Intent::RemovePerson(id) => {
                self.records.remove(&id);
            }
            Intent::ToggleDarkMode => self.dark_mode = !self.dark_mode,
            Intent::IncrementCounter => self.counter += 1,
            Intent::DecrementCounter => self.counter -= 1,
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        self.matches = filter::filter_indices(&self.dataset, &self.criteria);
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn dataset(&self) -> &[Country] {
        &self.dataset
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Every country passing the current criteria, in dataset order.
    pub fn matches(&self) -> impl Iterator<Item = &Country> + '_ {
        self.matches.iter().map(|idx| &self.dataset[*idx])
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn page(&self) -> DisplayPage<'_> {
        DisplayPage::new(self.matches())
    }

    pub fn is_zero_match(&self) -> bool {
        self.matches.is_empty()
    }

    /// Options for the person form's country selector.
    pub fn country_names(&self) -> Vec<String> {
        self.dataset
            .iter()
            .map(|country| country.common_name().to_string())
            .collect()
    }

    pub fn selected_country(&self) -> Option<&Country> {
        self.selected.map(|idx| &self.dataset[idx])
    }

    pub fn records(&self) -> &RecordManager {
        &self.records
    }

    pub fn persons(&self) -> &[Person] {
        self.records.persons()
    }

    pub fn draft(&self) -> &PersonDraft {
        &self.draft
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn counter(&self) -> i64 {
        self.counter
    }
}
