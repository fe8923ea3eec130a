use crate::models::{Category, Country};

/// Maximum number of filtered countries rendered at once.
pub const DISPLAY_CAP: usize = 10;

/// Search text and continent the user filters by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub query: String,
    pub category: Category,
}

impl Criteria {
    pub fn new(query: impl Into<String>, category: Category) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// Lowercased trimmed query, or `None` when it filters nothing.
    fn needle(&self) -> Option<String> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    pub fn is_identity(&self) -> bool {
        self.needle().is_none() && self.category == Category::All
    }
}

fn passes(needle: Option<&str>, category: Category, country: &Country) -> bool {
    let by_name = match needle {
        Some(needle) => country.common_name().to_lowercase().contains(needle),
        None => true,
    };
    by_name && category.admits(&country.region)
}

/// Positions in `dataset` of the countries passing `criteria`, in dataset order.
pub fn filter_indices(dataset: &[Country], criteria: &Criteria) -> Vec<usize> {
    let needle = criteria.needle();
    dataset
        .iter()
        .enumerate()
        .filter(|(_, country)| passes(needle.as_deref(), criteria.category, country))
        .map(|(idx, _)| idx)
        .collect()
}

pub fn filter_countries<'a>(dataset: &'a [Country], criteria: &Criteria) -> Vec<&'a Country> {
    filter_indices(dataset, criteria)
        .into_iter()
        .map(|idx| &dataset[idx])
        .collect()
}

/// The capped slice of a filtered sequence that is actually rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPage<'a> {
    pub shown: Vec<&'a Country>,
    pub total: usize,
}

impl<'a> DisplayPage<'a> {
    pub fn new(matches: impl IntoIterator<Item = &'a Country>) -> Self {
        let mut total = 0;
        let mut shown = Vec::with_capacity(DISPLAY_CAP);
        for country in matches {
            if total < DISPLAY_CAP {
                shown.push(country);
            }
            total += 1;
        }
        Self { shown, total }
    }

    /// Matches left out by the display cap.
    pub fn remaining(&self) -> usize {
        self.total - self.shown.len()
    }

    pub fn has_overflow(&self) -> bool {
        self.total > DISPLAY_CAP
    }

    /// Zero-match signal. Does not distinguish "not loaded" from "filtered out".
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn heading(&self) -> String {
        format!("Countries ({} found)", self.total)
    }

    pub fn overflow_notice(&self) -> Option<String> {
        self.has_overflow().then(|| {
            format!(
                "Showing {} of {} countries. Use search or filter to narrow results.",
                self.shown.len(),
                self.total
            )
        })
    }
}
