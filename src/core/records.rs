use crate::core::error::SubmitError;
use crate::models::{Person, PersonDraft, PersonId};

/// Locally entered person records, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct RecordManager {
    persons: Vec<Person>,
}

fn optional(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

impl RecordManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn get(&self, id: &PersonId) -> Option<&Person> {
        self.persons.iter().find(|person| &person.id == id)
    }

    fn fresh_id(&self) -> PersonId {
        loop {
            let id = PersonId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Append a person built from `draft` and reset the draft.
    ///
    /// The draft is left untouched when a required field is empty.
    pub fn try_submit(&mut self, draft: &mut PersonDraft) -> Result<PersonId, SubmitError> {
        if let Some(field) = draft.missing_field() {
            return Err(SubmitError::MissingField(field));
        }

        let PersonDraft {
            full_name,
            email,
            phone,
            city,
            country_name,
        } = std::mem::take(draft);

        let id = self.fresh_id();
        self.persons.push(Person {
            id,
            full_name,
            email,
            phone: optional(phone),
            city: optional(city),
            country_name,
        });
        Ok(id)
    }

    /// Like [`try_submit`](Self::try_submit), but a rejected draft is dropped silently.
    pub fn submit(&mut self, draft: &mut PersonDraft) -> Option<PersonId> {
        match self.try_submit(draft) {
            Ok(id) => {
                tracing::debug!(%id, "person added");
                Some(id)
            }
            Err(err) => {
                tracing::debug!("person draft rejected: {err}");
                None
            }
        }
    }

    /// Remove the person with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &PersonId) -> bool {
        let before = self.persons.len();
        self.persons.retain(|person| &person.id != id);
        let removed = self.persons.len() != before;
        if !removed {
            tracing::debug!(%id, "no person to remove");
        }
        removed
    }
}
