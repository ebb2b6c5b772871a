//! Roster collected by the operator before a travel order is submitted.

use crate::models::{EmployeeOption, ParticipantRole, RosterEntry};

/// Maximum number of candidates offered by [`RosterDraft::search`].
pub const SEARCH_LIMIT: usize = 10;

/// Ordered participant list without duplicate employees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterDraft {
    entries: Vec<RosterEntry>,
}

impl RosterDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a draft from persisted entries; later duplicates are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = RosterEntry>) -> Self {
        let mut draft = Self::new();
        for entry in entries {
            if !draft.contains(&entry.employee_id) {
                draft.entries.push(entry);
            }
        }
        draft
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, employee_id: &str) -> bool {
        self.entries.iter().any(|e| e.employee_id == employee_id)
    }

    pub fn role_of(&self, employee_id: &str) -> Option<ParticipantRole> {
        self.entries
            .iter()
            .find(|e| e.employee_id == employee_id)
            .map(|e| e.role)
    }

    /// Append an employee as a member. Returns `false` if already present.
    pub fn add(&mut self, employee_id: &str) -> bool {
        if self.contains(employee_id) {
            return false;
        }
        self.entries
            .push(RosterEntry::new(employee_id, ParticipantRole::Member));
        true
    }

    /// Returns `false` if the employee was not on the roster.
    pub fn remove(&mut self, employee_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.employee_id != employee_id);
        self.entries.len() != before
    }

    /// Returns `false` if the employee was not on the roster.
    pub fn set_role(&mut self, employee_id: &str, role: ParticipantRole) -> bool {
        match self.entries.iter_mut().find(|e| e.employee_id == employee_id) {
            Some(entry) => {
                entry.role = role;
                true
            }
            None => false,
        }
    }

    /// Employees matching `term` by name or service number, skipping those
    /// already on the roster. At most [`SEARCH_LIMIT`] results.
    pub fn search<'a>(&'a self, options: &'a [EmployeeOption], term: &str) -> Candidates<'a> {
        Candidates {
            options: options.iter(),
            roster: self,
            needle: term.trim().to_lowercase(),
            remaining: SEARCH_LIMIT,
        }
    }
}

/// Lazy search results; clone it to iterate again from the start.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    options: std::slice::Iter<'a, EmployeeOption>,
    roster: &'a RosterDraft,
    needle: String,
    remaining: usize,
}

impl<'a> Iterator for Candidates<'a> {
    type Item = &'a EmployeeOption;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        for option in self.options.by_ref() {
            if !self.roster.contains(&option.id) && matches(&self.needle, option) {
                self.remaining -= 1;
                return Some(option);
            }
        }
        self.remaining = 0;
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining.min(self.options.len())))
    }
}

fn matches(needle: &str, option: &EmployeeOption) -> bool {
    option.name.to_lowercase().contains(needle)
        || option.service_number.to_lowercase().contains(needle)
}
