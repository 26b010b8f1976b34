//! Weekly exercise log: a local mirror of the root store, the selected week
//! and the entry wizard.

use crate::calendar::{self, day_key};
use crate::models::{ExerciseEntry, ExerciseStore};
use crate::wizard::{EntryWizard, SubmitOutcome};
use chrono::NaiveDate;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "prev" => Some(Self::Prev),
            "next" => Some(Self::Next),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerView {
    exercises: ExerciseStore,
    selected_week: NaiveDate,
    wizard: EntryWizard,
}

impl TrackerView {
    pub fn mount(saved: &ExerciseStore, today: NaiveDate) -> Self {
        Self {
            exercises: saved.clone(),
            selected_week: today,
            wizard: EntryWizard::default(),
        }
    }

    pub fn exercises(&self) -> &ExerciseStore {
        &self.exercises
    }

    pub fn day(&self, date: &str) -> &[ExerciseEntry] {
        self.exercises.get(date).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn wizard(&self) -> &EntryWizard {
        &self.wizard
    }

    pub fn selected_week(&self) -> NaiveDate {
        self.selected_week
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        calendar::week_days(self.selected_week)
    }

    pub fn week_label(&self) -> String {
        calendar::week_label(self.selected_week)
    }

    pub fn navigate(&mut self, direction: Direction) {
        let weeks = match direction {
            Direction::Prev => -1,
            Direction::Next => 1,
        };
        self.selected_week = calendar::shift_weeks(self.selected_week, weeks);
    }

    /// The root's copy always wins over the local one.
    pub fn sync_from_root(&mut self, store: &ExerciseStore) {
        self.exercises = store.clone();
    }

    pub fn start_entry(&mut self, date: NaiveDate) {
        self.wizard.start(&day_key(date));
    }

    pub fn abandon_entry(&mut self) {
        self.wizard.abandon();
    }

    pub fn abandon_entry_for(&mut self, date: NaiveDate) -> bool {
        self.wizard.abandon_for(&day_key(date))
    }

    /// Feeds one confirmed value to the wizard. A finished entry is appended
    /// locally and handed back for the root to record.
    pub fn submit_input<R: Rng>(&mut self, raw: &str, rng: &mut R) -> Option<(String, ExerciseEntry)> {
        match self.wizard.submit(raw, rng) {
            SubmitOutcome::Completed { date, entry } => {
                self.exercises
                    .entry(date.clone())
                    .or_default()
                    .push(entry.clone());
                Some((date, entry))
            }
            SubmitOutcome::Ignored | SubmitOutcome::Advanced(_) => None,
        }
    }

    /// Flips one entry's completion and returns the updated copy for the
    /// root. Unknown dates or ids leave everything untouched.
    pub fn toggle_exercise(&mut self, date: &str, id: &str) -> Option<ExerciseEntry> {
        let entry = self
            .exercises
            .get_mut(date)?
            .iter_mut()
            .find(|entry| entry.id == id)?;
        entry.completed = !entry.completed;
        Some(entry.clone())
    }
}
