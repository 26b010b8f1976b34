//! Cross-view source of truth: every exercise by day, plus the days that have
//! ever had one recorded. Both slices are persisted independently.

use crate::models::{CompletedDates, ExerciseEntry, ExerciseStore};
use crate::storage::{COMPLETED_DATES_KEY, EXERCISES_KEY, KeyValueStore, read_slice, write_slice};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootContainer {
    exercises: ExerciseStore,
    completed_dates: CompletedDates,
}

impl RootContainer {
    pub fn hydrate<S: KeyValueStore + ?Sized>(storage: &S) -> Self {
        Self {
            exercises: read_slice(storage, EXERCISES_KEY),
            completed_dates: read_slice(storage, COMPLETED_DATES_KEY),
        }
    }

    pub fn exercises(&self) -> &ExerciseStore {
        &self.exercises
    }

    pub fn completed_dates(&self) -> &CompletedDates {
        &self.completed_dates
    }

    /// Handles a new or updated entry from the tracker: replaces the entry
    /// with the same id in place, or appends it to the day. Returns `true`
    /// when `date` was added to the completed dates.
    pub fn record_exercise<S: KeyValueStore + ?Sized>(
        &mut self,
        storage: &mut S,
        date: &str,
        entry: ExerciseEntry,
    ) -> bool {
        let new_date = self.completed_dates.insert(date);

        let day = self.exercises.entry(date.to_string()).or_default();
        match day.iter_mut().find(|existing| existing.id == entry.id) {
            Some(existing) => {
                debug!(date, id = %entry.id, "updating exercise");
                *existing = entry;
            }
            None => {
                debug!(date, id = %entry.id, "adding exercise");
                day.push(entry);
            }
        }

        self.persist(storage);
        new_date
    }

    fn persist<S: KeyValueStore + ?Sized>(&self, storage: &mut S) {
        write_slice(storage, EXERCISES_KEY, &self.exercises);
        write_slice(storage, COMPLETED_DATES_KEY, &self.completed_dates);
    }
}
