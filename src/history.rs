//! Yearly completion grid. Cells are plain booleans keyed by day; they are
//! only overlaid with `true` when the root gains a completed date during the
//! running session and are never reconciled with the exercise store otherwise.

use crate::calendar::{self, day_key};
use crate::models::{CompletedDates, HistoryCell, HistoryCompletionMap, HistoryWeek};
use crate::storage::{HISTORY_KEY, KeyValueStore, read_slice, write_slice};

pub const WEEKS_PER_COLUMN: usize = 13;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryView {
    completed: HistoryCompletionMap,
}

impl HistoryView {
    /// Saved cells only. Completed dates loaded from storage are not
    /// re-applied, so a cell turned off stays off across restarts.
    pub fn mount<S: KeyValueStore + ?Sized>(storage: &S) -> Self {
        Self {
            completed: read_slice(storage, HISTORY_KEY),
        }
    }

    pub fn completed(&self) -> &HistoryCompletionMap {
        &self.completed
    }

    pub fn is_completed(&self, date: &str) -> bool {
        self.completed.get(date).copied().unwrap_or(false)
    }

    /// Applied whenever the root's completed-dates list gains a date.
    pub fn sync_completed_dates<S: KeyValueStore + ?Sized>(
        &mut self,
        storage: &mut S,
        completed_dates: &CompletedDates,
    ) {
        self.overlay(completed_dates);
        self.persist(storage);
    }

    pub fn toggle<S: KeyValueStore + ?Sized>(&mut self, storage: &mut S, date: &str) -> bool {
        let value = !self.is_completed(date);
        self.completed.insert(date.to_string(), value);
        self.persist(storage);
        value
    }

    pub fn rows(&self, year: i32) -> Vec<HistoryWeek> {
        calendar::history_grid(year)
            .into_iter()
            .enumerate()
            .map(|(index, week)| HistoryWeek {
                number: index + 1,
                days: week
                    .into_iter()
                    .map(|day| {
                        let date = day_key(day);
                        HistoryCell {
                            completed: self.is_completed(&date),
                            initial: calendar::weekday_initial(day),
                            date,
                        }
                    })
                    .collect(),
            })
            .collect()
    }

    fn overlay(&mut self, completed_dates: &CompletedDates) {
        for date in completed_dates.iter() {
            self.completed.insert(date.to_string(), true);
        }
    }

    fn persist<S: KeyValueStore + ?Sized>(&self, storage: &mut S) {
        write_slice(storage, HISTORY_KEY, &self.completed);
    }
}

/// Splits the rows into the four 13-week columns of the grid.
pub fn columns(rows: &[HistoryWeek]) -> Vec<&[HistoryWeek]> {
    rows.chunks(WEEKS_PER_COLUMN).collect()
}
