//! Wiring between the root container and the two views. Every operation is a
//! complete user interaction: mutate, write through, propagate downwards.

use crate::history::HistoryView;
use crate::models::ExerciseEntry;
use crate::root::RootContainer;
use crate::storage::StorageArea;
use crate::tracker::{Direction, TrackerView};
use chrono::NaiveDate;
use rand::Rng;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Session {
    storage: StorageArea,
    root: RootContainer,
    tracker: TrackerView,
    history: HistoryView,
}

impl Session {
    pub fn start(storage: StorageArea, today: NaiveDate) -> Self {
        let root = RootContainer::hydrate(&storage);
        let tracker = TrackerView::mount(root.exercises(), today);
        let history = HistoryView::mount(&storage);
        info!(
            days = root.exercises().len(),
            completed = root.completed_dates().len(),
            "session started"
        );

        Self {
            storage,
            root,
            tracker,
            history,
        }
    }

    pub fn storage(&self) -> &StorageArea {
        &self.storage
    }

    pub fn root(&self) -> &RootContainer {
        &self.root
    }

    pub fn tracker(&self) -> &TrackerView {
        &self.tracker
    }

    pub fn history(&self) -> &HistoryView {
        &self.history
    }

    pub fn navigate(&mut self, direction: Direction) {
        self.tracker.navigate(direction);
    }

    pub fn start_entry(&mut self, date: NaiveDate) {
        self.tracker.start_entry(date);
    }

    pub fn abandon_entry(&mut self) {
        self.tracker.abandon_entry();
    }

    pub fn abandon_entry_for(&mut self, date: NaiveDate) -> bool {
        self.tracker.abandon_entry_for(date)
    }

    /// Returns the entry when this value completed the wizard.
    pub fn submit_input<R: Rng>(&mut self, raw: &str, rng: &mut R) -> Option<ExerciseEntry> {
        let (date, entry) = self.tracker.submit_input(raw, rng)?;
        info!(date = %date, name = %entry.name, "exercise added");
        self.notify_root(&date, entry.clone());
        Some(entry)
    }

    pub fn toggle_exercise(&mut self, date: &str, id: &str) -> Option<ExerciseEntry> {
        let entry = self.tracker.toggle_exercise(date, id)?;
        self.notify_root(date, entry.clone());
        Some(entry)
    }

    pub fn toggle_history(&mut self, date: &str) -> bool {
        self.history.toggle(&mut self.storage, date)
    }

    fn notify_root(&mut self, date: &str, entry: ExerciseEntry) {
        let new_date = self.root.record_exercise(&mut self.storage, date, entry);
        self.tracker.sync_from_root(self.root.exercises());
        if new_date {
            self.history
                .sync_completed_dates(&mut self.storage, self.root.completed_dates());
        }
    }
}
