use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl ExerciseEntry {
    /// One-line rendering used on the day cards, e.g.
    /// `Bench Press — 135 lbs — 3 sets of 10 reps`.
    pub fn summary(&self) -> String {
        let mut details = Vec::new();
        if let Some(weight) = &self.weight {
            details.push(format!("{weight} lbs"));
        }
        if let (Some(sets), Some(reps)) = (&self.sets, &self.reps) {
            details.push(format!("{sets} sets of {reps} reps"));
        }

        if details.is_empty() {
            self.name.clone()
        } else {
            format!("{} — {}", self.name, details.join(" — "))
        }
    }
}

pub type DayLog = Vec<ExerciseEntry>;

/// Day key to the exercises logged on that day.
pub type ExerciseStore = BTreeMap<String, DayLog>;

/// Day key to the state of its history cell.
pub type HistoryCompletionMap = BTreeMap<String, bool>;

/// Insertion-ordered set of day keys that have had an exercise recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompletedDates(Vec<String>);

impl CompletedDates {
    /// Returns `true` when the date was not present before.
    pub fn insert(&mut self, date: &str) -> bool {
        if self.contains(date) {
            return false;
        }
        self.0.push(date.to_string());
        true
    }

    pub fn contains(&self, date: &str) -> bool {
        self.0.iter().any(|existing| existing == date)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Duplicated keys found in storage are dropped on read.
impl<'de> Deserialize<'de> for CompletedDates {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        let mut dates = Self::default();
        for date in &raw {
            dates.insert(date);
        }
        Ok(dates)
    }
}

// --- HTTP payloads ---

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub direction: String,
}

#[derive(Debug, Deserialize)]
pub struct DateRequest {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleExerciseRequest {
    pub date: String,
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct WizardView {
    pub date: String,
    pub field: String,
    pub placeholder: String,
}

#[derive(Debug, Serialize)]
pub struct DayView {
    pub date: String,
    pub weekday: String,
    pub label: String,
    pub exercises: Vec<ExerciseEntry>,
}

#[derive(Debug, Serialize)]
pub struct WeekResponse {
    pub label: String,
    pub week_start: String,
    pub days: Vec<DayView>,
    pub wizard: Option<WizardView>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub wizard: Option<WizardView>,
    pub added: Option<ExerciseEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryCell {
    pub date: String,
    pub initial: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryWeek {
    pub number: usize,
    pub days: Vec<HistoryCell>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub year: i32,
    pub weeks: Vec<HistoryWeek>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryToggleResponse {
    pub date: String,
    pub completed: bool,
}
