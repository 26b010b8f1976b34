//! Sequential entry wizard: one exercise is collected through four
//! single-field prompts instead of a multi-field form.

use crate::models::ExerciseEntry;
use rand::Rng;

const ID_LEN: usize = 9;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Weight,
    Sets,
    Reps,
}

impl Field {
    pub fn next(self) -> Option<Field> {
        match self {
            Field::Name => Some(Field::Weight),
            Field::Weight => Some(Field::Sets),
            Field::Sets => Some(Field::Reps),
            Field::Reps => None,
        }
    }

    /// Weight and reps may be confirmed blank.
    pub fn is_required(self) -> bool {
        matches!(self, Field::Name | Field::Sets)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Weight => "weight",
            Field::Sets => "sets",
            Field::Reps => "reps",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Type exercise name and press Enter",
            Field::Weight => "Enter weight (or press Enter to skip)",
            Field::Sets => "Enter number of sets and press Enter",
            Field::Reps => "Enter number of reps and press Enter",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedValues {
    pub name: String,
    pub weight: String,
    pub sets: String,
    pub reps: String,
}

impl CollectedValues {
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Weight => &mut self.weight,
            Field::Sets => &mut self.sets,
            Field::Reps => &mut self.reps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Idle wizard, or a required field confirmed blank.
    Ignored,
    Advanced(Field),
    Completed { date: String, entry: ExerciseEntry },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryWizard {
    active_date: Option<String>,
    active_field: Option<Field>,
    values: CollectedValues,
}

impl EntryWizard {
    pub fn active_date(&self) -> Option<&str> {
        self.active_date.as_deref()
    }

    pub fn active_field(&self) -> Option<Field> {
        self.active_field
    }

    pub fn values(&self) -> &CollectedValues {
        &self.values
    }

    pub fn is_idle(&self) -> bool {
        self.active_field.is_none()
    }

    /// Restarts collection for `date`, dropping anything already typed.
    pub fn start(&mut self, date: &str) {
        self.active_date = Some(date.to_string());
        self.active_field = Some(Field::Name);
        self.values = CollectedValues::default();
    }

    /// Losing focus before the last field discards the partial entry.
    pub fn abandon(&mut self) {
        *self = Self::default();
    }

    /// Abandons only while collecting for `date`. A blur that arrives after
    /// the wizard moved to another day leaves that day's entry alone.
    pub fn abandon_for(&mut self, date: &str) -> bool {
        if self.active_date.as_deref() != Some(date) {
            return false;
        }
        self.abandon();
        true
    }

    pub fn submit<R: Rng>(&mut self, raw: &str, rng: &mut R) -> SubmitOutcome {
        let (Some(date), Some(field)) = (self.active_date.clone(), self.active_field) else {
            return SubmitOutcome::Ignored;
        };

        let value = raw.trim();
        if value.is_empty() && field.is_required() {
            return SubmitOutcome::Ignored;
        }
        *self.values.slot(field) = value.to_string();

        match field.next() {
            Some(next) => {
                self.active_field = Some(next);
                SubmitOutcome::Advanced(next)
            }
            None => {
                let values = std::mem::take(&mut self.values);
                self.abandon();
                SubmitOutcome::Completed {
                    date,
                    entry: ExerciseEntry {
                        id: generate_id(rng),
                        name: values.name,
                        weight: non_blank(values.weight),
                        sets: non_blank(values.sets),
                        reps: non_blank(values.reps),
                        completed: false,
                    },
                }
            }
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Short base-36 id; collisions are possible and not checked.
pub fn generate_id<R: Rng>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn stale_abandon_keeps_other_day() {
        let mut rng = rng();
        let mut wizard = EntryWizard::default();
        wizard.start("2024-03-12");
        wizard.submit("Squat", &mut rng);

        assert!(!wizard.abandon_for("2024-03-11"));
        assert_eq!(wizard.active_date(), Some("2024-03-12"));
        assert_eq!(wizard.active_field(), Some(Field::Weight));
        assert_eq!(wizard.values().name, "Squat");

        assert!(wizard.abandon_for("2024-03-12"));
        assert!(wizard.is_idle());
        assert!(!wizard.abandon_for("2024-03-12"));
    }

    #[test]
    fn four_confirmations_build_one_entry() {
        let mut rng = rng();
        let mut wizard = EntryWizard::default();
        wizard.start("2024-03-11");

        assert_eq!(wizard.submit("Bench Press", &mut rng), SubmitOutcome::Advanced(Field::Weight));
        assert_eq!(wizard.submit(" 135 ", &mut rng), SubmitOutcome::Advanced(Field::Sets));
        assert_eq!(wizard.submit("3", &mut rng), SubmitOutcome::Advanced(Field::Reps));

        let SubmitOutcome::Completed { date, entry } = wizard.submit("10", &mut rng) else {
            panic!("expected a completed entry");
        };
        assert_eq!(date, "2024-03-11");
        assert_eq!(entry.name, "Bench Press");
        assert_eq!(entry.weight.as_deref(), Some("135"));
        assert_eq!(entry.sets.as_deref(), Some("3"));
        assert_eq!(entry.reps.as_deref(), Some("10"));
        assert!(!entry.completed);
        assert_eq!(entry.id.len(), 9);
        assert!(wizard.is_idle());
        assert_eq!(wizard, EntryWizard::default());
    }

    #[test]
    fn blank_name_is_ignored() {
        let mut rng = rng();
        let mut wizard = EntryWizard::default();
        wizard.start("2024-03-11");
        let before = wizard.clone();

        assert_eq!(wizard.submit("   ", &mut rng), SubmitOutcome::Ignored);
        assert_eq!(wizard, before);
        assert_eq!(wizard.active_field(), Some(Field::Name));
    }

    #[test]
    fn blank_sets_is_ignored_but_blank_weight_and_reps_advance() {
        let mut rng = rng();
        let mut wizard = EntryWizard::default();
        wizard.start("2024-03-12");
        wizard.submit("Plank", &mut rng);

        assert_eq!(wizard.submit("", &mut rng), SubmitOutcome::Advanced(Field::Sets));
        assert_eq!(wizard.submit("", &mut rng), SubmitOutcome::Ignored);
        assert_eq!(wizard.active_field(), Some(Field::Sets));
        assert_eq!(wizard.submit("2", &mut rng), SubmitOutcome::Advanced(Field::Reps));

        let SubmitOutcome::Completed { entry, .. } = wizard.submit("", &mut rng) else {
            panic!("expected a completed entry");
        };
        assert_eq!(entry.weight, None);
        assert_eq!(entry.reps, None);
        assert_eq!(entry.sets.as_deref(), Some("2"));
    }

    #[test]
    fn abandon_discards_partial_values() {
        let mut rng = rng();
        let mut wizard = EntryWizard::default();
        wizard.start("2024-03-11");
        wizard.submit("Squat", &mut rng);
        wizard.submit("225", &mut rng);
        wizard.abandon();

        assert!(wizard.is_idle());
        assert_eq!(wizard.active_date(), None);
        assert_eq!(wizard.values(), &CollectedValues::default());
        assert_eq!(wizard.submit("3", &mut rng), SubmitOutcome::Ignored);
    }

    #[test]
    fn restarting_resets_collected_values() {
        let mut rng = rng();
        let mut wizard = EntryWizard::default();
        wizard.start("2024-03-11");
        wizard.submit("Squat", &mut rng);
        wizard.start("2024-03-13");

        assert_eq!(wizard.active_date(), Some("2024-03-13"));
        assert_eq!(wizard.active_field(), Some(Field::Name));
        assert!(wizard.values().name.is_empty());
    }

    #[test]
    fn non_numeric_text_is_kept_verbatim() {
        let mut rng = rng();
        let mut wizard = EntryWizard::default();
        wizard.start("2024-03-11");
        for value in ["Run", "bodyweight", "a few"] {
            wizard.submit(value, &mut rng);
        }
        let SubmitOutcome::Completed { entry, .. } = wizard.submit("lots", &mut rng) else {
            panic!("expected a completed entry");
        };
        assert_eq!(entry.weight.as_deref(), Some("bodyweight"));
        assert_eq!(entry.sets.as_deref(), Some("a few"));
        assert_eq!(entry.reps.as_deref(), Some("lots"));
    }

    #[test]
    fn ids_are_base36() {
        let id = generate_id(&mut rng());
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
