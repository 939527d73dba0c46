use std::{collections::HashSet, hash::Hash, slice::Iter, str::FromStr};

use derive_more::Deref;
use log::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRecord {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub rest: String,
    pub muscle_groups: Vec<Muscle>,
    /// Muscle group tags outside of [`Muscle`]. They never match a filter but count towards the
    /// muscle cap.
    pub other_muscle_groups: Vec<String>,
    pub equipment_program: Vec<Equipment>,
    pub goal: Option<Goal>,
    pub level: Option<Level>,
    pub location: Vec<Location>,
    pub program: String,
    pub day: u32,
}

impl ExerciseRecord {
    /// Keys of all muscle group tags, known and unknown.
    pub fn muscle_tags(&self) -> impl Iterator<Item = &str> {
        self.muscle_groups
            .iter()
            .map(|m| m.key())
            .chain(self.other_muscle_groups.iter().map(String::as_str))
    }
}

#[derive(Deref, Debug, Clone, PartialEq, Eq)]
pub struct ScoredExercise {
    #[deref]
    pub record: ExerciseRecord,
    pub score: u32,
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Strength,
    Endurance,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOALS: [Goal; 4] = [
            Goal::WeightLoss,
            Goal::MuscleGain,
            Goal::Strength,
            Goal::Endurance,
        ];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::Strength => "Strength",
            Goal::Endurance => "Endurance",
        }
    }
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Level {
    fn iter() -> Iter<'static, Level> {
        static LEVELS: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Location {
    Home,
    Gym,
    Outdoor,
}

impl Property for Location {
    fn iter() -> Iter<'static, Location> {
        static LOCATIONS: [Location; 3] = [Location::Home, Location::Gym, Location::Outdoor];
        LOCATIONS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Location::Home => "Home",
            Location::Gym => "Gym",
            Location::Outdoor => "Outdoor",
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Duration {
    #[default]
    Short,
    Long,
}

impl Duration {
    /// Number of exercises a generated workout aims for.
    #[must_use]
    pub fn target_count(self) -> usize {
        match self {
            Duration::Short => 6,
            Duration::Long => 9,
        }
    }
}

impl Property for Duration {
    fn iter() -> Iter<'static, Duration> {
        static DURATIONS: [Duration; 2] = [Duration::Short, Duration::Long];
        DURATIONS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Duration::Short => "Short",
            Duration::Long => "Long",
        }
    }
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Muscle {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Glutes,
    Core,
    FullBody,
    Cardio,
}

impl Property for Muscle {
    fn iter() -> Iter<'static, Muscle> {
        static MUSCLES: [Muscle; 9] = [
            Muscle::Chest,
            Muscle::Back,
            Muscle::Shoulders,
            Muscle::Arms,
            Muscle::Legs,
            Muscle::Glutes,
            Muscle::Core,
            Muscle::FullBody,
            Muscle::Cardio,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Muscle::Chest => "Chest",
            Muscle::Back => "Back",
            Muscle::Shoulders => "Shoulders",
            Muscle::Arms => "Arms",
            Muscle::Legs => "Legs",
            Muscle::Glutes => "Glutes",
            Muscle::Core => "Core",
            Muscle::FullBody => "Full Body",
            Muscle::Cardio => "Cardio",
        }
    }
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Equipment {
    Bodyweight,
    Dumbbells,
    Barbell,
    Kettlebell,
    ResistanceBands,
    PullUpBar,
    Bench,
    Machine,
    Cable,
    JumpRope,
    Mat,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 11] = [
            Equipment::Bodyweight,
            Equipment::Dumbbells,
            Equipment::Barbell,
            Equipment::Kettlebell,
            Equipment::ResistanceBands,
            Equipment::PullUpBar,
            Equipment::Bench,
            Equipment::Machine,
            Equipment::Cable,
            Equipment::JumpRope,
            Equipment::Mat,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::Barbell => "Barbell",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::ResistanceBands => "Resistance Bands",
            Equipment::PullUpBar => "Pull Up Bar",
            Equipment::Bench => "Bench",
            Equipment::Machine => "Machine",
            Equipment::Cable => "Cable",
            Equipment::JumpRope => "Jump Rope",
            Equipment::Mat => "Mat",
        }
    }
}

pub trait Property: Clone + Copy + Sized + Into<&'static str> + 'static {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;

    /// Machine-readable key, as used in catalog files and filter input.
    fn key(self) -> &'static str {
        self.into()
    }
}

/// Parses a single tag, ignoring empty input and dropping unknown values.
#[must_use]
pub fn parse_tag<T: FromStr>(value: &str) -> Option<T> {
    let value = value.trim();

    if value.is_empty() {
        return None;
    }

    match value.parse::<T>() {
        Ok(tag) => Some(tag),
        Err(_) => {
            warn!("ignoring unknown tag \"{value}\"");
            None
        }
    }
}

#[must_use]
pub fn parse_tags<T: FromStr, S: AsRef<str>>(values: impl IntoIterator<Item = S>) -> Vec<T> {
    values
        .into_iter()
        .filter_map(|v| parse_tag(v.as_ref()))
        .collect()
}

/// Splits muscle group tags into known muscles and the remaining non-empty tags.
#[must_use]
pub fn parse_muscle_tags<S: AsRef<str>>(
    values: impl IntoIterator<Item = S>,
) -> (Vec<Muscle>, Vec<String>) {
    let mut known = vec![];
    let mut other = vec![];

    for value in values {
        let value = value.as_ref().trim();
        if value.is_empty() {
            continue;
        }
        match value.parse::<Muscle>() {
            Ok(muscle) => known.push(muscle),
            Err(_) => {
                debug!("keeping unknown muscle group \"{value}\"");
                other.push(value.to_string());
            }
        }
    }

    (known, other)
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct CatalogFilter {
    pub name: String,
    pub goals: HashSet<Goal>,
    pub levels: HashSet<Level>,
    pub locations: HashSet<Location>,
    pub muscles: HashSet<Muscle>,
    pub equipment: HashSet<Equipment>,
}

impl CatalogFilter {
    /// Matching records in input order, keeping only the first record of each name.
    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a ExerciseRecord>,
    ) -> Vec<&'a ExerciseRecord> {
        let name = self.name.trim().to_lowercase();
        let mut seen = HashSet::new();

        exercises
            .filter(|e| {
                e.name.to_lowercase().contains(&name)
                    && (self.goals.is_empty() || e.goal.is_some_and(|g| self.goals.contains(&g)))
                    && (self.levels.is_empty()
                        || e.level.is_some_and(|l| self.levels.contains(&l)))
                    && (self.locations.is_empty()
                        || e.location.iter().any(|l| self.locations.contains(l)))
                    && (self.muscles.is_empty()
                        || self.muscles.iter().all(|m| e.muscle_groups.contains(m)))
                    && (self.equipment.is_empty()
                        || self.equipment.iter().any(|equipment| {
                            e.equipment_program.contains(equipment)
                                || (*equipment == Equipment::Bodyweight
                                    && e.equipment_program.is_empty())
                        }))
            })
            .filter(|&e| seen.insert(e.name.as_str()))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.goals.is_empty()
            && self.levels.is_empty()
            && self.locations.is_empty()
            && self.muscles.is_empty()
            && self.equipment.is_empty()
    }

    #[must_use]
    pub fn goal_list(&self) -> Vec<(Goal, bool)> {
        list(&self.goals)
    }

    #[must_use]
    pub fn level_list(&self) -> Vec<(Level, bool)> {
        list(&self.levels)
    }

    #[must_use]
    pub fn location_list(&self) -> Vec<(Location, bool)> {
        list(&self.locations)
    }

    #[must_use]
    pub fn muscle_list(&self) -> Vec<(Muscle, bool)> {
        list(&self.muscles)
    }

    #[must_use]
    pub fn equipment_list(&self) -> Vec<(Equipment, bool)> {
        list(&self.equipment)
    }

    pub fn toggle_goal(&mut self, goal: Goal) {
        toggle(&mut self.goals, goal);
    }

    pub fn toggle_level(&mut self, level: Level) {
        toggle(&mut self.levels, level);
    }

    pub fn toggle_location(&mut self, location: Location) {
        toggle(&mut self.locations, location);
    }

    pub fn toggle_muscle(&mut self, muscle: Muscle) {
        toggle(&mut self.muscles, muscle);
    }

    pub fn toggle_equipment(&mut self, equipment: Equipment) {
        toggle(&mut self.equipment, equipment);
    }
}

fn list<T: Property + Eq + Hash>(selected: &HashSet<T>) -> Vec<(T, bool)> {
    T::iter().map(|v| (*v, selected.contains(v))).collect()
}

fn toggle<T: Eq + Hash>(selected: &mut HashSet<T>, value: T) {
    if !selected.remove(&value) {
        selected.insert(value);
    }
}
