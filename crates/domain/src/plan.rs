use std::fmt;

use chrono::NaiveDate;

use crate::{
    CatalogFilter, ExerciseRecord, FilterSelection, Property, ReadError, ScoredExercise,
    catalog::Program,
};

pub trait WorkoutService {
    fn get_programs(&self) -> Result<Vec<Program>, ReadError>;
    fn get_exercises(&self) -> Result<Vec<ExerciseRecord>, ReadError>;
    fn browse_exercises(&self, filter: &CatalogFilter) -> Result<Vec<ExerciseRecord>, ReadError>;
    fn generate_workout(
        &self,
        filter: FilterSelection,
        date: NaiveDate,
    ) -> Result<WorkoutPlan, ReadError>;
    fn generate_workout_seeded(
        &self,
        filter: FilterSelection,
        date: NaiveDate,
        seed: u64,
    ) -> Result<WorkoutPlan, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub date: NaiveDate,
    pub filter: FilterSelection,
    pub exercises: Vec<ScoredExercise>,
}

impl WorkoutPlan {
    /// Plain text representation for copying to the clipboard.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl fmt::Display for WorkoutPlan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let filter = &self.filter;

        writeln!(f, "Workout Plan ({})", self.date)?;
        writeln!(f, "Goal: {}", name_or_any(filter.goal))?;
        writeln!(f, "Level: {}", name_or_any(filter.level))?;
        writeln!(f, "Location: {}", name_or_any(filter.location))?;
        writeln!(f, "Equipment: {}", names_or_any(filter.equipment.iter()))?;
        writeln!(f, "Muscles: {}", names_or_any(filter.muscles.iter()))?;
        writeln!(f, "Days per week: {}", filter.days)?;
        writeln!(f, "Duration: {}", filter.duration.name())?;
        writeln!(f)?;

        if self.exercises.is_empty() {
            return writeln!(f, "No exercises");
        }

        for (i, e) in self.exercises.iter().enumerate() {
            writeln!(
                f,
                "{}. {}: {} x {}, rest {} ({}, day {})",
                i + 1,
                e.name,
                e.sets,
                e.reps,
                e.rest,
                e.program,
                e.day
            )?;
        }

        Ok(())
    }
}

fn name_or_any<T: Property>(value: Option<T>) -> &'static str {
    value.map_or("Any", Property::name)
}

fn names_or_any<'a, T: Property + 'a>(values: impl Iterator<Item = &'a T>) -> String {
    let names = values.map(|v| v.name()).collect::<Vec<_>>();

    if names.is_empty() {
        "Any".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Duration, Equipment, Goal, Location, Muscle};

    fn exercise(name: &str, program: &str, day: u32) -> ScoredExercise {
        ScoredExercise {
            record: ExerciseRecord {
                name: name.to_string(),
                sets: "4".to_string(),
                reps: "8-10".to_string(),
                rest: "90s".to_string(),
                muscle_groups: vec![Muscle::Chest],
                other_muscle_groups: vec![],
                equipment_program: vec![Equipment::Barbell],
                goal: Some(Goal::MuscleGain),
                level: None,
                location: vec![Location::Gym],
                program: program.to_string(),
                day,
            },
            score: 5,
        }
    }

    #[test]
    fn test_workout_plan_to_text() {
        let plan = WorkoutPlan {
            date: NaiveDate::from_ymd_opt(2020, 2, 2).unwrap(),
            filter: FilterSelection {
                goal: Some(Goal::MuscleGain),
                level: None,
                location: Some(Location::Gym),
                equipment: [Equipment::Barbell, Equipment::Bench].into(),
                muscles: [Muscle::Chest].into(),
                duration: Duration::Long,
                days: 4,
            },
            exercises: vec![
                exercise("Barbell Bench Press", "Gym Hypertrophy Split", 1),
                exercise("Lat Pulldown", "Gym Hypertrophy Split", 2),
            ],
        };

        assert_eq!(
            plan.to_text(),
            "Workout Plan (2020-02-02)\n\
             Goal: Muscle Gain\n\
             Level: Any\n\
             Location: Gym\n\
             Equipment: Barbell, Bench\n\
             Muscles: Chest\n\
             Days per week: 4\n\
             Duration: Long\n\
             \n\
             1. Barbell Bench Press: 4 x 8-10, rest 90s (Gym Hypertrophy Split, day 1)\n\
             2. Lat Pulldown: 4 x 8-10, rest 90s (Gym Hypertrophy Split, day 2)\n"
        );
        assert!(!plan.is_empty());
    }

    #[test]
    fn test_workout_plan_to_text_empty() {
        let plan = WorkoutPlan {
            date: NaiveDate::from_ymd_opt(2020, 2, 3).unwrap(),
            filter: FilterSelection::default(),
            exercises: vec![],
        };

        assert_eq!(
            plan.to_text(),
            "Workout Plan (2020-02-03)\n\
             Goal: Any\n\
             Level: Any\n\
             Location: Any\n\
             Equipment: Any\n\
             Muscles: Any\n\
             Days per week: 3\n\
             Duration: Short\n\
             \n\
             No exercises\n"
        );
        assert!(plan.is_empty());
    }
}
