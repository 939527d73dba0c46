use crate::{Equipment, ExerciseRecord, Goal, Level, Location, Muscle, ReadError};

pub trait CatalogRepository {
    fn read_programs(&self) -> Result<Vec<Program>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub name: String,
    pub goal: Option<Goal>,
    pub level: Option<Level>,
    pub location: Vec<Location>,
    pub equipment: Vec<Equipment>,
    pub days: Vec<Day>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub day: u32,
    pub exercises: Vec<ExerciseEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseEntry {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub rest: String,
    pub muscle_groups: Vec<Muscle>,
    pub other_muscle_groups: Vec<String>,
}

/// Copies every exercise entry of every day of every program into a record stamped with its
/// provenance and the program's tags, in program, day and entry order.
#[must_use]
pub fn flatten(programs: &[Program]) -> Vec<ExerciseRecord> {
    programs
        .iter()
        .flat_map(|p| {
            p.days.iter().flat_map(move |d| {
                d.exercises.iter().map(move |e| ExerciseRecord {
                    name: e.name.clone(),
                    sets: e.sets.clone(),
                    reps: e.reps.clone(),
                    rest: e.rest.clone(),
                    muscle_groups: e.muscle_groups.clone(),
                    other_muscle_groups: e.other_muscle_groups.clone(),
                    equipment_program: p.equipment.clone(),
                    goal: p.goal,
                    level: p.level,
                    location: p.location.clone(),
                    program: p.name.clone(),
                    day: d.day,
                })
            })
        })
        .collect()
}

impl From<&BaseProgram> for Program {
    fn from(value: &BaseProgram) -> Self {
        Program {
            name: value.name.to_string(),
            goal: Some(value.goal),
            level: Some(value.level),
            location: value.location.to_vec(),
            equipment: value.equipment.to_vec(),
            days: value
                .days
                .iter()
                .map(|d| Day {
                    day: d.day,
                    exercises: d
                        .exercises
                        .iter()
                        .map(|e| ExerciseEntry {
                            name: e.name.to_string(),
                            sets: e.sets.to_string(),
                            reps: e.reps.to_string(),
                            rest: e.rest.to_string(),
                            muscle_groups: e.muscle_groups.to_vec(),
                            other_muscle_groups: vec![],
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

struct BaseProgram {
    pub name: &'static str,
    pub goal: Goal,
    pub level: Level,
    pub location: &'static [Location],
    pub equipment: &'static [Equipment],
    pub days: &'static [BaseDay],
}

struct BaseDay {
    pub day: u32,
    pub exercises: &'static [BaseEntry],
}

struct BaseEntry {
    pub name: &'static str,
    pub sets: &'static str,
    pub reps: &'static str,
    pub rest: &'static str,
    pub muscle_groups: &'static [Muscle],
}

pub static PROGRAMS: std::sync::LazyLock<Vec<Program>> =
    std::sync::LazyLock::new(|| PROGRAM_DEFINITIONS.iter().map(Program::from).collect());

const PROGRAM_DEFINITIONS: [BaseProgram; 8] = [
    BaseProgram {
        name: "Home Fat Burner",
        goal: Goal::WeightLoss,
        level: Level::Beginner,
        location: &[Location::Home],
        equipment: &[Equipment::Bodyweight, Equipment::Mat, Equipment::JumpRope],
        days: &[
            BaseDay {
                day: 1,
                exercises: &[
                    BaseEntry {
                        name: "Jumping Jacks",
                        sets: "3",
                        reps: "40s",
                        rest: "20s",
                        muscle_groups: &[Muscle::Cardio, Muscle::FullBody],
                    },
                    BaseEntry {
                        name: "Bodyweight Squat",
                        sets: "3",
                        reps: "15",
                        rest: "45s",
                        muscle_groups: &[Muscle::Legs, Muscle::Glutes],
                    },
                    BaseEntry {
                        name: "Knee Push-Up",
                        sets: "3",
                        reps: "10",
                        rest: "45s",
                        muscle_groups: &[Muscle::Chest, Muscle::Arms],
                    },
                ],
            },
            BaseDay {
                day: 2,
                exercises: &[
                    BaseEntry {
                        name: "Jump Rope",
                        sets: "4",
                        reps: "60s",
                        rest: "30s",
                        muscle_groups: &[Muscle::Cardio],
                    },
                    BaseEntry {
                        name: "Glute Bridge",
                        sets: "3",
                        reps: "15",
                        rest: "30s",
                        muscle_groups: &[Muscle::Glutes],
                    },
                    BaseEntry {
                        name: "Plank",
                        sets: "3",
                        reps: "30s",
                        rest: "30s",
                        muscle_groups: &[Muscle::Core],
                    },
                ],
            },
            BaseDay {
                day: 3,
                exercises: &[
                    BaseEntry {
                        name: "Mountain Climbers",
                        sets: "3",
                        reps: "30s",
                        rest: "30s",
                        muscle_groups: &[Muscle::Core, Muscle::Cardio],
                    },
                    BaseEntry {
                        name: "Reverse Lunge",
                        sets: "3",
                        reps: "12",
                        rest: "45s",
                        muscle_groups: &[Muscle::Legs, Muscle::Glutes],
                    },
                    BaseEntry {
                        name: "Superman Hold",
                        sets: "3",
                        reps: "20s",
                        rest: "30s",
                        muscle_groups: &[Muscle::Back],
                    },
                ],
            },
        ],
    },
    BaseProgram {
        name: "Outdoor HIIT Shred",
        goal: Goal::WeightLoss,
        level: Level::Intermediate,
        location: &[Location::Outdoor, Location::Home],
        equipment: &[Equipment::Bodyweight, Equipment::JumpRope],
        days: &[
            BaseDay {
                day: 1,
                exercises: &[
                    BaseEntry {
                        name: "Burpees",
                        sets: "4",
                        reps: "12",
                        rest: "45s",
                        muscle_groups: &[Muscle::FullBody, Muscle::Cardio],
                    },
                    BaseEntry {
                        name: "Jump Squat",
                        sets: "4",
                        reps: "15",
                        rest: "45s",
                        muscle_groups: &[Muscle::Legs, Muscle::Glutes],
                    },
                    BaseEntry {
                        name: "Push-Up",
                        sets: "4",
                        reps: "15",
                        rest: "45s",
                        muscle_groups: &[Muscle::Chest, Muscle::Arms, Muscle::Shoulders],
                    },
                ],
            },
            BaseDay {
                day: 2,
                exercises: &[
                    BaseEntry {
                        name: "Hill Sprints",
                        sets: "6",
                        reps: "20s",
                        rest: "90s",
                        muscle_groups: &[Muscle::Cardio, Muscle::Legs],
                    },
                    BaseEntry {
                        name: "Bear Crawl",
                        sets: "3",
                        reps: "30s",
                        rest: "45s",
                        muscle_groups: &[Muscle::FullBody, Muscle::Shoulders],
                    },
                    BaseEntry {
                        name: "Bicycle Crunch",
                        sets: "3",
                        reps: "20",
                        rest: "30s",
                        muscle_groups: &[Muscle::Core],
                    },
                ],
            },
            BaseDay {
                day: 3,
                exercises: &[
                    BaseEntry {
                        name: "Jump Rope",
                        sets: "5",
                        reps: "60s",
                        rest: "30s",
                        muscle_groups: &[Muscle::Cardio],
                    },
                    BaseEntry {
                        name: "Walking Lunge",
                        sets: "3",
                        reps: "20",
                        rest: "45s",
                        muscle_groups: &[Muscle::Legs, Muscle::Glutes],
                    },
                    BaseEntry {
                        name: "Mountain Climbers",
                        sets: "4",
                        reps: "40s",
                        rest: "20s",
                        muscle_groups: &[Muscle::Core, Muscle::Cardio],
                    },
                ],
            },
        ],
    },
    BaseProgram {
        name: "Gym Hypertrophy Split",
        goal: Goal::MuscleGain,
        level: Level::Intermediate,
        location: &[Location::Gym],
        equipment: &[
            Equipment::Barbell,
            Equipment::Dumbbells,
            Equipment::Bench,
            Equipment::Machine,
            Equipment::Cable,
        ],
        days: &[
            BaseDay {
                day: 1,
                exercises: &[
                    BaseEntry {
                        name: "Barbell Bench Press",
                        sets: "4",
                        reps: "8-10",
                        rest: "90s",
                        muscle_groups: &[Muscle::Chest, Muscle::Arms],
                    },
                    BaseEntry {
                        name: "Incline Dumbbell Press",
                        sets: "3",
                        reps: "10-12",
                        rest: "75s",
                        muscle_groups: &[Muscle::Chest, Muscle::Shoulders],
                    },
                    BaseEntry {
                        name: "Cable Triceps Pushdown",
                        sets: "3",
                        reps: "12-15",
                        rest: "60s",
                        muscle_groups: &[Muscle::Arms],
                    },
                ],
            },
            BaseDay {
                day: 2,
                exercises: &[
                    BaseEntry {
                        name: "Lat Pulldown",
                        sets: "4",
                        reps: "10-12",
                        rest: "75s",
                        muscle_groups: &[Muscle::Back, Muscle::Arms],
                    },
                    BaseEntry {
                        name: "Seated Cable Row",
                        sets: "3",
                        reps: "10-12",
                        rest: "75s",
                        muscle_groups: &[Muscle::Back],
                    },
                    BaseEntry {
                        name: "Dumbbell Curl",
                        sets: "3",
                        reps: "12",
                        rest: "60s",
                        muscle_groups: &[Muscle::Arms],
                    },
                ],
            },
            BaseDay {
                day: 3,
                exercises: &[
                    BaseEntry {
                        name: "Leg Press",
                        sets: "4",
                        reps: "10-12",
                        rest: "90s",
                        muscle_groups: &[Muscle::Legs, Muscle::Glutes],
                    },
                    BaseEntry {
                        name: "Lateral Raise",
                        sets: "3",
                        reps: "15",
                        rest: "60s",
                        muscle_groups: &[Muscle::Shoulders],
                    },
                    BaseEntry {
                        name: "Cable Crunch",
                        sets: "3",
                        reps: "15",
                        rest: "60s",
                        muscle_groups: &[Muscle::Core],
                    },
                ],
            },
        ],
    },
    BaseProgram {
        name: "Dumbbell Builder",
        goal: Goal::MuscleGain,
        level: Level::Beginner,
        location: &[Location::Home],
        equipment: &[Equipment::Dumbbells, Equipment::Bench],
        days: &[
            BaseDay {
                day: 1,
                exercises: &[
                    BaseEntry {
                        name: "Dumbbell Bench Press",
                        sets: "3",
                        reps: "10",
                        rest: "90s",
                        muscle_groups: &[Muscle::Chest, Muscle::Arms],
                    },
                    BaseEntry {
                        name: "One-Arm Dumbbell Row",
                        sets: "3",
                        reps: "10",
                        rest: "75s",
                        muscle_groups: &[Muscle::Back],
                    },
                    BaseEntry {
                        name: "Goblet Squat",
                        sets: "3",
                        reps: "12",
                        rest: "90s",
                        muscle_groups: &[Muscle::Legs, Muscle::Glutes],
                    },
                ],
            },
            BaseDay {
                day: 2,
                exercises: &[
                    BaseEntry {
                        name: "Dumbbell Shoulder Press",
                        sets: "3",
                        reps: "10",
                        rest: "75s",
                        muscle_groups: &[Muscle::Shoulders, Muscle::Arms],
                    },
                    BaseEntry {
                        name: "Dumbbell Romanian Deadlift",
                        sets: "3",
                        reps: "12",
                        rest: "90s",
                        muscle_groups: &[Muscle::Legs, Muscle::Back],
                    },
                    BaseEntry {
                        name: "Dumbbell Curl",
                        sets: "3",
                        reps: "12",
                        rest: "60s",
                        muscle_groups: &[Muscle::Arms],
                    },
                ],
            },
            BaseDay {
                day: 3,
                exercises: &[
                    BaseEntry {
                        name: "Dumbbell Fly",
                        sets: "3",
                        reps: "12",
                        rest: "60s",
                        muscle_groups: &[Muscle::Chest],
                    },
                    BaseEntry {
                        name: "Bulgarian Split Squat",
                        sets: "3",
                        reps: "10",
                        rest: "75s",
                        muscle_groups: &[Muscle::Legs, Muscle::Glutes],
                    },
                    BaseEntry {
                        name: "Dead Bug",
                        sets: "3",
                        reps: "12",
                        rest: "45s",
                        muscle_groups: &[Muscle::Core],
                    },
                ],
            },
        ],
    },
    BaseProgram {
        name: "Barbell Strength Foundations",
        goal: Goal::Strength,
        level: Level::Beginner,
        location: &[Location::Gym],
        equipment: &[Equipment::Barbell, Equipment::Bench, Equipment::PullUpBar],
        days: &[
            BaseDay {
                day: 1,
                exercises: &[
                    BaseEntry {
                        name: "Back Squat",
                        sets: "5",
                        reps: "5",
                        rest: "180s",
                        muscle_groups: &[Muscle::Legs, Muscle::Glutes],
                    },
                    BaseEntry {
                        name: "Barbell Bench Press",
                        sets: "5",
                        reps: "5",
                        rest: "180s",
                        muscle_groups: &[Muscle::Chest, Muscle::Arms],
                    },
                    BaseEntry {
                        name: "Barbell Row",
                        sets: "5",
                        reps: "5",
                        rest: "120s",
                        muscle_groups: &[Muscle::Back],
                    },
                ],
            },
            BaseDay {
                day: 2,
                exercises: &[
                    BaseEntry {
                        name: "Deadlift",
                        sets: "3",
                        reps: "5",
                        rest: "180s",
                        muscle_groups: &[Muscle::Back, Muscle::Legs, Muscle::Glutes],
                    },
                    BaseEntry {
                        name: "Overhead Press",
                        sets: "5",
                        reps: "5",
                        rest: "150s",
                        muscle_groups: &[Muscle::Shoulders, Muscle::Arms],
                    },
                    BaseEntry {
                        name: "Pull-Up",
                        sets: "3",
                        reps: "6-8",
                        rest: "120s",
                        muscle_groups: &[Muscle::Back, Muscle::Arms],
                    },
                ],
            },
            BaseDay {
                day: 3,
                exercises: &[
                    BaseEntry {
                        name: "Front Squat",
                        sets: "4",
                        reps: "5",
                        rest: "150s",
                        muscle_groups: &[Muscle::Legs, Muscle::Core],
                    },
                    BaseEntry {
                        name: "Close-Grip Bench Press",
                        sets: "4",
                        reps: "6",
                        rest: "120s",
                        muscle_groups: &[Muscle::Arms, Muscle::Chest],
                    },
                    BaseEntry {
                        name: "Hanging Knee Raise",
                        sets: "3",
                        reps: "12",
                        rest: "60s",
                        muscle_groups: &[Muscle::Core],
                    },
                ],
            },
        ],
    },
    BaseProgram {
        name: "Advanced Powerbuilding",
        goal: Goal::Strength,
        level: Level::Advanced,
        location: &[Location::Gym],
        equipment: &[
            Equipment::Barbell,
            Equipment::Dumbbells,
            Equipment::Machine,
            Equipment::Cable,
        ],
        days: &[
            BaseDay {
                day: 1,
                exercises: &[
                    BaseEntry {
                        name: "Pause Squat",
                        sets: "5",
                        reps: "3",
                        rest: "240s",
                        muscle_groups: &[Muscle::Legs, Muscle::Glutes],
                    },
                    BaseEntry {
                        name: "Leg Press",
                        sets: "3",
                        reps: "10",
                        rest: "120s",
                        muscle_groups: &[Muscle::Legs],
                    },
                    BaseEntry {
                        name: "Ab Wheel Rollout",
                        sets: "3",
                        reps: "10",
                        rest: "60s",
                        muscle_groups: &[Muscle::Core],
                    },
                ],
            },
            BaseDay {
                day: 2,
                exercises: &[
                    BaseEntry {
                        name: "Competition Bench Press",
                        sets: "6",
                        reps: "2",
                        rest: "240s",
                        muscle_groups: &[Muscle::Chest, Muscle::Arms, Muscle::Shoulders],
                    },
                    BaseEntry {
                        name: "Weighted Dip",
                        sets: "4",
                        reps: "6",
                        rest: "150s",
                        muscle_groups: &[Muscle::Chest, Muscle::Arms],
                    },
                    BaseEntry {
                        name: "Face Pull",
                        sets: "3",
                        reps: "15",
                        rest: "60s",
                        muscle_groups: &[Muscle::Shoulders, Muscle::Back],
                    },
                ],
            },
            BaseDay {
                day: 3,
                exercises: &[
                    BaseEntry {
                        name: "Deficit Deadlift",
                        sets: "5",
                        reps: "3",
                        rest: "240s",
                        muscle_groups: &[Muscle::Back, Muscle::Legs, Muscle::Glutes],
                    },
                    BaseEntry {
                        name: "Chest-Supported Row",
                        sets: "4",
                        reps: "8",
                        rest: "120s",
                        muscle_groups: &[Muscle::Back],
                    },
                    BaseEntry {
                        name: "Hammer Curl",
                        sets: "3",
                        reps: "10",
                        rest: "60s",
                        muscle_groups: &[Muscle::Arms],
                    },
                ],
            },
        ],
    },
    BaseProgram {
        name: "Couch to Endurance",
        goal: Goal::Endurance,
        level: Level::Beginner,
        location: &[Location::Outdoor],
        equipment: &[Equipment::Bodyweight],
        days: &[
            BaseDay {
                day: 1,
                exercises: &[
                    BaseEntry {
                        name: "Brisk Walk",
                        sets: "1",
                        reps: "20min",
                        rest: "0s",
                        muscle_groups: &[Muscle::Cardio, Muscle::Legs],
                    },
                    BaseEntry {
                        name: "Step-Up",
                        sets: "3",
                        reps: "12",
                        rest: "45s",
                        muscle_groups: &[Muscle::Legs, Muscle::Glutes],
                    },
                    BaseEntry {
                        name: "Plank",
                        sets: "3",
                        reps: "20s",
                        rest: "30s",
                        muscle_groups: &[Muscle::Core],
                    },
                ],
            },
            BaseDay {
                day: 2,
                exercises: &[
                    BaseEntry {
                        name: "Run/Walk Intervals",
                        sets: "6",
                        reps: "1min/2min",
                        rest: "0s",
                        muscle_groups: &[Muscle::Cardio],
                    },
                    BaseEntry {
                        name: "Calf Raise",
                        sets: "3",
                        reps: "20",
                        rest: "30s",
                        muscle_groups: &[Muscle::Legs],
                    },
                    BaseEntry {
                        name: "Bird Dog",
                        sets: "3",
                        reps: "10",
                        rest: "30s",
                        muscle_groups: &[Muscle::Core, Muscle::Back],
                    },
                ],
            },
            BaseDay {
                day: 3,
                exercises: &[
                    BaseEntry {
                        name: "Easy Run",
                        sets: "1",
                        reps: "25min",
                        rest: "0s",
                        muscle_groups: &[Muscle::Cardio, Muscle::Legs],
                    },
                    BaseEntry {
                        name: "Incline Push-Up",
                        sets: "3",
                        reps: "12",
                        rest: "45s",
                        muscle_groups: &[Muscle::Chest, Muscle::Arms],
                    },
                    BaseEntry {
                        name: "Side Plank",
                        sets: "3",
                        reps: "20s",
                        rest: "30s",
                        muscle_groups: &[Muscle::Core],
                    },
                ],
            },
        ],
    },
    BaseProgram {
        name: "Kettlebell Conditioning",
        goal: Goal::Endurance,
        level: Level::Advanced,
        location: &[Location::Home, Location::Gym],
        equipment: &[
            Equipment::Kettlebell,
            Equipment::ResistanceBands,
            Equipment::Mat,
        ],
        days: &[
            BaseDay {
                day: 1,
                exercises: &[
                    BaseEntry {
                        name: "Kettlebell Swing",
                        sets: "5",
                        reps: "20",
                        rest: "45s",
                        muscle_groups: &[Muscle::Glutes, Muscle::Back, Muscle::Cardio],
                    },
                    BaseEntry {
                        name: "Kettlebell Clean and Press",
                        sets: "4",
                        reps: "8",
                        rest: "60s",
                        muscle_groups: &[Muscle::FullBody, Muscle::Shoulders],
                    },
                    BaseEntry {
                        name: "Banded Pull-Apart",
                        sets: "3",
                        reps: "20",
                        rest: "30s",
                        muscle_groups: &[Muscle::Shoulders, Muscle::Back],
                    },
                ],
            },
            BaseDay {
                day: 2,
                exercises: &[
                    BaseEntry {
                        name: "Kettlebell Snatch",
                        sets: "5",
                        reps: "10",
                        rest: "60s",
                        muscle_groups: &[Muscle::FullBody, Muscle::Cardio],
                    },
                    BaseEntry {
                        name: "Kettlebell Front Squat",
                        sets: "4",
                        reps: "12",
                        rest: "60s",
                        muscle_groups: &[Muscle::Legs, Muscle::Core],
                    },
                    BaseEntry {
                        name: "Turkish Get-Up",
                        sets: "3",
                        reps: "3",
                        rest: "60s",
                        muscle_groups: &[Muscle::Core, Muscle::Shoulders],
                    },
                ],
            },
            BaseDay {
                day: 3,
                exercises: &[
                    BaseEntry {
                        name: "Kettlebell Complex",
                        sets: "5",
                        reps: "90s",
                        rest: "60s",
                        muscle_groups: &[Muscle::FullBody, Muscle::Cardio],
                    },
                    BaseEntry {
                        name: "Banded Row",
                        sets: "3",
                        reps: "15",
                        rest: "45s",
                        muscle_groups: &[Muscle::Back, Muscle::Arms],
                    },
                    BaseEntry {
                        name: "Hollow Body Hold",
                        sets: "4",
                        reps: "30s",
                        rest: "30s",
                        muscle_groups: &[Muscle::Core],
                    },
                ],
            },
        ],
    },
];
