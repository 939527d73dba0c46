use chrono::NaiveDate;
use fitplan_domain::{Duration, FilterSelection, ReadError, WorkoutPlan, WorkoutService};
use serde::{Deserialize, Serialize};

pub trait SettingsService {
    fn get_settings(&self) -> Result<Settings, Error>;
    fn set_settings(&self, settings: &Settings) -> Result<(), Error>;
}

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, Error>;
    fn write_settings(&self, settings: &Settings) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    Format(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    #[serde(with = "duration")]
    pub default_duration: Duration,
    pub default_days: u8,
    pub log_capacity: usize,
    /// Fixed seed for reproducible workouts.
    pub seed: Option<u64>,
}

impl Settings {
    /// Selection a new workout form starts with.
    #[must_use]
    pub fn filter(&self) -> FilterSelection {
        FilterSelection {
            duration: self.default_duration,
            days: self.default_days,
            ..FilterSelection::default()
        }
    }

    pub fn generate_workout<S: WorkoutService>(
        &self,
        service: &S,
        filter: FilterSelection,
        date: NaiveDate,
    ) -> Result<WorkoutPlan, ReadError> {
        match self.seed {
            Some(seed) => service.generate_workout_seeded(filter, date, seed),
            None => service.generate_workout(filter, date),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_duration: Duration::Short,
            default_days: 3,
            log_capacity: 100,
            seed: None,
        }
    }
}

mod duration {
    use fitplan_domain::{Duration, Property};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(duration.key())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let value = String::deserialize(deserializer)?;
        value
            .parse()
            .map_err(|_| de::Error::custom(format!("unknown duration \"{value}\"")))
    }
}

#[cfg(test)]
mod tests {
    use fitplan_domain::{CatalogFilter, ExerciseRecord, catalog::Program};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    struct Recorder;

    impl WorkoutService for Recorder {
        fn get_programs(&self) -> Result<Vec<Program>, ReadError> {
            Ok(vec![])
        }

        fn get_exercises(&self) -> Result<Vec<ExerciseRecord>, ReadError> {
            Ok(vec![])
        }

        fn browse_exercises(&self, _: &CatalogFilter) -> Result<Vec<ExerciseRecord>, ReadError> {
            Ok(vec![])
        }

        fn generate_workout(
            &self,
            filter: FilterSelection,
            date: NaiveDate,
        ) -> Result<WorkoutPlan, ReadError> {
            Ok(WorkoutPlan {
                date,
                filter,
                exercises: vec![],
            })
        }

        fn generate_workout_seeded(
            &self,
            mut filter: FilterSelection,
            date: NaiveDate,
            seed: u64,
        ) -> Result<WorkoutPlan, ReadError> {
            filter.days = u8::try_from(seed).unwrap();
            self.generate_workout(filter, date)
        }
    }

    #[test]
    fn test_settings_filter() {
        let settings = Settings {
            default_duration: Duration::Long,
            default_days: 5,
            ..Settings::default()
        };

        assert_eq!(
            settings.filter(),
            FilterSelection {
                duration: Duration::Long,
                days: 5,
                ..FilterSelection::default()
            }
        );
    }

    #[rstest]
    #[case(None, 3)]
    #[case(Some(6), 6)]
    fn test_settings_generate_workout(#[case] seed: Option<u64>, #[case] days: u8) {
        let settings = Settings {
            seed,
            ..Settings::default()
        };
        let date = NaiveDate::from_ymd_opt(2020, 2, 2).unwrap();

        let plan = settings
            .generate_workout(&Recorder, settings.filter(), date)
            .unwrap();

        assert_eq!(plan.filter.days, days);
    }

    #[test]
    fn test_settings_serialization() {
        let settings = Settings {
            default_duration: Duration::Long,
            default_days: 4,
            log_capacity: 50,
            seed: Some(7),
        };

        let json = serde_json::to_string(&settings).unwrap();

        assert_eq!(
            json,
            r#"{"default_duration":"long","default_days":4,"log_capacity":50,"seed":7}"#
        );
        assert_eq!(serde_json::from_str::<Settings>(&json).unwrap(), settings);
    }

    #[rstest]
    #[case::empty("{}", Settings::default())]
    #[case::partial(
        r#"{"default_duration":"long"}"#,
        Settings { default_duration: Duration::Long, ..Settings::default() }
    )]
    fn test_settings_deserialization_defaults(#[case] json: &str, #[case] expected: Settings) {
        assert_eq!(serde_json::from_str::<Settings>(json).unwrap(), expected);
    }

    #[test]
    fn test_settings_deserialization_unknown_duration() {
        assert!(serde_json::from_str::<Settings>(r#"{"default_duration":"medium"}"#).is_err());
    }
}
