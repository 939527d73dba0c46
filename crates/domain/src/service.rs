use chrono::NaiveDate;
use log::{debug, error, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    BodyCompositionService, CatalogFilter, CatalogRepository, ExerciseRecord, FilterSelection,
    ReadError, WorkoutPlan, WorkoutService,
    catalog::{self, Program},
    selection,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NotFound(_)) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: CatalogRepository> Service<R> {
    fn generate_workout_with<G: Rng>(
        &self,
        filter: FilterSelection,
        date: NaiveDate,
        rng: &mut G,
    ) -> Result<WorkoutPlan, ReadError> {
        let catalog = self.get_exercises()?;
        let exercises = selection::generate(&catalog, &filter, rng);

        info!(
            "generated workout with {} exercises for {} days per week",
            exercises.len(),
            filter.days
        );

        Ok(WorkoutPlan {
            date,
            filter,
            exercises,
        })
    }
}

impl<R: CatalogRepository> WorkoutService for Service<R> {
    fn get_programs(&self) -> Result<Vec<Program>, ReadError> {
        log_on_error!(
            self.repository.read_programs(),
            ReadError,
            "read",
            "programs"
        )
    }

    fn get_exercises(&self) -> Result<Vec<ExerciseRecord>, ReadError> {
        Ok(catalog::flatten(&self.get_programs()?))
    }

    fn browse_exercises(&self, filter: &CatalogFilter) -> Result<Vec<ExerciseRecord>, ReadError> {
        let exercises = self.get_exercises()?;
        Ok(filter
            .exercises(exercises.iter())
            .into_iter()
            .cloned()
            .collect())
    }

    fn generate_workout(
        &self,
        filter: FilterSelection,
        date: NaiveDate,
    ) -> Result<WorkoutPlan, ReadError> {
        self.generate_workout_with(filter, date, &mut rand::thread_rng())
    }

    fn generate_workout_seeded(
        &self,
        filter: FilterSelection,
        date: NaiveDate,
        seed: u64,
    ) -> Result<WorkoutPlan, ReadError> {
        self.generate_workout_with(filter, date, &mut StdRng::seed_from_u64(seed))
    }
}

impl<R> BodyCompositionService for Service<R> {}
