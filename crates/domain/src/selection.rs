use std::collections::{BTreeSet, HashMap, HashSet};

use log::{debug, warn};
use rand::{Rng, seq::SliceRandom};

use crate::{Duration, Equipment, ExerciseRecord, Goal, Level, Location, Muscle, ScoredExercise};

const GOAL_WEIGHT: u32 = 3;
const LEVEL_WEIGHT: u32 = 2;
const LOCATION_WEIGHT: u32 = 2;
const EQUIPMENT_WEIGHT: u32 = 1;
const MUSCLE_WEIGHT: u32 = 2;
const MAX_COUNTED_MUSCLE_MATCHES: usize = 2;
const MAX_MUSCLES_FOR_CAP: usize = 4;
const DEFAULT_MUSCLE_SPREAD: usize = 3;
/// Slots at the end of a workout that are filled even when a candidate exceeds the muscle cap.
const FREE_SLOTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub goal: Option<Goal>,
    pub level: Option<Level>,
    pub location: Option<Location>,
    pub equipment: BTreeSet<Equipment>,
    pub muscles: BTreeSet<Muscle>,
    pub duration: Duration,
    pub days: u8,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            goal: None,
            level: None,
            location: None,
            equipment: BTreeSet::new(),
            muscles: BTreeSet::new(),
            duration: Duration::Short,
            days: 3,
        }
    }
}

/// Relevance of a record for the given filter. Every rule adds independently.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn score(record: &ExerciseRecord, filter: &FilterSelection) -> u32 {
    let mut score = 0;

    if filter.goal.is_some() && filter.goal == record.goal {
        score += GOAL_WEIGHT;
    }

    if filter.level.is_some() && filter.level == record.level {
        score += LEVEL_WEIGHT;
    }

    if let Some(location) = filter.location {
        if record.location.contains(&location) {
            score += LOCATION_WEIGHT;
        }
    }

    if filter
        .equipment
        .iter()
        .any(|e| record.equipment_program.contains(e))
    {
        score += EQUIPMENT_WEIGHT;
    }

    let matches = filter
        .muscles
        .iter()
        .filter(|m| record.muscle_groups.contains(m))
        .count()
        .min(MAX_COUNTED_MUSCLE_MATCHES);
    score += MUSCLE_WEIGHT * matches as u32;

    score
}

/// Shuffles the catalog once and stably sorts it by descending score, so that records with equal
/// scores end up in random order.
#[must_use]
pub fn rank<R: Rng + ?Sized>(
    catalog: &[ExerciseRecord],
    filter: &FilterSelection,
    rng: &mut R,
) -> Vec<ScoredExercise> {
    if catalog.is_empty() {
        return vec![];
    }

    let mut shuffled = catalog.to_vec();
    shuffled.shuffle(rng);

    let mut ranked = shuffled
        .into_iter()
        .map(|record| {
            let score = score(&record, filter);
            ScoredExercise { record, score }
        })
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

#[must_use]
pub fn target_count(filter: &FilterSelection) -> usize {
    filter.duration.target_count()
}

/// Maximum number of picks that may share a muscle group before further candidates of that
/// muscle group are deferred.
#[must_use]
pub fn cap_per_muscle(target_count: usize, muscles: &BTreeSet<Muscle>) -> usize {
    if muscles.is_empty() {
        target_count.div_ceil(DEFAULT_MUSCLE_SPREAD)
    } else {
        target_count
            .div_ceil(muscles.len().min(MAX_MUSCLES_FOR_CAP))
            .max(1)
    }
}

/// Picks up to `target_count` exercises with distinct names from the ranked sequence, deferring
/// candidates whose muscle groups are already saturated. If the cap leaves the workout short, the
/// remaining slots are filled in ranked order regardless of muscle groups.
#[must_use]
pub fn diversify(
    ranked: &[ScoredExercise],
    target_count: usize,
    muscles: &BTreeSet<Muscle>,
) -> Vec<ScoredExercise> {
    let cap = cap_per_muscle(target_count, muscles);
    let mut picked: Vec<ScoredExercise> = Vec::with_capacity(target_count);
    let mut used_names: HashSet<&str> = HashSet::new();
    let mut muscle_counts: HashMap<&str, usize> = HashMap::new();

    for candidate in ranked {
        if picked.len() >= target_count {
            break;
        }

        if used_names.contains(candidate.name.as_str()) {
            continue;
        }

        let saturated = candidate
            .muscle_tags()
            .any(|m| muscle_counts.get(m).copied().unwrap_or(0) >= cap);

        if saturated && picked.len() < target_count.saturating_sub(FREE_SLOTS) {
            continue;
        }

        used_names.insert(candidate.name.as_str());
        for muscle in candidate.muscle_tags() {
            *muscle_counts.entry(muscle).or_insert(0) += 1;
        }
        picked.push(candidate.clone());
    }

    if picked.len() < target_count {
        let walked = picked.len();

        for candidate in ranked {
            if picked.len() >= target_count {
                break;
            }

            if used_names.insert(candidate.name.as_str()) {
                picked.push(candidate.clone());
            }
        }

        if picked.len() > walked {
            warn!(
                "muscle cap of {cap} left {} of {target_count} slots open, filled {} in fallback pass",
                target_count - walked,
                picked.len() - walked
            );
        }
    }

    picked
}

/// Ranks the catalog for the filter and selects a diversified workout.
#[must_use]
pub fn generate<R: Rng + ?Sized>(
    catalog: &[ExerciseRecord],
    filter: &FilterSelection,
    rng: &mut R,
) -> Vec<ScoredExercise> {
    let ranked = rank(catalog, filter, rng);
    let target_count = target_count(filter);
    let exercises = diversify(&ranked, target_count, &filter.muscles);

    debug!(
        "selected {} of {target_count} exercises from {} records",
        exercises.len(),
        catalog.len()
    );

    exercises
}
