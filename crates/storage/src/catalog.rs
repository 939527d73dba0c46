use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use fitplan_domain::{
    self as domain, CatalogRepository, ReadError, StorageError, parse_muscle_tags, parse_tag,
    parse_tags,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Catalog shipped with the application.
pub struct Builtin;

impl CatalogRepository for Builtin {
    fn read_programs(&self) -> Result<Vec<domain::catalog::Program>, ReadError> {
        Ok(domain::catalog::PROGRAMS.clone())
    }
}

/// Catalog read from a JSON file on every access.
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse(json: &str) -> Result<Vec<domain::catalog::Program>, CatalogError> {
        let programs = serde_json::from_str::<Vec<Program>>(json)?;
        Ok(programs
            .into_iter()
            .map(domain::catalog::Program::from)
            .collect())
    }

    fn load(path: &Path) -> Result<Vec<domain::catalog::Program>, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let programs = Self::parse(&json)?;
        debug!("loaded {} programs from {}", programs.len(), path.display());
        Ok(programs)
    }
}

impl CatalogRepository for JsonCatalog {
    fn read_programs(&self) -> Result<Vec<domain::catalog::Program>, ReadError> {
        Ok(Self::load(&self.path).map_err(StorageError::from)?)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid catalog: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<CatalogError> for StorageError {
    fn from(value: CatalogError) -> Self {
        match value {
            CatalogError::Io { path, source } if source.kind() == io::ErrorKind::NotFound => {
                StorageError::NotFound(path.display().to_string())
            }
            err => StorageError::Other(Box::new(err)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Program {
    pub name: String,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub location: Locations,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub days: Vec<Day>,
}

impl From<Program> for domain::catalog::Program {
    fn from(value: Program) -> Self {
        domain::catalog::Program {
            goal: value.goal.as_deref().and_then(parse_tag),
            level: value.level.as_deref().and_then(parse_tag),
            location: match value.location {
                Locations::One(location) => parse_tag(&location).into_iter().collect(),
                Locations::Many(locations) => parse_tags(locations),
            },
            equipment: parse_tags(value.equipment),
            days: value.days.into_iter().map(domain::catalog::Day::from).collect(),
            name: value.name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Locations {
    One(String),
    Many(Vec<String>),
}

impl Default for Locations {
    fn default() -> Self {
        Locations::Many(vec![])
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Day {
    pub day: u32,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl From<Day> for domain::catalog::Day {
    fn from(value: Day) -> Self {
        domain::catalog::Day {
            day: value.day,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::catalog::ExerciseEntry::from)
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: String,
    #[serde(default)]
    pub sets: Option<Field>,
    #[serde(default)]
    pub reps: Option<Field>,
    #[serde(default)]
    pub rest: Option<Field>,
    #[serde(default, rename = "muscleGroups")]
    pub muscle_groups: Vec<String>,
}

impl From<Exercise> for domain::catalog::ExerciseEntry {
    fn from(value: Exercise) -> Self {
        let (muscle_groups, other_muscle_groups) = parse_muscle_tags(value.muscle_groups);
        domain::catalog::ExerciseEntry {
            sets: Field::text(value.sets),
            reps: Field::text(value.reps),
            rest: Field::text(value.rest),
            muscle_groups,
            other_muscle_groups,
            name: value.name,
        }
    }
}

/// Prescription value given either as number or as free text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Field {
    Number(serde_json::Number),
    Text(String),
}

impl Field {
    fn text(value: Option<Field>) -> String {
        value.map(|f| f.to_string()).unwrap_or_default()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Field::Number(number) => write!(f, "{number}"),
            Field::Text(text) => write!(f, "{text}"),
        }
    }
}
