use std::{fs, io, path::PathBuf};

use fitplan_app::{Settings, SettingsRepository, settings::Error};
use log::debug;

/// Settings stored as JSON file.
pub struct File {
    path: PathBuf,
}

impl File {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsRepository for File {
    fn read_settings(&self) -> Result<Settings, Error> {
        match fs::read_to_string(&self.path) {
            Ok(json) => serde_json::from_str(&json).map_err(|err| Error::Format(err.to_string())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no settings at {}, using defaults", self.path.display());
                Ok(Settings::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn write_settings(&self, settings: &Settings) -> Result<(), Error> {
        let json =
            serde_json::to_string_pretty(settings).map_err(|err| Error::Format(err.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
