use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

pub trait Service {
    fn get_log_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn add_log_entry(&self, entry: Entry) -> Result<(), Error>;
}

pub trait Repository: Send + Sync + 'static {
    /// Entries ordered from newest to oldest.
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

impl Entry {
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level,
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

static LOGGER: Logger = Logger;

/// Installs the logger and directs all records to `storage`.
///
/// # Errors
///
/// Returns an error if a logger has already been initialized.
pub fn init(storage: Arc<Mutex<dyn Repository>>) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(storage);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Trace))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let Ok(log) = LOG.lock() else {
            return;
        };

        if let Some(ref repository) = *log {
            if let Ok(repository) = repository.lock() {
                let _ = repository
                    .write_entry(Entry::new(record.level(), record.args().to_string()));
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use log::info;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct Entries(Mutex<VecDeque<Entry>>);

    impl Repository for Entries {
        fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
            Ok(self.0.lock().unwrap().clone())
        }

        fn write_entry(&self, entry: Entry) -> Result<(), Error> {
            self.0.lock().unwrap().push_front(entry);
            Ok(())
        }
    }

    #[test]
    fn test_init() {
        let repository = Arc::new(Mutex::new(Entries::default()));

        init(repository.clone()).unwrap();
        info!("generated workout");

        let entries = repository.lock().unwrap().read_entries().unwrap();
        assert!(
            entries
                .iter()
                .any(|e| e.level == Level::Info && e.message == "generated workout")
        );
        assert!(init(repository).is_err());
    }

    #[test]
    fn test_entry_serialization() {
        let entry = Entry {
            time: "Feb 02 10:00:00".to_string(),
            level: Level::Warn,
            message: "ignoring unknown tag".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"time":"Feb 02 10:00:00","level":"Warn","message":"ignoring unknown tag"}"#
        );
    }

    #[test]
    fn test_entry_new() {
        let entry = Entry::new(Level::Error, "failed to read programs");

        assert_eq!(entry.level, Level::Error);
        assert_eq!(entry.message, "failed to read programs");
        assert!(!entry.time.is_empty());
    }
}
