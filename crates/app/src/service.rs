use std::collections::VecDeque;

use ::log::{error, info};

use crate::{
    log,
    settings::{Error, Settings, SettingsRepository, SettingsService},
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: log::Repository> log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.repository.read_entries()
    }

    fn add_log_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        self.repository.write_entry(entry)
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    fn get_settings(&self) -> Result<Settings, Error> {
        self.repository
            .read_settings()
            .inspect_err(|err| error!("failed to read settings: {err}"))
    }

    fn set_settings(&self, settings: &Settings) -> Result<(), Error> {
        self.repository
            .write_settings(settings)
            .inspect(|_| info!("settings saved"))
            .inspect_err(|err| error!("failed to write settings: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::log::Service as _;

    #[derive(Default)]
    struct Memory {
        settings: Mutex<Option<Settings>>,
        entries: Mutex<VecDeque<log::Entry>>,
    }

    impl SettingsRepository for Memory {
        fn read_settings(&self) -> Result<Settings, Error> {
            self.settings
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| Error::Format("missing".to_string()))
        }

        fn write_settings(&self, settings: &Settings) -> Result<(), Error> {
            *self.settings.lock().unwrap() = Some(settings.clone());
            Ok(())
        }
    }

    impl log::Repository for Memory {
        fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
            Ok(self.entries.lock().unwrap().clone())
        }

        fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
            self.entries.lock().unwrap().push_front(entry);
            Ok(())
        }
    }

    #[test]
    fn test_settings() {
        let service = Service::new(Memory::default());
        let settings = Settings {
            seed: Some(1),
            ..Settings::default()
        };

        assert!(service.get_settings().is_err());

        service.set_settings(&settings).unwrap();

        assert_eq!(service.get_settings().unwrap(), settings);
    }

    #[test]
    fn test_log_entries() {
        let service = Service::new(Memory::default());
        let entry = log::Entry::new(::log::Level::Info, "settings saved");

        service.add_log_entry(entry.clone()).unwrap();

        assert_eq!(service.get_log_entries().unwrap(), VecDeque::from([entry]));
    }
}
