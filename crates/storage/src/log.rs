use std::{collections::VecDeque, sync::Mutex};

use fitplan_app::{Settings, log};

/// Keeps the most recent log entries in memory.
pub struct Memory {
    capacity: usize,
    entries: Mutex<VecDeque<log::Entry>>,
}

impl Memory {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }
}

impl From<&Settings> for Memory {
    fn from(value: &Settings) -> Self {
        Self::new(value.log_capacity)
    }
}

impl log::Repository for Memory {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| log::Error::Unknown(err.to_string()))?;
        entries.push_front(entry);
        entries.truncate(self.capacity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ::log::Level;
    use fitplan_app::log::{self, Repository};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tests::data::SETTINGS;

    fn entry(message: &str) -> log::Entry {
        log::Entry {
            time: "Feb 02 10:00:00".to_string(),
            level: Level::Info,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_memory_keeps_newest_entries() {
        let memory = Memory::from(&SETTINGS);

        memory.write_entry(entry("a")).unwrap();
        memory.write_entry(entry("b")).unwrap();
        memory.write_entry(entry("c")).unwrap();

        assert_eq!(
            memory.read_entries().unwrap(),
            VecDeque::from([entry("c"), entry("b")])
        );
    }

    #[test]
    fn test_memory_empty() {
        assert_eq!(Memory::new(10).read_entries().unwrap(), VecDeque::new());
    }

    #[test]
    fn test_memory_zero_capacity() {
        let memory = Memory::new(0);

        memory.write_entry(entry("a")).unwrap();

        assert!(memory.read_entries().unwrap().is_empty());
    }
}
