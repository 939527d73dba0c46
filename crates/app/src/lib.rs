#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod log;
mod service;
pub mod settings;

pub use service::Service;
pub use settings::{Settings, SettingsRepository, SettingsService};
