#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod body_composition;
pub mod catalog;
mod error;
mod exercise;
mod plan;
pub mod selection;
mod service;

pub use body_composition::{BodyCompositionService, Bmi, BmiCategory, BmiError, Sex, Skinfolds};
pub use catalog::CatalogRepository;
pub use error::*;
pub use exercise::*;
pub use plan::*;
pub use selection::FilterSelection;
pub use service::*;
