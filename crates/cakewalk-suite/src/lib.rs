// UI regression checks for the Cake DeFi marketing site

pub mod config;
pub mod error;
pub mod lesson;
pub mod pages;
pub mod registry;
pub mod report;
pub mod scenarios;

pub use config::{DEFAULT_BASE_URL, SuiteConfig};
pub use error::{Error, Result};
pub use lesson::LessonCard;
pub use registry::{Marker, TestCase};
pub use report::{CaseOutcome, CaseReport, RunReport};
