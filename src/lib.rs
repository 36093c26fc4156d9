pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{CliConfig, LocalStorage};
pub use crate::core::{etl::EtlEngine, pipeline::ScrapePipeline};
pub use crate::domain::model::{CompanyRef, OutputShape, SalaryRecord};
pub use crate::utils::error::{Result, ScrapeError};
