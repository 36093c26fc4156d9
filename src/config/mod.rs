pub mod cli;
pub mod companies;

pub use cli::LocalStorage;

use crate::domain::model::OutputShape;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "glassdoor-etl")]
#[command(about = "Scrapes Glassdoor salary listings into an Excel workbook")]
pub struct CliConfig {
    /// JSON file with an array of {name, code} company entries
    #[arg(long, default_value = "companies.json")]
    pub companies_file: String,

    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, default_value = "https://www.glassdoor.com.br")]
    pub base_url: String,

    /// Write one sheet per company instead of a single flat sheet
    #[arg(long)]
    pub grouped: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn companies_file(&self) -> &str {
        &self.companies_file
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn output_shape(&self) -> OutputShape {
        if self.grouped {
            OutputShape::GroupedByCompany
        } else {
            OutputShape::Flat
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_path("companies_file", &self.companies_file)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
