use crate::domain::model::CompanyRef;
use crate::utils::error::{Result, ScrapeError};
use std::fs;
use std::path::Path;

/// Reads the company list from a JSON array of `{name, code}` objects.
pub fn load_companies(path: &str) -> Result<Vec<CompanyRef>> {
    let path = Path::new(path);
    if !path.exists() {
        return Err(ScrapeError::ConfigError {
            message: format!("Companies file not found: {}", path.display()),
        });
    }

    let contents = fs::read_to_string(path)?;
    let companies: Vec<CompanyRef> = serde_json::from_str(&contents)?;

    tracing::info!("Loaded {} companies from {}", companies.len(), path.display());
    for company in &companies {
        tracing::debug!("Company: {} (code {})", company.name, company.code);
    }

    Ok(companies)
}
