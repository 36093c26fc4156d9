use crate::config::companies;
use crate::core::fetcher::PageFetcher;
use crate::core::{parse, workbook};
use crate::domain::model::{CompanyListing, CompanyRef, WorkbookPlan};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;
use std::path::Path;

pub struct ScrapePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    fetcher: PageFetcher,
}

impl<S: Storage, C: ConfigProvider> ScrapePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let fetcher = PageFetcher::new(config.base_url());
        Self {
            storage,
            config,
            fetcher,
        }
    }

    /// Fetches and parses every listing page of one company, in page order.
    ///
    /// Page 1 is fetched once up front to resolve the page count and the
    /// employer display name, then again as part of the 1..=N sweep.
    async fn scrape_company(&self, company: &CompanyRef) -> Result<CompanyListing> {
        let first_page = self.fetcher.fetch_page(company, 1).await?;
        let total = parse::total_listed_salaries(&first_page)?;
        let pages = parse::page_count(total);
        let employer = parse::employer_name(&first_page)?;

        tracing::info!(
            "{}: {} listed salaries across {} pages",
            employer,
            total,
            pages
        );

        let mut records = Vec::with_capacity(total as usize);
        for page in 1..=pages {
            let html = self.fetcher.fetch_page(company, page).await?;
            records.extend(parse::parse_listing_page(&html)?);
        }

        Ok(CompanyListing { employer, records })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ScrapePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<CompanyListing>> {
        let companies = companies::load_companies(self.config.companies_file())?;

        let mut listings = Vec::with_capacity(companies.len());
        for company in &companies {
            listings.push(self.scrape_company(company).await?);
        }

        Ok(listings)
    }

    async fn transform(&self, listings: Vec<CompanyListing>) -> Result<WorkbookPlan> {
        let plan = workbook::plan_workbook(&listings, self.config.output_shape());
        tracing::debug!(
            "Workbook plan: {} sheets, {} rows",
            plan.sheets.len(),
            plan.sheets.iter().map(|s| s.rows.len()).sum::<usize>()
        );
        Ok(plan)
    }

    async fn load(&self, plan: WorkbookPlan) -> Result<String> {
        let bytes = workbook::build_workbook(&plan)?;
        tracing::debug!("Writing workbook ({} bytes) to storage", bytes.len());
        self.storage.write_file(&plan.filename, &bytes).await?;

        let output_path = Path::new(self.config.output_path()).join(&plan.filename);
        Ok(output_path.to_string_lossy().into_owned())
    }
}
