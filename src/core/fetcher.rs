use crate::domain::model::CompanyRef;
use crate::utils::error::{Result, ScrapeError};
use reqwest::Client;

/// The site rejects requests made with a non-browser agent.
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/88.0.4324.96 Safari/537.36";

pub struct PageFetcher {
    client: Client,
    base_url: String,
}

impl PageFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Listing URL for one company page. Pages are 1-based; the query
    /// parameter restricts results to monthly pay figures.
    pub fn page_url(&self, company: &CompanyRef, page: u32) -> String {
        format!(
            "{}/Salário/{}-Salários-E{}_P{}.htm?filter.payPeriod=MONTHLY",
            self.base_url, company.name, company.code, page
        )
    }

    pub async fn fetch_page(&self, company: &CompanyRef, page: u32) -> Result<String> {
        let url = self.page_url(company, page);
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Request to {} failed with status {}", url, status);
            return Err(ScrapeError::HttpStatusError {
                url,
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
