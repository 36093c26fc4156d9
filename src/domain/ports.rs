use crate::domain::model::{CompanyListing, OutputShape, WorkbookPlan};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn companies_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn base_url(&self) -> &str;
    fn output_shape(&self) -> OutputShape;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<CompanyListing>>;
    async fn transform(&self, listings: Vec<CompanyListing>) -> Result<WorkbookPlan>;
    async fn load(&self, plan: WorkbookPlan) -> Result<String>;
}
