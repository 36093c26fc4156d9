use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Scraping salary listings...");
        let listings = self.pipeline.extract().await?;
        tracing::info!(
            "Scraped {} records across {} companies",
            listings.iter().map(|l| l.records.len()).sum::<usize>(),
            listings.len()
        );

        tracing::info!("Laying out workbook...");
        let plan = self.pipeline.transform(listings).await?;

        tracing::info!("Writing workbook...");
        let output_path = self.pipeline.load(plan).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
