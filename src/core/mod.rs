pub mod etl;
pub mod fetcher;
pub mod parse;
pub mod pipeline;
pub mod workbook;

pub use crate::domain::model::{CompanyListing, CompanyRef, OutputShape, SalaryRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
