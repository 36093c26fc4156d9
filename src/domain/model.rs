use serde::{Deserialize, Serialize};

/// One target company as listed in the companies JSON file. `name` and `code`
/// are interpolated verbatim into the listing URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRef {
    pub name: String,
    pub code: String,
}

/// One job title's aggregated salary statistics, as rendered on a listing
/// page. Salary fields keep the site's locale-formatted text (e.g.
/// "R$ 5.000") and are empty when the listing shows no currency breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRecord {
    pub title: String,
    pub average_total_pay: String,
    pub base_salary: String,
    pub variable_pay: String,
    pub sample_count: u32,
}

/// All records scraped for one company, in page order, keyed by the employer
/// display name read from the listing pages.
#[derive(Debug, Clone)]
pub struct CompanyListing {
    pub employer: String,
    pub records: Vec<SalaryRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputShape {
    /// Single sheet, one row per record, with an employer column.
    Flat,
    /// One sheet per company, named after the employer.
    GroupedByCompany,
}

/// Transform-stage output: the workbook laid out sheet by sheet, ready for
/// the load stage to serialize.
#[derive(Debug, Clone)]
pub struct WorkbookPlan {
    pub filename: String,
    pub sheets: Vec<SheetPlan>,
}

#[derive(Debug, Clone)]
pub struct SheetPlan {
    pub name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}
