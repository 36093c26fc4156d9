use crate::domain::model::{
    CellValue, CompanyListing, OutputShape, SalaryRecord, SheetPlan, WorkbookPlan,
};
use crate::utils::error::Result;
use rust_xlsxwriter::{Format, Workbook};

pub const FLAT_OUTPUT_FILE: &str = "glassdoor_jobs_infox.xlsx";
pub const GROUPED_OUTPUT_FILE: &str = "Salários Glassdoor.xlsx";
pub const FLAT_SHEET_NAME: &str = "Salários";

/// Sheet names are capped at 31 characters by the xlsx format.
const MAX_SHEET_NAME_LEN: usize = 31;

const RECORD_COLUMNS: [&str; 5] = [
    "Cargo",
    "Pagamento total médio",
    "Salário base",
    "Remuneração variável",
    "Número de salários coletados",
];

/// Lays the aggregate out as a workbook: one flat sheet with an employer
/// column, or one sheet per company named after the employer.
pub fn plan_workbook(listings: &[CompanyListing], shape: OutputShape) -> WorkbookPlan {
    match shape {
        OutputShape::Flat => {
            let mut header = vec!["Empresa".to_string()];
            header.extend(RECORD_COLUMNS.iter().map(|c| c.to_string()));

            let rows = listings
                .iter()
                .flat_map(|listing| {
                    listing.records.iter().map(|record| {
                        let mut row = vec![CellValue::Text(listing.employer.clone())];
                        row.extend(record_cells(record));
                        row
                    })
                })
                .collect();

            WorkbookPlan {
                filename: FLAT_OUTPUT_FILE.to_string(),
                sheets: vec![SheetPlan {
                    name: FLAT_SHEET_NAME.to_string(),
                    header,
                    rows,
                }],
            }
        }
        OutputShape::GroupedByCompany => {
            let header: Vec<String> = RECORD_COLUMNS.iter().map(|c| c.to_string()).collect();
            let mut used_names: Vec<String> = Vec::with_capacity(listings.len());

            let sheets = listings
                .iter()
                .map(|listing| {
                    let name = sanitize_sheet_name(&listing.employer, &used_names);
                    used_names.push(name.clone());
                    SheetPlan {
                        name,
                        header: header.clone(),
                        rows: listing
                            .records
                            .iter()
                            .map(|record| record_cells(record).to_vec())
                            .collect(),
                    }
                })
                .collect();

            WorkbookPlan {
                filename: GROUPED_OUTPUT_FILE.to_string(),
                sheets,
            }
        }
    }
}

fn record_cells(record: &SalaryRecord) -> [CellValue; 5] {
    [
        CellValue::Text(record.title.clone()),
        CellValue::Text(record.average_total_pay.clone()),
        CellValue::Text(record.base_salary.clone()),
        CellValue::Text(record.variable_pay.clone()),
        CellValue::Number(f64::from(record.sample_count)),
    ]
}

/// Serializes the plan to xlsx bytes. An empty plan still yields a valid
/// workbook with one blank sheet, since the format requires at least one.
pub fn build_workbook(plan: &WorkbookPlan) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    if plan.sheets.is_empty() {
        workbook.add_worksheet();
    }

    for sheet in &plan.sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for (col, title) in sheet.header.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, title, &bold)?;
        }

        for (row_idx, row) in sheet.rows.iter().enumerate() {
            let row_num = row_idx as u32 + 1;
            for (col, cell) in row.iter().enumerate() {
                match cell {
                    CellValue::Text(text) => {
                        worksheet.write_string(row_num, col as u16, text)?;
                    }
                    CellValue::Number(number) => {
                        worksheet.write_number(row_num, col as u16, *number)?;
                    }
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Makes an employer name legal as an xlsx sheet name: replaces forbidden
/// characters, strips surrounding apostrophes, truncates to 31 chars, and
/// disambiguates collisions with a numeric suffix.
pub fn sanitize_sheet_name(raw: &str, used: &[String]) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '-',
            _ => c,
        })
        .collect();
    let cleaned = cleaned.trim_matches('\'').trim();

    let mut base: String = cleaned.chars().take(MAX_SHEET_NAME_LEN).collect();
    if base.is_empty() {
        base = "Planilha".to_string();
    }

    if !used.contains(&base) {
        return base;
    }

    let mut n = 2;
    loop {
        let suffix = format!(" ({})", n);
        let keep = MAX_SHEET_NAME_LEN.saturating_sub(suffix.chars().count());
        let mut candidate: String = base.chars().take(keep).collect();
        candidate.push_str(&suffix);
        if !used.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
