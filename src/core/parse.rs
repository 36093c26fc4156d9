use crate::domain::model::SalaryRecord;
use crate::utils::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};

/// Listing pages show at most 20 salary entries.
pub const PAGE_SIZE: u32 = 20;

/// Call-to-action row the site injects between real figures.
const PLACEHOLDER_TEXT: &str = "Adicione seu salário.";

/// Local currency marker identifying salary figures among the fragments.
const CURRENCY_MARKER: &str = "R$";

pub fn page_count(total_items: u32) -> u32 {
    total_items / PAGE_SIZE + u32::from(total_items % PAGE_SIZE != 0)
}

/// Reads the total salary count from the pagination footer of a listing
/// page. The footer text is a localized sentence whose last token is the
/// count.
pub fn total_listed_salaries(html: &str) -> Result<u32> {
    let document = Html::parse_document(html);
    let footer_selector = Selector::parse("div.paginationFooter").unwrap();

    let footer = document
        .select(&footer_selector)
        .next()
        .ok_or_else(|| ScrapeError::parse("Pagination footer not found"))?;

    let text = element_text(&footer);
    let last_token = text
        .split_whitespace()
        .last()
        .ok_or_else(|| ScrapeError::parse("Pagination footer is empty"))?;

    last_token.parse::<u32>().map_err(|_| {
        ScrapeError::parse(format!(
            "Pagination footer does not end in a count: '{}'",
            text
        ))
    })
}

/// Employer display name as rendered on the listing page header.
pub fn employer_name(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let name_selector = Selector::parse("p.employerName").unwrap();

    let element = document
        .select(&name_selector)
        .next()
        .ok_or_else(|| ScrapeError::parse("Employer name element not found"))?;

    Ok(element_text(&element))
}

/// Extracts every salary entry from one listing page, in document order.
pub fn parse_listing_page(html: &str) -> Result<Vec<SalaryRecord>> {
    let document = Html::parse_document(html);
    let container_selector = Selector::parse("#SalariesRef").unwrap();

    let container = document
        .select(&container_selector)
        .next()
        .ok_or_else(|| ScrapeError::parse("Salary entry container not found"))?;

    container
        .children()
        .filter_map(ElementRef::wrap)
        .map(|entry| parse_entry(entry))
        .collect()
}

/// Maps one entry's emphasized text fragments to a record.
///
/// The title and sample count are positional in the fragment list after the
/// placeholder row is filtered out; the salary figures are found by the
/// currency marker in the unfiltered list.
fn parse_entry(entry: ElementRef) -> Result<SalaryRecord> {
    let strong_selector = Selector::parse("strong").unwrap();
    let fragments: Vec<String> = entry
        .select(&strong_selector)
        .map(|el| element_text(&el))
        .collect();

    let filtered: Vec<&String> = fragments
        .iter()
        .filter(|fragment| !fragment.contains(PLACEHOLDER_TEXT))
        .collect();

    if filtered.len() < 2 {
        return Err(ScrapeError::parse(format!(
            "Salary entry has {} usable fragments, expected at least a title and a sample count",
            filtered.len()
        )));
    }

    let title = filtered[0].clone();
    let count_text = filtered[filtered.len() - 2];
    let sample_count = count_text
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<u32>().ok())
        .ok_or_else(|| {
            ScrapeError::parse(format!("Sample count is not an integer: '{}'", count_text))
        })?;

    let [average_total_pay, base_salary, variable_pay] = salary_figures(&fragments);

    Ok(SalaryRecord {
        title,
        average_total_pay,
        base_salary,
        variable_pay,
        sample_count,
    })
}

/// Picks the up-to-three currency figures out of the raw fragment list.
///
/// The site renders each real figure twice when a range footnote is present,
/// so with more than 3 currency fragments every other one is taken (stride 2
/// from index 0). Fewer fragments are used as-is; missing positions map to
/// empty strings.
fn salary_figures(fragments: &[String]) -> [String; 3] {
    let currency: Vec<&String> = fragments
        .iter()
        .filter(|fragment| fragment.contains(CURRENCY_MARKER))
        .collect();

    let deduped: Vec<&String> = if currency.len() > 3 {
        if currency.len() % 2 != 0 {
            tracing::warn!(
                "Odd currency fragment count ({}), stride-2 dedup may misalign fields",
                currency.len()
            );
        }
        currency.into_iter().step_by(2).collect()
    } else {
        currency
    };

    [0usize, 1, 2].map(|i| deduped.get(i).map(|s| s.to_string()).unwrap_or_default())
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
