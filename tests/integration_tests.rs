use calamine::Reader;
use glassdoor_etl::domain::model::OutputShape;
use glassdoor_etl::domain::ports::ConfigProvider;
use glassdoor_etl::{EtlEngine, LocalStorage, ScrapePipeline};
use httpmock::prelude::*;
use std::io::Write;
use tempfile::TempDir;

struct TestConfig {
    companies_file: String,
    output_path: String,
    base_url: String,
    shape: OutputShape,
}

impl ConfigProvider for TestConfig {
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
        self.shape
    }
}

fn write_companies(dir: &TempDir, json: &str) -> String {
    let path = dir.path().join("companies.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{}", json).unwrap();
    path.to_str().unwrap().to_string()
}

fn listing_page(employer: &str, total: u32, titles: &[&str]) -> String {
    let entries: String = titles
        .iter()
        .map(|title| {
            format!(
                "<li><strong>{}</strong>\
                 <strong>R$ 6.000</strong><strong>R$ 6.000</strong>\
                 <strong>R$ 5.000</strong><strong>R$ 5.000</strong>\
                 <strong>R$ 1.000</strong><strong>R$ 1.000</strong>\
                 <strong>Adicione seu salário. Ajude outras pessoas.</strong>\
                 <strong>8 salários</strong><strong>Faixa salarial</strong></li>",
                title
            )
        })
        .collect();
    format!(
        "<html><body>\
         <p class=\"employerName\">{}</p>\
         <ul id=\"SalariesRef\">{}</ul>\
         <div class=\"paginationFooter\">Mostrando {} salários</div>\
         </body></html>",
        employer, entries, total
    )
}

fn read_sheets(path: &std::path::Path) -> Vec<(String, Vec<Vec<String>>)> {
    let mut workbook: calamine::Xlsx<_> = calamine::open_workbook(path).unwrap();
    workbook
        .worksheets()
        .into_iter()
        .map(|(name, range)| {
            let rows = range
                .rows()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect();
            (name, rows)
        })
        .collect()
}

#[tokio::test]
async fn test_end_to_end_flat_workbook() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    // 40 listed salaries -> two pages.
    let page1 = server.mock(|when, then| {
        when.method(GET)
            .path_contains("Acme-Sal")
            .path_contains("E123_P1.htm")
            .query_param("filter.payPeriod", "MONTHLY");
        then.status(200)
            .body(listing_page("Acme S.A.", 40, &["Engenheiro", "Analista"]));
    });
    let page2 = server.mock(|when, then| {
        when.method(GET).path_contains("E123_P2.htm");
        then.status(200)
            .body(listing_page("Acme S.A.", 40, &["Gerente"]));
    });

    let config = TestConfig {
        companies_file: write_companies(&temp_dir, r#"[{"name": "Acme", "code": "123"}]"#),
        output_path: temp_dir.path().to_str().unwrap().to_string(),
        base_url: server.base_url(),
        shape: OutputShape::Flat,
    };

    let storage = LocalStorage::new(config.output_path.clone());
    let engine = EtlEngine::new(ScrapePipeline::new(storage, config));
    let output_path = engine.run().await.unwrap();

    page1.assert_hits(2);
    page2.assert_hits(1);
    assert!(output_path.ends_with("glassdoor_jobs_infox.xlsx"));

    let full_path = temp_dir.path().join("glassdoor_jobs_infox.xlsx");
    assert!(full_path.exists());

    let sheets = read_sheets(&full_path);
    assert_eq!(sheets.len(), 1);

    let (name, rows) = &sheets[0];
    assert_eq!(name, "Salários");
    assert_eq!(
        rows[0],
        vec![
            "Empresa",
            "Cargo",
            "Pagamento total médio",
            "Salário base",
            "Remuneração variável",
            "Número de salários coletados",
        ]
    );

    // Header + 3 records, pages concatenated in order, all tagged Acme S.A.
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1][0], "Acme S.A.");
    assert_eq!(rows[1][1], "Engenheiro");
    assert_eq!(rows[2][1], "Analista");
    assert_eq!(rows[3][1], "Gerente");
    assert_eq!(rows[1][2], "R$ 6.000");
    assert_eq!(rows[1][3], "R$ 5.000");
    assert_eq!(rows[1][4], "R$ 1.000");
    assert_eq!(rows[1][5], "8");
}

#[tokio::test]
async fn test_end_to_end_grouped_workbook() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path_contains("E1_P1.htm");
        then.status(200)
            .body(listing_page("Acme S.A.", 5, &["Engenheiro"]));
    });
    server.mock(|when, then| {
        when.method(GET).path_contains("E2_P1.htm");
        then.status(200)
            .body(listing_page("Globex Ltda", 5, &["Vendedor"]));
    });

    let config = TestConfig {
        companies_file: write_companies(
            &temp_dir,
            r#"[{"name": "Acme", "code": "1"}, {"name": "Globex", "code": "2"}]"#,
        ),
        output_path: temp_dir.path().to_str().unwrap().to_string(),
        base_url: server.base_url(),
        shape: OutputShape::GroupedByCompany,
    };

    let storage = LocalStorage::new(config.output_path.clone());
    let engine = EtlEngine::new(ScrapePipeline::new(storage, config));
    let output_path = engine.run().await.unwrap();

    assert!(output_path.ends_with("Salários Glassdoor.xlsx"));
    let full_path = temp_dir.path().join("Salários Glassdoor.xlsx");
    assert!(full_path.exists());

    let sheets = read_sheets(&full_path);
    assert_eq!(sheets.len(), 2);

    let (name, rows) = &sheets[0];
    assert_eq!(name, "Acme S.A.");
    assert_eq!(rows[0][0], "Cargo");
    assert_eq!(rows[0].len(), 5);
    assert_eq!(rows[1][0], "Engenheiro");

    let (name, rows) = &sheets[1];
    assert_eq!(name, "Globex Ltda");
    assert_eq!(rows[1][0], "Vendedor");
}

#[tokio::test]
async fn test_end_to_end_empty_configuration() {
    let temp_dir = TempDir::new().unwrap();

    let config = TestConfig {
        companies_file: write_companies(&temp_dir, "[]"),
        output_path: temp_dir.path().to_str().unwrap().to_string(),
        base_url: "http://127.0.0.1:1".to_string(),
        shape: OutputShape::Flat,
    };

    let storage = LocalStorage::new(config.output_path.clone());
    let engine = EtlEngine::new(ScrapePipeline::new(storage, config));
    let output_path = engine.run().await.unwrap();

    assert!(output_path.ends_with("glassdoor_jobs_infox.xlsx"));

    let sheets = read_sheets(&temp_dir.path().join("glassdoor_jobs_infox.xlsx"));
    assert_eq!(sheets.len(), 1);
    // Header only, zero data rows.
    assert_eq!(sheets[0].1.len(), 1);
}

#[tokio::test]
async fn test_end_to_end_missing_companies_file() {
    let temp_dir = TempDir::new().unwrap();

    let config = TestConfig {
        companies_file: temp_dir
            .path()
            .join("missing.json")
            .to_str()
            .unwrap()
            .to_string(),
        output_path: temp_dir.path().to_str().unwrap().to_string(),
        base_url: "http://127.0.0.1:1".to_string(),
        shape: OutputShape::Flat,
    };

    let storage = LocalStorage::new(config.output_path.clone());
    let engine = EtlEngine::new(ScrapePipeline::new(storage, config));

    let err = engine.run().await.unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_end_to_end_overwrites_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let existing = temp_dir.path().join("glassdoor_jobs_infox.xlsx");
    std::fs::write(&existing, b"stale contents").unwrap();

    let config = TestConfig {
        companies_file: write_companies(&temp_dir, "[]"),
        output_path: temp_dir.path().to_str().unwrap().to_string(),
        base_url: "http://127.0.0.1:1".to_string(),
        shape: OutputShape::Flat,
    };

    let storage = LocalStorage::new(config.output_path.clone());
    let engine = EtlEngine::new(ScrapePipeline::new(storage, config));
    engine.run().await.unwrap();

    // The stale file is replaced by a real workbook.
    let sheets = read_sheets(&existing);
    assert_eq!(sheets.len(), 1);
}
