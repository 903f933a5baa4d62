// ==========================================
// 阈值计算流程 端到端测试
// ==========================================
// 测试目标: 上传约束、整批拒绝、分组隔离、阈值公式
// ==========================================


use inventory_threshold::domain::StockZone;
use inventory_threshold::engine::{EngineError, PipelineError, ThresholdPipeline};
use inventory_threshold::importer::{ImportError, UploadedFile, ViolationKind};
use inventory_threshold::logging;
use test_helpers::{csv_of_exact_size, csv_upload, fixture_upload};

fn pipeline() -> ThresholdPipeline {
    logging::init_test();
    ThresholdPipeline::default()
}

#[test]
fn test_single_product_sorted_by_date() {
    let file = csv_upload(
        "sales.csv",
        "P001,Widget,2024-01-05,10,7,2\n\
         P001,Widget,2024-01-01,10,3,2\n\
         P001,Widget,2024-01-03,10,4,2\n\
         P001,Widget,2024-01-02,10,6,2\n",
    );

    let results = pipeline().run(&file).expect("Pipeline should succeed");

    assert_eq!(results.len(), 1);
    let r = &results[0];
    assert_eq!(r.days_count, 4);
    assert_eq!(r.sales_data.len(), 4);

    let dates: Vec<String> = r.sales_data.iter().map(|e| e.date.to_string()).collect();
    assert_eq!(
        dates,
        vec!["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-05"]
    );
    let orders: Vec<f64> = r.sales_data.iter().map(|e| e.orders).collect();
    assert_eq!(orders, vec![3.0, 6.0, 4.0, 7.0]);
}

#[test]
fn test_threshold_formula_scenario() {
    let file = csv_upload(
        "sales.csv",
        "P001,Widget,2024-01-01,50,2,3\n\
         P001,Widget,2024-01-02,40,5,3\n\
         P001,Widget,2024-01-03,30,8,3\n",
    );

    let results = pipeline().run(&file).unwrap();
    let r = &results[0];

    assert_eq!(r.avg_daily_sales, 5);
    assert_eq!(r.avg_lead_time_days, 3);
    assert_eq!(r.minimum_daily_sales, 2.0);
    assert_eq!(r.maximum_daily_sales, 8.0);
    assert_eq!(r.safety_stock, 9);
    assert_eq!(r.thresholds.low, 15);
    assert_eq!(r.thresholds.medium, 24);
    assert_eq!(r.thresholds.high, 33);
}

#[test]
fn test_rounding_half_up() {
    // total 10 / 3 天 → 3
    let third = csv_upload(
        "a.csv",
        "P001,W,2024-01-01,1,3,1\nP001,W,2024-01-02,1,3,1\nP001,W,2024-01-03,1,4,1\n",
    );
    assert_eq!(pipeline().run(&third).unwrap()[0].avg_daily_sales, 3);

    // total 11 / 2 天 → 5.5 → 6
    let half = csv_upload("b.csv", "P001,W,2024-01-01,1,5,1\nP001,W,2024-01-02,1,6,1\n");
    assert_eq!(pipeline().run(&half).unwrap()[0].avg_daily_sales, 6);
}

#[test]
fn test_header_only_yields_empty() {
    let results = pipeline().run(&csv_upload("empty.csv", "")).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_size_boundary() {
    let at_limit = csv_of_exact_size("big.csv", 1_048_576);
    let results = pipeline().run(&at_limit).expect("1MB exactly is accepted");
    assert_eq!(results.len(), 1);

    let over = csv_of_exact_size("big.csv", 1_048_577);
    let err = pipeline().run(&over).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Import(ImportError::FileTooLarge {
            size: 1_048_577,
            max: 1_048_576
        })
    ));
}

#[test]
fn test_extension_case_insensitive() {
    let upper = fixture_upload("sample.xlsx");
    let renamed = UploadedFile::new("DATA.XLSX", upper.bytes);
    assert!(pipeline().run(&renamed).is_ok());

    let pdf = UploadedFile::new("data.pdf", b"%PDF-1.4".to_vec());
    let err = pipeline().run(&pdf).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Import(ImportError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_schema_rejection_is_atomic() {
    let file = fixture_upload("sample-with-error.csv");

    let err = pipeline().run(&file).unwrap_err();
    let violations = match err {
        PipelineError::Import(ImportError::SchemaViolation(violations)) => violations,
        other => panic!("expected SchemaViolation, got {:?}", other),
    };

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].row_number, 2);
    assert_eq!(violations[0].field, "orders");
    assert!(matches!(violations[0].kind, ViolationKind::WrongType { .. }));
}

#[test]
fn test_multi_product_isolation() {
    let results = pipeline().run(&fixture_upload("sample.csv")).unwrap();
    assert_eq!(results.len(), 2);

    let p1 = results.iter().find(|r| r.product_id == "P001").unwrap();
    let p2 = results.iter().find(|r| r.product_id == "P002").unwrap();

    assert_eq!(p1.total_daily_sales, 15.0);
    assert_eq!(p1.days_count, 3);
    assert_eq!(p2.total_daily_sales, 10.0);
    assert_eq!(p2.days_count, 2);

    assert_eq!(
        (p2.safety_stock, p2.thresholds.low, p2.thresholds.medium, p2.thresholds.high),
        (2, 10, 12, 14)
    );
    assert_eq!(p1.latest_zone(), Some(StockZone::Moderate));
    assert_eq!(p2.latest_zone(), Some(StockZone::Low));
}

#[test]
fn test_excel_matches_csv() {
    let from_csv = pipeline().run(&fixture_upload("sample.csv")).unwrap();
    let from_xlsx = pipeline().run(&fixture_upload("sample.xlsx")).unwrap();

    let mut csv_sorted = from_csv;
    let mut xlsx_sorted = from_xlsx;
    csv_sorted.sort_by(|a, b| a.product_id.cmp(&b.product_id));
    xlsx_sorted.sort_by(|a, b| a.product_id.cmp(&b.product_id));

    assert_eq!(csv_sorted, xlsx_sorted);
}

#[test]
fn test_corrupt_spreadsheet_is_processing_failure() {
    let file = UploadedFile::new("broken.xlsx", b"not a zip archive".to_vec());
    let err = pipeline().run(&file).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Import(ImportError::ExcelParseError(_))
    ));
}

#[test]
fn test_huge_orders_fail_without_panic() {
    let file = csv_upload(
        "huge.csv",
        "P001,W,2024-01-01,1,0,1\n\
         P001,W,2024-01-02,1,10000000000000000000,1\n",
    );

    let err = pipeline().run(&file).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Engine(EngineError::Overflow { ref product_id, .. }) if product_id == "P001"
    ));
}

#[test]
fn test_huge_lead_time_fails_without_panic() {
    let file = csv_upload(
        "huge.csv",
        "P001,W,2024-01-01,1,5,20000000000000000000\n",
    );

    let err = pipeline().run(&file).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Engine(EngineError::Overflow { .. })
    ));
}
