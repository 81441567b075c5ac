use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use barcode_report::{run, Config, Diagnostic, Error, UnusedFrom, WriterDiagnostics};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn config(orders: PathBuf, barcodes: PathBuf, output: PathBuf) -> Config {
    Config {
        orders,
        barcodes,
        output,
        ..Config::default()
    }
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn fixture_run_matches_expected_output_and_report() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output_1.csv");
    let config = config(fixture("orders_1.csv"), fixture("barcodes_1.csv"), output.clone());

    let mut stdout: Vec<u8> = Vec::new();
    let mut stderr: Vec<u8> = Vec::new();
    let stats = run(&config, &mut stdout, &mut WriterDiagnostics::new(&mut stderr)).unwrap();

    let stderr = String::from_utf8(stderr).unwrap();
    assert!(stderr.contains("duplicate barcodes: 11."));
    assert!(stderr.contains("orders without barcode: 1, 123, 124, 192, 3."));

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        fs::read_to_string(fixture("expected_output_1.csv")).unwrap()
    );

    let stdout = String::from_utf8(stdout).unwrap();
    assert!(stdout.contains("Top 5 Customers:\n"));
    assert!(stdout.contains("customer_id,amount_of_tickets\n16,5\n12,4\n19,3\n10,2\n17,1\n"));
    assert!(stdout.contains("Amount of unused barcodes: 2"));

    assert_eq!(stats.output_rows, 7);
    assert_eq!(stats.unused_barcodes, 2);
}

#[test]
fn output_rows_reference_disjoint_barcodes() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.csv");
    let config = config(fixture("orders_1.csv"), fixture("barcodes_1.csv"), output.clone());

    run(&config, &mut io::sink(), &mut Vec::<Diagnostic>::new()).unwrap();

    let mut seen = HashSet::new();
    for line in fs::read_to_string(&output).unwrap().lines() {
        let fields: Vec<&str> = line.split(',').collect();
        assert!(fields.len() >= 3, "order without barcode in output: {line}");
        for barcode in &fields[2..] {
            assert!(seen.insert(barcode.to_string()), "barcode {barcode} used twice");
        }
    }
}

#[test]
fn small_run_groups_barcodes_per_order() {
    let dir = tempfile::tempdir().unwrap();
    let orders = write_file(dir.path(), "orders.csv", "customer_id,order_id\n16,1\n16,2\n");
    let barcodes = write_file(
        dir.path(),
        "barcodes.csv",
        "order_id,barcode\n1,b1\n1,b2\n2,b3\n,b4\n",
    );
    let output = dir.path().join("output.csv");
    let config = Config {
        top: 1,
        ..config(orders, barcodes, output.clone())
    };

    let mut stdout: Vec<u8> = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    run(&config, &mut stdout, &mut diagnostics).unwrap();

    assert!(diagnostics.is_empty());
    assert_eq!(fs::read_to_string(&output).unwrap(), "16,1,b1,b2\n16,2,b3\n");
    assert_eq!(
        String::from_utf8(stdout).unwrap(),
        "Top 1 Customers:\ncustomer_id,amount_of_tickets\n16,3\n\nAmount of unused barcodes: 1\n\n"
    );
}

#[test]
fn duplicate_barcode_drops_orders_it_leaves_empty() {
    let dir = tempfile::tempdir().unwrap();
    let orders = write_file(
        dir.path(),
        "orders.csv",
        "customer_id,order_id\n1,a\n2,b\n2,c\n",
    );
    let barcodes = write_file(
        dir.path(),
        "barcodes.csv",
        "order_id,barcode\na,11\nb,11\nb,12\nc,13\n",
    );
    let output = dir.path().join("output.csv");

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    run(
        &config(orders, barcodes, output.clone()),
        &mut io::sink(),
        &mut diagnostics,
    )
    .unwrap();

    assert_eq!(
        diagnostics,
        vec![
            Diagnostic::DuplicateBarcodes(vec!["11".to_string()]),
            Diagnostic::OrdersWithoutBarcode(vec!["a".to_string()]),
        ]
    );
    assert_eq!(fs::read_to_string(&output).unwrap(), "2,b,12\n2,c,13\n");
}

#[test]
fn unused_count_follows_configured_barcode_set() {
    let dir = tempfile::tempdir().unwrap();
    let orders = write_file(dir.path(), "orders.csv", "customer_id,order_id\n1,a\n");
    let barcodes = write_file(
        dir.path(),
        "barcodes.csv",
        "order_id,barcode\na,b1\n,b9\n,b9\n,b8\n",
    );
    let output = dir.path().join("output.csv");
    let base = config(orders, barcodes, output);

    let post = run(&base, &mut io::sink(), &mut Vec::<Diagnostic>::new()).unwrap();
    assert_eq!(post.unused_barcodes, 1);

    let pre_config = Config {
        unused_from: UnusedFrom::PreDedup,
        ..base
    };
    let mut stdout: Vec<u8> = Vec::new();
    let pre = run(&pre_config, &mut stdout, &mut Vec::<Diagnostic>::new()).unwrap();
    assert_eq!(pre.unused_barcodes, 3);
    assert!(String::from_utf8(stdout)
        .unwrap()
        .contains("Amount of unused barcodes: 3"));
}

#[test]
fn missing_input_aborts_before_writing_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.csv");
    let config = config(
        fixture("orders_1.csv"),
        dir.path().join("missing.csv"),
        output.clone(),
    );

    let mut stdout: Vec<u8> = Vec::new();
    let err = run(&config, &mut stdout, &mut Vec::<Diagnostic>::new()).unwrap_err();

    assert!(matches!(err, Error::ReadInput { .. }));
    assert!(err.to_string().contains("missing.csv"));
    assert!(stdout.is_empty());
    assert!(!output.exists());
}

#[test]
fn missing_required_column_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let orders = write_file(dir.path(), "orders.csv", "customer,order_id\n1,a\n");
    let barcodes = write_file(dir.path(), "barcodes.csv", "order_id,barcode\na,b1\n");

    let err = run(
        &config(orders, barcodes, dir.path().join("output.csv")),
        &mut io::sink(),
        &mut Vec::<Diagnostic>::new(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::MissingField {
            field: "customer_id",
            ..
        }
    ));
}
