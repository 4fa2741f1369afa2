//! End-to-end tests for the recap binary over plain-text receipts.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn write_receipt(dir: &TempDir, name: &str, body: &str) {
    std::fs::write(dir.path().join(name), body).unwrap();
}

fn recap() -> Command {
    Command::cargo_bin("recap").unwrap()
}

#[test]
fn batch_groups_by_vendor_in_first_appearance_order() {
    let dir = TempDir::new().unwrap();
    // Glob expands alphabetically, so ingestion order is a1, a2, b1.
    write_receipt(&dir, "a1.txt", "Company: Acme\nDate: 02/01/2024\nTotal: $10.00\n");
    write_receipt(&dir, "a2.txt", "Company: Acme\nDate: 01/15/2024\nTotal: $7.00\n");
    write_receipt(&dir, "b1.txt", "Provider: Blue Cafe\nDate: 01/01/2024\nTotal: 5\n");

    let out = dir.path().join("grouped.json");
    recap()
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let artifact: Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();

    let groups = artifact.as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["companyName"], "Acme");
    assert_eq!(groups[1]["companyName"], "Blue Cafe");

    // Acme's receipts come out date-ascending, amounts carried as numbers.
    assert_eq!(groups[0]["receipts"][0]["receiptDate"], "2024-01-15");
    assert_eq!(groups[0]["receipts"][0]["amount"], 7.0);
    assert_eq!(groups[0]["receipts"][1]["receiptDate"], "2024-02-01");
    assert_eq!(groups[0]["receipts"][1]["amount"], 10.0);

    // No record dropped or duplicated.
    let total: usize = groups
        .iter()
        .map(|g| g["receipts"].as_array().unwrap().len())
        .sum();
    assert_eq!(total, 3);
}

#[test]
fn batch_writes_vendor_totals_summary() {
    let dir = TempDir::new().unwrap();
    write_receipt(&dir, "r1.txt", "Company: Walmart\nDate: 01/02/2024\nTotal: $13.01\n");
    write_receipt(&dir, "r2.txt", "Company: Walmart\nDate: 01/05/2024\nTotal: $1.99\n");

    let out = dir.path().join("grouped.json");
    recap()
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .arg("--output")
        .arg(&out)
        .arg("--summary")
        .assert()
        .success();

    let summary = std::fs::read_to_string(dir.path().join("vendor_totals.csv")).unwrap();
    assert!(summary.starts_with("company,receipts,total"));
    assert!(summary.contains("Walmart,2,15.00"));
}

#[test]
fn batch_with_no_matching_files_fails() {
    let dir = TempDir::new().unwrap();
    recap()
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn process_defaults_on_unlabeled_text() {
    let dir = TempDir::new().unwrap();
    write_receipt(&dir, "blank.txt", "thanks for shopping\n");

    recap()
        .arg("process")
        .arg(dir.path().join("blank.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"vendorName\": \"Unknown\""))
        .stdout(predicate::str::contains("\"receiptDate\": null"));
}

#[test]
fn process_unsupported_extension_fails() {
    let dir = TempDir::new().unwrap();
    write_receipt(&dir, "receipt.docx", "Company: Acme\n");

    recap()
        .arg("process")
        .arg(dir.path().join("receipt.docx"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}
