//! End-to-end flow: invoices built through both the typed and the JSON path,
//! collected, summarised and cleared.

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;

use invoicestats_core::{format_pennies, DomainError};
use invoicestats_invoicing::Invoice;
use invoicestats_stats::{InvoiceStats, StatsConfig};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

#[test]
fn company_a_receivables_summary() {
    let invoices = [
        Invoice::issued_on(date(), "Company-A", "Company-B", 12955, 79).unwrap(),
        Invoice::issued_on(date(), "Company-A", "Company-C", 36001, 12).unwrap(),
        Invoice::issued_on(date(), "Company-A", "Company-D", 9849, 9).unwrap(),
    ];
    let mut stats = InvoiceStats::from_invoices(invoices).unwrap();

    stats
        .add_value(&json!({
            "supplier": "Company-A",
            "recipient": "Company-E",
            "pounds": 18500,
            "pennies": 50,
            "issue_date": "2024-06-02",
        }))
        .unwrap();

    assert_eq!(stats.invoice_count(), 4);
    assert_eq!(
        stats.invoice_amounts().collect::<Vec<_>>(),
        vec![1_295_579, 3_600_112, 984_909, 1_850_050]
    );

    // 7_730_650 / 4 = 1_932_662.5 -> exact half goes down.
    let mean = stats.mean().unwrap();
    assert_eq!(mean, 1_932_662);
    assert_eq!(format_pennies(mean), "£19326.62");

    // (1_295_579 + 1_850_050) / 2 = 1_572_814.5
    let median = stats.median().unwrap();
    assert_eq!(median, 1_572_814);
    assert_eq!(format_pennies(median), "£15728.14");

    stats.clear();
    assert_eq!(stats.invoice_count(), 0);
    assert!(matches!(stats.mean(), Err(DomainError::EmptyData(_))));
}

#[test]
fn shared_invoices_stay_owned_by_the_caller() {
    let invoice = Arc::new(Invoice::issued_on(date(), "Company-A", "Company-B", 10, 0).unwrap());

    let mut first = InvoiceStats::new();
    let mut second = InvoiceStats::new();
    first.add_invoice(Arc::clone(&invoice)).unwrap();
    second.add_invoice(Arc::clone(&invoice)).unwrap();

    first.clear();
    assert_eq!(invoice.total_pennies(), 1_000);
    assert_eq!(second.invoice_amounts().collect::<Vec<_>>(), vec![1_000]);
}

#[test]
fn capacity_limit_is_named_in_the_error() {
    let config = StatsConfig::default().with_max_invoices(1);
    let mut stats = InvoiceStats::with_config(config);
    stats
        .add_invoice(Invoice::issued_on(date(), "A", "B", 1, 0).unwrap())
        .unwrap();

    let err = stats
        .add_invoice(Invoice::issued_on(date(), "A", "C", 2, 0).unwrap())
        .unwrap_err();
    assert_eq!(err, DomainError::CapacityExceeded { max: 1 });
    assert!(err.to_string().contains("maximum number of stored invoices: 1"));
}
