//! Performance benchmarks for the ledger engine.
//!
//! - Building a one-month ledger
//! - Building ledgers of increasing size
//! - Re-aggregation after a holiday toggle
//! - The import endpoint end to end
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use comp_ledger::api::{AppState, create_router};
use comp_ledger::calculation::{StatusOverride, apply_override, build_ledger};
use comp_ledger::config::{ConfigLoader, LedgerConfig};
use comp_ledger::models::RawRecord;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const WEEKDAYS: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

/// Creates `days` rows of an attendance export, with a subtotal after every week.
fn create_rows(days: usize) -> Vec<RawRecord> {
    let mut rows = Vec::with_capacity(days + days / 7);
    for day in 0..days {
        let weekday = WEEKDAYS[day % 7];
        let (worked, status) = match day % 7 {
            1 => ("0.4167", ""),
            3 => ("0.1667", "오후반차(4.00h)"),
            4 if day % 14 == 4 => ("", "연차(8.00h)"),
            5 | 6 => ("0", ""),
            _ => ("0.375", ""),
        };
        rows.push(RawRecord::new(format!("{:02}({})", day % 31 + 1, weekday), worked, status));
        if day % 7 == 6 {
            rows.push(RawRecord::new("주간 근무시간", "1.875", ""));
        }
    }
    rows
}

fn bench_month(c: &mut Criterion) {
    let config = LedgerConfig::default();
    let rows = create_rows(31);

    c.bench_function("build_ledger_month", |b| {
        b.iter(|| black_box(build_ledger(black_box(&rows), &config)))
    });
}

fn bench_ledger_sizes(c: &mut Criterion) {
    let config = LedgerConfig::default();
    let mut group = c.benchmark_group("build_ledger");

    for days in [31usize, 365, 3650] {
        let rows = create_rows(days);
        group.throughput(Throughput::Elements(rows.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &rows, |b, rows| {
            b.iter(|| black_box(build_ledger(rows, &config)))
        });
    }

    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let config = LedgerConfig::default();
    let mut ledger = build_ledger(&create_rows(31), &config).ledger;
    let mut holiday = false;

    c.bench_function("holiday_toggle_month", |b| {
        b.iter(|| {
            holiday = !holiday;
            black_box(apply_override(&mut ledger, StatusOverride::holiday(10, holiday), &config).unwrap())
        })
    });
}

fn bench_import_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    let router = create_router(AppState::new(config));
    let body = serde_json::json!({ "records": create_rows(31) }).to_string();

    c.bench_function("import_endpoint_month", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/ledgers")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_month,
    bench_ledger_sizes,
    bench_toggle,
    bench_import_endpoint
);
criterion_main!(benches);
