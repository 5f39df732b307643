//! # Track-and-Trace Pipeline Benchmarks
//!
//! Client-side cost of getting an operation onto the wire:
//!
//! | Stage | What is measured |
//! |-------|------------------|
//! | Addressing | SHA-512 state addresses, property page fan-out |
//! | Payloads | protobuf encoding of a record with four properties |
//! | Transactions | Sabre dispatch wrap plus header signing |
//! | Batches | batch signing and `BatchList` serialization |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shared_crypto::Secp256k1Signer;
use std::sync::Arc;
use std::time::Duration;
use tnt_01_addressing::{agent_address, property_page_addresses, record_address, HISTORY_PAGE};
use tnt_02_payloads::{encode, CreateRecordBody, PayloadAction, PropertyData, PropertyInput};
use tnt_03_transactions::{create_batch, encode_batch_list};
use tnt_05_services::{create_record_transaction, property_scope, Session};

fn signer() -> Arc<Secp256k1Signer> {
    Arc::new(Secp256k1Signer::from_bytes(&[0x5a; 32]).expect("fixed key is valid"))
}

fn record_body(record_id: &str) -> CreateRecordBody {
    CreateRecordBody {
        record_id: record_id.to_string(),
        schema: "asset".to_string(),
        properties: vec![
            PropertyInput::new("serialNumber", PropertyData::String("SN-0001".into())),
            PropertyInput::new("type", PropertyData::String("pallet".into())),
            PropertyInput::new("weight", PropertyData::Number(12_500)),
            PropertyInput::new(
                "location",
                PropertyData::LatLong {
                    latitude: 44.98,
                    longitude: -93.26,
                },
            ),
        ],
    }
}

// ============================================================================
// Addressing
// ============================================================================

fn bench_addressing(c: &mut Criterion) {
    let mut group = c.benchmark_group("tnt-01-addressing");

    let public_key = "02a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90";
    group.bench_function("agent_address", |b| {
        b.iter(|| agent_address(black_box(public_key)))
    });
    group.bench_function("record_address", |b| {
        b.iter(|| record_address(black_box("6f1c7e52-2f0b-4a8e-9d7a-3c1b2a0e9f11")))
    });

    for count in [4usize, 16, 64] {
        let names: Vec<String> = (0..count).map(|i| format!("property_{i}")).collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("property_scope", count), &names, |b, names| {
            b.iter(|| property_scope(black_box("rec-1"), names))
        });
        group.bench_with_input(
            BenchmarkId::new("history_pages", count),
            &names,
            |b, names| b.iter(|| property_page_addresses(black_box("rec-1"), names, HISTORY_PAGE)),
        );
    }

    group.finish();
}

// ============================================================================
// Payloads and Transactions
// ============================================================================

fn bench_transactions(c: &mut Criterion) {
    let mut group = c.benchmark_group("tnt-03-transactions");
    group.measurement_time(Duration::from_secs(10));

    let action = PayloadAction::CreateRecord(record_body("rec-1"));
    group.bench_function("encode_create_record", |b| {
        b.iter(|| encode(black_box(&action)))
    });

    let session = Session::default().with_signer(signer());
    group.bench_function("create_record_transaction", |b| {
        b.iter(|| create_record_transaction(&session, black_box(record_body("rec-1"))))
    });

    group.finish();
}

// ============================================================================
// Batches
// ============================================================================

fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("tnt-03-batches");
    let signer = signer();
    let session = Session::default().with_signer(signer.clone());

    for size in [1usize, 10, 100] {
        let transactions: Vec<_> = (0..size)
            .map(|i| {
                create_record_transaction(&session, record_body(&format!("rec-{i}")))
                    .expect("record transaction builds")
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("batch_list", size),
            &transactions,
            |b, transactions| {
                b.iter(|| {
                    let batch = create_batch(transactions.clone(), signer.as_ref())
                        .expect("non-empty batch");
                    black_box(encode_batch_list(vec![batch]))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_addressing, bench_transactions, bench_batches);
criterion_main!(benches);
