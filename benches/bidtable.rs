#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use bidtable::{Bid, ChainedHashTable, DEFAULT_BUCKET_COUNT};
use criterion::{Criterion, criterion_group, criterion_main};
use proptest::{
    collection::vec,
    strategy::{Strategy, ValueTree},
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn bid_table_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let bids: Vec<Bid> = vec(10_000..100_000_u32, ITEMS_AMOUNT)
        .prop_map(|ids: Vec<u32>| -> Vec<Bid> {
            ids.into_iter().map(|id| Bid::new(id.to_string(), "title", "fund", 1.0)).collect()
        })
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Bid table comparison benchmark");
    group.sample_size(SAMPLE_SIZE);

    group.bench_function("chained insert", |b| {
        b.iter(|| {
            let mut table = ChainedHashTable::new();
            for bid in bids.clone() {
                table.insert(bid);
            }
            table
        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for bid in bids.clone() {
                map.entry(bid.id.clone()).or_insert(bid);
            }
            map
        });
    });

    let mut table = ChainedHashTable::with_capacity(DEFAULT_BUCKET_COUNT).unwrap();
    table.extend(bids.iter().cloned());
    let map: HashMap<String, Bid> = bids.iter().map(|bid| (bid.id.clone(), bid.clone())).collect();

    group.bench_function("chained search", |b| {
        b.iter(|| {
            for bid in &bids {
                let _ = table.search(&bid.id);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for bid in &bids {
                let _ = map.get(&bid.id);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bid_table_benches);

criterion_main!(benches);
