// SPDX-License-Identifier: Apache-2.0

use aljude_academy_catalog::catalog;
use aljude_academy_query::{
    all_sub_capability_routes, find_capability, find_sub_capability, search,
};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_search_scan(c: &mut Criterion) {
    let shared = catalog();

    c.bench_function("search_hit_heavy_keyword", |b| {
        b.iter(|| search(shared, "step"));
    });

    c.bench_function("search_single_capability_keyword", |b| {
        b.iter(|| search(shared, "budgeting"));
    });

    c.bench_function("search_miss_keyword", |b| {
        b.iter(|| search(shared, "zzzz-no-such-term"));
    });

    c.bench_function("lookup_capability_last_category", |b| {
        b.iter(|| find_capability(shared, "comms-manage-media-relations"));
    });

    c.bench_function("lookup_sub_capability_composite", |b| {
        b.iter(|| find_sub_capability(shared, "financial-management-budgeting", "3"));
    });

    c.bench_function("enumerate_all_routes", |b| {
        b.iter(|| all_sub_capability_routes(shared));
    });
}

criterion_group!(benches, bench_search_scan);
criterion_main!(benches);
