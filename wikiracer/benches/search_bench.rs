//! Benchmarks for search over synthetic layered graphs.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wikiracer::provider::NoOpFetchObserver;
use wikiracer::search::{unit_cost, SearchEngine, SearchMode};
use wikiracer::testing::layered_graph;

const SOURCE: &str = "/wiki/L0_0";
const GOAL: &str = "/wiki/L7_9";

fn search_benchmark(c: &mut Criterion) {
    for mode in [SearchMode::Bfs, SearchMode::Dfs, SearchMode::Dijkstra] {
        c.bench_function(&format!("{mode}_layered_8x16"), |b| {
            b.iter(|| {
                let provider = layered_graph(8, 16, 3);
                let engine =
                    SearchEngine::new(&provider).with_observer(Arc::new(NoOpFetchObserver));
                black_box(engine.search(SOURCE, GOAL, mode, None))
            })
        });
    }

    c.bench_function("dijkstra_unit_cost_layered_8x16", |b| {
        b.iter(|| {
            let provider = layered_graph(8, 16, 3);
            let engine = SearchEngine::new(&provider).with_observer(Arc::new(NoOpFetchObserver));
            black_box(engine.dijkstras(SOURCE, GOAL, Some(&unit_cost)))
        })
    });
}

criterion_group!(benches, search_benchmark);
criterion_main!(benches);
