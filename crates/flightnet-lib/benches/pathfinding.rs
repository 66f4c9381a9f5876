use criterion::{criterion_group, criterion_main, Criterion};
use flightnet_lib::{
    build_graph, essential_airports, load_network, max_trip, plan_routes, DatasetPaths,
    FlightNetwork, Graph, RouteRequest, RouteStrategy,
};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/minimal")
}

static NETWORK: Lazy<FlightNetwork> =
    Lazy::new(|| load_network(&DatasetPaths::for_dir(&fixture_dir())).expect("fixture loads"));
static GRAPH: Lazy<Graph> = Lazy::new(|| build_graph(&NETWORK));
static ALL_SHORTEST_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::between("ORY", "JFK"));
static FEWEST_AIRLINES_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest {
    strategy: RouteStrategy::FewestAirlines,
    ..RouteRequest::between("ORY", "JFK")
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let network = &*NETWORK;
    let graph = &*GRAPH;

    c.bench_function("all_shortest_ory_jfk", |b| {
        let request = &*ALL_SHORTEST_REQUEST;
        b.iter(|| {
            let plan = plan_routes(network, graph, request).expect("route exists");
            black_box(plan.min_hops())
        });
    });

    c.bench_function("fewest_airlines_ory_jfk", |b| {
        let request = &*FEWEST_AIRLINES_REQUEST;
        b.iter(|| {
            let plan = plan_routes(network, graph, request).expect("route exists");
            black_box(plan.options.len())
        });
    });

    c.bench_function("max_trip", |b| {
        b.iter(|| black_box(max_trip(graph).hops));
    });

    c.bench_function("essential_airports", |b| {
        b.iter(|| black_box(essential_airports(graph).len()));
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
