use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pprof::criterion::{Output, PProfProfiler};
use taskmanager_cors::constants::method;
use taskmanager_cors::{CorsConfig, CorsPolicy, RequestContext};

const FRONTEND: &str = "http://localhost:3000";

fn bench_default_policy(c: &mut Criterion) {
    let policy = CorsPolicy::default();
    let mut group = c.benchmark_group("default_policy");

    let preflight = RequestContext {
        method: method::OPTIONS,
        path: "/tarefas/42",
        origin: Some(FRONTEND),
        access_control_request_method: Some(method::PUT),
        access_control_request_headers: Some("Content-Type, Authorization"),
    };
    group.bench_function("preflight_accepted", |b| {
        b.iter(|| black_box(policy.check(black_box(&preflight))))
    });

    let simple = RequestContext {
        method: method::GET,
        path: "/tarefas",
        origin: Some(FRONTEND),
        access_control_request_method: None,
        access_control_request_headers: None,
    };
    group.bench_function("simple_accepted", |b| {
        b.iter(|| black_box(policy.check(black_box(&simple))))
    });

    let foreign = RequestContext {
        origin: Some("http://evil.example.com"),
        ..simple
    };
    group.bench_function("simple_rejected", |b| {
        b.iter(|| black_box(policy.check(black_box(&foreign))))
    });

    group.finish();
}

fn bench_pattern_policy(c: &mut Criterion) {
    let policy = CorsPolicy::from_config(&CorsConfig {
        path_pattern: "/api/**/tasks/*".into(),
        allowed_origins: (0..64)
            .map(|idx| format!("https://svc{idx:02}.*.example.com"))
            .collect(),
        ..CorsConfig::default()
    })
    .expect("valid benchmark configuration");

    let request = RequestContext {
        method: method::GET,
        path: "/api/v1/projects/7/tasks/42",
        origin: Some("https://svc63.eu.example.com"),
        access_control_request_method: None,
        access_control_request_headers: None,
    };

    c.bench_function("pattern_policy/last_origin_pattern", |b| {
        b.iter(|| black_box(policy.check(black_box(&request))))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = bench_default_policy, bench_pattern_policy
}
criterion_main!(benches);
