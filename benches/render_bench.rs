use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use vitals::system::host::{DisplayFields, HostInfo};
use vitals::system::snapshot::Snapshot;
use vitals::ui::panel;

fn make_snapshot() -> Snapshot {
    Snapshot {
        cpu_percent: 37.25,
        memory_total: 32 << 30,
        memory_used: 11 << 30,
        memory_available: 21 << 30,
        memory_used_percent: 34.375,
        uptime_secs: 431_999,
    }
}

fn bench_render(c: &mut Criterion) {
    let snapshot = make_snapshot();
    let host = HostInfo {
        fields: DisplayFields::all(),
        username: "operator".to_string(),
        hostname: "build-agent-07.internal".to_string(),
        os: "Linux ubuntu 24.04".to_string(),
    };
    let minimal = HostInfo {
        fields: DisplayFields::none(),
        ..host.clone()
    };

    let mut group = c.benchmark_group("panel_render");
    group.bench_function("all_fields", |b| {
        b.iter(|| panel::render(black_box(&snapshot), black_box(&host), "q"))
    });
    group.bench_function("no_host_fields", |b| {
        b.iter(|| panel::render(black_box(&snapshot), black_box(&minimal), "q"))
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
