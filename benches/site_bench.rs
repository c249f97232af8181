//! Benchmarks for chart descriptor building and the chart registry
//!
//! Run with: cargo bench

use siera::charts::{ChartCatalog, HeadlessBackend, PaletteName, VisualizationKind};
use siera::{SiteConfig, SitePage, VisualizationRegistry};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_descriptors(c: &mut Criterion) {
    let mut group = c.benchmark_group("descriptors");

    for name in [PaletteName::Standard, PaletteName::Slate] {
        let catalog = ChartCatalog::new(name.palette(), 2000);

        for &kind in VisualizationKind::all() {
            group.bench_function(format!("build_{}_{}", name, kind), |b| {
                b.iter(|| catalog.descriptor(black_box(kind)))
            });
        }

        group.throughput(Throughput::Elements(VisualizationKind::all().len() as u64));
        group.bench_function(format!("serialize_all_{}", name), |b| {
            b.iter(|| {
                for &kind in VisualizationKind::all() {
                    black_box(catalog.descriptor(kind).to_config_json().unwrap());
                }
            })
        });
    }

    let catalog = ChartCatalog::default();
    group.bench_function("narrow_viewport", |b| {
        b.iter(|| catalog.descriptor_for(VisualizationKind::SurgeonComparison, black_box(375.0)))
    });

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    let catalog = ChartCatalog::default();
    let descriptors: Vec<_> = VisualizationKind::all()
        .iter()
        .map(|&kind| (kind.mount_id(), catalog.descriptor(kind)))
        .collect();

    group.bench_function("upsert_replace", |b| {
        let mut registry = VisualizationRegistry::new(HeadlessBackend::new());
        b.iter(|| {
            for (id, descriptor) in &descriptors {
                registry.upsert(id, descriptor, id).unwrap();
            }
        })
    });

    group.bench_function("resize_all", |b| {
        let mut registry = VisualizationRegistry::new(HeadlessBackend::new());
        for (id, descriptor) in &descriptors {
            registry.upsert(id, descriptor, id).unwrap();
        }
        b.iter(|| black_box(registry.resize_all()))
    });

    group.finish();
}

fn bench_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("page");
    let config = SiteConfig::default();

    group.throughput(Throughput::Elements(100));
    group.bench_function("resize_burst_100", |b| {
        let mut page = SitePage::new(&config, HeadlessBackend::new());
        page.hero_ready(1280.0);
        let mut now = 0u64;
        b.iter(|| {
            for _ in 0..100 {
                now += 2;
                page.notify_resize(now);
                black_box(page.poll_resize(now));
            }
            now += page.resize_wait_ms();
            black_box(page.poll_resize(now))
        })
    });

    group.bench_function("demo_cycle", |b| {
        let mut page = SitePage::new(&config, HeadlessBackend::new());
        b.iter(|| {
            for demo in ["patient-context", "insurance-outcome", "surgeon-value"] {
                if let siera::Selection::Panel(panel) = page.select_demo(black_box(demo)) {
                    page.demo_mount_ready(panel.ticket, 1280.0);
                }
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_descriptors, bench_registry, bench_page);
criterion_main!(benches);
