use criterion::{criterion_group, criterion_main, Criterion};
use propsizer_lib::{
    estimate_total_power_kw, select_propulsion_with, BoatSpecification, Catalog, HullClass,
};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

static FIXTURE_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    let dir = fixtures_dir();
    Catalog::from_paths(
        Some(&dir.join("engines.csv")),
        Some(&dir.join("gearboxes.csv")),
    )
    .expect("fixture catalog loads")
});
static WORKBOAT: Lazy<BoatSpecification> =
    Lazy::new(|| BoatSpecification::new(HullClass::SemiDisplacement, 25.0, 15.0, 2));
static PATROL: Lazy<BoatSpecification> = Lazy::new(|| {
    BoatSpecification::new(HullClass::Planing, 40.0, 32.0, 3).with_budget(400_000.0)
});

fn benchmark_selection(c: &mut Criterion) {
    c.bench_function("power_estimate_semi", |b| {
        b.iter(|| {
            estimate_total_power_kw(HullClass::SemiDisplacement, black_box(25.0), black_box(15.0))
                .expect("valid inputs")
        });
    });

    c.bench_function("select_builtin_workboat", |b| {
        let spec = &*WORKBOAT;
        b.iter(|| {
            let report = select_propulsion_with(spec, Catalog::builtin()).expect("valid spec");
            black_box(report.candidates().len())
        });
    });

    c.bench_function("select_builtin_patrol", |b| {
        let spec = &*PATROL;
        b.iter(|| {
            let report = select_propulsion_with(spec, Catalog::builtin()).expect("valid spec");
            black_box(report.best().map(|p| p.score))
        });
    });

    c.bench_function("select_fixture_workboat", |b| {
        let catalog = &*FIXTURE_CATALOG;
        let spec = &*WORKBOAT;
        b.iter(|| {
            let report = select_propulsion_with(spec, catalog).expect("valid spec");
            black_box(report.candidates().len())
        });
    });
}

criterion_group!(benches, benchmark_selection);
criterion_main!(benches);
