//! Benchmarks for the per-event paths of the settings panel:
//! - draft field updates
//! - submit with a no-op handler
//! - outside-click checks
//! - article style resolution

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ratatui::layout::{Position, Rect};

use folio::article::ArticleStyle;
use folio::options::{OptionCatalog, SettingsKey, SettingsRecord, step_option};
use folio::panel::SettingsPanel;

fn bench_set_field(c: &mut Criterion) {
    let catalog = OptionCatalog::builtin();
    let mut panel = SettingsPanel::new(catalog.defaults.clone(), |_: &SettingsRecord| {});

    c.bench_function("set_field_cycle", |b| {
        b.iter(|| {
            for key in SettingsKey::ALL {
                let next = step_option(catalog.options(key), panel.draft().get(key), 1)
                    .cloned()
                    .unwrap_or_else(|| panel.draft().get(key).clone());
                panel.set_field(black_box(key), next);
            }
        })
    });
}

fn bench_submit(c: &mut Criterion) {
    let catalog = OptionCatalog::builtin();
    let mut panel = SettingsPanel::new(catalog.defaults, |r: &SettingsRecord| {
        black_box(r);
    });

    c.bench_function("submit", |b| b.iter(|| panel.submit()));
}

fn bench_outside_click(c: &mut Criterion) {
    let catalog = OptionCatalog::builtin();
    let mut panel = SettingsPanel::new(catalog.defaults, |_: &SettingsRecord| {});
    panel.set_root(&[Rect::new(0, 0, 44, 40)]);

    c.bench_function("outside_click_inside", |b| {
        b.iter(|| {
            panel.toggle_open();
            let closed = panel.handle_outside_interaction(black_box(Position::new(10, 10)));
            panel.toggle_open();
            closed
        })
    });
}

fn bench_style_resolve(c: &mut Criterion) {
    let catalog = OptionCatalog::builtin();

    c.bench_function("article_style_resolve", |b| {
        b.iter(|| ArticleStyle::resolve(black_box(&catalog.defaults), &catalog))
    });
}

criterion_group!(
    benches,
    bench_set_field,
    bench_submit,
    bench_outside_click,
    bench_style_resolve
);
criterion_main!(benches);
