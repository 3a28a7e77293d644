//! Benchmarks for the transition timeline and navigator.
//!
//! Run with: cargo bench -p showroom

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use showroom::catalog::SectionCatalog;
use showroom::config::SECTION_COUNT;
use showroom::engine::{Animation, Property, Target, TransitionEngine};
use showroom::navigator::{Collaborators, SectionNavigator};
use showroom::scroll::InstantScroll;
use showroom::section::PageLayout;
use showroom::segmenter::WordSegmenter;
use showroom::sound::SoundBank;
use showroom::timeline::Timeline;

fn bench_timeline_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline");

    group.bench_function("advance_200_staggered_words", |b| {
        b.iter(|| {
            let mut timeline = Timeline::new();
            let words: Vec<Target> = (0..200)
                .map(|word| Target::Word { section: 0, word })
                .collect();
            timeline.animate(
                Animation::to(words, Property::OffsetYPercent, 0.0, 0.64).stagger(0.005),
            );
            for _ in 0..120 {
                black_box(timeline.advance(1.0 / 60.0));
            }
        });
    });

    group.finish();
}

fn bench_section_transition(c: &mut Criterion) {
    let layout = PageLayout::default();
    let catalog = SectionCatalog::default();

    c.bench_function("navigator_full_transition", |b| {
        b.iter(|| {
            let mut nav = SectionNavigator::from_headings(&layout, catalog.headings(), &WordSegmenter);
            let mut engine = Timeline::new();
            let mut scroll = InstantScroll::new(layout.max_offset());
            let mut sound = SoundBank::default();
            nav.prepare(&mut engine);
            let mut cx = Collaborators {
                scroll: &mut scroll,
                engine: &mut engine,
                sound: &mut sound,
            };
            nav.navigate_to(black_box(SECTION_COUNT / 2), &mut cx);
            for _ in 0..60 {
                for completion in engine.advance(1.0 / 60.0) {
                    nav.handle_completion(completion, &mut engine);
                }
            }
            black_box(nav.current_section())
        });
    });
}

criterion_group!(benches, bench_timeline_advance, bench_section_transition);
criterion_main!(benches);
