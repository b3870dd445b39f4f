//! Performance benchmarks for twig

use std::hint::black_box;
use std::path::Path;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use twig::test_utils::TestTree;
use twig::{FixedVolumeLabel, OutputBuffer, OutputConfig, TreeConfig, TreeWalker};

fn walk_into_memory(walker: &TreeWalker, root: &Path, output: &OutputConfig) -> usize {
    let mut out = OutputBuffer::new(Vec::new(), output);
    walker.walk(root, &mut out).unwrap();
    out.into_sink().len()
}

fn bench_walk(c: &mut Criterion) {
    let tree = TestTree::new();
    tree.populate(4, 5, 4);

    let walker = TreeWalker::new(TreeConfig {
        include_files: true,
        ..Default::default()
    })
    .with_volume_label(FixedVolumeLabel::none());

    let mut group = c.benchmark_group("walk");

    let buffered = OutputConfig {
        use_color: false,
        flush_interval: None,
    };
    group.bench_function("single_flush", |b| {
        b.iter(|| walk_into_memory(&walker, black_box(tree.path()), &buffered))
    });

    let eager = OutputConfig {
        use_color: false,
        flush_interval: Some(Duration::ZERO),
    };
    group.bench_function("flush_every_layer", |b| {
        b.iter(|| walk_into_memory(&walker, black_box(tree.path()), &eager))
    });

    let colored = OutputConfig {
        use_color: true,
        flush_interval: None,
    };
    group.bench_function("colored", |b| {
        b.iter(|| walk_into_memory(&walker, black_box(tree.path()), &colored))
    });

    group.finish();
}

fn bench_dirs_only(c: &mut Criterion) {
    let tree = TestTree::new();
    tree.populate(4, 5, 4);

    let walker = TreeWalker::new(TreeConfig::default()).with_volume_label(FixedVolumeLabel::none());
    let output = OutputConfig {
        use_color: false,
        flush_interval: None,
    };

    c.bench_function("walk_dirs_only", |b| {
        b.iter(|| walk_into_memory(&walker, black_box(tree.path()), &output))
    });
}

criterion_group!(benches, bench_walk, bench_dirs_only);
criterion_main!(benches);
