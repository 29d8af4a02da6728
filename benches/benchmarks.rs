//! Performance benchmarks for timescan

use std::path::Path;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use timescan::test_utils::{MemoryFileSystem, TestTree};
use timescan::{Entry, TimeFilter, TreeWalker, WalkerConfig, output};

const T: i64 = 1_700_000_000;

/// Real tree with `dirs` directories of `files_per_dir` files each.
fn create_tree(dirs: usize, files_per_dir: usize) -> TestTree {
    let tree = TestTree::new();
    for d in 0..dirs {
        for f in 0..files_per_dir {
            tree.add_file(&format!("dir_{}/file_{}.txt", d, f), T + (f as i64));
        }
    }
    tree
}

/// In-memory tree of the given fan-out and depth.
fn create_memory_tree(fan_out: usize, depth: usize) -> MemoryFileSystem {
    fn fill(fs: MemoryFileSystem, dir: &str, fan_out: usize, depth: usize) -> MemoryFileSystem {
        let mut fs = fs;
        for i in 0..fan_out {
            fs = fs.file(format!("{}/f{}", dir, i), T + i as i64);
        }
        if depth == 0 {
            return fs;
        }
        for i in 0..fan_out {
            let sub = format!("{}/d{}", dir, i);
            fs = fill(fs.dir(&sub, T), &sub, fan_out, depth - 1);
        }
        fs
    }
    fill(MemoryFileSystem::new("/bench", T), "/bench", fan_out, depth)
}

fn bench_walk_disk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk_disk");

    let small = create_tree(10, 10);
    let walker = TreeWalker::new(WalkerConfig::new(TimeFilter::after(0)));
    group.bench_function("small_tree_100_files", |b| {
        b.iter(|| walker.walk(black_box(small.path())))
    });

    let medium = create_tree(50, 20);
    group.bench_function("medium_tree_1000_files", |b| {
        b.iter(|| walker.walk(black_box(medium.path())))
    });

    // Everything pruned at the first level
    let pruning = TreeWalker::new(WalkerConfig::new(TimeFilter::before(0)));
    group.bench_function("medium_tree_pruned", |b| {
        b.iter(|| pruning.walk(black_box(medium.path())))
    });

    group.finish();
}

fn bench_walk_memory(c: &mut Criterion) {
    let walker = TreeWalker::new(WalkerConfig::new(TimeFilter::after(T)))
        .with_file_system(create_memory_tree(5, 4));

    c.bench_function("walk_memory_fanout_5_depth_4", |b| {
        b.iter(|| walker.walk(black_box(Path::new("/bench"))))
    });
}

fn bench_write_listing(c: &mut Criterion) {
    let entries: Vec<Entry> = (0..1000)
        .map(|i| Entry::new(format!("/some/fairly/long/path/file_{}.txt", i), T + i))
        .collect();

    c.bench_function("write_listing_1000_entries", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(64 * 1024);
            output::write_listing(&mut out, black_box(&entries)).unwrap();
            out
        })
    });
}

criterion_group!(
    benches,
    bench_walk_disk,
    bench_walk_memory,
    bench_write_listing,
);
criterion_main!(benches);
