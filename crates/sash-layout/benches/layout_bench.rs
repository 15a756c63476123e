//! Benchmarks for tree resize, splitter hit testing and full frame updates.
//!
//! Run with: cargo bench -p sash-layout

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sash_layout::{
    ChildSpec, CursorIcon, LayoutHost, LayoutManager, LayoutNode, LayoutTree, NodeId, NodeShape,
    Rect, Vec2,
};
use std::hint::black_box;

/// Full binary tree with `depth` levels of splits, every leaf without a
/// renderer.
fn full_tree<H>(depth: u32) -> LayoutTree<H> {
    let root = LayoutNode::new(NodeShape::Split { ratio: 0.5 }, 1, Rect::default())
        .expect("valid root");
    let mut tree = LayoutTree::new(root);
    let mut frontier = vec![tree.root()];
    for level in 1..=depth {
        let mut next = Vec::with_capacity(frontier.len() * 2);
        for parent in frontier {
            let spec = || {
                if level < depth {
                    ChildSpec::Split(0.5)
                } else {
                    ChildSpec::EmptyLeaf
                }
            };
            next.push(tree.create_first_child(parent, spec()).expect("free slot"));
            next.push(tree.create_second_child(parent, spec()).expect("free slot"));
        }
        frontier = next;
    }
    tree
}

/// Deepest split reached by always taking the first child.
fn leftmost_split<H>(tree: &LayoutTree<H>) -> NodeId {
    let mut id = tree.root();
    while let Some(child) = tree.node(id).and_then(|n| n.first_child()) {
        if !tree.node(child).is_some_and(|n| n.is_split()) {
            break;
        }
        id = child;
    }
    id
}

struct BenchHost {
    size: Vec2,
    pointer: Vec2,
    down: bool,
    placements: usize,
}

impl LayoutHost for BenchHost {
    fn viewport_origin(&self) -> Vec2 {
        Vec2::ZERO
    }

    fn viewport_size(&self) -> Vec2 {
        self.size
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    fn is_primary_pressed(&self) -> bool {
        self.down
    }

    fn is_primary_down(&self) -> bool {
        self.down
    }

    fn set_cursor_icon(&mut self, icon: CursorIcon) {
        black_box(icon);
    }

    fn set_next_window_placement(&mut self, pos: Vec2, size: Vec2) {
        black_box((pos, size));
        self.placements += 1;
    }
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/resize");
    for depth in [2, 4, 8, 12] {
        let mut tree = full_tree::<()>(depth);
        let root = tree.root();
        let mut width = 1920.0;
        group.bench_with_input(BenchmarkId::new("full_tree", depth), &depth, |b, _| {
            b.iter(|| {
                width = if width > 1000.0 { 800.0 } else { 1920.0 };
                tree.resize(root, black_box(Rect::from_size(width, 1080.0)))
                    .expect("root exists");
            })
        });
    }
    group.finish();
}

fn bench_hover(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/hover_splitter");
    for depth in [2, 4, 8, 12] {
        let mut tree = full_tree::<()>(depth);
        let root = tree.root();
        tree.resize(root, Rect::from_size(1920.0, 1080.0))
            .expect("root exists");
        let deepest = leftmost_split(&tree);
        let target = tree.splitter_rect(deepest).expect("split").pos;

        group.bench_with_input(BenchmarkId::new("deepest_bar", depth), &target, |b, &p| {
            b.iter(|| black_box(tree.hover_splitter(root, black_box(p), 2.0)))
        });
        group.bench_with_input(
            BenchmarkId::new("miss", depth),
            &Vec2::new(-10.0, -10.0),
            |b, &p| b.iter(|| black_box(tree.hover_splitter(root, black_box(p), 2.0))),
        );
    }
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/update");
    for depth in [4, 8, 12] {
        group.bench_with_input(BenchmarkId::new("idle_frame", depth), &depth, |b, &depth| {
            let mut manager = LayoutManager::new(full_tree::<BenchHost>(depth)).expect("valid");
            let mut host = BenchHost {
                size: Vec2::new(1920.0, 1080.0),
                pointer: Vec2::new(5.0, 5.0),
                down: false,
                placements: 0,
            };
            b.iter(|| manager.update(&mut host));
            black_box(host.placements);
        });

        group.bench_with_input(BenchmarkId::new("drag_frame", depth), &depth, |b, &depth| {
            b.iter_batched(
                || {
                    let manager =
                        LayoutManager::new(full_tree::<BenchHost>(depth)).expect("valid");
                    let host = BenchHost {
                        size: Vec2::new(1920.0, 1080.0),
                        pointer: Vec2::new(960.0, 5.0),
                        down: true,
                        placements: 0,
                    };
                    (manager, host)
                },
                |(mut manager, mut host)| {
                    for step in 0..16 {
                        host.pointer.x = 600.0 + 40.0 * step as f32;
                        manager.update(&mut host);
                    }
                    black_box(manager.is_dragging())
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resize, bench_hover, bench_update);
criterion_main!(benches);
