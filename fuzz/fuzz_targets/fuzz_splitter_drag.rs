#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sash_layout::{
    ChildSpec, CursorIcon, LayoutHost, LayoutManager, LayoutNode, LayoutTree, NodeShape, Rect,
    Vec2,
};

#[derive(Debug, Arbitrary)]
struct Frame {
    x: i16,
    y: i16,
    pressed: bool,
    down: bool,
    resize: Option<(u16, u16)>,
}

#[derive(Debug, Arbitrary)]
struct Input {
    width: u16,
    height: u16,
    // One byte per child slot: odd makes a split with that ratio, even a leaf.
    shape: Vec<u8>,
    frames: Vec<Frame>,
}

#[derive(Default)]
struct FuzzHost {
    size: Vec2,
    pointer: Vec2,
    pressed: bool,
    down: bool,
    placements: Vec<Rect>,
}

impl LayoutHost for FuzzHost {
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
        self.pressed
    }

    fn is_primary_down(&self) -> bool {
        self.down
    }

    fn set_cursor_icon(&mut self, _icon: CursorIcon) {}

    fn set_next_window_placement(&mut self, pos: Vec2, size: Vec2) {
        self.placements.push(Rect::from_pos_size(pos, size));
    }
}

fn ratio(byte: u8) -> f32 {
    (f32::from(byte) + 1.0) / 257.0
}

fn build(shape: &[u8]) -> Option<LayoutTree<FuzzHost>> {
    let (&head, rest) = shape.split_first()?;
    let root = LayoutNode::new(NodeShape::Split { ratio: ratio(head) }, 1, Rect::default()).ok()?;
    let mut tree = LayoutTree::new(root);
    let mut open = vec![tree.root()];
    let mut bytes = rest.iter().copied().take(64);
    while let Some(parent) = open.pop() {
        for first in [true, false] {
            let spec = match bytes.next() {
                Some(b) if b % 2 == 1 => ChildSpec::Split(ratio(b)),
                _ => ChildSpec::EmptyLeaf,
            };
            let split = matches!(spec, ChildSpec::Split(_));
            let child = if first {
                tree.create_first_child(parent, spec)
            } else {
                tree.create_second_child(parent, spec)
            }
            .ok()?;
            if split {
                open.push(child);
            }
        }
    }
    Some(tree)
}

fuzz_target!(|input: Input| {
    let Some(tree) = build(&input.shape) else {
        return;
    };
    let leaves = tree.leaves().len();
    let Ok(mut manager) = LayoutManager::new(tree) else {
        return;
    };
    let mut host = FuzzHost {
        size: Vec2::new(f32::from(input.width), f32::from(input.height)),
        ..FuzzHost::default()
    };

    for frame in input.frames.iter().take(256) {
        if let Some((w, h)) = frame.resize {
            host.size = Vec2::new(f32::from(w), f32::from(h));
        }
        host.pointer = Vec2::new(f32::from(frame.x), f32::from(frame.y));
        host.pressed = frame.pressed;
        host.down = frame.down || frame.pressed;
        host.placements.clear();
        manager.update(&mut host);

        // Post-conditions that must always hold:
        assert_eq!(host.placements.len(), leaves, "every leaf placed once");
        assert!(manager.tree().validate().is_ok(), "tree stays complete");
        for id in manager.tree().splits() {
            let r = manager.tree().node(id).and_then(|n| n.ratio()).unwrap_or(0.0);
            assert!(r > 0.0 && r < 1.0, "ratio {r} escaped (0, 1)");
        }
        for rect in &host.placements {
            assert!(rect.size.x >= 0.0 && rect.size.y >= 0.0, "negative size");
        }
    }
});
