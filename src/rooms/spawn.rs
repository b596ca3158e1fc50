//! Rooms domain: spawning level geometry on the ground and wall layers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Ground,
    Platform,
    Wall,
}

impl BlockKind {
    /// Platforms count as ground so the player can stand and jump on them.
    fn collision_layers(self) -> CollisionLayers {
        match self {
            BlockKind::Ground | BlockKind::Platform => {
                CollisionLayers::new(GameLayer::Ground, [GameLayer::Player])
            }
            BlockKind::Wall => CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]),
        }
    }
}

struct Block {
    kind: BlockKind,
    center: Vec2,
    size: Vec2,
}

const fn block(kind: BlockKind, x: f32, y: f32, w: f32, h: f32) -> Block {
    Block {
        kind,
        center: Vec2::new(x, y),
        size: Vec2::new(w, h),
    }
}

/// Floor with a pit, side walls, and ledges spaced for single, coyote and air jumps.
const TEST_ROOM: &[Block] = &[
    block(BlockKind::Ground, -9.0, -6.0, 14.0, 1.0),
    block(BlockKind::Ground, 10.0, -6.0, 12.0, 1.0),
    block(BlockKind::Wall, -16.5, 0.0, 1.0, 14.0),
    block(BlockKind::Wall, 16.5, 0.0, 1.0, 14.0),
    block(BlockKind::Platform, -8.0, -2.5, 4.5, 0.5),
    block(BlockKind::Platform, 8.0, -1.0, 4.5, 0.5),
    block(BlockKind::Platform, 0.0, 2.5, 3.5, 0.5),
    block(BlockKind::Platform, -11.0, 5.0, 3.0, 0.5),
];

pub(crate) fn spawn_test_room(mut commands: Commands) {
    for block in TEST_ROOM {
        let color = match block.kind {
            BlockKind::Ground => Color::srgb(0.4, 0.5, 0.4),
            BlockKind::Platform => Color::srgb(0.5, 0.4, 0.3),
            BlockKind::Wall => Color::srgb(0.3, 0.3, 0.4),
        };

        commands.spawn((
            Sprite {
                color,
                custom_size: Some(block.size),
                ..default()
            },
            Transform::from_translation(block.center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(block.size.x, block.size.y),
            block.kind.collision_layers(),
        ));
    }

    info!("Spawned test room with {} blocks", TEST_ROOM.len());
}
