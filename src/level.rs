use bevy::prelude::{Commands, Vec2, Transform, SpriteBundle, Sprite, Color, default};
use bevy_rapier2d::prelude::{RigidBody, Collider, CollisionGroups, Group, Friction, CoefficientCombineRule};
use wc_util::constants::{GROUND_LAYER, WALL_LAYER};

struct Block {
    center: Vec2,
    half_extents: Vec2,
    layer: u32,
}

// A floor between two tall walls, plus a ledge to jump from.
const BLOCKS: [Block; 4] = [
    Block { center: Vec2::new(0.0, -0.5), half_extents: Vec2::new(12.0, 0.5), layer: GROUND_LAYER },
    Block { center: Vec2::new(-12.5, 8.0), half_extents: Vec2::new(0.5, 9.0), layer: WALL_LAYER },
    Block { center: Vec2::new(12.5, 8.0), half_extents: Vec2::new(0.5, 9.0), layer: WALL_LAYER },
    Block { center: Vec2::new(5.0, 3.0), half_extents: Vec2::new(2.5, 0.25), layer: GROUND_LAYER },
];

fn block_color(layer: u32) -> Color {
    if layer == WALL_LAYER {
        Color::rgb(0.35, 0.38, 0.5)
    } else {
        Color::rgb(0.3, 0.45, 0.3)
    }
}

pub fn spawn_level(mut commands: Commands) {
    for block in BLOCKS.iter() {
        commands.spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: block_color(block.layer),
                    custom_size: Some(block.half_extents * 2.0),
                    ..default()
                },
                transform: Transform::from_xyz(block.center.x, block.center.y, 0.0),
                ..default()
            },
            RigidBody::Fixed,
            Collider::cuboid(block.half_extents.x, block.half_extents.y),
            CollisionGroups::new(Group::from_bits_truncate(block.layer), Group::ALL),
            Friction {
                coefficient: 0.0,
                combine_rule: CoefficientCombineRule::Min,
            },
        ));
    }
}
