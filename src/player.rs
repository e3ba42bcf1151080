use bevy::{
    log::error,
    prelude::{BuildChildren, Camera2dBundle, Children, Color, Commands, EventReader, Query, Res, SpatialBundle, Sprite, SpriteBundle, Transform, TransformBundle, Vec2, With, default},
};
use bevy_rapier2d::prelude::{Collider, CollisionGroups, Group, Friction, CoefficientCombineRule};
use wc_common::{
    components::{camera_follower::CameraFollower, movement_state::MovementState, player::{Player, PlayerVisual}, probe::{ContactProbe, ProbeKind}},
    config::GameSettings,
    events::MovementStateChanged,
};
use wc_movement::{controller::LocomotionController, setup::LocomotionBundle};
use wc_util::constants::{PLAYER_HALF_HEIGHT, PLAYER_HALF_WIDTH, PLAYER_LAYER};

const SPAWN_POINT: Vec2 = Vec2::new(0.0, 2.0);

fn probe_offset(kind: ProbeKind) -> Vec2 {
    match kind {
        ProbeKind::Ground => Vec2::new(0.0, -PLAYER_HALF_HEIGHT),
        ProbeKind::WallLeft => Vec2::new(-PLAYER_HALF_WIDTH, 0.0),
        ProbeKind::WallRight => Vec2::new(PLAYER_HALF_WIDTH, 0.0),
    }
}

fn state_color(state: MovementState) -> Color {
    match state {
        MovementState::Grounded => Color::rgb(0.95, 0.85, 0.4),
        MovementState::Airborne => Color::rgb(0.95, 0.6, 0.3),
        MovementState::WallSliding(_) => Color::rgb(0.4, 0.8, 0.95),
    }
}

pub fn spawn_player(
    mut commands: Commands,
    settings: Res<GameSettings>,
) {
    let controller = match LocomotionController::new(settings.locomotion) {
        Ok(controller) => controller,
        Err(err) => {
            error!("player not spawned: {err}");
            return;
        }
    };

    let player = commands.spawn((
        SpatialBundle::from_transform(Transform::from_xyz(SPAWN_POINT.x, SPAWN_POINT.y, 1.0)),
        LocomotionBundle::new(controller),
        Collider::cuboid(PLAYER_HALF_WIDTH, PLAYER_HALF_HEIGHT),
        CollisionGroups::new(Group::from_bits_truncate(PLAYER_LAYER), Group::ALL),
        Friction {
            coefficient: 0.0,
            combine_rule: CoefficientCombineRule::Min,
        },
        Player {},
    )).with_children(|parent| {
        parent.spawn((
            SpriteBundle {
                sprite: Sprite {
                    color: state_color(MovementState::Grounded),
                    custom_size: Some(Vec2::new(PLAYER_HALF_WIDTH * 2.0, PLAYER_HALF_HEIGHT * 2.0)),
                    ..default()
                },
                ..default()
            },
            PlayerVisual {},
        ));

        for kind in ProbeKind::ALL {
            let offset = probe_offset(kind);

            parent.spawn((
                TransformBundle::from_transform(Transform::from_xyz(offset.x, offset.y, 0.0)),
                ContactProbe::new(kind),
            ));
        }
    }).id();

    commands.spawn((
        Camera2dBundle::default(),
        CameraFollower {
            target: player,
            y_offset: settings.camera.y_offset,
        },
    ));
}

pub fn tint_on_state_change(
    mut state_changed: EventReader<MovementStateChanged>,
    q_children: Query<&Children>,
    mut q_sprites: Query<&mut Sprite, With<PlayerVisual>>,
) {
    for event in state_changed.iter() {
        let Ok(children) = q_children.get(event.entity) else {
            continue;
        };

        for &child in children.iter() {
            if let Ok(mut sprite) = q_sprites.get_mut(child) {
                sprite.color = state_color(event.to);
            }
        }
    }
}
