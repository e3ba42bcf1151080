use bevy::{
    log::warn,
    prelude::{Added, Camera, ClearColor, Color, Commands, Entity, Plugin, App, PostUpdate, Query, Transform, Update, Vec3, With, Without, IntoSystem, IntoSystemConfigs},
    transform::TransformSystem,
    window::{PrimaryWindow, Window},
};
use wc_common::{
    components::camera_follower::CameraFollower,
    error::{report_setup_errors, SetupError},
};
use wc_util::constants::{VIEW_HEIGHT, VIEW_WIDTH};

/// Camera position that centers `target` horizontally with `y_offset` of headroom.
/// Depth is never touched.
pub fn follow_position(camera: Vec3, target: Vec3, y_offset: f32) -> Vec3 {
    Vec3::new(target.x, target.y + y_offset, camera.z)
}

pub fn validate_followers(
    mut commands: Commands,
    q_followers: Query<(Entity, &CameraFollower), Added<CameraFollower>>,
    q_targets: Query<&Transform, Without<CameraFollower>>,
) -> Vec<SetupError> {
    let mut errors = Vec::new();

    for (camera, follower) in q_followers.iter() {
        if q_targets.get(follower.target).is_err() {
            commands.entity(camera).remove::<CameraFollower>();
            errors.push(SetupError::MissingTarget { camera, target: follower.target });
        }
    }

    errors
}

/// Late update: runs after rapier wrote this frame's positions back.
pub fn follow_target(
    mut commands: Commands,
    mut q_followers: Query<(Entity, &mut Transform, &CameraFollower)>,
    q_targets: Query<&Transform, Without<CameraFollower>>,
) {
    for (camera, mut transform, follower) in q_followers.iter_mut() {
        let Ok(target) = q_targets.get(follower.target) else {
            warn!("camera {camera:?} lost its target {:?}, releasing it", follower.target);
            commands.entity(camera).remove::<CameraFollower>();
            continue;
        };

        transform.translation = follow_position(transform.translation, target.translation, follower.y_offset);
    }
}

pub fn auto_scale_sys(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<&mut Transform, With<Camera>>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };

    for mut transform in query.iter_mut() {
        let scale = (VIEW_HEIGHT / window.height()).max(VIEW_WIDTH / window.width());
        transform.scale = Vec3::new(scale, scale, 1.0);
    }
}

#[derive(Debug, Default)]
pub struct CameraPlugin {}

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(ClearColor(Color::rgb(0.09, 0.09, 0.12)))
            .add_systems(Update, (
                validate_followers.pipe(report_setup_errors),
                auto_scale_sys,
            ))
            // Rapier writes back in FixedUpdate, which always precedes PostUpdate.
            .add_systems(PostUpdate, follow_target.before(TransformSystem::TransformPropagate));
    }
}
