use bevy::prelude::{Component, Entity};

/// Keeps the camera centered horizontally on `target`, `y_offset` above it.
#[derive(Component, Debug, Clone, Copy)]
pub struct CameraFollower {
    pub target: Entity,
    pub y_offset: f32,
}
