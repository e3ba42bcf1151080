use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use wc_util::constants::{
    CAMERA_Y_OFFSET, GROUND_CHECK_RADIUS, GROUND_LAYER, PLAYER_GRAVITY_SCALE, PLAYER_JUMP_FORCE,
    PLAYER_MOVE_SPEED, PLAYER_WALL_JUMP_FORCE, PLAYER_WALL_JUMP_LOCK_TIME, PLAYER_WALL_SLIDE_SPEED,
    WALL_CHECK_RADIUS, WALL_LAYER,
};

use crate::error::SetupError;

/// Tuning for a single locomotion controller. Speeds are in world units per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    pub speed: f32,
    pub jump_force: f32,
    /// Fastest allowed descent while sliding down a wall.
    pub wall_slide_speed: f32,
    pub wall_jump_force: f32,
    pub wall_jump_lock_time: f32,
    pub gravity_scale: f32,

    pub wall_check_radius: f32,
    pub wall_layers: u32,
    pub ground_check_radius: f32,
    pub ground_layers: u32,

    /// Whether facing may flip while pressed against a wall mid-slide.
    pub flip_while_wall_sliding: bool,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            speed: PLAYER_MOVE_SPEED,
            jump_force: PLAYER_JUMP_FORCE,
            wall_slide_speed: PLAYER_WALL_SLIDE_SPEED,
            wall_jump_force: PLAYER_WALL_JUMP_FORCE,
            wall_jump_lock_time: PLAYER_WALL_JUMP_LOCK_TIME,
            gravity_scale: PLAYER_GRAVITY_SCALE,
            wall_check_radius: WALL_CHECK_RADIUS,
            wall_layers: WALL_LAYER,
            ground_check_radius: GROUND_CHECK_RADIUS,
            ground_layers: GROUND_LAYER,
            flip_while_wall_sliding: true,
        }
    }
}

impl LocomotionConfig {
    pub fn validate(&self) -> Result<(), SetupError> {
        let non_negative = [
            ("speed", self.speed),
            ("jump_force", self.jump_force),
            ("wall_slide_speed", self.wall_slide_speed),
            ("wall_jump_force", self.wall_jump_force),
            ("wall_jump_lock_time", self.wall_jump_lock_time),
        ];

        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SetupError::InvalidConfig(format!("{name} must be a finite non-negative number, got {value}")));
            }
        }

        let positive = [
            ("gravity_scale", self.gravity_scale),
            ("wall_check_radius", self.wall_check_radius),
            ("ground_check_radius", self.ground_check_radius),
        ];

        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SetupError::InvalidConfig(format!("{name} must be a finite positive number, got {value}")));
            }
        }

        if self.wall_layers == 0 {
            return Err(SetupError::InvalidConfig("wall_layers is empty".to_string()));
        }

        if self.ground_layers == 0 {
            return Err(SetupError::InvalidConfig("ground_layers is empty".to_string()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub y_offset: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { y_offset: CAMERA_Y_OFFSET }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Trace contact state on every fixed tick.
    pub log_contacts: bool,
    pub draw_probes: bool,
    pub physics_render: bool,
}

/// Everything read from the settings file at startup.
#[derive(Resource, Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub locomotion: LocomotionConfig,
    pub camera: CameraConfig,
    pub debug: DebugConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(LocomotionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_numbers() {
        let config = LocomotionConfig { speed: f32::NAN, ..Default::default() };
        assert!(matches!(config.validate(), Err(SetupError::InvalidConfig(_))));

        let config = LocomotionConfig { wall_slide_speed: -1.0, ..Default::default() };
        assert!(matches!(config.validate(), Err(SetupError::InvalidConfig(_))));

        let config = LocomotionConfig { ground_check_radius: 0.0, ..Default::default() };
        assert!(matches!(config.validate(), Err(SetupError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_empty_layer_masks() {
        let config = LocomotionConfig { wall_layers: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(SetupError::InvalidConfig(_))));
    }
}
