use bevy::{prelude::{Plugin, App, KeyCode, Update, IntoSystemConfigs}, input::common_conditions::input_toggle_active};
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use camera::CameraPlugin;
use input::{read_keyboard_input, read_gamepad_input};

use self::physics::PhysicsPlugin;

pub mod camera;
pub mod input;
pub mod physics;

#[derive(Debug, Default)]
pub struct CorePlugin {
    pub debug_render: bool,
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .add_plugins(
                WorldInspectorPlugin::default().run_if(input_toggle_active(false, KeyCode::Grave)),
            )
            .add_plugins(CameraPlugin {})
            .add_plugins(PhysicsPlugin { debug_render: self.debug_render })
            .add_systems(Update, (read_keyboard_input, read_gamepad_input).chain());
    }
}
