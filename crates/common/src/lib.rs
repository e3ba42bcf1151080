use bevy::prelude::{Plugin, App};
use components::{contacts::Contacts, move_input::MoveInput, player::Player};
use events::MovementStateChanged;

pub mod components;
pub mod config;
pub mod error;
pub mod events;

#[derive(Debug, Default)]
pub struct CommonPlugin {}

impl Plugin for CommonPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_event::<MovementStateChanged>()
            .register_type::<Contacts>()
            .register_type::<MoveInput>()
            .register_type::<Player>();
    }
}
