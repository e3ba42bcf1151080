use bevy::prelude::{Entity, Event};

use crate::components::movement_state::MovementState;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct MovementStateChanged {
    pub entity: Entity,
    pub from: MovementState,
    pub to: MovementState,
}
