use bevy::{prelude::{Component, ReflectComponent}, reflect::Reflect};
use bevy_inspector_egui::{InspectorOptions, prelude::ReflectInspectorOptions};

/// Ground and wall contact, recomputed from the probes every fixed tick.
#[derive(Component, InspectorOptions, Debug, Default, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component, InspectorOptions)]
pub struct Contacts {
    pub grounded: bool,
    pub wall_left: bool,
    pub wall_right: bool,
}

impl Contacts {
    pub fn touching_wall(&self) -> bool {
        self.wall_left || self.wall_right
    }
}
