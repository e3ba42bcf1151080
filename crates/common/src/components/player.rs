use bevy::{prelude::{Component, ReflectComponent}, reflect::Reflect};
use bevy_inspector_egui::{InspectorOptions, prelude::ReflectInspectorOptions};

#[derive(Component, InspectorOptions, Default, Reflect)]
#[reflect(Component, InspectorOptions)]
pub struct Player {}

/// The sprite child of the player. Facing flips mirror this entity only, so the
/// probes under the body keep their sides.
#[derive(Component, Debug, Default)]
pub struct PlayerVisual {}
