use bevy::{prelude::{Component, ReflectComponent}, reflect::Reflect};
use bevy_inspector_egui::{InspectorOptions, prelude::ReflectInspectorOptions};

/// Input snapshot read once per fixed tick.
///
/// `horizontal` is overwritten every frame by the input systems, `jump_pressed`
/// is latched on the press edge and cleared by the tick that consumes it.
#[derive(Component, InspectorOptions, Debug, Default, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component, InspectorOptions)]
pub struct MoveInput {
    #[inspector(min = -1.0, max = 1.0)]
    pub horizontal: f32,
    pub jump_pressed: bool,
}

impl MoveInput {
    /// Horizontal input clamped to [-1, 1]. NaN reads as no input.
    pub fn axis(&self) -> f32 {
        if self.horizontal.is_nan() {
            return 0.0;
        }

        self.horizontal.clamp(-1.0, 1.0)
    }

    /// Returns the latched jump press and clears it.
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_pressed)
    }
}
