use bevy::prelude::{
    Axis, Gamepad, GamepadAxis, GamepadAxisType, GamepadButton, GamepadButtonType, Gamepads, Input,
    KeyCode, Query, Res, With,
};
use wc_common::components::{move_input::MoveInput, player::Player};

const LEFT_KEYS: [KeyCode; 2] = [KeyCode::A, KeyCode::Left];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::D, KeyCode::Right];
const JUMP_KEYS: [KeyCode; 3] = [KeyCode::Space, KeyCode::W, KeyCode::Up];

/// Writes the keyboard state into the player's input snapshot. The jump press is
/// only ever set here, the fixed tick clears it.
pub fn read_keyboard_input(
    mut q_player: Query<&mut MoveInput, With<Player>>,
    keyboard_input: Res<Input<KeyCode>>,
) {
    let left = keyboard_input.any_pressed(LEFT_KEYS);
    let right = keyboard_input.any_pressed(RIGHT_KEYS);
    let jump = keyboard_input.any_just_pressed(JUMP_KEYS);

    let horizontal = match (left, right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    };

    for mut input in q_player.iter_mut() {
        input.horizontal = horizontal;

        if jump {
            input.jump_pressed = true;
        }
    }
}

/// Runs after the keyboard: a deflected stick overrides the keys.
pub fn read_gamepad_input(
    mut q_player: Query<&mut MoveInput, With<Player>>,
    gamepads: Res<Gamepads>,
    axes: Res<Axis<GamepadAxis>>,
    buttons: Res<Input<GamepadButton>>,
) {
    for gamepad in gamepads.iter() {
        let stick = stick_x(&axes, gamepad);
        let jump = buttons.just_pressed(GamepadButton::new(gamepad, GamepadButtonType::South));

        for mut input in q_player.iter_mut() {
            if stick != 0.0 {
                input.horizontal = stick;
            }

            if jump {
                input.jump_pressed = true;
            }
        }
    }
}

fn stick_x(axes: &Axis<GamepadAxis>, gamepad: Gamepad) -> f32 {
    axes.get(GamepadAxis::new(gamepad, GamepadAxisType::LeftStickX))
        .unwrap_or(0.0)
}
