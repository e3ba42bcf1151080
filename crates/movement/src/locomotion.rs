use bevy::{
    log::debug,
    prelude::{Children, Entity, EventWriter, Query, Res, Transform, With},
    time::fixed_timestep::FixedTime,
};
use bevy_rapier2d::prelude::Velocity;
use wc_common::{
    components::{contacts::Contacts, move_input::MoveInput, player::PlayerVisual},
    events::MovementStateChanged,
};

use crate::{controller::{JumpOutcome, LocomotionController}, setup::ProbeSet};

/// Fixed-tick driver: step the controller on the fresh contacts, then spend a
/// latched jump press against the state that step produced.
pub fn drive_locomotion(
    mut q_bodies: Query<(Entity, &mut LocomotionController, &mut Velocity, &mut MoveInput, &Contacts, Option<&Children>), With<ProbeSet>>,
    mut q_visuals: Query<&mut Transform, With<PlayerVisual>>,
    mut state_changed: EventWriter<MovementStateChanged>,
    fixed_time: Res<FixedTime>,
) {
    let dt = fixed_time.period.as_secs_f32();

    for (entity, mut controller, mut velocity, mut input, contacts, children) in q_bodies.iter_mut() {
        let report = controller.step(*contacts, input.axis(), &mut velocity.linvel, dt);

        if report.flipped {
            for &child in children.into_iter().flat_map(|children| children.iter()) {
                if let Ok(mut transform) = q_visuals.get_mut(child) {
                    transform.scale.x = -transform.scale.x;
                }
            }
        }

        if input.take_jump() {
            match controller.jump(*contacts, &mut velocity.linvel) {
                JumpOutcome::LockedOut => debug!("{entity:?} wall-jump refused, lockout still running"),
                JumpOutcome::Ignored => debug!("{entity:?} jump ignored while airborne"),
                outcome => debug!("{entity:?} jumped: {outcome:?}"),
            }
        }

        // The jump can move the state on again after the step.
        let (from, to) = (report.previous, controller.state());
        if from != to {
            state_changed.send(MovementStateChanged { entity, from, to });
        }
    }
}
