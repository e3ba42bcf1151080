use bevy::{
    log::debug,
    prelude::{Color, EventReader, Gizmos, GlobalTransform, Query, Res},
};
use wc_common::{
    components::{contacts::Contacts, probe::ProbeKind},
    config::GameSettings,
    events::MovementStateChanged,
};

use crate::{controller::LocomotionController, setup::ProbeSet};

pub fn probes_enabled(settings: Res<GameSettings>) -> bool {
    settings.debug.draw_probes
}

/// Overlay of every probe circle, red while it touches something.
pub fn draw_probes(
    mut gizmos: Gizmos,
    q_bodies: Query<(&LocomotionController, &ProbeSet, &Contacts)>,
    q_probes: Query<&GlobalTransform>,
) {
    for (controller, probe_set, contacts) in q_bodies.iter() {
        let config = controller.config();

        for kind in ProbeKind::ALL {
            let Ok(transform) = q_probes.get(probe_set.get(kind)) else {
                continue;
            };

            let (radius, touching) = match kind {
                ProbeKind::Ground => (config.ground_check_radius, contacts.grounded),
                ProbeKind::WallLeft => (config.wall_check_radius, contacts.wall_left),
                ProbeKind::WallRight => (config.wall_check_radius, contacts.wall_right),
            };

            let color = if touching { Color::RED } else { Color::BLUE };
            gizmos.circle_2d(transform.translation().truncate(), radius, color);
        }
    }
}

pub fn log_state_changes(
    mut state_changed: EventReader<MovementStateChanged>,
) {
    for event in state_changed.iter() {
        debug!("{:?}: {:?} -> {:?}", event.entity, event.from, event.to);
    }
}
