use bevy::prelude::{Plugin, App, Update, FixedUpdate, IntoSystem, IntoSystemConfigs};
use bevy_rapier2d::prelude::PhysicsSet;
use contacts::detect_contacts;
use debug::{draw_probes, probes_enabled, log_state_changes};
use locomotion::drive_locomotion;
use setup::bind_probes;
use wc_common::{config::GameSettings, error::report_setup_errors};

pub mod contacts;
pub mod controller;
pub mod debug;
pub mod locomotion;
pub mod setup;

#[derive(Debug, Default)]
pub struct MovementPlugin {}

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<GameSettings>()
            .add_systems(Update, (
                bind_probes.pipe(report_setup_errors),
                log_state_changes,
                draw_probes.run_if(probes_enabled),
            ))
            .add_systems(FixedUpdate, (
                detect_contacts,
                drive_locomotion,
            ).chain().before(PhysicsSet::SyncBackend));
    }
}
