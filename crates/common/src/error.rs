use bevy::{log::error, prelude::{Entity, In}};
use thiserror::Error;

use crate::components::probe::ProbeKind;

/// Problems found while wiring up a character or camera. They are reported once
/// at bind time and the offending component is switched off.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SetupError {
    #[error("entity {entity:?} has a locomotion controller but no {kind} probe child")]
    MissingProbe { entity: Entity, kind: ProbeKind },

    #[error("entity {entity:?} has more than one {kind} probe child")]
    DuplicateProbe { entity: Entity, kind: ProbeKind },

    #[error("entity {0:?} has a locomotion controller but no rigid body velocity")]
    MissingRigidBody(Entity),

    #[error("camera {camera:?} follows {target:?}, which does not exist or has no transform")]
    MissingTarget { camera: Entity, target: Entity },

    #[error("invalid locomotion config: {0}")]
    InvalidConfig(String),

    #[error("failed to load settings: {0}")]
    Settings(String),
}

/// Pipe target for setup systems: every error is logged, nothing is retried.
pub fn report_setup_errors(In(errors): In<Vec<SetupError>>) {
    for err in errors {
        error!("{err}");
    }
}
