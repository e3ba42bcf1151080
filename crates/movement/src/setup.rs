use bevy::{log::info, prelude::{Bundle, Children, Commands, Component, Entity, Query, With, Without}};
use bevy_rapier2d::prelude::{GravityScale, LockedAxes, RigidBody, Velocity};
use wc_common::{
    components::{contacts::Contacts, move_input::MoveInput, probe::{ContactProbe, ProbeKind}},
    error::SetupError,
};

use crate::controller::LocomotionController;

/// The probe children of a locomotion body, resolved once at bind time.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ProbeSet {
    pub ground: Entity,
    pub wall_left: Entity,
    pub wall_right: Entity,
}

impl ProbeSet {
    /// Requires exactly one probe of every kind among `probes`.
    pub fn resolve(
        owner: Entity,
        probes: impl IntoIterator<Item = (Entity, ProbeKind)>,
    ) -> Result<ProbeSet, SetupError> {
        let mut ground = None;
        let mut wall_left = None;
        let mut wall_right = None;

        for (entity, kind) in probes {
            let slot = match kind {
                ProbeKind::Ground => &mut ground,
                ProbeKind::WallLeft => &mut wall_left,
                ProbeKind::WallRight => &mut wall_right,
            };

            if slot.replace(entity).is_some() {
                return Err(SetupError::DuplicateProbe { entity: owner, kind });
            }
        }

        let missing = |kind| SetupError::MissingProbe { entity: owner, kind };

        Ok(ProbeSet {
            ground: ground.ok_or_else(|| missing(ProbeKind::Ground))?,
            wall_left: wall_left.ok_or_else(|| missing(ProbeKind::WallLeft))?,
            wall_right: wall_right.ok_or_else(|| missing(ProbeKind::WallRight))?,
        })
    }

    pub fn get(&self, kind: ProbeKind) -> Entity {
        match kind {
            ProbeKind::Ground => self.ground,
            ProbeKind::WallLeft => self.wall_left,
            ProbeKind::WallRight => self.wall_right,
        }
    }
}

/// A dynamic body driven by a locomotion controller. Probes and the visual are
/// spawned as children by the caller.
#[derive(Bundle)]
pub struct LocomotionBundle {
    pub controller: LocomotionController,
    pub contacts: Contacts,
    pub input: MoveInput,
    pub rigid_body: RigidBody,
    pub velocity: Velocity,
    pub gravity_scale: GravityScale,
    pub locked_axes: LockedAxes,
}

impl LocomotionBundle {
    pub fn new(controller: LocomotionController) -> Self {
        let gravity_scale = GravityScale(controller.config().gravity_scale);

        Self {
            controller,
            contacts: Contacts::default(),
            input: MoveInput::default(),
            rigid_body: RigidBody::Dynamic,
            velocity: Velocity::zero(),
            gravity_scale,
            locked_axes: LockedAxes::ROTATION_LOCKED,
        }
    }
}

/// Resolves probes for new controllers. A controller that fails is removed so it
/// never ticks, and the error is handed to the pipe.
pub fn bind_probes(
    mut commands: Commands,
    q_unbound: Query<(Entity, Option<&Children>, Option<&Velocity>), (With<LocomotionController>, Without<ProbeSet>)>,
    q_probes: Query<&ContactProbe>,
) -> Vec<SetupError> {
    let mut errors = Vec::new();

    for (entity, children, velocity) in q_unbound.iter() {
        let result = if velocity.is_none() {
            Err(SetupError::MissingRigidBody(entity))
        } else {
            let probes = children
                .into_iter()
                .flat_map(|children| children.iter())
                .filter_map(|&child| q_probes.get(child).ok().map(|probe| (child, probe.kind)));

            ProbeSet::resolve(entity, probes)
        };

        match result {
            Ok(probe_set) => {
                info!("locomotion controller bound on {entity:?}");
                commands.entity(entity).insert(probe_set);
            }
            Err(err) => {
                commands.entity(entity).remove::<LocomotionController>();
                errors.push(err);
            }
        }
    }

    errors
}
