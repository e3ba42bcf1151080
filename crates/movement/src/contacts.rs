use bevy::{log::debug, prelude::{Entity, GlobalTransform, Query, Res, Vec2, With}};
use bevy_rapier2d::prelude::{Collider, CollisionGroups, Group, QueryFilter, RapierContext};
use wc_common::{
    components::{contacts::Contacts, probe::{ContactProbe, ProbeKind}},
    config::{GameSettings, LocomotionConfig},
};

use crate::{controller::LocomotionController, setup::ProbeSet};

/// Circle-vs-layer overlap test against the physics world.
pub trait OverlapQuery {
    /// True when any collider on `layers` overlaps the circle. Colliders attached
    /// to `exclude` are ignored so a body never detects itself.
    fn overlaps_circle(&self, center: Vec2, radius: f32, layers: u32, exclude: Entity) -> bool;
}

impl OverlapQuery for RapierContext {
    fn overlaps_circle(&self, center: Vec2, radius: f32, layers: u32, exclude: Entity) -> bool {
        let shape = Collider::ball(radius);
        let filter = QueryFilter::new()
            .exclude_sensors()
            .exclude_rigid_body(exclude)
            .groups(CollisionGroups::new(Group::ALL, Group::from_bits_truncate(layers)));

        self.intersection_with_shape(center, 0.0, &shape, filter).is_some()
    }
}

/// World positions of a body's three probes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbePoints {
    pub ground: Vec2,
    pub wall_left: Vec2,
    pub wall_right: Vec2,
}

pub fn probe_contacts(
    world: &impl OverlapQuery,
    body: Entity,
    points: ProbePoints,
    config: &LocomotionConfig,
) -> Contacts {
    Contacts {
        wall_left: world.overlaps_circle(points.wall_left, config.wall_check_radius, config.wall_layers, body),
        wall_right: world.overlaps_circle(points.wall_right, config.wall_check_radius, config.wall_layers, body),
        grounded: world.overlaps_circle(points.ground, config.ground_check_radius, config.ground_layers, body),
    }
}

pub fn detect_contacts(
    mut q_bodies: Query<(Entity, &LocomotionController, &ProbeSet, &mut Contacts)>,
    q_probes: Query<&GlobalTransform, With<ContactProbe>>,
    rapier_context: Res<RapierContext>,
    settings: Res<GameSettings>,
) {
    for (entity, controller, probe_set, mut contacts) in q_bodies.iter_mut() {
        let position = |kind: ProbeKind| {
            q_probes
                .get(probe_set.get(kind))
                .map(|transform| transform.translation().truncate())
        };

        // Probes were checked at bind time, one can only vanish if it was despawned by hand.
        let (Ok(ground), Ok(wall_left), Ok(wall_right)) = (
            position(ProbeKind::Ground),
            position(ProbeKind::WallLeft),
            position(ProbeKind::WallRight),
        ) else {
            continue;
        };

        let points = ProbePoints { ground, wall_left, wall_right };
        *contacts = probe_contacts(&*rapier_context, entity, points, controller.config());

        if settings.debug.log_contacts {
            debug!(
                "{entity:?} grounded: {}, wall left: {}, wall right: {}",
                contacts.grounded, contacts.wall_left, contacts.wall_right,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Axis-aligned boxes tagged with a layer, standing in for the physics world.
    struct BoxWorld {
        boxes: Vec<(Vec2, Vec2, u32)>,
    }

    impl OverlapQuery for BoxWorld {
        fn overlaps_circle(&self, center: Vec2, radius: f32, layers: u32, _exclude: Entity) -> bool {
            self.boxes.iter().any(|(min, max, layer)| {
                let closest = center.clamp(*min, *max);
                layer & layers != 0 && closest.distance(center) <= radius
            })
        }
    }

    fn points_at(position: Vec2) -> ProbePoints {
        ProbePoints {
            ground: position + Vec2::new(0.0, -0.5),
            wall_left: position + Vec2::new(-0.4, 0.0),
            wall_right: position + Vec2::new(0.4, 0.0),
        }
    }

    fn level() -> BoxWorld {
        let config = LocomotionConfig::default();

        BoxWorld {
            boxes: vec![
                (Vec2::new(-10.0, -1.0), Vec2::new(10.0, 0.0), config.ground_layers),
                (Vec2::new(-11.0, 0.0), Vec2::new(-10.0, 20.0), config.wall_layers),
                (Vec2::new(10.0, 0.0), Vec2::new(11.0, 20.0), config.wall_layers),
            ],
        }
    }

    #[test]
    fn standing_on_the_floor() {
        let contacts = probe_contacts(&level(), Entity::PLACEHOLDER, points_at(Vec2::new(0.0, 0.5)), &LocomotionConfig::default());

        assert_eq!(contacts, Contacts { grounded: true, wall_left: false, wall_right: false });
    }

    #[test]
    fn hanging_next_to_each_wall() {
        let config = LocomotionConfig::default();

        let contacts = probe_contacts(&level(), Entity::PLACEHOLDER, points_at(Vec2::new(-9.5, 5.0)), &config);
        assert_eq!(contacts, Contacts { grounded: false, wall_left: true, wall_right: false });

        let contacts = probe_contacts(&level(), Entity::PLACEHOLDER, points_at(Vec2::new(9.5, 5.0)), &config);
        assert_eq!(contacts, Contacts { grounded: false, wall_left: false, wall_right: true });
    }

    #[test]
    fn layers_are_respected() {
        let config = LocomotionConfig::default();
        let world = BoxWorld {
            // Floor only on the wall layer: it must not count as ground.
            boxes: vec![(Vec2::new(-10.0, -1.0), Vec2::new(10.0, 0.0), config.wall_layers)],
        };

        let contacts = probe_contacts(&world, Entity::PLACEHOLDER, points_at(Vec2::new(0.0, 0.5)), &config);
        assert!(!contacts.grounded);
    }

    mod rapier {
        use bevy::prelude::{App, GlobalTransform, HierarchyPlugin, MinimalPlugins, Transform, TransformBundle, TransformPlugin};
        use bevy_rapier2d::prelude::{GravityScale, NoUserData, RapierPhysicsPlugin, RigidBody, Sensor};
        use wc_util::constants::WALL_LAYER;

        use super::*;

        fn placed(x: f32, y: f32) -> TransformBundle {
            let local = Transform::from_xyz(x, y, 0.0);
            TransformBundle { local, global: GlobalTransform::from(local) }
        }

        struct Scene {
            app: App,
            body: Entity,
        }

        /// A solid wall right of the body and a sensor wall left of it, both on the
        /// wall layer.
        fn scene() -> Scene {
            let mut app = App::new();
            app.add_plugins((MinimalPlugins, TransformPlugin, HierarchyPlugin, RapierPhysicsPlugin::<NoUserData>::default()));

            let walls = CollisionGroups::new(Group::from_bits_truncate(WALL_LAYER), Group::ALL);
            app.world.spawn((placed(2.0, 0.0), RigidBody::Fixed, Collider::cuboid(0.5, 2.0), walls));
            app.world.spawn((placed(-2.0, 0.0), RigidBody::Fixed, Collider::cuboid(0.5, 2.0), walls, Sensor));

            let body = app.world.spawn((placed(0.0, 0.0), RigidBody::Dynamic, Collider::ball(0.5), GravityScale(0.0))).id();

            app.update();
            app.update();

            Scene { app, body }
        }

        #[test]
        fn wall_is_found_on_its_layer_only() {
            let Scene { app, body } = scene();
            let context = app.world.resource::<RapierContext>();
            let config = LocomotionConfig::default();

            assert!(context.overlaps_circle(Vec2::new(1.4, 0.0), 0.2, config.wall_layers, body));
            assert!(!context.overlaps_circle(Vec2::new(1.4, 0.0), 0.2, config.ground_layers, body));
        }

        #[test]
        fn own_collider_is_ignored() {
            let Scene { app, body } = scene();
            let context = app.world.resource::<RapierContext>();

            assert!(!context.overlaps_circle(Vec2::ZERO, 0.2, u32::MAX, body));
            assert!(context.overlaps_circle(Vec2::ZERO, 0.2, u32::MAX, Entity::PLACEHOLDER));
        }

        #[test]
        fn sensors_are_ignored() {
            let Scene { app, body } = scene();
            let context = app.world.resource::<RapierContext>();

            assert!(!context.overlaps_circle(Vec2::new(-1.4, 0.0), 0.2, LocomotionConfig::default().wall_layers, body));
        }
    }
}
