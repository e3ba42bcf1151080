use bevy::prelude::{Plugin, App, Vec2, FixedUpdate, IntoSystemConfigs, IntoSystemSetConfigs, default};
use bevy_rapier2d::{prelude::{RapierPhysicsPlugin, NoUserData, RapierConfiguration, TimestepMode, PhysicsSet}, render::RapierDebugRenderPlugin};
use wc_util::constants::{FIXED_TIMESTEP, GRAVITY};

/// Rapier in meters: one world unit is one meter, gravity is plain earth gravity
/// and bodies scale it with their own `GravityScale`.
///
/// Rapier is stepped from `FixedUpdate`, so every fixed tick integrates exactly
/// one `FIXED_TIMESTEP` after the gameplay systems that ordered themselves
/// `before(PhysicsSet::SyncBackend)`.
#[derive(Debug, Default)]
pub struct PhysicsPlugin {
    pub debug_render: bool,
}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().with_default_system_setup(false))
            .insert_resource(RapierConfiguration {
                gravity: Vec2::new(0.0, -GRAVITY),
                timestep_mode: TimestepMode::Fixed {
                    dt: FIXED_TIMESTEP,
                    substeps: 1,
                },
                ..default()
            })
            .configure_sets(FixedUpdate, (
                PhysicsSet::SyncBackend,
                PhysicsSet::StepSimulation,
                PhysicsSet::Writeback,
            ).chain())
            .add_systems(FixedUpdate, (
                RapierPhysicsPlugin::<NoUserData>::get_systems(PhysicsSet::SyncBackend)
                    .in_set(PhysicsSet::SyncBackend),
                RapierPhysicsPlugin::<NoUserData>::get_systems(PhysicsSet::StepSimulation)
                    .in_set(PhysicsSet::StepSimulation),
                RapierPhysicsPlugin::<NoUserData>::get_systems(PhysicsSet::Writeback)
                    .in_set(PhysicsSet::Writeback),
            ));

        if self.debug_render {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::prelude::{Entity, HierarchyPlugin, MinimalPlugins, PostUpdate, Transform, TransformBundle, TransformPlugin};
    use bevy_rapier2d::prelude::{Collider, GravityScale, RigidBody, Velocity};

    use super::*;

    const SPEED: f32 = 6.0;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, TransformPlugin, HierarchyPlugin, PhysicsPlugin::default()));
        app
    }

    fn spawn_body(app: &mut App) -> Entity {
        app.world.spawn((
            TransformBundle::default(),
            RigidBody::Dynamic,
            Collider::ball(0.5),
            GravityScale(0.0),
            Velocity::linear(Vec2::new(SPEED, 0.0)),
        )).id()
    }

    fn x(app: &App, body: Entity) -> f32 {
        app.world.get::<Transform>(body).unwrap().translation.x
    }

    #[test]
    fn steps_once_per_fixed_tick() {
        let mut app = app();
        let body = spawn_body(&mut app);

        // Registers the body with rapier.
        app.world.run_schedule(FixedUpdate);
        let start = x(&app, body);

        for tick in 1..=5 {
            app.world.run_schedule(FixedUpdate);

            let expected = start + SPEED * FIXED_TIMESTEP * tick as f32;
            assert!((x(&app, body) - expected).abs() < 1e-4, "tick {tick}: {} != {expected}", x(&app, body));
        }
    }

    #[test]
    fn frame_schedules_never_step() {
        let mut app = app();
        let body = spawn_body(&mut app);

        app.world.run_schedule(FixedUpdate);
        let start = x(&app, body);

        for _ in 0..10 {
            app.world.run_schedule(PostUpdate);
        }

        assert_eq!(x(&app, body), start);
    }
}
