use bevy::{prelude::{App, default, ImagePlugin, PluginGroup, Startup, Update}, DefaultPlugins, window::{WindowPlugin, Window, WindowResolution, PresentMode}, time::fixed_timestep::FixedTime};
use bevy_framepace::{FramepacePlugin, FramepaceSettings, Limiter};
use level::spawn_level;
use player::{spawn_player, tint_on_state_change};
use settings::load_settings;
use wc_common::{CommonPlugin, error::SetupError};
use wc_core::CorePlugin;
use wc_movement::MovementPlugin;
use wc_util::constants::{WINDOW_TITLE, INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT, FIXED_TIMESTEP};

pub mod level;
pub mod player;
pub mod settings;

fn main() -> Result<(), SetupError> {
    let settings = load_settings()?.get().clone();
    settings.locomotion.validate()?;

    let mut app = App::new();

    // Settings go in first so plugins see the loaded values instead of defaults.
    app.insert_resource(settings.clone());

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
              title: WINDOW_TITLE.to_string(),
              resizable: true,
              resolution: WindowResolution::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT),
              present_mode: PresentMode::AutoVsync,
              ..default()
            }),
            ..default()
        }).set(ImagePlugin::default_nearest()))
        .add_plugins(FramepacePlugin)
        .add_plugins(CommonPlugin {})
        .add_plugins(CorePlugin { debug_render: settings.debug.physics_render })
        .add_plugins(MovementPlugin {})
        .insert_resource(FramepaceSettings {
            limiter: Limiter::from_framerate(60.0)
        })
        .insert_resource(FixedTime::new_from_secs(FIXED_TIMESTEP));

    app.add_systems(Startup, (spawn_level, spawn_player));
    app.add_systems(Update, tint_on_state_change);

    app.run();

    Ok(())
}
