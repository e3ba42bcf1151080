pub const WINDOW_TITLE: &str = "Wall Climber";
pub const INITIAL_WINDOW_WIDTH: f32 = 1024.0;
pub const INITIAL_WINDOW_HEIGHT: f32 = 768.0;

// World units are meters, the camera scales them to the window.
pub const VIEW_WIDTH: f32 = 24.0;
pub const VIEW_HEIGHT: f32 = 18.0;

pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
pub const GRAVITY: f32 = 9.81;

pub const PLAYER_MOVE_SPEED: f32 = 5.0;
pub const PLAYER_JUMP_FORCE: f32 = 12.0;
pub const PLAYER_WALL_SLIDE_SPEED: f32 = 1.0;
pub const PLAYER_WALL_JUMP_FORCE: f32 = 7.0;
pub const PLAYER_WALL_JUMP_LOCK_TIME: f32 = 0.2;
pub const PLAYER_GRAVITY_SCALE: f32 = 2.0;

pub const PLAYER_HALF_WIDTH: f32 = 0.4;
pub const PLAYER_HALF_HEIGHT: f32 = 0.5;

pub const WALL_CHECK_RADIUS: f32 = 0.2;
pub const GROUND_CHECK_RADIUS: f32 = 0.2;

pub const GROUND_LAYER: u32 = 1 << 0;
pub const WALL_LAYER: u32 = 1 << 1;
pub const PLAYER_LAYER: u32 = 1 << 2;

pub const CAMERA_Y_OFFSET: f32 = 3.0;

pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const SETTINGS_DIR_NAME: &str = "wall-climber";
