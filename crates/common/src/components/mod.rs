pub mod camera_follower;
pub mod contacts;
pub mod move_input;
pub mod movement_state;
pub mod player;
pub mod probe;
