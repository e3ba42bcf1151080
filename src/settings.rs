use std::path::{Path, PathBuf};

use bevy_persistent::prelude::*;
use wc_common::{config::GameSettings, error::SetupError};
use wc_util::constants::{SETTINGS_DIR_NAME, SETTINGS_FILE_NAME};

fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(SETTINGS_DIR_NAME)
        .join(SETTINGS_FILE_NAME)
}

/// Reads the settings file from the user config dir.
pub fn load_settings() -> Result<Persistent<GameSettings>, SetupError> {
    load_settings_from(settings_path())
}

/// Reads the settings file, writing the defaults first if it does not exist yet.
pub fn load_settings_from(path: impl AsRef<Path>) -> Result<Persistent<GameSettings>, SetupError> {
    Persistent::<GameSettings>::builder()
        .name("game settings")
        .format(StorageFormat::Json)
        .path(path.as_ref())
        .default(GameSettings::default())
        .build()
        .map_err(|err| SetupError::Settings(err.to_string()))
}
