// src/utils/io.rs
use std::path::PathBuf;

/// Default location of the persisted settings file
pub fn default_settings_path() -> Option<PathBuf> {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "passgen", "passgen") {
        let config_dir = proj_dirs.config_dir();

        // Create the directory if it doesn't exist
        if !config_dir.exists() {
            if let Err(e) = std::fs::create_dir_all(config_dir) {
                log::error!("Failed to create config directory: {}", e);
                return None;
            }
        }

        Some(config_dir.join("settings.json"))
    } else {
        log::error!("Could not determine config directory");
        None
    }
}
