// linkstash platform paths for macOS
// Config and data: ~/Library/Application Support/Linkstash

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for linkstash on macOS.
pub fn get_config_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
        .join("Library")
        .join("Application Support")
        .join("Linkstash")
}

/// Returns the data directory for linkstash on macOS.
/// Same location as the config directory, per platform convention.
pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}
