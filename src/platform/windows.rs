// linkstash platform paths for Windows
// Config and data: %APPDATA%/Linkstash

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for linkstash on Windows.
pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Temp"));
    PathBuf::from(appdata).join("Linkstash")
}

/// Returns the data directory for linkstash on Windows.
/// Same location as the config directory, per platform convention.
pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}
