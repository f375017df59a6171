// Filesystem locations for config and log files.
// Resolved per platform through ProjectDirs.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "EVENTDESK_CONFIG";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "eventdesk")
}

/// Base config directory (~/.config/eventdesk on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Base data directory, where the log file lives.
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Path to the config file, honoring the `EVENTDESK_CONFIG` override.
pub fn config_path() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => config_dir().map(|dir| dir.join("config.json")),
    }
}

/// Path to the application log file.
pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("eventdesk.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_is_inside_data_dir() {
        if let (Some(log), Some(data)) = (log_path(), data_dir()) {
            assert!(log.starts_with(&data));
            assert_eq!(log.file_name().unwrap(), "eventdesk.log");
        }
    }

    #[test]
    fn test_config_dir_ends_with_app_name() {
        if let Some(dir) = config_dir() {
            assert!(dir.to_string_lossy().contains("eventdesk"));
        }
    }
}
