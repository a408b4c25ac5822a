use std::path::PathBuf;

/// Returns the desk root directory path.
///
/// Resolution order:
/// 1. `TICKETDESK_ROOT` environment variable (if set)
/// 2. Current working directory + `.ticketdesk`
pub fn desk_root() -> PathBuf {
    if let Ok(root) = std::env::var("TICKETDESK_ROOT") {
        PathBuf::from(root)
    } else {
        PathBuf::from(".ticketdesk")
    }
}

/// Returns the path to the configuration file.
pub fn config_path() -> PathBuf {
    desk_root().join("config.yaml")
}
