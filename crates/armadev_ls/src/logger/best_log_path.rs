use std::path::PathBuf;

/// Platform log directory: next to the executable in debug builds,
/// otherwise the OS-conventional per-user data location.
pub fn get_best_log_dir() -> PathBuf {
    if cfg!(debug_assertions) {
        return exe_relative_logs();
    }

    if cfg!(target_os = "windows") {
        match std::env::var("LOCALAPPDATA") {
            Ok(local_app_data) => PathBuf::from(local_app_data)
                .join("armadev_ls")
                .join("logs"),
            Err(_) => exe_relative_logs(),
        }
    } else if let Ok(xdg_data_home) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg_data_home).join("armadev_ls").join("logs")
    } else if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("armadev_ls")
            .join("logs")
    } else {
        exe_relative_logs()
    }
}

fn exe_relative_logs() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe_path| exe_path.parent().map(|dir| dir.join("logs")))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
