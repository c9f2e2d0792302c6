use std::path::PathBuf;
use std::sync::Arc;

use armadev_core::{Armadevrc, DocumentStore, load_configs};
use log::info;
use lsp_types::{Position, Uri};

use super::ClientId;

/// File name of the workspace configuration, at the workspace root (and
/// optionally in the user-global locations checked by [`load_armadev_config`]).
pub const ARMADEVRC_FILE_NAME: &str = ".armadevrc.json";

/// The document and cursor the user last touched, tracked from selection
/// notifications so commands invoked without arguments can fall back to it.
#[derive(Debug, Clone)]
pub struct ActiveSelection {
    pub uri: Uri,
    pub position: Position,
}

pub struct WorkspaceManager {
    pub client_id: ClientId,
    pub config: Arc<Armadevrc>,
    pub workspace_folders: Vec<PathBuf>,
    pub documents: DocumentStore,
    pub active_selection: Option<ActiveSelection>,
    pub watcher: Option<notify::RecommendedWatcher>,
}

impl WorkspaceManager {
    pub fn new() -> Self {
        Self {
            client_id: ClientId::default(),
            config: Arc::new(Armadevrc::default()),
            workspace_folders: Vec::new(),
            documents: DocumentStore::new(),
            active_selection: None,
            watcher: None,
        }
    }

    /// Re-reads the configuration chain; called when a watched
    /// `.armadevrc.json` changes.
    pub fn reload_config(&mut self) {
        let config_root = self.workspace_folders.first().cloned();
        self.config = load_armadev_config(config_root);
        info!("workspace configuration reloaded");
    }
}

impl Default for WorkspaceManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_armadev_config(config_root: Option<PathBuf>) -> Arc<Armadevrc> {
    // Config load priority.
    // * Global `<os-specific home-dir>/.armadevrc.json`.
    // * Global `<os-specific config-dir>/armadev_ls/.armadevrc.json`.
    // * Environment-specified config at the $ARMADEVLS_CONFIG path.
    // * Local `.armadevrc.json` at the workspace root.
    let mut config_files = Vec::new();

    if let Some(home_dir) = dirs::home_dir() {
        let global_rc_path = home_dir.join(ARMADEVRC_FILE_NAME);
        if global_rc_path.exists() {
            info!("load config from: {:?}", global_rc_path);
            config_files.push(global_rc_path);
        }
    }

    let config_dir = dirs::config_dir().map(|path| path.join("armadev_ls"));
    if let Some(config_dir) = config_dir {
        let global_rc_path = config_dir.join(ARMADEVRC_FILE_NAME);
        if global_rc_path.exists() {
            info!("load config from: {:?}", global_rc_path);
            config_files.push(global_rc_path);
        }
    }

    std::env::var("ARMADEVLS_CONFIG")
        .inspect(|path| {
            let config_path = PathBuf::from(path);
            if config_path.exists() {
                info!("load config from: {:?}", config_path);
                config_files.push(config_path);
            }
        })
        .ok();

    if let Some(config_root) = &config_root {
        let rc_path = config_root.join(ARMADEVRC_FILE_NAME);
        if rc_path.exists() {
            info!("load config from: {:?}", rc_path);
            config_files.push(rc_path);
        }
    }

    Arc::new(load_configs(config_files))
}
