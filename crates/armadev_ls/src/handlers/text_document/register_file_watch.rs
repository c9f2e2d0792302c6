use armadev_core::file_path_to_uri;
use log::{info, warn};
use lsp_types::{
    ClientCapabilities, DidChangeWatchedFilesParams, DidChangeWatchedFilesRegistrationOptions,
    FileEvent, FileSystemWatcher, GlobPattern, Registration, RegistrationParams, WatchKind,
};
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use std::{sync::mpsc::channel, time::Duration};

use crate::{
    context::{ARMADEVRC_FILE_NAME, ClientProxy, ServerContextSnapshot},
    handlers::text_document::on_did_change_watched_files,
};

/// Watches workspace configuration files, preferring the client's own
/// watcher and falling back to a local fs watcher when the client has none.
pub async fn register_files_watch(
    context: ServerContextSnapshot,
    client_capabilities: &ClientCapabilities,
) {
    let lsp_client_can_watch_files = is_lsp_client_can_watch_files(client_capabilities);

    if lsp_client_can_watch_files {
        register_files_watch_use_lsp_client(context.client());
    } else {
        info!("use notify to watch files");
        register_files_watch_use_fsnotify(context).await;
    }
}

fn is_lsp_client_can_watch_files(client_capabilities: &ClientCapabilities) -> bool {
    client_capabilities
        .workspace
        .as_ref()
        .and_then(|ws| ws.did_change_watched_files.as_ref())
        .and_then(|d| d.dynamic_registration)
        .unwrap_or_default()
}

fn register_files_watch_use_lsp_client(client: &ClientProxy) {
    let options = DidChangeWatchedFilesRegistrationOptions {
        watchers: vec![FileSystemWatcher {
            glob_pattern: GlobPattern::String(format!("**/{}", ARMADEVRC_FILE_NAME)),
            kind: Some(WatchKind::Create | WatchKind::Change | WatchKind::Delete),
        }],
    };

    let registration = Registration {
        id: "armadev_watch_files".to_string(),
        method: "workspace/didChangeWatchedFiles".to_string(),
        register_options: serde_json::to_value(options).ok(),
    };
    client.dynamic_register_capability(RegistrationParams {
        registrations: vec![registration],
    });
}

async fn register_files_watch_use_fsnotify(context: ServerContextSnapshot) -> Option<()> {
    let (tx, rx) = channel();
    let config = Config::default().with_poll_interval(Duration::from_secs(5));
    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            if let Ok(event) = res {
                match tx.send(event) {
                    Ok(_) => {}
                    Err(e) => {
                        warn!("send notify event failed: {:?}", e);
                    }
                };
            };
        },
        config,
    ) {
        Ok(watcher) => watcher,
        Err(e) => {
            log::error!("create notify watcher failed: {:?}", e);
            return None;
        }
    };

    let mut workspace_manager = context.workspace_manager().write().await;
    for workspace in &workspace_manager.workspace_folders {
        if let Err(e) = watcher.watch(workspace, RecursiveMode::Recursive) {
            warn!("can not watch {:?}: {:?}", workspace, e);
        }
    }
    workspace_manager.watcher = Some(watcher);
    drop(workspace_manager);

    tokio::spawn(async move {
        loop {
            match rx.recv() {
                Ok(event) => {
                    let typ = match event.kind {
                        notify::event::EventKind::Create(_) => lsp_types::FileChangeType::CREATED,
                        notify::event::EventKind::Modify(_) => lsp_types::FileChangeType::CHANGED,
                        notify::event::EventKind::Remove(_) => lsp_types::FileChangeType::DELETED,
                        _ => {
                            continue;
                        }
                    };
                    let mut file_events = vec![];
                    for path in event.paths.iter() {
                        if path
                            .file_name()
                            .is_some_and(|name| name == ARMADEVRC_FILE_NAME)
                        {
                            if let Some(uri) = file_path_to_uri(path) {
                                file_events.push(FileEvent { uri, typ });
                            }
                        }
                    }

                    if file_events.is_empty() {
                        continue;
                    }
                    let params = DidChangeWatchedFilesParams {
                        changes: file_events,
                    };
                    on_did_change_watched_files(context.clone(), params).await;
                }
                Err(e) => {
                    warn!("watch files notify error: {:?}", e);
                    break;
                }
            }
        }
    });

    info!("watch files use notify success");

    Some(())
}
