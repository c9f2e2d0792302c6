use armadev_core::uri_to_file_path;
use lsp_types::DidChangeWatchedFilesParams;

use crate::context::{ARMADEVRC_FILE_NAME, ServerContextSnapshot};

pub async fn on_did_change_watched_files(
    context: ServerContextSnapshot,
    params: DidChangeWatchedFilesParams,
) -> Option<()> {
    let config_changed = params.changes.iter().any(|change| {
        uri_to_file_path(&change.uri)
            .and_then(|path| path.file_name().map(|name| name == ARMADEVRC_FILE_NAME))
            .unwrap_or(false)
    });

    if config_changed {
        let mut workspace_manager = context.workspace_manager().write().await;
        workspace_manager.reload_config();
    }

    Some(())
}
