use std::path::PathBuf;

use armadev_core::uri_to_file_path;
use lsp_types::InitializeParams;

use crate::{
    cmd_args::CmdArgs,
    context::{ServerContextSnapshot, get_client_id, load_armadev_config},
    handlers::text_document::register_files_watch,
    logger::init_logger,
};

pub async fn initialized_handler(
    context: ServerContextSnapshot,
    params: InitializeParams,
    cmd_args: CmdArgs,
) -> Option<()> {
    let workspace_folders = get_workspace_folders(&params);
    let main_root: Option<&str> = match workspace_folders.first() {
        Some(path) => path.to_str(),
        None => None,
    };

    init_logger(main_root, &cmd_args);
    log::info!("main root: {:?}", main_root);

    let client_id = if let Some(editor) = &cmd_args.editor {
        editor.clone().into()
    } else {
        get_client_id(&params.client_info)
    };
    log::info!("client_id: {:?}", client_id);

    let config = load_armadev_config(workspace_folders.first().cloned());

    {
        let mut workspace_manager = context.workspace_manager().write().await;
        workspace_manager.workspace_folders = workspace_folders;
        workspace_manager.client_id = client_id;
        workspace_manager.config = config;
        log::info!(
            "workspace folders set: {:?}",
            workspace_manager.workspace_folders
        );
    }

    register_files_watch(context.clone(), &params.capabilities).await;
    Some(())
}

pub fn get_workspace_folders(params: &InitializeParams) -> Vec<PathBuf> {
    let mut workspace_folders = Vec::new();
    if let Some(workspaces) = &params.workspace_folders {
        for workspace in workspaces {
            if let Some(path) = uri_to_file_path(&workspace.uri) {
                workspace_folders.push(path);
            }
        }
    }

    if workspace_folders.is_empty() {
        // However, most LSP clients still provide this field
        #[allow(deprecated)]
        if let Some(uri) = &params.root_uri {
            if let Some(path) = uri_to_file_path(uri) {
                workspace_folders.push(path);
            }
        }
    }

    workspace_folders
}
