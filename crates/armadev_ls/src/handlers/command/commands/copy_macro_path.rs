use armadev_core::{convert_macro_path, uri_to_file_path};
use lsp_types::{Uri, notification::Notification};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::ServerContextSnapshot;

use super::{CommandSpec, show_info};

/// Asks the client to put `text` on the system clipboard; the server has no
/// clipboard of its own.
#[derive(Debug)]
pub enum CopyToClipboardNotification {}

impl Notification for CopyToClipboardNotification {
    type Params = CopyToClipboardParams;
    const METHOD: &'static str = "armadev/copyToClipboard";
}

#[derive(Debug, Eq, PartialEq, Clone, Deserialize, Serialize)]
pub struct CopyToClipboardParams {
    pub text: String,
}

pub struct CopyMacroPathCommand;

impl CommandSpec for CopyMacroPathCommand {
    const COMMAND: &str = "armadev.copyMacroPath";

    async fn handle(context: ServerContextSnapshot, args: Vec<Value>) -> Option<()> {
        copy_macro_path(context, args, false).await
    }
}

pub struct CopyExternalMacroPathCommand;

impl CommandSpec for CopyExternalMacroPathCommand {
    const COMMAND: &str = "armadev.copyExternalMacroPath";

    async fn handle(context: ServerContextSnapshot, args: Vec<Value>) -> Option<()> {
        copy_macro_path(context, args, true).await
    }
}

async fn copy_macro_path(
    context: ServerContextSnapshot,
    args: Vec<Value>,
    external: bool,
) -> Option<()> {
    let path = match args.first() {
        Some(arg) => {
            let uri: Uri = serde_json::from_value(arg.clone()).ok()?;
            uri_to_file_path(&uri)?
        }
        // No explicit target: fall back to the document the cursor is in.
        None => {
            let workspace_manager = context.workspace_manager().read().await;
            let selection = workspace_manager.active_selection.as_ref()?;
            uri_to_file_path(&selection.uri)?
        }
    };

    let path_text = path.to_string_lossy();
    let Some(macro_call) = convert_macro_path(&path_text, external) else {
        // Not inside an addons tree; invoked in the wrong context.
        log::debug!("no addons segment in {:?}, nothing to copy", path);
        return Some(());
    };

    log::info!("copied path to clipboard: {}", macro_call);
    context.client().send_notification(
        CopyToClipboardNotification::METHOD,
        CopyToClipboardParams {
            text: macro_call.clone(),
        },
    );
    show_info(&context, format!("Copied {} path to clipboard", macro_call));
    Some(())
}
