use armadev_core::Document;
use lsp_types::{Position, Uri, notification::Notification};
use serde::{Deserialize, Serialize};

use crate::context::{ActiveSelection, ServerContextSnapshot};

/// Sent by the client on every cursor/selection move in the active document.
#[derive(Debug)]
pub enum SelectionChangedNotification {}

impl Notification for SelectionChangedNotification {
    type Params = SelectionChangedParams;
    const METHOD: &'static str = "armadev/selectionChanged";
}

#[derive(Debug, Eq, PartialEq, Clone, Deserialize, Serialize)]
pub struct SelectionChangedParams {
    pub uri: Uri,
    pub position: Position,
}

/// Pushed back to the client so it can toggle the visibility context for
/// the stringtable-key command.
#[derive(Debug)]
pub enum StringtableContextNotification {}

impl Notification for StringtableContextNotification {
    type Params = StringtableContextParams;
    const METHOD: &'static str = "armadev/stringtableContext";
}

#[derive(Debug, Eq, PartialEq, Clone, Deserialize, Serialize)]
pub struct StringtableContextParams {
    pub active: bool,
}

pub async fn on_selection_changed(
    context: ServerContextSnapshot,
    params: SelectionChangedParams,
) -> Option<()> {
    let active = {
        let mut workspace_manager = context.workspace_manager().write().await;
        workspace_manager.active_selection = Some(ActiveSelection {
            uri: params.uri.clone(),
            position: params.position,
        });

        // Only VS Code-family clients consume UI context keys.
        if !workspace_manager.client_id.is_vscode() {
            return Some(());
        }

        let document = workspace_manager.documents.get_document(&params.uri)?;
        let offset = document.get_offset(
            params.position.line as usize,
            params.position.character as usize,
        )?;
        is_stringtable_macro_context(
            document,
            offset,
            &workspace_manager.config.stringtable_macro_suffixes,
        )
    };

    context.client().send_notification(
        StringtableContextNotification::METHOD,
        StringtableContextParams { active },
    );
    Some(())
}

/// True when the token before the word at the cursor ends in a recognized
/// localization-macro suffix, e.g. the cursor sits in `CSTRING(banana)`.
pub fn is_stringtable_macro_context(
    document: &Document,
    offset: usize,
    suffixes: &[String],
) -> bool {
    let Some(word_before) = document.word_before(offset) else {
        return false;
    };

    suffixes
        .iter()
        .any(|suffix| word_before.ends_with(suffix.as_str()))
}
