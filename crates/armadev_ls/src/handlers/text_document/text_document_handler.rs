use lsp_types::{
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
};

use crate::context::ServerContextSnapshot;

pub async fn on_did_open_text_document(
    context: ServerContextSnapshot,
    params: DidOpenTextDocumentParams,
) -> Option<()> {
    let mut workspace_manager = context.workspace_manager().write().await;
    workspace_manager
        .documents
        .update_document(params.text_document.uri, params.text_document.text);
    Some(())
}

pub async fn on_did_change_text_document(
    context: ServerContextSnapshot,
    params: DidChangeTextDocumentParams,
) -> Option<()> {
    // Full sync: the single change carries the whole new text.
    let change = params.content_changes.into_iter().next()?;

    let mut workspace_manager = context.workspace_manager().write().await;
    workspace_manager
        .documents
        .update_document(params.text_document.uri, change.text);
    Some(())
}

pub async fn on_did_close_document(
    context: ServerContextSnapshot,
    params: DidCloseTextDocumentParams,
) -> Option<()> {
    let uri = params.text_document.uri;

    let mut workspace_manager = context.workspace_manager().write().await;
    workspace_manager.documents.remove_document(&uri);
    if workspace_manager
        .active_selection
        .as_ref()
        .is_some_and(|selection| selection.uri == uri)
    {
        workspace_manager.active_selection = None;
    }
    Some(())
}
