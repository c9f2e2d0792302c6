use std::sync::LazyLock;

use lsp_types::{MessageType, ShowMessageParams};
use serde_json::Value;

use crate::context::ServerContextSnapshot;

mod copy_macro_path;
mod generate_prep_file;
mod generate_stringtable_key;

pub use copy_macro_path::{
    CopyExternalMacroPathCommand, CopyMacroPathCommand, CopyToClipboardNotification,
    CopyToClipboardParams,
};
pub use generate_prep_file::GeneratePrepFileCommand;
pub use generate_stringtable_key::GenerateStringtableKeyCommand;

pub trait CommandSpec {
    const COMMAND: &str;

    async fn handle(context: ServerContextSnapshot, args: Vec<Value>) -> Option<()>;
}

static COMMANDS: LazyLock<Vec<String>> = LazyLock::new(|| {
    vec![
        CopyMacroPathCommand::COMMAND.to_string(),
        CopyExternalMacroPathCommand::COMMAND.to_string(),
        GeneratePrepFileCommand::COMMAND.to_string(),
        GenerateStringtableKeyCommand::COMMAND.to_string(),
    ]
});

pub fn get_commands_list() -> Vec<String> {
    COMMANDS.clone()
}

pub async fn dispatch_command(
    context: ServerContextSnapshot,
    command_name: &str,
    args: Vec<Value>,
) -> Option<()> {
    match command_name {
        CopyMacroPathCommand::COMMAND => CopyMacroPathCommand::handle(context, args).await,
        CopyExternalMacroPathCommand::COMMAND => {
            CopyExternalMacroPathCommand::handle(context, args).await
        }
        GeneratePrepFileCommand::COMMAND => GeneratePrepFileCommand::handle(context, args).await,
        GenerateStringtableKeyCommand::COMMAND => {
            GenerateStringtableKeyCommand::handle(context, args).await
        }
        _ => Some(()),
    }
}

pub(crate) fn show_info(context: &ServerContextSnapshot, message: String) {
    context.client().show_message(ShowMessageParams {
        typ: MessageType::INFO,
        message,
    });
}

pub(crate) fn show_error(context: &ServerContextSnapshot, message: String) {
    context.client().show_message(ShowMessageParams {
        typ: MessageType::ERROR,
        message,
    });
}
