use armadev_core::{
    ProjectPrefix, addon_root_of, create_skeleton, insert_key, stringtable_key_name,
    uri_to_file_path,
};
use lsp_types::Position;
use serde_json::Value;

use crate::context::{ActiveSelection, ServerContextSnapshot};

use super::{CommandSpec, show_error, show_info};

pub struct GenerateStringtableKeyCommand;

impl CommandSpec for GenerateStringtableKeyCommand {
    const COMMAND: &str = "armadev.generateStringtableKey";

    async fn handle(context: ServerContextSnapshot, args: Vec<Value>) -> Option<()> {
        // Explicit uri + position arguments, or the tracked selection when
        // invoked from the palette without any.
        let selection = match (args.first(), args.get(1)) {
            (Some(uri), Some(position)) => ActiveSelection {
                uri: serde_json::from_value(uri.clone()).ok()?,
                position: serde_json::from_value::<Position>(position.clone()).ok()?,
            },
            _ => {
                let workspace_manager = context.workspace_manager().read().await;
                workspace_manager.active_selection.clone()?
            }
        };

        let document_path = uri_to_file_path(&selection.uri)?;

        let (config, word) = {
            let workspace_manager = context.workspace_manager().read().await;
            let document = workspace_manager.documents.get_document(&selection.uri)?;
            let offset = document.get_offset(
                selection.position.line as usize,
                selection.position.character as usize,
            )?;
            let (_, word) = document.word_at(offset)?;
            (workspace_manager.config.clone(), word.to_string())
        };

        let Some(addon_root) = addon_root_of(&document_path.to_string_lossy()) else {
            // Invoked outside an addons tree; nothing to write to.
            log::debug!("no addon root above {:?}", document_path);
            return Some(());
        };

        let prefix = ProjectPrefix::load(&addon_root, &config.prefix_file_name);
        let key = stringtable_key_name(&prefix, &word);
        let table_path = addon_root.join(&config.stringtable_file_name);
        log::info!("generating stringtable key {} in {:?}", key, table_path);

        if !table_path.exists() {
            if let Err(err) = create_skeleton(&table_path, &prefix) {
                log::error!("failed to create {:?}: {:?}", table_path, err);
                show_error(
                    &context,
                    format!(
                        "Failed to create missing stringtable file at {}",
                        table_path.display()
                    ),
                );
                return Some(());
            }
            show_info(
                &context,
                format!(
                    "Automatically generated missing {} file",
                    config.stringtable_file_name
                ),
            );
        }

        match insert_key(&table_path, &key) {
            Ok(()) => {
                show_info(&context, format!("Generated stringtable key for {}", key));
            }
            Err(err) => {
                log::error!("failed to update {:?}: {:?}", table_path, err);
                show_error(
                    &context,
                    format!(
                        "Failed to write to stringtable file at {}",
                        table_path.display()
                    ),
                );
            }
        }

        Some(())
    }
}
