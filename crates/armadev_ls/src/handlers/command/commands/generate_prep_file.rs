use armadev_core::{generate_prep_file, prep_target_path, uri_to_file_path};
use lsp_types::Uri;
use serde_json::Value;

use crate::context::ServerContextSnapshot;

use super::{CommandSpec, show_error, show_info};

pub struct GeneratePrepFileCommand;

impl CommandSpec for GeneratePrepFileCommand {
    const COMMAND: &str = "armadev.generatePrepFile";

    async fn handle(context: ServerContextSnapshot, args: Vec<Value>) -> Option<()> {
        let uri: Uri = serde_json::from_value(args.first()?.clone()).ok()?;
        let functions_folder = uri_to_file_path(&uri)?;

        let config = {
            let workspace_manager = context.workspace_manager().read().await;
            workspace_manager.config.clone()
        };

        log::info!(
            "generating {} for {:?}",
            config.prep_file_name,
            functions_folder
        );

        match generate_prep_file(&functions_folder, &config) {
            Ok(summary) => {
                show_info(
                    &context,
                    format!(
                        "Generated {} file for {} functions",
                        config.prep_file_name, summary.function_count
                    ),
                );
            }
            Err(err) => {
                let target = prep_target_path(&functions_folder, &config)
                    .unwrap_or_else(|| functions_folder.join(&config.prep_file_name));
                log::error!("failed to generate {:?}: {:?}", target, err);
                show_error(&context, format!("Failed to create file at {}", target.display()));
            }
        }

        Some(())
    }
}
