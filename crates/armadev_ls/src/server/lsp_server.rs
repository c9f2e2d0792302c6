use std::error::Error;
use tokio::sync::oneshot;

use crate::context;

use super::connection::AsyncConnection;
use super::message_processor::ServerMessageProcessor;

/// Owns the connection, the shared context and the message processor for
/// the lifetime of the server.
pub(super) struct LspServer {
    pub(super) connection: AsyncConnection,
    pub(super) server_context: context::ServerContext,
    pub(super) processor: ServerMessageProcessor,
}

impl LspServer {
    pub(super) fn new(connection: AsyncConnection, init_rx: oneshot::Receiver<()>) -> Self {
        let server_context = context::ServerContext::new(lsp_server::Connection {
            sender: connection.connection.sender.clone(),
            receiver: connection.connection.receiver.clone(),
        });

        Self {
            connection,
            server_context,
            processor: ServerMessageProcessor::new(init_rx),
        }
    }

    pub(super) async fn run(mut self) -> Result<(), Box<dyn Error + Sync + Send>> {
        // Hold back most messages until initialization has finished.
        self.wait_for_initialization().await?;

        if self
            .processor
            .process_pending_messages(&mut self.connection, &mut self.server_context)
            .await?
        {
            self.server_context.close().await;
            return Ok(()); // Shutdown requested during pending message processing
        }

        while let Some(msg) = self.connection.recv().await {
            if self
                .processor
                .process_message(msg, &mut self.connection, &mut self.server_context)
                .await?
            {
                break; // Shutdown requested
            }
        }

        self.server_context.close().await;
        Ok(())
    }

    async fn wait_for_initialization(&mut self) -> Result<(), Box<dyn Error + Sync + Send>> {
        loop {
            if self.processor.check_initialization_complete()? {
                break;
            }

            // Poll with a short timeout so the completion signal is noticed
            // even when the client is quiet.
            match tokio::time::timeout(
                tokio::time::Duration::from_millis(50),
                self.connection.recv(),
            )
            .await
            {
                Ok(Some(msg)) => {
                    if self.processor.can_process_during_init(&msg) {
                        self.processor
                            .handle_message(msg, &mut self.connection, &mut self.server_context)
                            .await?;
                    } else {
                        self.processor.pending_messages.push(msg);
                    }
                }
                Ok(None) => {
                    // Connection closed during initialization
                    return Ok(());
                }
                Err(_) => {
                    continue;
                }
            }
        }
        Ok(())
    }
}
