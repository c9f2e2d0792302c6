use std::time::Duration;

use lsp_server::{Connection, Message, Notification};

use crate::context::{ServerContext, ServerContextSnapshot};

/// The client end of an in-memory connection, with a server context wired
/// to the other end. Lets handler tests observe exactly what the editor
/// would receive.
pub struct VirtualEditor {
    _server_context: ServerContext,
    client_conn: Connection,
}

impl VirtualEditor {
    pub fn new() -> (VirtualEditor, ServerContextSnapshot) {
        let (server_conn, client_conn) = Connection::memory();
        let server_context = ServerContext::new(server_conn);
        let snapshot = server_context.snapshot();

        (
            VirtualEditor {
                _server_context: server_context,
                client_conn,
            },
            snapshot,
        )
    }

    /// The next notification the server sent, or `None` after a short wait.
    pub fn next_notification(&self) -> Option<Notification> {
        match self
            .client_conn
            .receiver
            .recv_timeout(Duration::from_millis(200))
        {
            Ok(Message::Notification(notification)) => Some(notification),
            _ => None,
        }
    }
}
