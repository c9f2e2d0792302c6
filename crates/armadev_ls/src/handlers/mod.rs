mod command;
mod initialized;
mod notification_handler;
mod request_handler;
mod response_handler;
mod selection_context;
mod text_document;

#[cfg(test)]
mod test_lib;

pub use initialized::initialized_handler;
use lsp_types::{ClientCapabilities, ServerCapabilities};
pub use notification_handler::on_notification_handler;
pub use request_handler::on_request_handler;
pub use response_handler::on_response_handler;

pub trait RegisterCapabilities {
    fn register_capabilities(
        server_capabilities: &mut ServerCapabilities,
        client_capabilities: &ClientCapabilities,
    );
}

pub fn server_capabilities(client_capabilities: &ClientCapabilities) -> ServerCapabilities {
    let mut server_capabilities = ServerCapabilities::default();

    text_document::TextDocumentCapabilities::register_capabilities(
        &mut server_capabilities,
        client_capabilities,
    );
    command::CommandCapabilities::register_capabilities(
        &mut server_capabilities,
        client_capabilities,
    );

    server_capabilities
}
