use std::error::Error;

use lsp_server::Response;

use crate::context::ServerContext;

/// The only requests this server sends are fire-and-forget capability
/// registrations; their responses carry nothing to act on.
pub async fn on_response_handler(
    response: Response,
    _: &ServerContext,
) -> Result<(), Box<dyn Error + Sync + Send>> {
    log::debug!("client response for request {:?}", response.id);
    Ok(())
}
