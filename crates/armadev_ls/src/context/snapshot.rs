use std::sync::Arc;
use tokio::sync::RwLock;

use super::{client::ClientProxy, workspace_manager::WorkspaceManager};

#[derive(Clone)]
pub struct ServerContextSnapshot {
    inner: Arc<ServerContextInner>,
}

impl ServerContextSnapshot {
    pub fn new(inner: Arc<ServerContextInner>) -> Self {
        Self { inner }
    }

    pub fn client(&self) -> &ClientProxy {
        &self.inner.client
    }

    pub fn workspace_manager(&self) -> &RwLock<WorkspaceManager> {
        &self.inner.workspace_manager
    }
}

pub struct ServerContextInner {
    pub client: Arc<ClientProxy>,
    pub workspace_manager: Arc<RwLock<WorkspaceManager>>,
}
