use lsp_types::ClientInfo;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ClientId {
    VSCode,
    Intellij,
    Neovim,
    Zed,
    #[default]
    Other,
}

impl ClientId {
    /// Clients in the VS Code family understand `setContext`-style UI
    /// context keys; the others get no visibility pushes.
    pub fn is_vscode(&self) -> bool {
        matches!(self, ClientId::VSCode)
    }
}

pub fn get_client_id(client_info: &Option<ClientInfo>) -> ClientId {
    match client_info {
        Some(info) => match info.name.as_str() {
            "Visual Studio Code" => ClientId::VSCode,
            "Neovim" | "coc.nvim" => ClientId::Neovim,
            _ if check_vscode(info) => ClientId::VSCode,
            _ if check_intellij(info) => ClientId::Intellij,
            _ if info.name.contains("Zed") => ClientId::Zed,
            _ => ClientId::Other,
        },
        None => ClientId::Other,
    }
}

fn check_vscode(client_info: &ClientInfo) -> bool {
    let name = &client_info.name;

    if name.contains("Visual Studio Code")
        || name.contains("Code - OSS")
        || name.contains("VSCodium")
    {
        return true;
    }

    matches!(name.as_str(), "Cursor" | "Windsurf" | "Trae")
}

fn check_intellij(client_info: &ClientInfo) -> bool {
    let name = &client_info.name;

    name.contains("IntelliJ")
        || name.contains("JetBrains")
        || name.contains("IDEA")
        || name.contains("Rider")
        || name.contains("Fleet")
}
