use std::error::Error;

/// Raised when the shutdown/exit handshake goes wrong.
#[derive(Debug)]
pub struct ExitError(pub String);

impl std::fmt::Display for ExitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "exit error: {}", self.0)
    }
}

impl Error for ExitError {}
