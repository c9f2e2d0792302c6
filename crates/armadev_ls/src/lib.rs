pub mod cmd_args;
mod context;
mod handlers;
mod logger;
mod server;

#[cfg(feature = "cli")]
pub use clap::Parser;
pub use cmd_args::*;
pub use server::{AsyncConnection, ExitError, run_ls};
