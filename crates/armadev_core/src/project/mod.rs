mod addon_path;
mod project_prefix;

pub use addon_path::{AddonPath, addon_root_of};
pub use project_prefix::ProjectPrefix;
