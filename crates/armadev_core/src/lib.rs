mod config;
mod macro_path;
mod prep;
mod project;
mod stringtable;
mod vfs;

pub use config::{Armadevrc, load_configs};
pub use macro_path::convert_macro_path;
pub use prep::{PrepSummary, generate_prep_file, prep_target_path};
pub use project::{AddonPath, ProjectPrefix, addon_root_of};
pub use stringtable::{create_skeleton, insert_key, stringtable_key_name};
pub use vfs::{Document, DocumentStore, file_path_to_uri, uri_to_file_path};
