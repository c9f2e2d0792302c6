mod config_loader;

pub use config_loader::load_configs;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Workspace configuration, read from `.armadevrc.json`. Every field has a
/// default matching the common addon layout, so a missing or partial file is
/// always usable.
#[derive(Serialize, Deserialize, Debug, JsonSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Armadevrc {
    #[serde(rename = "$schema")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Extension of function script files, compared case-insensitively.
    #[serde(default = "default_script_extension")]
    pub script_extension: String,
    /// File name of the generated declarations header at the addon root.
    #[serde(default = "default_prep_file_name")]
    pub prep_file_name: String,
    /// File name of the translation table at the addon root.
    #[serde(default = "default_stringtable_file_name")]
    pub stringtable_file_name: String,
    /// File name of the prefix metadata file at the addon root.
    #[serde(default = "default_prefix_file_name")]
    pub prefix_file_name: String,
    /// Macro-name endings that mark a localization macro, e.g. `CSTRING`,
    /// `LSTRING` and `LLSTRING` all end in `STRING`.
    #[serde(default = "default_stringtable_macro_suffixes")]
    pub stringtable_macro_suffixes: Vec<String>,
}

impl Default for Armadevrc {
    fn default() -> Self {
        Self {
            schema: None,
            script_extension: default_script_extension(),
            prep_file_name: default_prep_file_name(),
            stringtable_file_name: default_stringtable_file_name(),
            prefix_file_name: default_prefix_file_name(),
            stringtable_macro_suffixes: default_stringtable_macro_suffixes(),
        }
    }
}

fn default_script_extension() -> String {
    "sqf".to_string()
}

fn default_prep_file_name() -> String {
    "XEH_PREP.hpp".to_string()
}

fn default_stringtable_file_name() -> String {
    "stringtable.xml".to_string()
}

fn default_prefix_file_name() -> String {
    "$PBOPREFIX$".to_string()
}

fn default_stringtable_macro_suffixes() -> Vec<String> {
    vec!["STRING".to_string()]
}
