use std::io;
use std::path::{Path, PathBuf};

use itertools::Itertools;

use crate::config::Armadevrc;

/// Outcome of a declarations-file generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepSummary {
    pub target: PathBuf,
    pub function_count: usize,
}

/// Where the declarations file for `functions_folder` lives: at the addon
/// root, next to the functions folder.
pub fn prep_target_path(functions_folder: &Path, config: &Armadevrc) -> Option<PathBuf> {
    Some(functions_folder.parent()?.join(&config.prep_file_name))
}

/// Derives the declared function name from a script file name. By convention
/// function files are `<tag>_<function_name>.<ext>`; the tag is dropped.
/// Returns `None` for files with the wrong extension, no tag separator, or
/// an empty remainder.
pub fn function_name_of(file_name: &str, script_extension: &str) -> Option<String> {
    let (stem, extension) = file_name.rsplit_once('.')?;
    if !extension.eq_ignore_ascii_case(script_extension) {
        return None;
    }

    let (_, function_name) = stem.split_once('_')?;
    if function_name.is_empty() {
        return None;
    }

    Some(function_name.to_string())
}

/// Scans `functions_folder` (non-recursive) and rewrites the declarations
/// file at the addon root with one `PREP(<name>);` line per function file,
/// sorted. Zero qualifying files still produce a (then empty) file.
pub fn generate_prep_file(functions_folder: &Path, config: &Armadevrc) -> io::Result<PrepSummary> {
    let target = prep_target_path(functions_folder, config)
        .ok_or_else(|| io::Error::other("functions folder has no parent directory"))?;

    let mut function_names = Vec::new();
    for entry in std::fs::read_dir(functions_folder)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if let Some(function_name) = function_name_of(&file_name, &config.script_extension) {
            function_names.push(function_name);
        }
    }

    let function_count = function_names.len();
    let content = function_names
        .into_iter()
        .map(|name| format!("PREP({});", name))
        .sorted()
        .join("\n");

    std::fs::write(&target, content)?;

    Ok(PrepSummary {
        target,
        function_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_functions_folder(files: &[&str]) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let functions = dir.path().join("addons").join("medical").join("functions");
        std::fs::create_dir_all(&functions).unwrap();
        for file in files {
            std::fs::write(functions.join(file), "").unwrap();
        }
        (dir, functions)
    }

    #[test]
    fn test_function_name_of() {
        assert_eq!(function_name_of("fn_foo.sqf", "sqf"), Some("foo".to_string()));
        assert_eq!(function_name_of("fnc_bar.sqf", "sqf"), Some("bar".to_string()));
        assert_eq!(
            function_name_of("fn_foo_bar.sqf", "sqf"),
            Some("foo_bar".to_string())
        );
        // Case-insensitive extension match.
        assert_eq!(function_name_of("fn_foo.SQF", "sqf"), Some("foo".to_string()));
        // Wrong extension, missing tag, empty remainder.
        assert_eq!(function_name_of("readme.md", "sqf"), None);
        assert_eq!(function_name_of("script.sqf", "sqf"), None);
        assert_eq!(function_name_of("fn_.sqf", "sqf"), None);
    }

    #[test]
    fn test_generate_sorted_declarations() {
        let (_dir, functions) =
            make_functions_folder(&["fn_foo.sqf", "fnc_bar.sqf", "readme.md", "fn_.sqf"]);
        let config = Armadevrc::default();

        let summary = generate_prep_file(&functions, &config).unwrap();
        assert_eq!(summary.function_count, 2);
        assert_eq!(summary.target, functions.parent().unwrap().join("XEH_PREP.hpp"));

        let content = std::fs::read_to_string(&summary.target).unwrap();
        assert_eq!(content, "PREP(bar);\nPREP(foo);");
    }

    #[test]
    fn test_generate_empty_folder_writes_empty_file() {
        let (_dir, functions) = make_functions_folder(&["notes.txt"]);
        let config = Armadevrc::default();

        let summary = generate_prep_file(&functions, &config).unwrap();
        assert_eq!(summary.function_count, 0);

        let content = std::fs::read_to_string(&summary.target).unwrap();
        assert_eq!(content, "");
    }

    #[test]
    fn test_generate_overwrites_existing_file() {
        let (_dir, functions) = make_functions_folder(&["fn_treat.sqf"]);
        let config = Armadevrc::default();
        let target = prep_target_path(&functions, &config).unwrap();
        std::fs::write(&target, "PREP(stale);\nPREP(lines);").unwrap();

        generate_prep_file(&functions, &config).unwrap();
        let content = std::fs::read_to_string(&target).unwrap();
        assert_eq!(content, "PREP(treat);");
    }

    #[test]
    fn test_generate_skips_subdirectories() {
        let (_dir, functions) = make_functions_folder(&["fn_treat.sqf"]);
        std::fs::create_dir(functions.join("sub_dir.sqf")).unwrap();
        let config = Armadevrc::default();

        let summary = generate_prep_file(&functions, &config).unwrap();
        assert_eq!(summary.function_count, 1);
    }

    #[test]
    fn test_generate_missing_folder_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Armadevrc::default();
        let missing = dir.path().join("addons").join("medical").join("functions");

        assert!(generate_prep_file(&missing, &config).is_err());
    }
}
