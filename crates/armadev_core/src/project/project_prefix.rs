use std::path::Path;

/// Naming metadata for an addon, read from the prefix file at its root. The
/// file holds a single `\`-separated path, e.g. `z\ace\addons\medical`: the
/// first token is the main prefix, the second the project prefix. The
/// component is the addon directory's own name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPrefix {
    pub main_prefix: String,
    pub prefix: String,
    pub component: String,
}

impl ProjectPrefix {
    /// Reads the prefix metadata for `addon_root`. A missing or malformed
    /// file degrades to an all-empty triple; callers never treat metadata as
    /// an error.
    pub fn load(addon_root: &Path, prefix_file_name: &str) -> ProjectPrefix {
        let prefix_path = addon_root.join(prefix_file_name);
        let content = match std::fs::read_to_string(&prefix_path) {
            Ok(content) => content,
            Err(e) => {
                log::debug!("no prefix file at {:?}: {:?}", prefix_path, e);
                return ProjectPrefix::default();
            }
        };

        let content = content.trim_end();
        let mut tokens = content.split('\\');
        let (Some(main_prefix), Some(prefix)) = (tokens.next(), tokens.next()) else {
            log::debug!("malformed prefix file at {:?}: {:?}", prefix_path, content);
            return ProjectPrefix::default();
        };

        let component = addon_root
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        ProjectPrefix {
            main_prefix: main_prefix.to_string(),
            prefix: prefix.to_string(),
            component,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let addon_root = dir.path().join("addons").join("medical");
        std::fs::create_dir_all(&addon_root).unwrap();
        std::fs::write(addon_root.join("$PBOPREFIX$"), "z\\ace\\addons\\medical\n").unwrap();

        let prefix = ProjectPrefix::load(&addon_root, "$PBOPREFIX$");
        assert_eq!(prefix.main_prefix, "z");
        assert_eq!(prefix.prefix, "ace");
        assert_eq!(prefix.component, "medical");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = ProjectPrefix::load(dir.path(), "$PBOPREFIX$");
        assert_eq!(prefix, ProjectPrefix::default());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let addon_root = dir.path().join("addons").join("medical");
        std::fs::create_dir_all(&addon_root).unwrap();
        std::fs::write(addon_root.join("$PBOPREFIX$"), "no-backslash-here").unwrap();

        let prefix = ProjectPrefix::load(&addon_root, "$PBOPREFIX$");
        assert_eq!(prefix, ProjectPrefix::default());
    }
}
