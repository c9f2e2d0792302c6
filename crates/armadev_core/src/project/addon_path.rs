use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

// Everything after the first `addons` segment; tolerates both separator
// styles so paths coming from URIs and from Windows editors parse alike.
static ADDONS_TAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[/\\])addons[/\\](.+)$").unwrap());

// The on-disk prefix up to and including `addons/<component>`.
static ADDON_ROOT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*[/\\]addons[/\\][^/\\]+").unwrap());

/// The part of a project path below the `addons` marker: the component
/// directory name and the path segments inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonPath {
    pub component: String,
    pub segments: Vec<String>,
}

impl AddonPath {
    /// Splits `path` at the first `addons` segment. Returns `None` when the
    /// marker is missing or nothing follows it; such a path is simply not
    /// part of an addon and the caller is expected to bail out silently.
    pub fn parse(path: &str) -> Option<AddonPath> {
        let tail = ADDONS_TAIL_RE.captures(path)?.get(1)?.as_str();
        let mut segments = tail.split(['/', '\\']).map(|s| s.to_string());
        let component = segments.next()?;

        Some(AddonPath {
            component,
            segments: segments.collect(),
        })
    }

    /// The component-relative path in the backslash convention the build
    /// macros expect, regardless of host OS.
    pub fn relative(&self) -> String {
        self.segments.join("\\")
    }
}

/// The addon root directory containing `path`, i.e. the prefix up to and
/// including `addons/<component>`.
pub fn addon_root_of(path: &str) -> Option<PathBuf> {
    let matched = ADDON_ROOT_RE.find(path)?;
    Some(PathBuf::from(matched.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slash_path() {
        let addon = AddonPath::parse("/projects/ace/addons/medical/functions/fn_treat.sqf").unwrap();
        assert_eq!(addon.component, "medical");
        assert_eq!(addon.relative(), "functions\\fn_treat.sqf");
    }

    #[test]
    fn test_parse_backslash_path() {
        let addon = AddonPath::parse("C:\\projects\\ace\\addons\\medical\\ui\\icon.paa").unwrap();
        assert_eq!(addon.component, "medical");
        assert_eq!(addon.relative(), "ui\\icon.paa");
    }

    #[test]
    fn test_parse_component_only() {
        // Nothing below the component still parses, with an empty remainder.
        let addon = AddonPath::parse("/projects/ace/addons/medical").unwrap();
        assert_eq!(addon.component, "medical");
        assert_eq!(addon.relative(), "");
    }

    #[test]
    fn test_parse_without_marker() {
        assert_eq!(AddonPath::parse("/projects/ace/docs/readme.md"), None);
        assert_eq!(AddonPath::parse("/projects/ace/addons"), None);
    }

    #[test]
    fn test_marker_is_exact_segment() {
        // `addons_extra` is not the marker segment.
        assert_eq!(AddonPath::parse("/p/addons_extra/medical/a.sqf"), None);
    }

    #[test]
    fn test_addon_root() {
        let root = addon_root_of("/projects/ace/addons/medical/functions/fn_treat.sqf").unwrap();
        assert_eq!(root, PathBuf::from("/projects/ace/addons/medical"));

        let root = addon_root_of("C:\\projects\\ace\\addons\\medical\\script_component.hpp").unwrap();
        assert_eq!(root, PathBuf::from("C:\\projects\\ace\\addons\\medical"));
    }

    #[test]
    fn test_addon_root_without_marker() {
        assert_eq!(addon_root_of("/projects/ace/docs/readme.md"), None);
    }
}
