use std::io;
use std::path::Path;

use crate::project::ProjectPrefix;

/// Builds a translation key from the addon's naming metadata and the word
/// the key is for. Empty metadata fields are kept as empty segments rather
/// than failing.
pub fn stringtable_key_name(prefix: &ProjectPrefix, word: &str) -> String {
    format!("STR_{}_{}_{}", prefix.main_prefix, prefix.component, word)
}

/// Writes a blank translation table for an addon that does not have one yet.
pub fn create_skeleton(table_path: &Path, prefix: &ProjectPrefix) -> io::Result<()> {
    let content = format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <Project name=\"{}\">\n    \
             <Package name=\"{}\">\n    \
             </Package>\n\
         </Project>",
        prefix.prefix.to_uppercase(),
        prefix.component
    );

    std::fs::write(table_path, content)
}

/// Splices a new `Key` block into the table, immediately before the closing
/// `Package`/`Project` tags. Existing lines are carried over untouched, and
/// an already-present key is inserted again; duplicates are the caller's
/// business, not ours.
pub fn insert_key(table_path: &Path, key: &str) -> io::Result<()> {
    let content = std::fs::read_to_string(table_path)?;
    let lines: Vec<&str> = content.split('\n').collect();

    let block = format!(
        "        <Key ID=\"{}\">\n            <English></English>\n        </Key>",
        key
    );

    let insert_at = lines.len().saturating_sub(2);
    let mut spliced = Vec::with_capacity(lines.len() + 1);
    spliced.extend_from_slice(&lines[..insert_at]);
    spliced.push(block.as_str());
    spliced.extend_from_slice(&lines[insert_at..]);

    std::fs::write(table_path, spliced.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn ace_medical() -> ProjectPrefix {
        ProjectPrefix {
            main_prefix: "z".to_string(),
            prefix: "ace".to_string(),
            component: "medical".to_string(),
        }
    }

    fn table_in_tempdir() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stringtable.xml");
        (dir, path)
    }

    #[test]
    fn test_key_name() {
        assert_eq!(
            stringtable_key_name(&ace_medical(), "bandage"),
            "STR_z_medical_bandage"
        );
        // Missing metadata degrades to empty segments, not an error.
        assert_eq!(
            stringtable_key_name(&ProjectPrefix::default(), "bandage"),
            "STR___bandage"
        );
    }

    #[test]
    fn test_skeleton_then_single_key() {
        let (_dir, path) = table_in_tempdir();
        create_skeleton(&path, &ace_medical()).unwrap();
        insert_key(&path, "STR_z_medical_bandage").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <Project name=\"ACE\">\n    \
                 <Package name=\"medical\">\n        \
                     <Key ID=\"STR_z_medical_bandage\">\n            \
                         <English></English>\n        \
                     </Key>\n    \
                 </Package>\n\
             </Project>"
        );
        assert_eq!(content.matches("<Key ").count(), 1);
    }

    #[test]
    fn test_insert_preserves_existing_entries() {
        let (_dir, path) = table_in_tempdir();
        create_skeleton(&path, &ace_medical()).unwrap();
        insert_key(&path, "STR_z_medical_bandage").unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        insert_key(&path, "STR_z_medical_splint").unwrap();
        let after = std::fs::read_to_string(&path).unwrap();

        assert_eq!(after.matches("<Key ").count(), 2);
        // The new entry lands before the closing tags; everything above it
        // is byte-for-byte what was there before.
        let first_key_part = before.rsplit_once("\n    </Package>").unwrap().0;
        assert!(after.starts_with(first_key_part));
        let splint_at = after.find("STR_z_medical_splint").unwrap();
        let bandage_at = after.find("STR_z_medical_bandage").unwrap();
        assert!(splint_at > bandage_at);
        assert!(after.ends_with("</Key>\n    </Package>\n</Project>"));
    }

    #[test]
    fn test_duplicate_keys_are_kept() {
        let (_dir, path) = table_in_tempdir();
        create_skeleton(&path, &ace_medical()).unwrap();
        insert_key(&path, "STR_z_medical_bandage").unwrap();
        insert_key(&path, "STR_z_medical_bandage").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("STR_z_medical_bandage").count(), 2);
    }

    #[test]
    fn test_insert_into_missing_file_is_io_error() {
        let (_dir, path) = table_in_tempdir();
        assert!(insert_key(&path, "STR_z_medical_bandage").is_err());
    }
}
