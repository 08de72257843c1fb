//! Root descriptor handling.
//!
//! The pom.xml at the traversal root is the single authoritative source of
//! the current project version. This is targeted text matching, not XML
//! parsing: the version must appear literally as `<version>X.Y.Z-SNAPSHOT</version>`.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::{BumpVersionError, Result};
use crate::version::Version;

/// Contents extracted from the root descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct RootDescriptor {
    /// Current project version.
    pub version: Version,
    /// First `<groupId>` in the root pom, used as the default bundle
    /// namespace prefix for MANIFEST.MF constraint rewrites.
    pub group_id: Option<String>,
}

/// Reads the root `pom.xml` under `root` and extracts the current version
/// and group id.
///
/// # Returns
/// * `Ok(RootDescriptor)` - Version marker found and parsed
/// * `Err` - Pom unreadable, or no `X.Y.Z-SNAPSHOT` version marker present
pub fn read_root_descriptor(root: &Path) -> Result<RootDescriptor> {
    let pom_path = root.join("pom.xml");
    let content = fs::read_to_string(&pom_path)?;

    let version_str = Regex::new(r"<version>(\d+\.\d+\.\d+)-SNAPSHOT</version>")
        .ok()
        .and_then(|re| re.captures(&content).map(|cap| cap[1].to_string()))
        .ok_or_else(|| {
            BumpVersionError::version_not_found(format!(
                "cannot determine version in [{}]",
                pom_path.display()
            ))
        })?;
    let version = Version::parse(&version_str)?;

    let group_id = Regex::new(r"<groupId>([^<\s]+)</groupId>")
        .ok()
        .and_then(|re| re.captures(&content).map(|cap| cap[1].to_string()));

    Ok(RootDescriptor { version, group_id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_root_pom(dir: &Path, content: &str) {
        let mut f = fs::File::create(dir.join("pom.xml")).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_read_root_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        write_root_pom(
            dir.path(),
            r#"<project>
  <groupId>com.example.editor</groupId>
  <artifactId>parent</artifactId>
  <version>1.2.3-SNAPSHOT</version>
</project>"#,
        );

        let descriptor = read_root_descriptor(dir.path()).unwrap();
        assert_eq!(descriptor.version, Version::new(1, 2, 3));
        assert_eq!(descriptor.group_id, Some("com.example.editor".to_string()));
    }

    #[test]
    fn test_missing_group_id() {
        let dir = tempfile::tempdir().unwrap();
        write_root_pom(
            dir.path(),
            "<project><version>0.9.0-SNAPSHOT</version></project>",
        );

        let descriptor = read_root_descriptor(dir.path()).unwrap();
        assert_eq!(descriptor.version, Version::new(0, 9, 0));
        assert_eq!(descriptor.group_id, None);
    }

    #[test]
    fn test_release_version_is_not_a_marker() {
        // Only the -SNAPSHOT form counts as the authoritative version.
        let dir = tempfile::tempdir().unwrap();
        write_root_pom(dir.path(), "<project><version>1.2.3</version></project>");

        let err = read_root_descriptor(dir.path()).unwrap_err();
        assert!(matches!(err, BumpVersionError::VersionNotFound(_)));
        assert!(err.to_string().contains("pom.xml"));
    }

    #[test]
    fn test_missing_pom_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_root_descriptor(dir.path()).unwrap_err();
        assert!(matches!(err, BumpVersionError::Io(_)));
    }
}
