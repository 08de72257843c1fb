//! Recursive version rewrite pass.
//!
//! Walks the tree once, dispatches by file name, and rewrites matching files
//! in place. Matching is targeted text substitution per file format, not
//! structural parsing. A matched file with zero pattern hits is still
//! rewritten with identical content and still reported.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;
use crate::version::Version;

pub mod feature;
pub mod manifest;
pub mod pom;

/// Options controlling a rewrite pass.
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    /// Package family prefix recognized in `;bundle-version="..."` constraints.
    pub bundle_prefix: String,

    /// Directory names pruned from the traversal, in addition to hidden
    /// directories which are always pruned.
    pub exclude_dirs: Vec<String>,

    /// Report files without writing them.
    pub dry_run: bool,
}

/// Rewrites `old` to `new` in every recognized file under `root`.
///
/// Visits all descendant directories except hidden ones and those named in
/// `options.exclude_dirs`. Recognized files:
/// - `pom.xml` anywhere
/// - `MANIFEST.MF` directly under a `META-INF` directory
/// - `feature.xml` anywhere
///
/// Any other file is never opened. Traversal order carries no guarantee.
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - Paths of all rewritten files
/// * `Err` - First read/write failure; the pass stops there, already-written
///   files stay written
pub fn apply_version_bump(
    root: &Path,
    old: &Version,
    new: &Version,
    options: &RewriteOptions,
) -> Result<Vec<PathBuf>> {
    let mut updated = Vec::new();

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        !name.starts_with('.') && !options.exclude_dirs.iter().any(|d| *d == name)
    });

    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let rewritten = match entry.file_name().to_str() {
            Some("pom.xml") => {
                let content = fs::read_to_string(path)?;
                Some(pom::substitute(&content, old, new))
            }
            Some("MANIFEST.MF") if parent_is_meta_inf(path) => {
                let content = fs::read_to_string(path)?;
                Some(manifest::substitute(
                    &content,
                    old,
                    new,
                    &options.bundle_prefix,
                ))
            }
            Some("feature.xml") => {
                let content = fs::read_to_string(path)?;
                Some(feature::substitute(&content, new))
            }
            _ => None,
        };

        if let Some(content) = rewritten {
            if !options.dry_run {
                fs::write(path, content)?;
            }
            updated.push(path.to_path_buf());
        }
    }

    Ok(updated)
}

fn parent_is_meta_inf(path: &Path) -> bool {
    path.parent()
        .and_then(|dir| dir.file_name())
        .map(|name| name == "META-INF")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> RewriteOptions {
        RewriteOptions {
            bundle_prefix: "com.example.editor".to_string(),
            exclude_dirs: vec!["target".to_string()],
            dry_run: false,
        }
    }

    fn write_file(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_parent_is_meta_inf() {
        assert!(parent_is_meta_inf(Path::new("a/META-INF/MANIFEST.MF")));
        assert!(!parent_is_meta_inf(Path::new("a/meta/MANIFEST.MF")));
        assert!(!parent_is_meta_inf(Path::new("MANIFEST.MF")));
    }

    #[test]
    fn test_unrecognized_files_not_touched() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            &dir.path().join("notes.txt"),
            "<version>1.2.3-SNAPSHOT</version>",
        );

        let updated = apply_version_bump(
            dir.path(),
            &Version::new(1, 2, 3),
            &Version::new(1, 3, 0),
            &options(),
        )
        .unwrap();
        assert!(updated.is_empty());
        assert_eq!(
            fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
            "<version>1.2.3-SNAPSHOT</version>"
        );
    }

    #[test]
    fn test_excluded_and_hidden_dirs_pruned() {
        let dir = tempfile::tempdir().unwrap();
        let pom = "<version>1.2.3-SNAPSHOT</version>";
        write_file(&dir.path().join("module/pom.xml"), pom);
        write_file(&dir.path().join("target/pom.xml"), pom);
        write_file(&dir.path().join("module/target/classes/pom.xml"), pom);
        write_file(&dir.path().join(".git/pom.xml"), pom);

        let updated = apply_version_bump(
            dir.path(),
            &Version::new(1, 2, 3),
            &Version::new(1, 3, 0),
            &options(),
        )
        .unwrap();

        assert_eq!(updated, vec![dir.path().join("module/pom.xml")]);
        assert_eq!(
            fs::read_to_string(dir.path().join("target/pom.xml")).unwrap(),
            pom
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("module/target/classes/pom.xml")).unwrap(),
            pom
        );
        assert_eq!(fs::read_to_string(dir.path().join(".git/pom.xml")).unwrap(), pom);
    }

    #[test]
    fn test_manifest_outside_meta_inf_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = "Bundle-Version: 1.2.3.qualifier\n";
        write_file(&dir.path().join("plugin/META-INF/MANIFEST.MF"), manifest);
        write_file(&dir.path().join("plugin/other/MANIFEST.MF"), manifest);

        let updated = apply_version_bump(
            dir.path(),
            &Version::new(1, 2, 3),
            &Version::new(1, 3, 0),
            &options(),
        )
        .unwrap();

        assert_eq!(updated, vec![dir.path().join("plugin/META-INF/MANIFEST.MF")]);
        assert_eq!(
            fs::read_to_string(dir.path().join("plugin/META-INF/MANIFEST.MF")).unwrap(),
            "Bundle-Version: 1.3.0.qualifier\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("plugin/other/MANIFEST.MF")).unwrap(),
            manifest
        );
    }

    #[test]
    fn test_no_match_file_rewritten_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let pom = "<project><version>9.9.9-SNAPSHOT</version></project>";
        write_file(&dir.path().join("pom.xml"), pom);

        let updated = apply_version_bump(
            dir.path(),
            &Version::new(1, 2, 3),
            &Version::new(1, 3, 0),
            &options(),
        )
        .unwrap();

        // still touched and reported, content unchanged
        assert_eq!(updated, vec![dir.path().join("pom.xml")]);
        assert_eq!(fs::read_to_string(dir.path().join("pom.xml")).unwrap(), pom);
    }

    #[test]
    fn test_dry_run_reports_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let pom = "<version>1.2.3-SNAPSHOT</version>";
        write_file(&dir.path().join("pom.xml"), pom);

        let mut opts = options();
        opts.dry_run = true;
        let updated = apply_version_bump(
            dir.path(),
            &Version::new(1, 2, 3),
            &Version::new(1, 3, 0),
            &opts,
        )
        .unwrap();

        assert_eq!(updated, vec![dir.path().join("pom.xml")]);
        assert_eq!(fs::read_to_string(dir.path().join("pom.xml")).unwrap(), pom);
    }
}
