use crate::version::Version;

/// Replaces every `<version>{old}-SNAPSHOT</version>` occurrence with the
/// new version. Exact substring substitution; release versions without the
/// `-SNAPSHOT` suffix are left alone.
pub fn substitute(content: &str, old: &Version, new: &Version) -> String {
    content.replace(
        &format!("<version>{}-SNAPSHOT</version>", old),
        &format!("<version>{}-SNAPSHOT</version>", new),
    )
}
