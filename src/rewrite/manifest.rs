use regex::Regex;

use crate::version::Version;

/// Rewrites version markers in an OSGi MANIFEST.MF:
///
/// 1. The first `Bundle-Version: {old}.qualifier` header (at most one).
/// 2. Every `;bundle-version="..."` constraint whose symbolic name starts
///    with `{bundle_prefix}.`, preserving prefix text and quotes verbatim.
pub fn substitute(content: &str, old: &Version, new: &Version, bundle_prefix: &str) -> String {
    let content = content.replacen(
        &format!("Bundle-Version: {}.qualifier", old),
        &format!("Bundle-Version: {}.qualifier", new),
        1,
    );

    let pattern = format!(
        r#"({}\.[^;"\n]+;bundle-version=")([^"]+)(")"#,
        regex::escape(bundle_prefix)
    );
    match Regex::new(&pattern) {
        Ok(re) => re
            .replace_all(&content, format!("${{1}}{}${{3}}", new))
            .into_owned(),
        Err(_) => content,
    }
}
