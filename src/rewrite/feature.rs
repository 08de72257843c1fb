use regex::Regex;

use crate::version::Version;

/// Replaces every `version="<digits-and-dots>.qualifier"` attribute with the
/// new version, keeping the `version="` prefix and `.qualifier"` suffix
/// verbatim. Attributes without the qualifier suffix are untouched.
pub fn substitute(content: &str, new: &Version) -> String {
    match Regex::new(r#"(version=")([0-9.]+)(\.qualifier")"#) {
        Ok(re) => re
            .replace_all(content, format!("${{1}}{}${{3}}", new))
            .into_owned(),
        Err(_) => content.to_string(),
    }
}
