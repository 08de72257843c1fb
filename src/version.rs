use std::fmt;
use std::str::FromStr;

use crate::error::{BumpVersionError, Result};

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string of exactly the form "X.Y.Z".
    ///
    /// Stricter than semver: three dot-separated runs of ASCII digits,
    /// no prefix, no pre-release or build suffix.
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(BumpVersionError::parse(format!(
                "Unparseable version: '{}' - expected X.Y.Z",
                s
            )));
        }

        let mut components = [0u32; 3];
        for (i, part) in parts.iter().enumerate() {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(BumpVersionError::parse(format!(
                    "Unparseable version: '{}' - expected X.Y.Z",
                    s
                )));
            }
            components[i] = part.parse::<u32>().map_err(|_| {
                BumpVersionError::parse(format!("Version component out of range: {}", part))
            })?;
        }

        Ok(Version::new(components[0], components[1], components[2]))
    }

    /// Bump version according to the requested level
    pub fn bump(&self, level: BumpLevel) -> Self {
        match level {
            BumpLevel::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            BumpLevel::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            BumpLevel::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Version upgrade level requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpLevel {
    Major,
    Minor,
    Patch,
}

impl FromStr for BumpLevel {
    type Err = BumpVersionError;

    /// Case-insensitive; "micro" is an accepted synonym of "patch".
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(BumpLevel::Major),
            "minor" => Ok(BumpLevel::Minor),
            "micro" | "patch" => Ok(BumpLevel::Patch),
            _ => Err(BumpVersionError::unknown_level(s)),
        }
    }
}
