// crates/ccnet-config/src/version.rs

//! Target schema versions of the CCNet configuration format.

use crate::error::ConfigError;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

const MAX_COMPONENTS: usize = 4;

/// A dotted numeric schema version such as `1.4.4`.
///
/// Versions compare component by component, so `1.2 < 1.2.1 < 1.3`.
#[derive(Clone, Copy)]
pub struct SchemaVersion {
    parts: [u32; MAX_COMPONENTS],
    len: usize,
}

impl SchemaVersion {
    pub const V1_3: Self = Self::new(1, 3);
    pub const V1_4: Self = Self::new(1, 4);
    pub const V1_4_4: Self = Self::with_build(1, 4, 4);
    pub const V1_5: Self = Self::new(1, 5);
    pub const V1_6: Self = Self::new(1, 6);

    /// The newest schema this crate knows how to write.
    pub const LATEST: Self = Self::V1_6;

    /// All versions a user can pick as a target, oldest first.
    pub const KNOWN: [Self; 5] = [Self::V1_3, Self::V1_4, Self::V1_4_4, Self::V1_5, Self::V1_6];

    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            parts: [major, minor, 0, 0],
            len: 2,
        }
    }

    pub const fn with_build(major: u32, minor: u32, build: u32) -> Self {
        Self {
            parts: [major, minor, build, 0],
            len: 3,
        }
    }

    /// The numeric components, e.g. `[1, 4, 4]`.
    pub fn components(&self) -> &[u32] {
        &self.parts[..self.len]
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::LATEST
    }
}

impl PartialEq for SchemaVersion {
    fn eq(&self, other: &Self) -> bool {
        self.components() == other.components()
    }
}

impl Eq for SchemaVersion {}

impl Hash for SchemaVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.components().hash(state);
    }
}

impl Ord for SchemaVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components().cmp(other.components())
    }
}

impl PartialOrd for SchemaVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.components().iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SchemaVersion({})", self)
    }
}

impl FromStr for SchemaVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidVersion(s.to_string());
        let mut parts = [0u32; MAX_COMPONENTS];
        let mut len = 0;

        for piece in s.trim().split('.') {
            if len == MAX_COMPONENTS {
                return Err(invalid());
            }
            parts[len] = piece.parse().map_err(|_| invalid())?;
            len += 1;
        }

        Ok(Self { parts, len })
    }
}

/// Supplies the schema version that serialization should target.
pub trait VersionProvider {
    fn target_version(&self) -> SchemaVersion;
}

impl VersionProvider for SchemaVersion {
    fn target_version(&self) -> SchemaVersion {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> SchemaVersion {
        s.parse().unwrap()
    }

    #[test]
    fn test_dotted_numeric_ordering() {
        assert!(v("1.2") < v("1.2.1"));
        assert!(v("1.2.1") < v("1.3"));
        // Numeric, not lexical: 1.10 is newer than 1.9.
        assert!(v("1.9") < v("1.10"));
        assert_eq!(v("1.4.4"), SchemaVersion::V1_4_4);
    }

    #[test]
    fn test_display_round_trip() {
        for version in SchemaVersion::KNOWN {
            assert_eq!(v(&version.to_string()), version);
        }
        assert_eq!(SchemaVersion::V1_4_4.to_string(), "1.4.4");
    }

    #[test]
    fn test_known_versions_are_sorted() {
        assert!(SchemaVersion::KNOWN.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(SchemaVersion::KNOWN.last(), Some(&SchemaVersion::LATEST));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "1.x".parse::<SchemaVersion>(),
            Err(ConfigError::InvalidVersion(_))
        ));
        assert!("".parse::<SchemaVersion>().is_err());
        assert!("1.2.3.4.5".parse::<SchemaVersion>().is_err());
    }
}
