// crates/ccnet-config/src/scalars.rs

//! Small value types shared by many elements: credentials, name/value pairs
//! and timeouts.

use crate::error::{ConfigError, Result};
use crate::version::SchemaVersion;
use crate::xml::XmlElement;
use core::fmt;
use core::str::FromStr;
use core::time::Duration;
use log::warn;

// --- Password ---

/// Text shown in place of a secret.
pub const MASK: &str = "********";

/// A credential that never appears in `Debug` or `Display` output.
///
/// Equality compares the real value. The XML form is plain text, as CCNet
/// expects.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Password(String);

impl Password {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// The unmasked secret.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password({})", MASK)
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

// --- NameValuePair ---

/// Schema version from which pairs are written in attribute form.
pub const ATTRIBUTE_FORM_SINCE: SchemaVersion = SchemaVersion::V1_5;

/// A `name=value` entry, e.g. an environment variable for an external tool.
///
/// Older schemas write `<var>name=value</var>`; newer ones write
/// `<variable name="name" value="value"/>`. Both are accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameValuePair {
    pub name: String,
    pub value: String,
}

impl NameValuePair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The compact `name=value` text form.
    pub fn to_compact(&self) -> String {
        format!("{}={}", self.name, self.value)
    }

    /// Splits at the first `=`. Text without `=` becomes a name with an empty value.
    pub fn from_compact(text: &str) -> Self {
        match text.split_once('=') {
            Some((name, value)) => Self::new(name.trim(), value),
            None => Self::new(text.trim(), ""),
        }
    }

    pub fn to_xml(&self, version: SchemaVersion) -> XmlElement {
        if version >= ATTRIBUTE_FORM_SINCE {
            let mut element = XmlElement::new("variable");
            element.set_attribute("name", self.name.as_str());
            element.set_attribute("value", self.value.as_str());
            element
        } else {
            XmlElement::with_text("var", self.to_compact())
        }
    }

    /// Reads either form.
    ///
    /// # Errors
    /// `RequiredValueMissing` if the pair has no name.
    pub fn from_xml(node: &XmlElement) -> Result<Self> {
        let pair = match node.attribute("name") {
            Some(name) => Self::new(
                name,
                node.attribute("value").unwrap_or_else(|| node.text()),
            ),
            None => Self::from_compact(node.text()),
        };

        if pair.name.is_empty() {
            return Err(ConfigError::RequiredValueMissing {
                element: "variable",
                property: "name",
            });
        }
        Ok(pair)
    }
}

// --- Timeout ---

/// Unit of a `Timeout` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnits {
    #[default]
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnits {
    pub const fn as_str(self) -> &'static str {
        match self {
            TimeUnits::Milliseconds => "millis",
            TimeUnits::Seconds => "seconds",
            TimeUnits::Minutes => "minutes",
            TimeUnits::Hours => "hours",
        }
    }

    const fn millis_per_unit(self) -> u64 {
        match self {
            TimeUnits::Milliseconds => 1,
            TimeUnits::Seconds => 1_000,
            TimeUnits::Minutes => 60_000,
            TimeUnits::Hours => 3_600_000,
        }
    }
}

impl FromStr for TimeUnits {
    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "millis" | "milliseconds" => Ok(TimeUnits::Milliseconds),
            "seconds" => Ok(TimeUnits::Seconds),
            "minutes" => Ok(TimeUnits::Minutes),
            "hours" => Ok(TimeUnits::Hours),
            _ => Err(()),
        }
    }
}

/// A duration written as `<timeout units="minutes">5</timeout>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout {
    pub value: u64,
    pub units: TimeUnits,
}

impl Default for Timeout {
    /// Ten minutes, the CCNet default for source control operations.
    fn default() -> Self {
        Self::new(600_000, TimeUnits::Milliseconds)
    }
}

impl Timeout {
    pub const fn new(value: u64, units: TimeUnits) -> Self {
        Self { value, units }
    }

    pub fn to_duration(&self) -> Duration {
        Duration::from_millis(self.value.saturating_mul(self.units.millis_per_unit()))
    }

    pub fn to_xml(&self, name: &str) -> XmlElement {
        let mut element = XmlElement::with_text(name, self.value.to_string());
        element.set_attribute("units", self.units.as_str());
        element
    }

    /// Reads a timeout node. A missing `units` attribute means milliseconds.
    /// Unparseable values yield `None`.
    pub fn from_xml(node: &XmlElement) -> Option<Self> {
        let value = match node.text().trim().parse::<u64>() {
            Ok(value) => value,
            Err(_) => {
                warn!("Ignoring malformed timeout value '{}'", node.text());
                return None;
            }
        };

        let units = match node.attribute("units") {
            None => TimeUnits::Milliseconds,
            Some(raw) => match raw.parse() {
                Ok(units) => units,
                Err(()) => {
                    warn!("Ignoring timeout with unknown units '{}'", raw);
                    return None;
                }
            },
        };

        Some(Self::new(value, units))
    }
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.units.as_str())
    }
}
