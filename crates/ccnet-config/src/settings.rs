// crates/ccnet-config/src/settings.rs

//! Output settings for saving configuration elements.

use crate::error::Result;
use crate::model::SettingsModel;
use crate::version::{SchemaVersion, VersionProvider};
use log::debug;

/// Indentation width used when none is configured.
pub const DEFAULT_INDENT: usize = 2;

/// How documents are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Schema version the output must conform to.
    pub target_version: SchemaVersion,
    /// Spaces per nesting level. `0` writes everything on one line.
    pub indent: usize,
    /// Whether to start the output with `<?xml version="1.0" encoding="utf-8"?>`.
    pub declaration: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_version: SchemaVersion::LATEST,
            indent: DEFAULT_INDENT,
            declaration: true,
        }
    }
}

impl Settings {
    /// Default settings targeting `version`.
    pub fn with_target_version(version: SchemaVersion) -> Self {
        Self {
            target_version: version,
            ..Self::default()
        }
    }

    /// Reads a `<settings .../>` document.
    ///
    /// # Errors
    /// `XmlDeserializing` if the document does not match the settings model,
    /// and `InvalidVersion` if `targetVersion` is not a dotted version.
    pub fn from_xml_str(xml_content: &str) -> Result<Self> {
        // 1. Deserialize into the raw model.
        let model: SettingsModel = quick_xml::de::from_str(xml_content)?;

        // 2. Resolve it, filling in defaults.
        let defaults = Self::default();
        let target_version = model
            .target_version
            .as_deref()
            .map(str::parse)
            .transpose()?
            .unwrap_or(defaults.target_version);

        let settings = Self {
            target_version,
            indent: model.indent.unwrap_or(defaults.indent),
            declaration: model.declaration.unwrap_or(defaults.declaration),
        };
        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }
}

impl VersionProvider for Settings {
    fn target_version(&self) -> SchemaVersion {
        self.target_version
    }
}
