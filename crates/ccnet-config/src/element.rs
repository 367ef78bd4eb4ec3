// crates/ccnet-config/src/element.rs

//! The contract shared by every configuration element.

use crate::descriptor::{self, PropertyDescriptor};
use crate::dispatch;
use crate::error::{ConfigError, Result};
use crate::version::SchemaVersion;
use crate::xml::XmlElement;
use core::fmt;

/// The kind of configuration block an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    SourceControl,
    Labeller,
    State,
    Filter,
    Project,
}

impl Category {
    /// The XML element name for blocks of this category.
    pub const fn root_name(self) -> &'static str {
        match self {
            Category::SourceControl => "sourcecontrol",
            Category::Labeller => "labeller",
            Category::State => "state",
            Category::Filter => "filter",
            Category::Project => "project",
        }
    }

    /// Whether variants are told apart by a `type` attribute. Filters and
    /// projects are identified by their element name instead.
    pub const fn tagged_by_attribute(self) -> bool {
        matches!(
            self,
            Category::SourceControl | Category::Labeller | Category::State
        )
    }

    /// The element name a variant called `type_name` is written under.
    pub const fn element_name(self, type_name: &'static str) -> &'static str {
        if self.tagged_by_attribute() {
            self.root_name()
        } else {
            type_name
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root_name())
    }
}

/// A node of the configuration tree that maps to one XML element.
///
/// `deserialize` builds a fresh value from a node; it never updates an existing
/// instance, so a failed load leaves nothing half-populated. `Clone` is a deep
/// copy: nested elements, credentials and timeouts are all owned.
pub trait ConfigurationElement: Clone + PartialEq + fmt::Debug + Sized {
    const CATEGORY: Category;

    /// The discriminator written to the `type` attribute (or used as the
    /// element name for categories without one).
    const TYPE_NAME: &'static str;

    /// Every property the element knows, in serialization order.
    const PROPERTIES: &'static [PropertyDescriptor];

    /// Writes the element for a document targeting `version`. Properties outside
    /// their version range and unset optional properties are omitted.
    ///
    /// # Errors
    /// `RequiredValueMissing` if a required property in range has no value.
    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement>;

    /// Reads an element from `node`. Unknown children are ignored.
    ///
    /// # Errors
    /// `TypeMismatch` if the node's discriminator is not `TYPE_NAME`, and
    /// `RequiredValueMissing`/`InvalidValue` for absent or malformed required
    /// properties.
    fn deserialize(node: &XmlElement) -> Result<Self>;

    /// Looks up one of this element's properties by XML name.
    fn property(name: &str) -> Option<&'static PropertyDescriptor> {
        descriptor::find(Self::PROPERTIES, name)
    }

    /// The properties a document targeting `version` may contain.
    fn properties_for(
        version: SchemaVersion,
    ) -> impl Iterator<Item = &'static PropertyDescriptor> {
        descriptor::valid_for(Self::PROPERTIES, version)
    }

    /// The value the server assumes for each omitted property, as
    /// `(name, default)` pairs for a document targeting `version`. Editors show
    /// these as placeholders; they are never written.
    fn defaults_for(
        version: SchemaVersion,
    ) -> impl Iterator<Item = (&'static str, &'static str)> {
        Self::properties_for(version).filter_map(|p| p.default.map(|value| (p.name, value)))
    }
}

/// Checks that `node` represents the element `E`.
pub(crate) fn expect_discriminator<E: ConfigurationElement>(node: &XmlElement) -> Result<()> {
    let found = dispatch::discriminator(node, E::CATEGORY).ok_or_else(|| {
        ConfigError::MissingDiscriminator {
            element: node.name.clone(),
        }
    })?;

    if found == E::TYPE_NAME {
        Ok(())
    } else {
        Err(ConfigError::TypeMismatch {
            found: found.to_string(),
            expected: E::TYPE_NAME,
        })
    }
}

/// Validates a value assigned to a required property.
pub(crate) fn require<E: ConfigurationElement>(
    property: &PropertyDescriptor,
    value: String,
) -> Result<String> {
    if value.trim().is_empty() {
        return Err(ConfigError::RequiredValueMissing {
            element: E::TYPE_NAME,
            property: property.name,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names() {
        assert_eq!(Category::SourceControl.root_name(), "sourcecontrol");
        assert_eq!(Category::Labeller.element_name("defaultlabeller"), "labeller");
        assert_eq!(Category::Filter.element_name("pathFilter"), "pathFilter");
        assert_eq!(Category::Project.element_name("project"), "project");
        assert!(!Category::Filter.tagged_by_attribute());
    }
}
