// crates/ccnet-config/src/descriptor.rs

//! Static per-property metadata.
//!
//! Every configuration element declares a `const` table of `PropertyDescriptor`s.
//! The table states the XML key of each property, whether it is required, and
//! which schema versions accept it. The builder and resolver consult these
//! descriptors instead of inspecting the element at runtime.

use crate::version::SchemaVersion;

/// Where a property lives on its parent node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A child element: `<prefix>Foo</prefix>`.
    Element,
    /// An attribute: `<project name="Foo">`.
    Attribute,
}

/// How a boolean property is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoolStyle {
    /// `True` / `False`.
    #[default]
    Word,
    /// `1` / `0`, kept for elements whose legacy readers expect it.
    Numeric,
}

/// Metadata for one property of a configuration element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// XML element or attribute name.
    pub name: &'static str,
    pub placement: Placement,
    pub required: bool,
    /// First schema version that accepts the property.
    pub min_version: Option<SchemaVersion>,
    /// Last schema version that accepts the property.
    pub max_version: Option<SchemaVersion>,
    pub bool_style: BoolStyle,
    /// `chrono` format string for date properties.
    pub date_format: Option<&'static str>,
    /// The value the CCNet server assumes when the property is omitted.
    /// Exposed through `ConfigurationElement::defaults_for`; never serialized.
    pub default: Option<&'static str>,
}

impl PropertyDescriptor {
    pub const fn element(name: &'static str) -> Self {
        Self {
            name,
            placement: Placement::Element,
            required: false,
            min_version: None,
            max_version: None,
            bool_style: BoolStyle::Word,
            date_format: None,
            default: None,
        }
    }

    pub const fn attribute(name: &'static str) -> Self {
        let mut descriptor = Self::element(name);
        descriptor.placement = Placement::Attribute;
        descriptor
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn since(mut self, version: SchemaVersion) -> Self {
        self.min_version = Some(version);
        self
    }

    pub const fn until(mut self, version: SchemaVersion) -> Self {
        self.max_version = Some(version);
        self
    }

    pub const fn numeric_bool(mut self) -> Self {
        self.bool_style = BoolStyle::Numeric;
        self
    }

    pub const fn date_format(mut self, format: &'static str) -> Self {
        self.date_format = Some(format);
        self
    }

    pub const fn default_value(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    /// Returns `true` when `version` lies within the property's `[min, max]` range.
    /// Missing bounds are open.
    pub fn is_valid_for(&self, version: SchemaVersion) -> bool {
        self.min_version.is_none_or(|min| version >= min)
            && self.max_version.is_none_or(|max| version <= max)
    }
}

/// Looks up a descriptor by XML name.
pub fn find(properties: &'static [PropertyDescriptor], name: &str) -> Option<&'static PropertyDescriptor> {
    properties.iter().find(|p| p.name == name)
}

/// The descriptors of `properties` that a document targeting `version` may contain.
pub fn valid_for(
    properties: &'static [PropertyDescriptor],
    version: SchemaVersion,
) -> impl Iterator<Item = &'static PropertyDescriptor> {
    properties.iter().filter(move |p| p.is_valid_for(version))
}
