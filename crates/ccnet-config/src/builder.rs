// crates/ccnet-config/src/builder.rs

//! Writes configuration elements to XML.
//!
//! `ElementBuilder` is the write half of the property mapping. Each element's
//! `serialize` feeds it one property at a time, together with the property's
//! descriptor. The builder then:
//! * drops properties that the target schema version does not accept,
//! * omits unset optional values,
//! * rejects unset required values,
//! * renders booleans and dates in the property's own style.

use crate::descriptor::{BoolStyle, Placement, PropertyDescriptor};
use crate::element::ConfigurationElement;
use crate::error::{ConfigError, Result};
use crate::project::{ConfigElement, ProjectBlock};
use crate::scalars::{Password, Timeout};
use crate::settings::Settings;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;
use chrono::NaiveDate;
use core::fmt::Display;
use log::debug;

/// Date format used when a date property does not declare its own.
pub(crate) const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Serializes any configuration element into an XML `String`.
///
/// # Arguments
/// * `element` - The element to write.
/// * `settings` - Target schema version and output layout.
///
/// # Errors
/// Returns a `ConfigError` if a required property is unset or writing fails.
pub fn save_element_to_string(element: &ConfigElement, settings: &Settings) -> Result<String> {
    let node = element.to_xml(settings.target_version)?;
    node.write_to_string(settings.indent, settings.declaration)
}

/// Serializes a `<project>` block into an XML `String`.
///
/// # Errors
/// Returns a `ConfigError` if a required property is unset or writing fails.
pub fn save_project_to_string(project: &ProjectBlock, settings: &Settings) -> Result<String> {
    let node = project.serialize(settings.target_version)?;
    node.write_to_string(settings.indent, settings.declaration)
}

/// Accumulates the XML node of a single element.
pub struct ElementBuilder {
    element: XmlElement,
    type_name: &'static str,
    version: SchemaVersion,
}

impl ElementBuilder {
    /// Starts the node for element `E`: the category root carrying a `type`
    /// attribute, or a node named after the variant for untagged categories.
    pub fn new<E: ConfigurationElement>(version: SchemaVersion) -> Self {
        let mut element = XmlElement::new(E::CATEGORY.element_name(E::TYPE_NAME));
        if E::CATEGORY.tagged_by_attribute() {
            element.set_attribute("type", E::TYPE_NAME);
        }
        Self {
            element,
            type_name: E::TYPE_NAME,
            version,
        }
    }

    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    pub fn string(&mut self, property: &PropertyDescriptor, value: Option<&str>) -> Result<()> {
        let value = value
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string);
        self.scalar(property, value)
    }

    pub fn bool(&mut self, property: &PropertyDescriptor, value: Option<bool>) -> Result<()> {
        let value = value.map(|v| {
            let text = match (property.bool_style, v) {
                (BoolStyle::Word, true) => "True",
                (BoolStyle::Word, false) => "False",
                (BoolStyle::Numeric, true) => "1",
                (BoolStyle::Numeric, false) => "0",
            };
            text.to_string()
        });
        self.scalar(property, value)
    }

    pub fn number<T: Display>(&mut self, property: &PropertyDescriptor, value: Option<T>) -> Result<()> {
        self.scalar(property, value.map(|v| v.to_string()))
    }

    pub fn date(&mut self, property: &PropertyDescriptor, value: Option<NaiveDate>) -> Result<()> {
        let format = property.date_format.unwrap_or(DEFAULT_DATE_FORMAT);
        self.scalar(property, value.map(|d| d.format(format).to_string()))
    }

    pub fn password(&mut self, property: &PropertyDescriptor, value: Option<&Password>) -> Result<()> {
        self.string(property, value.map(Password::expose))
    }

    pub fn timeout(&mut self, property: &PropertyDescriptor, value: Option<&Timeout>) -> Result<()> {
        self.node(property, value.map(|t| t.to_xml(property.name)))
    }

    /// Appends a nested node under the property's name.
    pub fn node(&mut self, property: &PropertyDescriptor, node: Option<XmlElement>) -> Result<()> {
        if !self.admits(property) {
            return Ok(());
        }
        match node {
            Some(node) => {
                self.element.push(node.renamed(property.name));
                Ok(())
            }
            None => self.missing(property),
        }
    }

    /// Wraps `items` in a container named after the property. An empty list
    /// writes nothing.
    pub fn list(&mut self, property: &PropertyDescriptor, items: Vec<XmlElement>) -> Result<()> {
        let container = (!items.is_empty()).then(|| {
            let mut container = XmlElement::new(property.name);
            container.children = items;
            container
        });
        self.node(property, container)
    }

    /// Writes `<names><name>a</name><name>b</name></names>` style lists.
    pub fn text_list(
        &mut self,
        property: &PropertyDescriptor,
        item_name: &str,
        values: &[String],
    ) -> Result<()> {
        let items = values
            .iter()
            .filter(|v| !v.trim().is_empty())
            .map(|v| XmlElement::with_text(item_name, v.as_str()))
            .collect();
        self.list(property, items)
    }

    pub fn finish(self) -> XmlElement {
        self.element
    }

    fn admits(&self, property: &PropertyDescriptor) -> bool {
        let valid = property.is_valid_for(self.version);
        if !valid {
            debug!(
                "Skipping '{}' of '{}': not part of schema {}",
                property.name, self.type_name, self.version
            );
        }
        valid
    }

    fn missing(&self, property: &PropertyDescriptor) -> Result<()> {
        if property.required {
            Err(ConfigError::RequiredValueMissing {
                element: self.type_name,
                property: property.name,
            })
        } else {
            Ok(())
        }
    }

    fn scalar(&mut self, property: &PropertyDescriptor, value: Option<String>) -> Result<()> {
        if !self.admits(property) {
            return Ok(());
        }
        match value {
            Some(value) => {
                match property.placement {
                    Placement::Element => {
                        self.element.push(XmlElement::with_text(property.name, value))
                    }
                    Placement::Attribute => self.element.set_attribute(property.name, value),
                }
                Ok(())
            }
            None => self.missing(property),
        }
    }
}
