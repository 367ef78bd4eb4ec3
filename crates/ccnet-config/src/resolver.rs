// crates/ccnet-config/src/resolver.rs

//! Reads configuration elements from XML.
//!
//! `ElementResolver` is the read half of the property mapping. Reading is
//! permissive:
//! * properties are accepted whatever schema version they belong to,
//! * unknown children are ignored,
//! * a malformed optional scalar is logged and treated as unset.
//!
//! Required properties fail hard when they are absent or malformed.

use crate::builder::DEFAULT_DATE_FORMAT;
use crate::descriptor::{Placement, PropertyDescriptor};
use crate::element::{self, ConfigurationElement};
use crate::error::{ConfigError, Result};
use crate::scalars::{Password, Timeout};
use crate::xml::XmlElement;
use chrono::NaiveDate;
use core::str::FromStr;
use log::warn;

/// Reads the properties of one element node.
pub struct ElementResolver<'a> {
    node: &'a XmlElement,
    type_name: &'static str,
}

impl<'a> ElementResolver<'a> {
    /// Verifies that `node` carries the discriminator of `E`.
    ///
    /// # Errors
    /// `TypeMismatch` or `MissingDiscriminator`.
    pub fn new<E: ConfigurationElement>(node: &'a XmlElement) -> Result<Self> {
        element::expect_discriminator::<E>(node)?;
        Ok(Self {
            node,
            type_name: E::TYPE_NAME,
        })
    }

    pub fn node(&self) -> &'a XmlElement {
        self.node
    }

    pub fn string(&self, property: &PropertyDescriptor) -> Result<Option<String>> {
        self.parse(property, |raw| Some(raw.to_string()))
    }

    /// Reads a required string property.
    pub fn required(&self, property: &PropertyDescriptor) -> Result<String> {
        self.string(property)?
            .ok_or_else(|| self.missing(property))
    }

    /// Accepts `True`/`False` in any case as well as `1`/`0`.
    pub fn bool(&self, property: &PropertyDescriptor) -> Result<Option<bool>> {
        self.parse(property, |raw| parse_bool(raw.trim()))
    }

    pub fn number<T: FromStr>(&self, property: &PropertyDescriptor) -> Result<Option<T>> {
        self.parse(property, |raw| raw.trim().parse().ok())
    }

    pub fn date(&self, property: &PropertyDescriptor) -> Result<Option<NaiveDate>> {
        let format = property.date_format.unwrap_or(DEFAULT_DATE_FORMAT);
        self.parse(property, |raw| NaiveDate::parse_from_str(raw.trim(), format).ok())
    }

    pub fn password(&self, property: &PropertyDescriptor) -> Result<Option<Password>> {
        Ok(self.string(property)?.map(Password::new))
    }

    pub fn timeout(&self, property: &PropertyDescriptor) -> Result<Option<Timeout>> {
        Ok(self.child(property)?.and_then(Timeout::from_xml))
    }

    /// The nested node stored under the property's name.
    pub fn child(&self, property: &PropertyDescriptor) -> Result<Option<&'a XmlElement>> {
        match self.node.child(property.name) {
            Some(child) => Ok(Some(child)),
            None if property.required => Err(self.missing(property)),
            None => Ok(None),
        }
    }

    /// The items inside the property's container, in document order.
    pub fn list(&self, property: &PropertyDescriptor) -> impl Iterator<Item = &'a XmlElement> + use<'a> {
        self.node
            .child(property.name)
            .into_iter()
            .flat_map(|container| container.children.iter())
    }

    /// The non-blank text of every item inside the property's container.
    pub fn text_list(&self, property: &PropertyDescriptor) -> Vec<String> {
        self.list(property)
            .map(XmlElement::text)
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    fn raw(&self, property: &PropertyDescriptor) -> Option<&'a str> {
        let value = match property.placement {
            Placement::Element => self.node.child(property.name).map(XmlElement::text),
            Placement::Attribute => self.node.attribute(property.name),
        };
        // Blank means unset; other values are returned exactly as written.
        value.filter(|v| !v.trim().is_empty())
    }

    fn missing(&self, property: &PropertyDescriptor) -> ConfigError {
        ConfigError::RequiredValueMissing {
            element: self.type_name,
            property: property.name,
        }
    }

    fn parse<T>(
        &self,
        property: &PropertyDescriptor,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>> {
        let Some(raw) = self.raw(property) else {
            return if property.required {
                Err(self.missing(property))
            } else {
                Ok(None)
            };
        };

        match parse(raw) {
            Some(value) => Ok(Some(value)),
            None if property.required => Err(ConfigError::InvalidValue {
                element: self.type_name,
                property: property.name,
                value: raw.to_string(),
            }),
            None => {
                warn!(
                    "Ignoring malformed value '{}' for '{}' of '{}'",
                    raw, property.name, self.type_name
                );
                Ok(None)
            }
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") || raw == "1" {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
        Some(false)
    } else {
        None
    }
}
