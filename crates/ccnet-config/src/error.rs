// crates/ccnet-config/src/error.rs

use crate::element::Category;
use core::fmt;
use core::str::Utf8Error;
use quick_xml::errors::serialize::DeError;
use quick_xml::escape::EscapeError;
use quick_xml::events::attributes::AttrError;
use quick_xml::Error as XmlError;
use std::string::FromUtf8Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, ConfigError>;

/// Errors that can occur while reading, writing or editing configuration elements.
#[derive(Debug)]
pub enum ConfigError {
    /// An error from the underlying `quick-xml` reader.
    XmlParsing(XmlError),

    /// A malformed attribute in the input document.
    XmlAttribute(AttrError),

    /// An attribute value contained an invalid escape sequence.
    XmlEscape(EscapeError),

    /// An error from the `quick-xml` serde deserializer (settings document).
    XmlDeserializing(DeError),

    /// An I/O error from the `quick-xml` writer.
    Io(std::io::Error),

    /// The document was not valid UTF-8.
    Utf8(Utf8Error),

    /// The document contained no root element.
    EmptyDocument,

    /// The document ended with unclosed elements.
    UnbalancedDocument,

    /// An entity or character reference that cannot be resolved (e.g. `&foo;`).
    InvalidReference(String),

    /// A schema version string that is not a dotted list of numbers.
    InvalidVersion(String),

    /// A required property was set to, or left at, an empty value.
    RequiredValueMissing {
        element: &'static str,
        property: &'static str,
    },

    /// A required property held a value that could not be parsed.
    InvalidValue {
        element: &'static str,
        property: &'static str,
        value: String,
    },

    /// The `type` of a node does not match the element it is deserialized into.
    TypeMismatch { found: String, expected: &'static str },

    /// No element of the given category is registered under this discriminator.
    UnknownDiscriminator {
        category: Category,
        discriminator: String,
    },

    /// The node carries neither a `type` attribute nor a variant element name.
    MissingDiscriminator { element: String },
}

impl From<XmlError> for ConfigError {
    fn from(e: XmlError) -> Self {
        ConfigError::XmlParsing(e)
    }
}

impl From<AttrError> for ConfigError {
    fn from(e: AttrError) -> Self {
        ConfigError::XmlAttribute(e)
    }
}

impl From<EscapeError> for ConfigError {
    fn from(e: EscapeError) -> Self {
        ConfigError::XmlEscape(e)
    }
}

impl From<DeError> for ConfigError {
    fn from(e: DeError) -> Self {
        ConfigError::XmlDeserializing(e)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<Utf8Error> for ConfigError {
    fn from(e: Utf8Error) -> Self {
        ConfigError::Utf8(e)
    }
}

impl From<FromUtf8Error> for ConfigError {
    fn from(e: FromUtf8Error) -> Self {
        ConfigError::Utf8(e.utf8_error())
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            ConfigError::XmlAttribute(e) => write!(f, "XML attribute error: {}", e),
            ConfigError::XmlEscape(e) => write!(f, "XML escape error: {}", e),
            ConfigError::XmlDeserializing(e) => write!(f, "XML deserializing error: {}", e),
            ConfigError::Io(e) => write!(f, "XML writing error: {}", e),
            ConfigError::Utf8(e) => write!(f, "Invalid UTF-8 in document: {}", e),
            ConfigError::EmptyDocument => write!(f, "Document contains no root element"),
            ConfigError::UnbalancedDocument => {
                write!(f, "Document ended before all elements were closed")
            }
            ConfigError::InvalidReference(name) => {
                write!(f, "Unresolvable entity reference: &{};", name)
            }
            ConfigError::InvalidVersion(v) => write!(f, "Invalid schema version: '{}'", v),
            ConfigError::RequiredValueMissing { element, property } => {
                write!(f, "Property '{}' of '{}' requires a value", property, element)
            }
            ConfigError::InvalidValue {
                element,
                property,
                value,
            } => write!(
                f,
                "Property '{}' of '{}' has an invalid value: '{}'",
                property, element, value
            ),
            ConfigError::TypeMismatch { found, expected } => write!(
                f,
                "Invalid cast: found type '{}' but expected '{}'",
                found, expected
            ),
            ConfigError::UnknownDiscriminator {
                category,
                discriminator,
            } => write!(f, "Unknown {} type: '{}'", category, discriminator),
            ConfigError::MissingDiscriminator { element } => {
                write!(f, "Element <{}> does not declare a type", element)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::XmlParsing(e) => Some(e),
            ConfigError::XmlAttribute(e) => Some(e),
            ConfigError::XmlEscape(e) => Some(e),
            ConfigError::XmlDeserializing(e) => Some(e),
            ConfigError::Io(e) => Some(e),
            ConfigError::Utf8(e) => Some(e),
            _ => None,
        }
    }
}
