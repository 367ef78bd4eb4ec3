// crates/ccnet-config/src/parser.rs

use crate::element::ConfigurationElement;
use crate::error::Result;
use crate::project::{ConfigElement, ProjectBlock};
use crate::xml::XmlElement;

/// Parses a configuration fragment and builds the element it describes.
///
/// The root element picks the category: `<project>`, `<sourcecontrol>`,
/// `<labeller>`, `<state>`, or one of the filter elements. Within a category
/// the `type` attribute picks the variant.
///
/// # Arguments
/// * `xml_content` - A string slice containing one XML fragment.
///
/// # Errors
/// Returns a `ConfigError` if the XML is malformed, the discriminator is
/// unknown, or a required property is absent.
pub fn load_element_from_str(xml_content: &str) -> Result<ConfigElement> {
    let root = XmlElement::parse(xml_content)?;
    ConfigElement::from_xml(&root)
}

/// Parses a `<project>` fragment.
///
/// # Errors
/// Returns a `ConfigError` if the XML is malformed, the root is not a
/// `<project>`, or the project has no name.
pub fn load_project_from_str(xml_content: &str) -> Result<ProjectBlock> {
    let root = XmlElement::parse(xml_content)?;
    ProjectBlock::deserialize(&root)
}
