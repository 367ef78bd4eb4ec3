// crates/ccnet-config/src/source_control/multi.rs

use super::SourceControl;
use crate::builder::ElementBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::element::{Category, ConfigurationElement};
use crate::error::Result;
use crate::resolver::ElementResolver;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

const REQUIRE_CHANGES_FROM_ALL: PropertyDescriptor =
    PropertyDescriptor::element("requireChangesFromAll").default_value("False");
const SOURCE_CONTROLS: PropertyDescriptor = PropertyDescriptor::element("sourceControls");

/// `<sourcecontrol type="multi">`: combines several providers into one.
///
/// Children are written as `<sourcecontrol type="..">` blocks. The legacy
/// short form, where each child is named after its type (`<svn>`, `<cvs>`),
/// is accepted on read.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiSourceControl {
    pub require_changes_from_all: Option<bool>,
    pub source_controls: Vec<SourceControl>,
}

impl ConfigurationElement for MultiSourceControl {
    const CATEGORY: Category = Category::SourceControl;
    const TYPE_NAME: &'static str = "multi";
    const PROPERTIES: &'static [PropertyDescriptor] = &[REQUIRE_CHANGES_FROM_ALL, SOURCE_CONTROLS];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.bool(&REQUIRE_CHANGES_FROM_ALL, self.require_changes_from_all)?;
        let children = self
            .source_controls
            .iter()
            .map(|sc| sc.to_xml(version))
            .collect::<Result<Vec<_>>>()?;
        builder.list(&SOURCE_CONTROLS, children)?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            require_changes_from_all: resolver.bool(&REQUIRE_CHANGES_FROM_ALL)?,
            source_controls: resolver
                .list(&SOURCE_CONTROLS)
                .map(SourceControl::from_xml)
                .collect::<Result<_>>()?,
        })
    }
}
