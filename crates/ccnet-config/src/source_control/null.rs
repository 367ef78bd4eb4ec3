// crates/ccnet-config/src/source_control/null.rs

use crate::builder::ElementBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::element::{Category, ConfigurationElement};
use crate::error::Result;
use crate::resolver::ElementResolver;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

const FAIL_GET_MODIFICATIONS: PropertyDescriptor =
    PropertyDescriptor::element("failGetModifications").default_value("False");
const FAIL_LABEL_SOURCE_CONTROL: PropertyDescriptor =
    PropertyDescriptor::element("failLabelSourceControl").default_value("False");
const FAIL_GET_SOURCE: PropertyDescriptor = PropertyDescriptor::element("failGetSource")
    .since(SchemaVersion::V1_5)
    .default_value("False");

/// `<sourcecontrol type="nullSourceControl">`: never reports modifications.
/// The `fail*` switches make it fail on purpose, for testing a server setup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NullSourceControl {
    pub fail_get_modifications: Option<bool>,
    pub fail_label_source_control: Option<bool>,
    pub fail_get_source: Option<bool>,
}

impl ConfigurationElement for NullSourceControl {
    const CATEGORY: Category = Category::SourceControl;
    const TYPE_NAME: &'static str = "nullSourceControl";
    const PROPERTIES: &'static [PropertyDescriptor] = &[
        FAIL_GET_MODIFICATIONS,
        FAIL_LABEL_SOURCE_CONTROL,
        FAIL_GET_SOURCE,
    ];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.bool(&FAIL_GET_MODIFICATIONS, self.fail_get_modifications)?;
        builder.bool(&FAIL_LABEL_SOURCE_CONTROL, self.fail_label_source_control)?;
        builder.bool(&FAIL_GET_SOURCE, self.fail_get_source)?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            fail_get_modifications: resolver.bool(&FAIL_GET_MODIFICATIONS)?,
            fail_label_source_control: resolver.bool(&FAIL_LABEL_SOURCE_CONTROL)?,
            fail_get_source: resolver.bool(&FAIL_GET_SOURCE)?,
        })
    }
}
