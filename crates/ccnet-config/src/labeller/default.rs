// crates/ccnet-config/src/labeller/default.rs

use crate::builder::ElementBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::element::{Category, ConfigurationElement};
use crate::error::Result;
use crate::resolver::ElementResolver;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

const PREFIX: PropertyDescriptor = PropertyDescriptor::element("prefix");
const INCREMENT_ON_FAILURE: PropertyDescriptor =
    PropertyDescriptor::element("incrementOnFailure").default_value("False");
const LABEL_FORMAT: PropertyDescriptor = PropertyDescriptor::element("labelFormat")
    .since(SchemaVersion::V1_4)
    .default_value("0");
const INITIAL_BUILD_LABEL: PropertyDescriptor = PropertyDescriptor::element("initialBuildLabel")
    .since(SchemaVersion::V1_5)
    .default_value("1");

/// `<labeller type="defaultlabeller">`: an incrementing build number with an
/// optional prefix.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DefaultLabeller {
    pub prefix: Option<String>,
    pub increment_on_failure: Option<bool>,
    /// .NET numeric format applied to the build number.
    pub label_format: Option<String>,
    pub initial_build_label: Option<u32>,
}

impl ConfigurationElement for DefaultLabeller {
    const CATEGORY: Category = Category::Labeller;
    const TYPE_NAME: &'static str = "defaultlabeller";
    const PROPERTIES: &'static [PropertyDescriptor] =
        &[PREFIX, INCREMENT_ON_FAILURE, LABEL_FORMAT, INITIAL_BUILD_LABEL];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.string(&PREFIX, self.prefix.as_deref())?;
        builder.bool(&INCREMENT_ON_FAILURE, self.increment_on_failure)?;
        builder.string(&LABEL_FORMAT, self.label_format.as_deref())?;
        builder.number(&INITIAL_BUILD_LABEL, self.initial_build_label)?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            prefix: resolver.string(&PREFIX)?,
            increment_on_failure: resolver.bool(&INCREMENT_ON_FAILURE)?,
            label_format: resolver.string(&LABEL_FORMAT)?,
            initial_build_label: resolver.number(&INITIAL_BUILD_LABEL)?,
        })
    }
}
