// crates/ccnet-config/src/labeller/assembly_version.rs

use crate::builder::ElementBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::element::{Category, ConfigurationElement};
use crate::error::Result;
use crate::resolver::ElementResolver;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

const MAJOR: PropertyDescriptor = PropertyDescriptor::element("major").default_value("0");
const MINOR: PropertyDescriptor = PropertyDescriptor::element("minor").default_value("0");
const BUILD: PropertyDescriptor = PropertyDescriptor::element("build").default_value("-1");
const REVISION: PropertyDescriptor = PropertyDescriptor::element("revision").default_value("-1");
const INCREMENT_ON_FAILURE: PropertyDescriptor = PropertyDescriptor::element("incrementOnFailure")
    .since(SchemaVersion::V1_4_4)
    .default_value("False");

/// `<labeller type="assemblyVersionLabeller">`: `major.minor.build.revision`
/// labels usable as .NET assembly versions. `-1` lets the server derive the
/// build and revision numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssemblyVersionLabeller {
    pub major: Option<i32>,
    pub minor: Option<i32>,
    pub build: Option<i32>,
    pub revision: Option<i32>,
    pub increment_on_failure: Option<bool>,
}

impl ConfigurationElement for AssemblyVersionLabeller {
    const CATEGORY: Category = Category::Labeller;
    const TYPE_NAME: &'static str = "assemblyVersionLabeller";
    const PROPERTIES: &'static [PropertyDescriptor] =
        &[MAJOR, MINOR, BUILD, REVISION, INCREMENT_ON_FAILURE];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.number(&MAJOR, self.major)?;
        builder.number(&MINOR, self.minor)?;
        builder.number(&BUILD, self.build)?;
        builder.number(&REVISION, self.revision)?;
        builder.bool(&INCREMENT_ON_FAILURE, self.increment_on_failure)?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            major: resolver.number(&MAJOR)?,
            minor: resolver.number(&MINOR)?,
            build: resolver.number(&BUILD)?,
            revision: resolver.number(&REVISION)?,
            increment_on_failure: resolver.bool(&INCREMENT_ON_FAILURE)?,
        })
    }
}
