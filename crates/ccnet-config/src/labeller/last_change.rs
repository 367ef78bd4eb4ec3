// crates/ccnet-config/src/labeller/last_change.rs

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
const ALLOW_DUPLICATE_SUBSEQUENT_LABELS: PropertyDescriptor =
    PropertyDescriptor::element("allowDuplicateSubsequentLabels")
        .since(SchemaVersion::V1_5)
        .default_value("True");

/// `<labeller type="lastChangeLabeller">`: labels with the newest change number
/// reported by source control.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LastChangeLabeller {
    pub prefix: Option<String>,
    pub increment_on_failure: Option<bool>,
    pub allow_duplicate_subsequent_labels: Option<bool>,
}

impl ConfigurationElement for LastChangeLabeller {
    const CATEGORY: Category = Category::Labeller;
    const TYPE_NAME: &'static str = "lastChangeLabeller";
    const PROPERTIES: &'static [PropertyDescriptor] =
        &[PREFIX, INCREMENT_ON_FAILURE, ALLOW_DUPLICATE_SUBSEQUENT_LABELS];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.string(&PREFIX, self.prefix.as_deref())?;
        builder.bool(&INCREMENT_ON_FAILURE, self.increment_on_failure)?;
        builder.bool(
            &ALLOW_DUPLICATE_SUBSEQUENT_LABELS,
            self.allow_duplicate_subsequent_labels,
        )?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            prefix: resolver.string(&PREFIX)?,
            increment_on_failure: resolver.bool(&INCREMENT_ON_FAILURE)?,
            allow_duplicate_subsequent_labels: resolver.bool(&ALLOW_DUPLICATE_SUBSEQUENT_LABELS)?,
        })
    }
}
