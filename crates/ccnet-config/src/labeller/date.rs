// crates/ccnet-config/src/labeller/date.rs

use crate::builder::ElementBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::element::{Category, ConfigurationElement};
use crate::error::Result;
use crate::resolver::ElementResolver;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

const YEAR_FORMAT: PropertyDescriptor = PropertyDescriptor::element("yearFormat").default_value("0000");
const MONTH_FORMAT: PropertyDescriptor = PropertyDescriptor::element("monthFormat").default_value("00");
const DAY_FORMAT: PropertyDescriptor = PropertyDescriptor::element("dayFormat").default_value("00");
const REVISION_FORMAT: PropertyDescriptor = PropertyDescriptor::element("revisionFormat")
    .since(SchemaVersion::V1_5)
    .default_value("000");

/// `<labeller type="dateLabeller">`: labels of the form `yyyy.MM.dd.rev`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DateLabeller {
    pub year_format: Option<String>,
    pub month_format: Option<String>,
    pub day_format: Option<String>,
    pub revision_format: Option<String>,
}

impl ConfigurationElement for DateLabeller {
    const CATEGORY: Category = Category::Labeller;
    const TYPE_NAME: &'static str = "dateLabeller";
    const PROPERTIES: &'static [PropertyDescriptor] =
        &[YEAR_FORMAT, MONTH_FORMAT, DAY_FORMAT, REVISION_FORMAT];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.string(&YEAR_FORMAT, self.year_format.as_deref())?;
        builder.string(&MONTH_FORMAT, self.month_format.as_deref())?;
        builder.string(&DAY_FORMAT, self.day_format.as_deref())?;
        builder.string(&REVISION_FORMAT, self.revision_format.as_deref())?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            year_format: resolver.string(&YEAR_FORMAT)?,
            month_format: resolver.string(&MONTH_FORMAT)?,
            day_format: resolver.string(&DAY_FORMAT)?,
            revision_format: resolver.string(&REVISION_FORMAT)?,
        })
    }
}
