// crates/ccnet-config/src/labeller/iteration.rs

use crate::builder::ElementBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::element::{Category, ConfigurationElement};
use crate::error::Result;
use crate::resolver::ElementResolver;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;
use chrono::NaiveDate;

const PREFIX: PropertyDescriptor = PropertyDescriptor::element("prefix");
const DURATION: PropertyDescriptor = PropertyDescriptor::element("duration").default_value("2");
const RELEASE_START_DATE: PropertyDescriptor = PropertyDescriptor::element("releaseStartDate")
    .required()
    .date_format("%Y/%m/%d");
const SEPARATOR: PropertyDescriptor = PropertyDescriptor::element("separator").default_value(".");
const INCREMENT_ON_FAILURE: PropertyDescriptor =
    PropertyDescriptor::element("incrementOnFailure").default_value("False");

/// `<labeller type="iterationlabeller">`: labels of the form
/// `prefix.iteration.build`, where the iteration counts `duration`-week
/// periods since `releaseStartDate`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IterationLabeller {
    pub prefix: Option<String>,
    /// Iteration length in weeks.
    pub duration: Option<u32>,
    release_start_date: Option<NaiveDate>,
    pub separator: Option<String>,
    pub increment_on_failure: Option<bool>,
}

impl IterationLabeller {
    pub fn new(release_start_date: NaiveDate) -> Self {
        Self {
            release_start_date: Some(release_start_date),
            ..Default::default()
        }
    }

    pub fn release_start_date(&self) -> Option<NaiveDate> {
        self.release_start_date
    }

    pub fn set_release_start_date(&mut self, date: NaiveDate) {
        self.release_start_date = Some(date);
    }
}

impl ConfigurationElement for IterationLabeller {
    const CATEGORY: Category = Category::Labeller;
    const TYPE_NAME: &'static str = "iterationlabeller";
    const PROPERTIES: &'static [PropertyDescriptor] = &[
        PREFIX,
        DURATION,
        RELEASE_START_DATE,
        SEPARATOR,
        INCREMENT_ON_FAILURE,
    ];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.string(&PREFIX, self.prefix.as_deref())?;
        builder.number(&DURATION, self.duration)?;
        builder.date(&RELEASE_START_DATE, self.release_start_date)?;
        builder.string(&SEPARATOR, self.separator.as_deref())?;
        builder.bool(&INCREMENT_ON_FAILURE, self.increment_on_failure)?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            prefix: resolver.string(&PREFIX)?,
            duration: resolver.number(&DURATION)?,
            release_start_date: resolver.date(&RELEASE_START_DATE)?,
            separator: resolver.string(&SEPARATOR)?,
            increment_on_failure: resolver.bool(&INCREMENT_ON_FAILURE)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_release_date_uses_slash_format() {
        let date = NaiveDate::from_ymd_opt(2005, 1, 3).unwrap();
        let labeller = IterationLabeller::new(date);
        let node = labeller.serialize(SchemaVersion::LATEST).unwrap();
        assert_eq!(node.child("releaseStartDate").unwrap().text(), "2005/01/03");

        // Unpadded input, as hand-written configs often have it.
        let mut input = node.clone();
        input.children[0] = XmlElement::with_text("releaseStartDate", "2005/1/3");
        let back = IterationLabeller::deserialize(&input).unwrap();
        assert_eq!(back.release_start_date(), Some(date));
    }

    #[test]
    fn test_unset_release_date_fails_on_write() {
        let labeller = IterationLabeller::default();
        let err = labeller.serialize(SchemaVersion::LATEST).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::RequiredValueMissing {
                element: "iterationlabeller",
                property: "releaseStartDate"
            }
        ));
    }

    #[test]
    fn test_malformed_release_date_fails_on_read() {
        let mut node = XmlElement::new("labeller");
        node.set_attribute("type", "iterationlabeller");
        node.push(XmlElement::with_text("releaseStartDate", "03-01-2005"));
        let err = IterationLabeller::deserialize(&node).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
