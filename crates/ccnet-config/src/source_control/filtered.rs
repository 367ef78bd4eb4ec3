// crates/ccnet-config/src/source_control/filtered.rs

use super::SourceControl;
use crate::builder::ElementBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::element::{Category, ConfigurationElement};
use crate::error::Result;
use crate::filter::FilterGroup;
use crate::resolver::ElementResolver;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

const SOURCE_CONTROL_PROVIDER: PropertyDescriptor =
    PropertyDescriptor::element("sourceControlProvider").required();
const INCLUSION_FILTERS: PropertyDescriptor = PropertyDescriptor::element("inclusionFilters");
const EXCLUSION_FILTERS: PropertyDescriptor = PropertyDescriptor::element("exclusionFilters");

/// `<sourcecontrol type="filtered">`: wraps another provider and drops
/// modifications that fail the inclusion filters or match an exclusion filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilteredSourceControl {
    provider: Option<Box<SourceControl>>,
    pub inclusion_filters: FilterGroup,
    pub exclusion_filters: FilterGroup,
}

impl FilteredSourceControl {
    pub fn new(provider: SourceControl) -> Self {
        Self {
            provider: Some(Box::new(provider)),
            ..Default::default()
        }
    }

    pub fn provider(&self) -> Option<&SourceControl> {
        self.provider.as_deref()
    }

    pub fn set_provider(&mut self, provider: SourceControl) {
        self.provider = Some(Box::new(provider));
    }
}

impl ConfigurationElement for FilteredSourceControl {
    const CATEGORY: Category = Category::SourceControl;
    const TYPE_NAME: &'static str = "filtered";
    const PROPERTIES: &'static [PropertyDescriptor] =
        &[SOURCE_CONTROL_PROVIDER, INCLUSION_FILTERS, EXCLUSION_FILTERS];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        let provider = self
            .provider
            .as_deref()
            .map(|p| p.to_xml(version))
            .transpose()?;
        builder.node(&SOURCE_CONTROL_PROVIDER, provider)?;
        builder.node(&INCLUSION_FILTERS, self.inclusion_filters.to_xml(version)?)?;
        builder.node(&EXCLUSION_FILTERS, self.exclusion_filters.to_xml(version)?)?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        let provider = resolver
            .child(&SOURCE_CONTROL_PROVIDER)?
            .map(SourceControl::from_xml)
            .transpose()?
            .map(Box::new);

        let group = |property: &PropertyDescriptor| -> Result<FilterGroup> {
            Ok(resolver
                .child(property)?
                .map(FilterGroup::from_xml)
                .transpose()?
                .unwrap_or_default())
        };

        Ok(Self {
            provider,
            inclusion_filters: group(&INCLUSION_FILTERS)?,
            exclusion_filters: group(&EXCLUSION_FILTERS)?,
        })
    }
}
