// crates/ccnet-config/src/source_control/external.rs

use crate::builder::ElementBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::element::{self, Category, ConfigurationElement};
use crate::error::Result;
use crate::resolver::ElementResolver;
use crate::scalars::NameValuePair;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

const EXECUTABLE: PropertyDescriptor = PropertyDescriptor::element("executable").required();
const ARGS: PropertyDescriptor = PropertyDescriptor::element("args");
const AUTO_GET_SOURCE: PropertyDescriptor =
    PropertyDescriptor::element("autoGetSource").default_value("False");
const LABEL_ON_SUCCESS: PropertyDescriptor =
    PropertyDescriptor::element("labelOnSuccess").default_value("False");
const ENVIRONMENT: PropertyDescriptor = PropertyDescriptor::element("environment");

/// `<sourcecontrol type="external">`: delegates to a user-supplied command.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExternalSourceControl {
    executable: String,
    pub args: Option<String>,
    pub auto_get_source: Option<bool>,
    pub label_on_success: Option<bool>,
    /// Extra environment variables for the command.
    pub environment: Vec<NameValuePair>,
}

impl ExternalSourceControl {
    pub fn new(executable: impl Into<String>) -> Result<Self> {
        let mut external = Self::default();
        external.set_executable(executable)?;
        Ok(external)
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn set_executable(&mut self, executable: impl Into<String>) -> Result<()> {
        self.executable = element::require::<Self>(&EXECUTABLE, executable.into())?;
        Ok(())
    }
}

impl ConfigurationElement for ExternalSourceControl {
    const CATEGORY: Category = Category::SourceControl;
    const TYPE_NAME: &'static str = "external";
    const PROPERTIES: &'static [PropertyDescriptor] =
        &[EXECUTABLE, ARGS, AUTO_GET_SOURCE, LABEL_ON_SUCCESS, ENVIRONMENT];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.string(&EXECUTABLE, Some(self.executable.as_str()))?;
        builder.string(&ARGS, self.args.as_deref())?;
        builder.bool(&AUTO_GET_SOURCE, self.auto_get_source)?;
        builder.bool(&LABEL_ON_SUCCESS, self.label_on_success)?;
        let variables = self
            .environment
            .iter()
            .map(|pair| pair.to_xml(version))
            .collect();
        builder.list(&ENVIRONMENT, variables)?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            executable: resolver.required(&EXECUTABLE)?,
            args: resolver.string(&ARGS)?,
            auto_get_source: resolver.bool(&AUTO_GET_SOURCE)?,
            label_on_success: resolver.bool(&LABEL_ON_SUCCESS)?,
            environment: resolver
                .list(&ENVIRONMENT)
                .map(NameValuePair::from_xml)
                .collect::<Result<_>>()?,
        })
    }
}
