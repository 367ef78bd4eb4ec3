// crates/ccnet-config/src/source_control/vss.rs

use crate::builder::ElementBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::element::{self, Category, ConfigurationElement};
use crate::error::Result;
use crate::resolver::ElementResolver;
use crate::scalars::{Password, Timeout};
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

const EXECUTABLE: PropertyDescriptor = PropertyDescriptor::element("executable");
const PROJECT: PropertyDescriptor = PropertyDescriptor::element("project").required();
const USERNAME: PropertyDescriptor = PropertyDescriptor::element("username");
const PASSWORD: PropertyDescriptor = PropertyDescriptor::element("password");
const SSDIR: PropertyDescriptor = PropertyDescriptor::element("ssdir");
const WORKING_DIRECTORY: PropertyDescriptor = PropertyDescriptor::element("workingDirectory");
const CULTURE: PropertyDescriptor = PropertyDescriptor::element("culture");
const APPLY_LABEL: PropertyDescriptor = PropertyDescriptor::element("applyLabel").default_value("False");
const AUTO_GET_SOURCE: PropertyDescriptor =
    PropertyDescriptor::element("autoGetSource").default_value("True");
const ALWAYS_GET_LATEST: PropertyDescriptor =
    PropertyDescriptor::element("alwaysGetLatest").default_value("False");
const CLEAN_COPY: PropertyDescriptor = PropertyDescriptor::element("cleanCopy").default_value("False");
const TIMEOUT: PropertyDescriptor = PropertyDescriptor::element("timeout");

/// `<sourcecontrol type="vss">`: Visual SourceSafe.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VssSourceControl {
    pub executable: Option<String>,
    /// SourceSafe project path, e.g. `$/Product/Main`.
    project: String,
    pub username: Option<String>,
    pub password: Option<Password>,
    pub ssdir: Option<String>,
    pub working_directory: Option<String>,
    pub culture: Option<String>,
    pub apply_label: Option<bool>,
    pub auto_get_source: Option<bool>,
    pub always_get_latest: Option<bool>,
    pub clean_copy: Option<bool>,
    pub timeout: Option<Timeout>,
}

impl VssSourceControl {
    pub fn new(project: impl Into<String>) -> Result<Self> {
        let mut vss = Self::default();
        vss.set_project(project)?;
        Ok(vss)
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn set_project(&mut self, project: impl Into<String>) -> Result<()> {
        self.project = element::require::<Self>(&PROJECT, project.into())?;
        Ok(())
    }
}

impl ConfigurationElement for VssSourceControl {
    const CATEGORY: Category = Category::SourceControl;
    const TYPE_NAME: &'static str = "vss";
    const PROPERTIES: &'static [PropertyDescriptor] = &[
        EXECUTABLE,
        PROJECT,
        USERNAME,
        PASSWORD,
        SSDIR,
        WORKING_DIRECTORY,
        CULTURE,
        APPLY_LABEL,
        AUTO_GET_SOURCE,
        ALWAYS_GET_LATEST,
        CLEAN_COPY,
        TIMEOUT,
    ];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.string(&EXECUTABLE, self.executable.as_deref())?;
        builder.string(&PROJECT, Some(self.project.as_str()))?;
        builder.string(&USERNAME, self.username.as_deref())?;
        builder.password(&PASSWORD, self.password.as_ref())?;
        builder.string(&SSDIR, self.ssdir.as_deref())?;
        builder.string(&WORKING_DIRECTORY, self.working_directory.as_deref())?;
        builder.string(&CULTURE, self.culture.as_deref())?;
        builder.bool(&APPLY_LABEL, self.apply_label)?;
        builder.bool(&AUTO_GET_SOURCE, self.auto_get_source)?;
        builder.bool(&ALWAYS_GET_LATEST, self.always_get_latest)?;
        builder.bool(&CLEAN_COPY, self.clean_copy)?;
        builder.timeout(&TIMEOUT, self.timeout.as_ref())?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            executable: resolver.string(&EXECUTABLE)?,
            project: resolver.required(&PROJECT)?,
            username: resolver.string(&USERNAME)?,
            password: resolver.password(&PASSWORD)?,
            ssdir: resolver.string(&SSDIR)?,
            working_directory: resolver.string(&WORKING_DIRECTORY)?,
            culture: resolver.string(&CULTURE)?,
            apply_label: resolver.bool(&APPLY_LABEL)?,
            auto_get_source: resolver.bool(&AUTO_GET_SOURCE)?,
            always_get_latest: resolver.bool(&ALWAYS_GET_LATEST)?,
            clean_copy: resolver.bool(&CLEAN_COPY)?,
            timeout: resolver.timeout(&TIMEOUT)?,
        })
    }
}
