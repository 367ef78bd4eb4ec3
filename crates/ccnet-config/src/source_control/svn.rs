// crates/ccnet-config/src/source_control/svn.rs

use crate::builder::ElementBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::element::{self, Category, ConfigurationElement};
use crate::error::Result;
use crate::resolver::ElementResolver;
use crate::scalars::{Password, Timeout};
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

const TRUNK_URL: PropertyDescriptor = PropertyDescriptor::element("trunkUrl").required();
const EXECUTABLE: PropertyDescriptor = PropertyDescriptor::element("executable").default_value("svn");
const WORKING_DIRECTORY: PropertyDescriptor = PropertyDescriptor::element("workingDirectory");
const USERNAME: PropertyDescriptor = PropertyDescriptor::element("username");
const PASSWORD: PropertyDescriptor = PropertyDescriptor::element("password");
const TAG_ON_SUCCESS: PropertyDescriptor =
    PropertyDescriptor::element("tagOnSuccess").default_value("False");
const TAG_BASE_URL: PropertyDescriptor = PropertyDescriptor::element("tagBaseUrl");
const AUTO_GET_SOURCE: PropertyDescriptor =
    PropertyDescriptor::element("autoGetSource").default_value("True");
const CLEAN_COPY: PropertyDescriptor = PropertyDescriptor::element("cleanCopy").default_value("False");
const REVERT: PropertyDescriptor = PropertyDescriptor::element("revert")
    .since(SchemaVersion::V1_5)
    .default_value("False");
const CLEAN_UP: PropertyDescriptor = PropertyDescriptor::element("cleanUp")
    .since(SchemaVersion::V1_5)
    .default_value("False");
const CHECK_EXTERNALS: PropertyDescriptor = PropertyDescriptor::element("checkExternals")
    .since(SchemaVersion::V1_5)
    .default_value("False");
const TIMEOUT: PropertyDescriptor = PropertyDescriptor::element("timeout");

/// `<sourcecontrol type="svn">`: a Subversion working copy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SvnSourceControl {
    trunk_url: String,
    pub executable: Option<String>,
    pub working_directory: Option<String>,
    pub username: Option<String>,
    pub password: Option<Password>,
    pub tag_on_success: Option<bool>,
    pub tag_base_url: Option<String>,
    pub auto_get_source: Option<bool>,
    pub clean_copy: Option<bool>,
    pub revert: Option<bool>,
    pub clean_up: Option<bool>,
    pub check_externals: Option<bool>,
    pub timeout: Option<Timeout>,
}

impl SvnSourceControl {
    pub fn new(trunk_url: impl Into<String>) -> Result<Self> {
        let mut svn = Self::default();
        svn.set_trunk_url(trunk_url)?;
        Ok(svn)
    }

    pub fn trunk_url(&self) -> &str {
        &self.trunk_url
    }

    pub fn set_trunk_url(&mut self, url: impl Into<String>) -> Result<()> {
        self.trunk_url = element::require::<Self>(&TRUNK_URL, url.into())?;
        Ok(())
    }
}

impl ConfigurationElement for SvnSourceControl {
    const CATEGORY: Category = Category::SourceControl;
    const TYPE_NAME: &'static str = "svn";
    const PROPERTIES: &'static [PropertyDescriptor] = &[
        TRUNK_URL,
        EXECUTABLE,
        WORKING_DIRECTORY,
        USERNAME,
        PASSWORD,
        TAG_ON_SUCCESS,
        TAG_BASE_URL,
        AUTO_GET_SOURCE,
        CLEAN_COPY,
        REVERT,
        CLEAN_UP,
        CHECK_EXTERNALS,
        TIMEOUT,
    ];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.string(&TRUNK_URL, Some(self.trunk_url.as_str()))?;
        builder.string(&EXECUTABLE, self.executable.as_deref())?;
        builder.string(&WORKING_DIRECTORY, self.working_directory.as_deref())?;
        builder.string(&USERNAME, self.username.as_deref())?;
        builder.password(&PASSWORD, self.password.as_ref())?;
        builder.bool(&TAG_ON_SUCCESS, self.tag_on_success)?;
        builder.string(&TAG_BASE_URL, self.tag_base_url.as_deref())?;
        builder.bool(&AUTO_GET_SOURCE, self.auto_get_source)?;
        builder.bool(&CLEAN_COPY, self.clean_copy)?;
        builder.bool(&REVERT, self.revert)?;
        builder.bool(&CLEAN_UP, self.clean_up)?;
        builder.bool(&CHECK_EXTERNALS, self.check_externals)?;
        builder.timeout(&TIMEOUT, self.timeout.as_ref())?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            trunk_url: resolver.required(&TRUNK_URL)?,
            executable: resolver.string(&EXECUTABLE)?,
            working_directory: resolver.string(&WORKING_DIRECTORY)?,
            username: resolver.string(&USERNAME)?,
            password: resolver.password(&PASSWORD)?,
            tag_on_success: resolver.bool(&TAG_ON_SUCCESS)?,
            tag_base_url: resolver.string(&TAG_BASE_URL)?,
            auto_get_source: resolver.bool(&AUTO_GET_SOURCE)?,
            clean_copy: resolver.bool(&CLEAN_COPY)?,
            revert: resolver.bool(&REVERT)?,
            clean_up: resolver.bool(&CLEAN_UP)?,
            check_externals: resolver.bool(&CHECK_EXTERNALS)?,
            timeout: resolver.timeout(&TIMEOUT)?,
        })
    }
}
