// crates/ccnet-config/src/source_control/cvs.rs

use crate::builder::ElementBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::element::{self, Category, ConfigurationElement};
use crate::error::Result;
use crate::resolver::ElementResolver;
use crate::scalars::Timeout;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

const EXECUTABLE: PropertyDescriptor = PropertyDescriptor::element("executable").default_value("cvs");
const CVSROOT: PropertyDescriptor = PropertyDescriptor::element("cvsroot").required();
const MODULE: PropertyDescriptor = PropertyDescriptor::element("module").required();
const WORKING_DIRECTORY: PropertyDescriptor = PropertyDescriptor::element("workingDirectory");
const BRANCH: PropertyDescriptor = PropertyDescriptor::element("branch");
const AUTO_GET_SOURCE: PropertyDescriptor =
    PropertyDescriptor::element("autoGetSource").default_value("True");
const LABEL_ON_SUCCESS: PropertyDescriptor =
    PropertyDescriptor::element("labelOnSuccess").default_value("False");
const TAG_PREFIX: PropertyDescriptor = PropertyDescriptor::element("tagPrefix").default_value("ver-");
const CLEAN_COPY: PropertyDescriptor = PropertyDescriptor::element("cleanCopy").default_value("True");
const FORCE_CHECKOUT: PropertyDescriptor =
    PropertyDescriptor::element("forceCheckout").default_value("False");
const USE_HISTORY: PropertyDescriptor = PropertyDescriptor::element("useHistory")
    .until(SchemaVersion::V1_4_4)
    .default_value("False");
const SUPPRESS_REVISION_HEADER: PropertyDescriptor =
    PropertyDescriptor::element("suppressRevisionHeader")
        .since(SchemaVersion::V1_4)
        .default_value("False");
const RESTRICT_LOGINS: PropertyDescriptor = PropertyDescriptor::element("restrictLogins");
const TIMEOUT: PropertyDescriptor = PropertyDescriptor::element("timeout");

/// `<sourcecontrol type="cvs">`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CvsSourceControl {
    pub executable: Option<String>,
    cvsroot: String,
    module: String,
    pub working_directory: Option<String>,
    pub branch: Option<String>,
    pub auto_get_source: Option<bool>,
    pub label_on_success: Option<bool>,
    pub tag_prefix: Option<String>,
    pub clean_copy: Option<bool>,
    pub force_checkout: Option<bool>,
    /// Dropped from the schema after 1.4.4.
    pub use_history: Option<bool>,
    pub suppress_revision_header: Option<bool>,
    pub restrict_logins: Option<String>,
    pub timeout: Option<Timeout>,
}

impl CvsSourceControl {
    pub fn new(cvsroot: impl Into<String>, module: impl Into<String>) -> Result<Self> {
        let mut cvs = Self::default();
        cvs.set_cvsroot(cvsroot)?;
        cvs.set_module(module)?;
        Ok(cvs)
    }

    pub fn cvsroot(&self) -> &str {
        &self.cvsroot
    }

    pub fn set_cvsroot(&mut self, cvsroot: impl Into<String>) -> Result<()> {
        self.cvsroot = element::require::<Self>(&CVSROOT, cvsroot.into())?;
        Ok(())
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn set_module(&mut self, module: impl Into<String>) -> Result<()> {
        self.module = element::require::<Self>(&MODULE, module.into())?;
        Ok(())
    }
}

impl ConfigurationElement for CvsSourceControl {
    const CATEGORY: Category = Category::SourceControl;
    const TYPE_NAME: &'static str = "cvs";
    const PROPERTIES: &'static [PropertyDescriptor] = &[
        EXECUTABLE,
        CVSROOT,
        MODULE,
        WORKING_DIRECTORY,
        BRANCH,
        AUTO_GET_SOURCE,
        LABEL_ON_SUCCESS,
        TAG_PREFIX,
        CLEAN_COPY,
        FORCE_CHECKOUT,
        USE_HISTORY,
        SUPPRESS_REVISION_HEADER,
        RESTRICT_LOGINS,
        TIMEOUT,
    ];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.string(&EXECUTABLE, self.executable.as_deref())?;
        builder.string(&CVSROOT, Some(self.cvsroot.as_str()))?;
        builder.string(&MODULE, Some(self.module.as_str()))?;
        builder.string(&WORKING_DIRECTORY, self.working_directory.as_deref())?;
        builder.string(&BRANCH, self.branch.as_deref())?;
        builder.bool(&AUTO_GET_SOURCE, self.auto_get_source)?;
        builder.bool(&LABEL_ON_SUCCESS, self.label_on_success)?;
        builder.string(&TAG_PREFIX, self.tag_prefix.as_deref())?;
        builder.bool(&CLEAN_COPY, self.clean_copy)?;
        builder.bool(&FORCE_CHECKOUT, self.force_checkout)?;
        builder.bool(&USE_HISTORY, self.use_history)?;
        builder.bool(&SUPPRESS_REVISION_HEADER, self.suppress_revision_header)?;
        builder.string(&RESTRICT_LOGINS, self.restrict_logins.as_deref())?;
        builder.timeout(&TIMEOUT, self.timeout.as_ref())?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            executable: resolver.string(&EXECUTABLE)?,
            cvsroot: resolver.required(&CVSROOT)?,
            module: resolver.required(&MODULE)?,
            working_directory: resolver.string(&WORKING_DIRECTORY)?,
            branch: resolver.string(&BRANCH)?,
            auto_get_source: resolver.bool(&AUTO_GET_SOURCE)?,
            label_on_success: resolver.bool(&LABEL_ON_SUCCESS)?,
            tag_prefix: resolver.string(&TAG_PREFIX)?,
            clean_copy: resolver.bool(&CLEAN_COPY)?,
            force_checkout: resolver.bool(&FORCE_CHECKOUT)?,
            use_history: resolver.bool(&USE_HISTORY)?,
            suppress_revision_header: resolver.bool(&SUPPRESS_REVISION_HEADER)?,
            restrict_logins: resolver.string(&RESTRICT_LOGINS)?,
            timeout: resolver.timeout(&TIMEOUT)?,
        })
    }
}
