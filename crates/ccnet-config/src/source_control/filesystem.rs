// crates/ccnet-config/src/source_control/filesystem.rs

use crate::builder::ElementBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::element::{self, Category, ConfigurationElement};
use crate::error::Result;
use crate::resolver::ElementResolver;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

const REPOSITORY_ROOT: PropertyDescriptor = PropertyDescriptor::element("repositoryRoot").required();
const AUTO_GET_SOURCE: PropertyDescriptor =
    PropertyDescriptor::element("autoGetSource").default_value("False");
const IGNORE_MISSING_ROOT: PropertyDescriptor =
    PropertyDescriptor::element("ignoreMissingRoot").default_value("False");

/// `<sourcecontrol type="filesystem">`: watches a plain directory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FileSystemSourceControl {
    repository_root: String,
    pub auto_get_source: Option<bool>,
    pub ignore_missing_root: Option<bool>,
}

impl FileSystemSourceControl {
    pub fn new(repository_root: impl Into<String>) -> Result<Self> {
        let mut fs = Self::default();
        fs.set_repository_root(repository_root)?;
        Ok(fs)
    }

    pub fn repository_root(&self) -> &str {
        &self.repository_root
    }

    pub fn set_repository_root(&mut self, root: impl Into<String>) -> Result<()> {
        self.repository_root = element::require::<Self>(&REPOSITORY_ROOT, root.into())?;
        Ok(())
    }
}

impl ConfigurationElement for FileSystemSourceControl {
    const CATEGORY: Category = Category::SourceControl;
    const TYPE_NAME: &'static str = "filesystem";
    const PROPERTIES: &'static [PropertyDescriptor] =
        &[REPOSITORY_ROOT, AUTO_GET_SOURCE, IGNORE_MISSING_ROOT];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.string(&REPOSITORY_ROOT, Some(self.repository_root.as_str()))?;
        builder.bool(&AUTO_GET_SOURCE, self.auto_get_source)?;
        builder.bool(&IGNORE_MISSING_ROOT, self.ignore_missing_root)?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            repository_root: resolver.required(&REPOSITORY_ROOT)?,
            auto_get_source: resolver.bool(&AUTO_GET_SOURCE)?,
            ignore_missing_root: resolver.bool(&IGNORE_MISSING_ROOT)?,
        })
    }
}
