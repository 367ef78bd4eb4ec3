// crates/ccnet-config/src/labeller/file.rs

use crate::builder::ElementBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::element::{self, Category, ConfigurationElement};
use crate::error::Result;
use crate::resolver::ElementResolver;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

const LABEL_FILE_PATH: PropertyDescriptor = PropertyDescriptor::element("labelFilePath").required();
const PREFIX: PropertyDescriptor = PropertyDescriptor::element("prefix");
const ALLOW_DUPLICATE_SUBSEQUENT_LABELS: PropertyDescriptor =
    PropertyDescriptor::element("allowDuplicateSubsequentLabels").default_value("True");

/// `<labeller type="fileLabeller">`: reads the label from a text file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FileLabeller {
    label_file_path: String,
    pub prefix: Option<String>,
    pub allow_duplicate_subsequent_labels: Option<bool>,
}

impl FileLabeller {
    pub fn new(label_file_path: impl Into<String>) -> Result<Self> {
        let mut labeller = Self::default();
        labeller.set_label_file_path(label_file_path)?;
        Ok(labeller)
    }

    pub fn label_file_path(&self) -> &str {
        &self.label_file_path
    }

    pub fn set_label_file_path(&mut self, path: impl Into<String>) -> Result<()> {
        self.label_file_path = element::require::<Self>(&LABEL_FILE_PATH, path.into())?;
        Ok(())
    }
}

impl ConfigurationElement for FileLabeller {
    const CATEGORY: Category = Category::Labeller;
    const TYPE_NAME: &'static str = "fileLabeller";
    const PROPERTIES: &'static [PropertyDescriptor] =
        &[LABEL_FILE_PATH, PREFIX, ALLOW_DUPLICATE_SUBSEQUENT_LABELS];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.string(&LABEL_FILE_PATH, Some(self.label_file_path.as_str()))?;
        builder.string(&PREFIX, self.prefix.as_deref())?;
        builder.bool(
            &ALLOW_DUPLICATE_SUBSEQUENT_LABELS,
            self.allow_duplicate_subsequent_labels,
        )?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            label_file_path: resolver.required(&LABEL_FILE_PATH)?,
            prefix: resolver.string(&PREFIX)?,
            allow_duplicate_subsequent_labels: resolver.bool(&ALLOW_DUPLICATE_SUBSEQUENT_LABELS)?,
        })
    }
}
