// crates/ccnet-config/src/state.rs

//! Where the server keeps per-project build state between runs.

use crate::builder::ElementBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::dispatch;
use crate::element::{Category, ConfigurationElement};
use crate::error::Result;
use crate::resolver::ElementResolver;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

const DIRECTORY: PropertyDescriptor = PropertyDescriptor::element("directory");

/// `<state type="state">`: an XML state file per project, stored in
/// `directory` (the server's working directory when unset).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileStateManager {
    pub directory: Option<String>,
}

impl ConfigurationElement for FileStateManager {
    const CATEGORY: Category = Category::State;
    const TYPE_NAME: &'static str = "state";
    const PROPERTIES: &'static [PropertyDescriptor] = &[DIRECTORY];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.string(&DIRECTORY, self.directory.as_deref())?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            directory: resolver.string(&DIRECTORY)?,
        })
    }
}

/// Any `<state>` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateManager {
    File(FileStateManager),
}

impl StateManager {
    pub fn type_name(&self) -> &'static str {
        match self {
            StateManager::File(_) => FileStateManager::TYPE_NAME,
        }
    }

    pub fn to_xml(&self, version: SchemaVersion) -> Result<XmlElement> {
        match self {
            StateManager::File(s) => s.serialize(version),
        }
    }

    pub fn from_xml(node: &XmlElement) -> Result<Self> {
        dispatch::resolve(node, &dispatch::STATE_MANAGERS)
    }
}

impl Default for StateManager {
    fn default() -> Self {
        StateManager::File(FileStateManager::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_type_matches_root_name() {
        let state = FileStateManager {
            directory: Some(r"C:\ccnet\state".into()),
        };
        let node = state.serialize(SchemaVersion::LATEST).unwrap();
        assert_eq!(node.name, "state");
        assert_eq!(node.attribute("type"), Some("state"));

        let back = StateManager::from_xml(&node).unwrap();
        assert_eq!(back, StateManager::File(state));
    }

    #[test]
    fn test_untyped_state_is_rejected() {
        // The root name alone does not identify the variant.
        let node = XmlElement::new("state");
        assert!(StateManager::from_xml(&node).is_err());
    }
}
