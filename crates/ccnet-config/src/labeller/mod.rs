// crates/ccnet-config/src/labeller/mod.rs

//! Labeller strategies: how the server names each build.

mod assembly_version;
mod date;
mod default;
mod file;
mod iteration;
mod last_change;
mod remote;

pub use assembly_version::AssemblyVersionLabeller;
pub use date::DateLabeller;
pub use default::DefaultLabeller;
pub use file::FileLabeller;
pub use iteration::IterationLabeller;
pub use last_change::LastChangeLabeller;
pub use remote::{RemoteProjectLabeller, StateFileLabeller};

use crate::dispatch;
use crate::element::ConfigurationElement;
use crate::error::Result;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

/// Any `<labeller>` block.
#[derive(Debug, Clone, PartialEq)]
pub enum Labeller {
    Default(DefaultLabeller),
    Date(DateLabeller),
    Iteration(IterationLabeller),
    AssemblyVersion(AssemblyVersionLabeller),
    LastChange(LastChangeLabeller),
    File(FileLabeller),
    StateFile(StateFileLabeller),
    RemoteProject(RemoteProjectLabeller),
}

impl Labeller {
    /// The discriminator of the wrapped variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Labeller::Default(_) => DefaultLabeller::TYPE_NAME,
            Labeller::Date(_) => DateLabeller::TYPE_NAME,
            Labeller::Iteration(_) => IterationLabeller::TYPE_NAME,
            Labeller::AssemblyVersion(_) => AssemblyVersionLabeller::TYPE_NAME,
            Labeller::LastChange(_) => LastChangeLabeller::TYPE_NAME,
            Labeller::File(_) => FileLabeller::TYPE_NAME,
            Labeller::StateFile(_) => StateFileLabeller::TYPE_NAME,
            Labeller::RemoteProject(_) => RemoteProjectLabeller::TYPE_NAME,
        }
    }

    pub fn to_xml(&self, version: SchemaVersion) -> Result<XmlElement> {
        match self {
            Labeller::Default(l) => l.serialize(version),
            Labeller::Date(l) => l.serialize(version),
            Labeller::Iteration(l) => l.serialize(version),
            Labeller::AssemblyVersion(l) => l.serialize(version),
            Labeller::LastChange(l) => l.serialize(version),
            Labeller::File(l) => l.serialize(version),
            Labeller::StateFile(l) => l.serialize(version),
            Labeller::RemoteProject(l) => l.serialize(version),
        }
    }

    /// Instantiates the variant named by the node's `type` attribute.
    pub fn from_xml(node: &XmlElement) -> Result<Self> {
        dispatch::resolve(node, &dispatch::LABELLERS)
    }
}

impl Default for Labeller {
    fn default() -> Self {
        Labeller::Default(DefaultLabeller::default())
    }
}
