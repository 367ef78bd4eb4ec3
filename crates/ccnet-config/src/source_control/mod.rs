// crates/ccnet-config/src/source_control/mod.rs

//! Source control providers: where a project gets its code and modifications.

mod cvs;
mod external;
mod filesystem;
mod filtered;
mod git;
mod hg;
mod multi;
mod null;
mod surround;
mod svn;
mod vss;

pub use cvs::CvsSourceControl;
pub use external::ExternalSourceControl;
pub use filesystem::FileSystemSourceControl;
pub use filtered::FilteredSourceControl;
pub use git::GitSourceControl;
pub use hg::MercurialSourceControl;
pub use multi::MultiSourceControl;
pub use null::NullSourceControl;
pub use surround::SurroundSourceControl;
pub use svn::SvnSourceControl;
pub use vss::VssSourceControl;

use crate::dispatch;
use crate::element::ConfigurationElement;
use crate::error::Result;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

/// Any `<sourcecontrol>` block.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceControl {
    Svn(SvnSourceControl),
    Git(GitSourceControl),
    Cvs(CvsSourceControl),
    Mercurial(MercurialSourceControl),
    FileSystem(FileSystemSourceControl),
    Null(NullSourceControl),
    Surround(SurroundSourceControl),
    Vss(VssSourceControl),
    External(ExternalSourceControl),
    Multi(MultiSourceControl),
    Filtered(FilteredSourceControl),
}

impl SourceControl {
    /// The discriminator of the wrapped variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            SourceControl::Svn(_) => SvnSourceControl::TYPE_NAME,
            SourceControl::Git(_) => GitSourceControl::TYPE_NAME,
            SourceControl::Cvs(_) => CvsSourceControl::TYPE_NAME,
            SourceControl::Mercurial(_) => MercurialSourceControl::TYPE_NAME,
            SourceControl::FileSystem(_) => FileSystemSourceControl::TYPE_NAME,
            SourceControl::Null(_) => NullSourceControl::TYPE_NAME,
            SourceControl::Surround(_) => SurroundSourceControl::TYPE_NAME,
            SourceControl::Vss(_) => VssSourceControl::TYPE_NAME,
            SourceControl::External(_) => ExternalSourceControl::TYPE_NAME,
            SourceControl::Multi(_) => MultiSourceControl::TYPE_NAME,
            SourceControl::Filtered(_) => FilteredSourceControl::TYPE_NAME,
        }
    }

    pub fn to_xml(&self, version: SchemaVersion) -> Result<XmlElement> {
        match self {
            SourceControl::Svn(sc) => sc.serialize(version),
            SourceControl::Git(sc) => sc.serialize(version),
            SourceControl::Cvs(sc) => sc.serialize(version),
            SourceControl::Mercurial(sc) => sc.serialize(version),
            SourceControl::FileSystem(sc) => sc.serialize(version),
            SourceControl::Null(sc) => sc.serialize(version),
            SourceControl::Surround(sc) => sc.serialize(version),
            SourceControl::Vss(sc) => sc.serialize(version),
            SourceControl::External(sc) => sc.serialize(version),
            SourceControl::Multi(sc) => sc.serialize(version),
            SourceControl::Filtered(sc) => sc.serialize(version),
        }
    }

    /// Instantiates the variant named by the node's `type` attribute, or by
    /// the node name in the legacy nested form.
    pub fn from_xml(node: &XmlElement) -> Result<Self> {
        dispatch::resolve(node, &dispatch::SOURCE_CONTROLS)
    }
}
