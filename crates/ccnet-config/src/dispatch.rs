// crates/ccnet-config/src/dispatch.rs

//! Maps discriminators to concrete element types.
//!
//! Each category has a static registry of `(discriminator, constructor)` pairs.
//! Composite elements dispatch through the same registries, so a `multi`
//! block can hold any mix of source control providers.

use crate::element::{Category, ConfigurationElement};
use crate::error::{ConfigError, Result};
use crate::filter::{ActionFilter, CommentFilter, Filter, PathFilter, UserFilter};
use crate::labeller::{
    AssemblyVersionLabeller, DateLabeller, DefaultLabeller, FileLabeller, IterationLabeller,
    LastChangeLabeller, Labeller, RemoteProjectLabeller, StateFileLabeller,
};
use crate::source_control::{
    CvsSourceControl, ExternalSourceControl, FileSystemSourceControl, FilteredSourceControl,
    GitSourceControl, MercurialSourceControl, MultiSourceControl, NullSourceControl,
    SourceControl, SurroundSourceControl, SvnSourceControl, VssSourceControl,
};
use crate::state::{FileStateManager, StateManager};
use crate::xml::XmlElement;
use log::debug;

pub(crate) type Constructor<T> = fn(&XmlElement) -> Result<T>;

/// The known variants of one category.
pub(crate) struct Registry<T: 'static> {
    pub category: Category,
    pub entries: &'static [(&'static str, Constructor<T>)],
}

impl<T> Registry<T> {
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + use<T> {
        self.entries.iter().map(|(name, _)| *name)
    }
}

pub(crate) static LABELLERS: Registry<Labeller> = Registry {
    category: Category::Labeller,
    entries: &[
        (DefaultLabeller::TYPE_NAME, |n| {
            DefaultLabeller::deserialize(n).map(Labeller::Default)
        }),
        (DateLabeller::TYPE_NAME, |n| {
            DateLabeller::deserialize(n).map(Labeller::Date)
        }),
        (IterationLabeller::TYPE_NAME, |n| {
            IterationLabeller::deserialize(n).map(Labeller::Iteration)
        }),
        (AssemblyVersionLabeller::TYPE_NAME, |n| {
            AssemblyVersionLabeller::deserialize(n).map(Labeller::AssemblyVersion)
        }),
        (LastChangeLabeller::TYPE_NAME, |n| {
            LastChangeLabeller::deserialize(n).map(Labeller::LastChange)
        }),
        (FileLabeller::TYPE_NAME, |n| {
            FileLabeller::deserialize(n).map(Labeller::File)
        }),
        (StateFileLabeller::TYPE_NAME, |n| {
            StateFileLabeller::deserialize(n).map(Labeller::StateFile)
        }),
        (RemoteProjectLabeller::TYPE_NAME, |n| {
            RemoteProjectLabeller::deserialize(n).map(Labeller::RemoteProject)
        }),
    ],
};

pub(crate) static SOURCE_CONTROLS: Registry<SourceControl> = Registry {
    category: Category::SourceControl,
    entries: &[
        (SvnSourceControl::TYPE_NAME, |n| {
            SvnSourceControl::deserialize(n).map(SourceControl::Svn)
        }),
        (GitSourceControl::TYPE_NAME, |n| {
            GitSourceControl::deserialize(n).map(SourceControl::Git)
        }),
        (CvsSourceControl::TYPE_NAME, |n| {
            CvsSourceControl::deserialize(n).map(SourceControl::Cvs)
        }),
        (MercurialSourceControl::TYPE_NAME, |n| {
            MercurialSourceControl::deserialize(n).map(SourceControl::Mercurial)
        }),
        (FileSystemSourceControl::TYPE_NAME, |n| {
            FileSystemSourceControl::deserialize(n).map(SourceControl::FileSystem)
        }),
        (NullSourceControl::TYPE_NAME, |n| {
            NullSourceControl::deserialize(n).map(SourceControl::Null)
        }),
        (SurroundSourceControl::TYPE_NAME, |n| {
            SurroundSourceControl::deserialize(n).map(SourceControl::Surround)
        }),
        (VssSourceControl::TYPE_NAME, |n| {
            VssSourceControl::deserialize(n).map(SourceControl::Vss)
        }),
        (ExternalSourceControl::TYPE_NAME, |n| {
            ExternalSourceControl::deserialize(n).map(SourceControl::External)
        }),
        (MultiSourceControl::TYPE_NAME, |n| {
            MultiSourceControl::deserialize(n).map(SourceControl::Multi)
        }),
        (FilteredSourceControl::TYPE_NAME, |n| {
            FilteredSourceControl::deserialize(n).map(SourceControl::Filtered)
        }),
    ],
};

pub(crate) static FILTERS: Registry<Filter> = Registry {
    category: Category::Filter,
    entries: &[
        (UserFilter::TYPE_NAME, |n| {
            UserFilter::deserialize(n).map(Filter::User)
        }),
        (PathFilter::TYPE_NAME, |n| {
            PathFilter::deserialize(n).map(Filter::Path)
        }),
        (ActionFilter::TYPE_NAME, |n| {
            ActionFilter::deserialize(n).map(Filter::Action)
        }),
        (CommentFilter::TYPE_NAME, |n| {
            CommentFilter::deserialize(n).map(Filter::Comment)
        }),
    ],
};

pub(crate) static STATE_MANAGERS: Registry<StateManager> = Registry {
    category: Category::State,
    entries: &[(FileStateManager::TYPE_NAME, |n| {
        FileStateManager::deserialize(n).map(StateManager::File)
    })],
};

/// Returns the discriminator of `node` within `category`.
///
/// Tagged categories read the `type` attribute. When it is absent, an element
/// named after the variant (CCNet's short form, e.g. `<svn>` inside
/// `<sourceControls>`) stands in for it. Untagged categories always use the
/// element name.
pub fn discriminator(node: &XmlElement, category: Category) -> Option<&str> {
    if !category.tagged_by_attribute() {
        return Some(node.name.as_str());
    }
    node.attribute("type")
        .or_else(|| (node.name != category.root_name()).then_some(node.name.as_str()))
}

/// Constructs the concrete variant `node` describes.
pub(crate) fn resolve<T>(node: &XmlElement, registry: &Registry<T>) -> Result<T> {
    let found = discriminator(node, registry.category).ok_or_else(|| {
        ConfigError::MissingDiscriminator {
            element: node.name.clone(),
        }
    })?;

    let (_, construct) = registry
        .entries
        .iter()
        .find(|(name, _)| *name == found)
        .ok_or_else(|| ConfigError::UnknownDiscriminator {
            category: registry.category,
            discriminator: found.to_string(),
        })?;

    debug!("Dispatching <{}> as {} '{}'", node.name, registry.category, found);
    construct(node)
}

/// The discriminators known for `category`, in palette order.
pub fn supported_types(category: Category) -> Vec<&'static str> {
    match category {
        Category::SourceControl => SOURCE_CONTROLS.type_names().collect(),
        Category::Labeller => LABELLERS.type_names().collect(),
        Category::State => STATE_MANAGERS.type_names().collect(),
        Category::Filter => FILTERS.type_names().collect(),
        Category::Project => vec![Category::Project.root_name()],
    }
}
