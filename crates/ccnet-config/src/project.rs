// crates/ccnet-config/src/project.rs

//! The `<project>` block and the top-level element enum.

use crate::builder::ElementBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::element::{self, Category, ConfigurationElement};
use crate::error::Result;
use crate::filter::Filter;
use crate::labeller::Labeller;
use crate::resolver::ElementResolver;
use crate::source_control::SourceControl;
use crate::state::StateManager;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

const NAME: PropertyDescriptor = PropertyDescriptor::attribute("name").required();
const SOURCE_CONTROL: PropertyDescriptor = PropertyDescriptor::element("sourcecontrol");
const LABELLER: PropertyDescriptor = PropertyDescriptor::element("labeller");
const STATE: PropertyDescriptor = PropertyDescriptor::element("state");

/// A `<project name="..">` fragment holding the blocks this crate models.
///
/// Other project children (tasks, publishers, triggers) are not represented
/// and are dropped when a project is loaded and saved again.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectBlock {
    name: String,
    pub source_control: Option<SourceControl>,
    pub labeller: Option<Labeller>,
    pub state: Option<StateManager>,
}

impl ProjectBlock {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let mut project = Self::default();
        project.set_name(name)?;
        Ok(project)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = element::require::<Self>(&NAME, name.into())?;
        Ok(())
    }
}

impl ConfigurationElement for ProjectBlock {
    const CATEGORY: Category = Category::Project;
    const TYPE_NAME: &'static str = "project";
    const PROPERTIES: &'static [PropertyDescriptor] = &[NAME, SOURCE_CONTROL, LABELLER, STATE];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.string(&NAME, Some(self.name.as_str()))?;
        builder.node(
            &SOURCE_CONTROL,
            self.source_control.as_ref().map(|sc| sc.to_xml(version)).transpose()?,
        )?;
        builder.node(
            &LABELLER,
            self.labeller.as_ref().map(|l| l.to_xml(version)).transpose()?,
        )?;
        builder.node(
            &STATE,
            self.state.as_ref().map(|s| s.to_xml(version)).transpose()?,
        )?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            name: resolver.required(&NAME)?,
            source_control: resolver
                .child(&SOURCE_CONTROL)?
                .map(SourceControl::from_xml)
                .transpose()?,
            labeller: resolver
                .child(&LABELLER)?
                .map(Labeller::from_xml)
                .transpose()?,
            state: resolver.child(&STATE)?.map(StateManager::from_xml).transpose()?,
        })
    }
}

/// Any element that can be the root of a fragment document.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigElement {
    Project(ProjectBlock),
    SourceControl(SourceControl),
    Labeller(Labeller),
    State(StateManager),
    Filter(Filter),
}

impl ConfigElement {
    pub fn category(&self) -> Category {
        match self {
            ConfigElement::Project(_) => Category::Project,
            ConfigElement::SourceControl(_) => Category::SourceControl,
            ConfigElement::Labeller(_) => Category::Labeller,
            ConfigElement::State(_) => Category::State,
            ConfigElement::Filter(_) => Category::Filter,
        }
    }

    /// The discriminator of the wrapped element.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigElement::Project(_) => ProjectBlock::TYPE_NAME,
            ConfigElement::SourceControl(sc) => sc.type_name(),
            ConfigElement::Labeller(l) => l.type_name(),
            ConfigElement::State(s) => s.type_name(),
            ConfigElement::Filter(f) => f.type_name(),
        }
    }

    pub fn to_xml(&self, version: SchemaVersion) -> Result<XmlElement> {
        match self {
            ConfigElement::Project(p) => p.serialize(version),
            ConfigElement::SourceControl(sc) => sc.to_xml(version),
            ConfigElement::Labeller(l) => l.to_xml(version),
            ConfigElement::State(s) => s.to_xml(version),
            ConfigElement::Filter(f) => f.to_xml(version),
        }
    }

    /// Picks the category from the node name. Names that are not a category
    /// root are looked up as filters.
    pub fn from_xml(node: &XmlElement) -> Result<Self> {
        let root = node.name.as_str();
        if root == Category::Project.root_name() {
            ProjectBlock::deserialize(node).map(ConfigElement::Project)
        } else if root == Category::SourceControl.root_name() {
            SourceControl::from_xml(node).map(ConfigElement::SourceControl)
        } else if root == Category::Labeller.root_name() {
            Labeller::from_xml(node).map(ConfigElement::Labeller)
        } else if root == Category::State.root_name() {
            StateManager::from_xml(node).map(ConfigElement::State)
        } else {
            Filter::from_xml(node).map(ConfigElement::Filter)
        }
    }
}

impl From<ProjectBlock> for ConfigElement {
    fn from(project: ProjectBlock) -> Self {
        ConfigElement::Project(project)
    }
}

impl From<SourceControl> for ConfigElement {
    fn from(source_control: SourceControl) -> Self {
        ConfigElement::SourceControl(source_control)
    }
}

impl From<Labeller> for ConfigElement {
    fn from(labeller: Labeller) -> Self {
        ConfigElement::Labeller(labeller)
    }
}

impl From<StateManager> for ConfigElement {
    fn from(state: StateManager) -> Self {
        ConfigElement::State(state)
    }
}

impl From<Filter> for ConfigElement {
    fn from(filter: Filter) -> Self {
        ConfigElement::Filter(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::labeller::DefaultLabeller;
    use crate::source_control::NullSourceControl;

    #[test]
    fn test_name_is_an_attribute() {
        let mut project = ProjectBlock::new("Kernel").unwrap();
        project.labeller = Some(Labeller::Default(DefaultLabeller {
            prefix: Some("K-".into()),
            ..Default::default()
        }));

        let node = project.serialize(SchemaVersion::LATEST).unwrap();
        assert_eq!(node.name, "project");
        assert_eq!(node.attribute("name"), Some("Kernel"));
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].attribute("type"), Some("defaultlabeller"));
    }

    #[test]
    fn test_unknown_children_are_ignored() {
        let xml = r#"<project name="Kernel">
            <triggers><intervalTrigger seconds="60"/></triggers>
            <sourcecontrol type="nullSourceControl"/>
        </project>"#;
        let node = XmlElement::parse(xml).unwrap();
        let project = ProjectBlock::deserialize(&node).unwrap();
        assert_eq!(
            project.source_control,
            Some(SourceControl::Null(NullSourceControl::default()))
        );
        assert_eq!(project.labeller, None);
    }

    #[test]
    fn test_project_requires_name() {
        let node = XmlElement::new("project");
        let err = ProjectBlock::deserialize(&node).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::RequiredValueMissing { element: "project", property: "name" }
        ));
    }

    #[test]
    fn test_config_element_routes_by_root_name() {
        let mut node = XmlElement::new("state");
        node.set_attribute("type", "state");
        let element = ConfigElement::from_xml(&node).unwrap();
        assert_eq!(element.category(), Category::State);
        assert_eq!(element.type_name(), "state");

        let node = XmlElement::new("userFilter");
        let element = ConfigElement::from_xml(&node).unwrap();
        assert_eq!(element.category(), Category::Filter);
    }
}
