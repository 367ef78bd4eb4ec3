// crates/ccnet-config/src/filter.rs

//! Modification filters used by `<sourcecontrol type="filtered">`.
//!
//! Unlike the other categories a filter has no `type` attribute; the element
//! name (`<pathFilter>`, `<userFilter>`, ...) is the discriminator.

use crate::builder::ElementBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::dispatch;
use crate::element::{Category, ConfigurationElement};
use crate::error::Result;
use crate::resolver::ElementResolver;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

const NAMES: PropertyDescriptor = PropertyDescriptor::element("names");
const ACTIONS: PropertyDescriptor = PropertyDescriptor::element("actions");
const PATTERN: PropertyDescriptor = PropertyDescriptor::element("pattern");
const PATH_CASE_SENSITIVE: PropertyDescriptor = PropertyDescriptor::element("caseSensitive")
    .since(SchemaVersion::V1_5)
    .default_value("True");
const COMMENT_CASE_SENSITIVE: PropertyDescriptor =
    PropertyDescriptor::element("caseSensitive").default_value("False");

/// `<userFilter>`: matches modifications committed by any of `names`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserFilter {
    pub names: Vec<String>,
}

impl ConfigurationElement for UserFilter {
    const CATEGORY: Category = Category::Filter;
    const TYPE_NAME: &'static str = "userFilter";
    const PROPERTIES: &'static [PropertyDescriptor] = &[NAMES];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.text_list(&NAMES, "name", &self.names)?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            names: resolver.text_list(&NAMES),
        })
    }
}

/// `<pathFilter>`: matches modified paths against an Ant-style glob.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathFilter {
    pub pattern: String,
    pub case_sensitive: Option<bool>,
}

impl ConfigurationElement for PathFilter {
    const CATEGORY: Category = Category::Filter;
    const TYPE_NAME: &'static str = "pathFilter";
    const PROPERTIES: &'static [PropertyDescriptor] = &[PATTERN, PATH_CASE_SENSITIVE];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.string(&PATTERN, Some(self.pattern.as_str()))?;
        builder.bool(&PATH_CASE_SENSITIVE, self.case_sensitive)?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            pattern: resolver.string(&PATTERN)?.unwrap_or_default(),
            case_sensitive: resolver.bool(&PATH_CASE_SENSITIVE)?,
        })
    }
}

/// `<actionFilter>`: matches modification types such as `added` or `deleted`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionFilter {
    pub actions: Vec<String>,
}

impl ConfigurationElement for ActionFilter {
    const CATEGORY: Category = Category::Filter;
    const TYPE_NAME: &'static str = "actionFilter";
    const PROPERTIES: &'static [PropertyDescriptor] = &[ACTIONS];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.text_list(&ACTIONS, "action", &self.actions)?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            actions: resolver.text_list(&ACTIONS),
        })
    }
}

/// `<commentFilter>`: matches check-in comments against a regular expression.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentFilter {
    pub pattern: String,
    pub case_sensitive: Option<bool>,
}

impl ConfigurationElement for CommentFilter {
    const CATEGORY: Category = Category::Filter;
    const TYPE_NAME: &'static str = "commentFilter";
    const PROPERTIES: &'static [PropertyDescriptor] = &[PATTERN, COMMENT_CASE_SENSITIVE];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.string(&PATTERN, Some(self.pattern.as_str()))?;
        builder.bool(&COMMENT_CASE_SENSITIVE, self.case_sensitive)?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            pattern: resolver.string(&PATTERN)?.unwrap_or_default(),
            case_sensitive: resolver.bool(&COMMENT_CASE_SENSITIVE)?,
        })
    }
}

/// Any modification filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    User(UserFilter),
    Path(PathFilter),
    Action(ActionFilter),
    Comment(CommentFilter),
}

impl Filter {
    pub fn type_name(&self) -> &'static str {
        match self {
            Filter::User(_) => UserFilter::TYPE_NAME,
            Filter::Path(_) => PathFilter::TYPE_NAME,
            Filter::Action(_) => ActionFilter::TYPE_NAME,
            Filter::Comment(_) => CommentFilter::TYPE_NAME,
        }
    }

    /// True when the filter has nothing to match on.
    pub fn is_blank(&self) -> bool {
        fn all_blank(values: &[String]) -> bool {
            values.iter().all(|v| v.trim().is_empty())
        }
        match self {
            Filter::User(f) => all_blank(&f.names),
            Filter::Path(f) => f.pattern.trim().is_empty(),
            Filter::Action(f) => all_blank(&f.actions),
            Filter::Comment(f) => f.pattern.trim().is_empty(),
        }
    }

    pub fn to_xml(&self, version: SchemaVersion) -> Result<XmlElement> {
        match self {
            Filter::User(f) => f.serialize(version),
            Filter::Path(f) => f.serialize(version),
            Filter::Action(f) => f.serialize(version),
            Filter::Comment(f) => f.serialize(version),
        }
    }

    pub fn from_xml(node: &XmlElement) -> Result<Self> {
        dispatch::resolve(node, &dispatch::FILTERS)
    }
}

/// The contents of an `<inclusionFilters>` or `<exclusionFilters>` block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterGroup {
    pub filters: Vec<Filter>,
}

impl FilterGroup {
    /// A group is empty when none of its filters has anything to match on.
    pub fn is_empty(&self) -> bool {
        self.filters.iter().all(Filter::is_blank)
    }

    /// Writes the non-blank filters into a container node. An empty group
    /// yields `None` and is left out of the document entirely.
    pub fn to_xml(&self, version: SchemaVersion) -> Result<Option<XmlElement>> {
        if self.is_empty() {
            return Ok(None);
        }
        let mut container = XmlElement::new("filters");
        for filter in self.filters.iter().filter(|f| !f.is_blank()) {
            container.push(filter.to_xml(version)?);
        }
        Ok(Some(container))
    }

    pub fn from_xml(node: &XmlElement) -> Result<Self> {
        let filters = node
            .children
            .iter()
            .map(Filter::from_xml)
            .collect::<Result<_>>()?;
        Ok(Self { filters })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_filter_is_named_by_element() {
        let filter = ActionFilter {
            actions: vec!["deleted".into()],
        };
        let node = filter.serialize(SchemaVersion::LATEST).unwrap();
        assert_eq!(node.name, "actionFilter");
        assert!(node.attributes.is_empty());
        assert_eq!(
            node.child("actions").unwrap().children,
            vec![XmlElement::with_text("action", "deleted")]
        );
    }

    #[test]
    fn test_blank_detection() {
        assert!(Filter::User(UserFilter { names: vec![" ".into()] }).is_blank());
        assert!(Filter::Comment(CommentFilter::default()).is_blank());
        assert!(!Filter::Path(PathFilter {
            pattern: "*.cs".into(),
            case_sensitive: None
        })
        .is_blank());

        let group = FilterGroup {
            filters: vec![
                Filter::User(UserFilter::default()),
                Filter::Action(ActionFilter::default()),
            ],
        };
        assert!(group.is_empty());
        assert_eq!(group.to_xml(SchemaVersion::LATEST).unwrap(), None);
        assert!(FilterGroup::default().is_empty());
    }

    #[test]
    fn test_blank_members_are_dropped_from_non_empty_group() {
        let group = FilterGroup {
            filters: vec![
                Filter::Path(PathFilter::default()),
                Filter::Comment(CommentFilter {
                    pattern: "^WIP".into(),
                    case_sensitive: Some(true),
                }),
            ],
        };
        let node = group.to_xml(SchemaVersion::LATEST).unwrap().unwrap();
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].name, "commentFilter");
    }

    #[test]
    fn test_path_case_sensitivity_needs_1_5() {
        let filter = PathFilter {
            pattern: "*.dll".into(),
            case_sensitive: Some(true),
        };
        let old = filter.serialize(SchemaVersion::V1_4_4).unwrap();
        assert!(old.child("caseSensitive").is_none());
        let new = filter.serialize(SchemaVersion::V1_5).unwrap();
        assert_eq!(new.child("caseSensitive").unwrap().text(), "True");
    }

    #[test]
    fn test_unknown_filter_element() {
        let node = XmlElement::new("dateFilter");
        let err = Filter::from_xml(&node).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownDiscriminator { category: Category::Filter, .. }));
    }
}
