// crates/ccnet-config/src/source_control/git.rs

use crate::builder::ElementBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::element::{self, Category, ConfigurationElement};
use crate::error::Result;
use crate::resolver::ElementResolver;
use crate::scalars::Timeout;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

const REPOSITORY: PropertyDescriptor = PropertyDescriptor::element("repository").required();
const BRANCH: PropertyDescriptor = PropertyDescriptor::element("branch").default_value("master");
const EXECUTABLE: PropertyDescriptor = PropertyDescriptor::element("executable").default_value("git");
const WORKING_DIRECTORY: PropertyDescriptor = PropertyDescriptor::element("workingDirectory");
const AUTO_GET_SOURCE: PropertyDescriptor =
    PropertyDescriptor::element("autoGetSource").default_value("True");
const TAG_ON_SUCCESS: PropertyDescriptor =
    PropertyDescriptor::element("tagOnSuccess").default_value("False");
const COMMIT_BUILD_MODIFICATIONS: PropertyDescriptor =
    PropertyDescriptor::element("commitBuildModifications")
        .since(SchemaVersion::V1_5)
        .default_value("False");
const COMMIT_UNTRACKED_FILES: PropertyDescriptor = PropertyDescriptor::element("commitUntrackedFiles")
    .since(SchemaVersion::V1_5)
    .default_value("False");
const TAG_COMMIT_MESSAGE: PropertyDescriptor = PropertyDescriptor::element("tagCommitMessage");
const TAG_NAME_FORMAT: PropertyDescriptor = PropertyDescriptor::element("tagNameFormat")
    .since(SchemaVersion::V1_6)
    .default_value("{0}");
const COMMITTER_NAME: PropertyDescriptor = PropertyDescriptor::element("committerName");
const COMMITTER_EMAIL: PropertyDescriptor = PropertyDescriptor::element("committerEMail");
const FETCH_SUBMODULES: PropertyDescriptor = PropertyDescriptor::element("fetchSubmodules")
    .since(SchemaVersion::V1_6)
    .default_value("False");
const TIMEOUT: PropertyDescriptor = PropertyDescriptor::element("timeout");

/// `<sourcecontrol type="git">`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GitSourceControl {
    repository: String,
    pub branch: Option<String>,
    pub executable: Option<String>,
    pub working_directory: Option<String>,
    pub auto_get_source: Option<bool>,
    pub tag_on_success: Option<bool>,
    pub commit_build_modifications: Option<bool>,
    pub commit_untracked_files: Option<bool>,
    pub tag_commit_message: Option<String>,
    pub tag_name_format: Option<String>,
    pub committer_name: Option<String>,
    pub committer_email: Option<String>,
    pub fetch_submodules: Option<bool>,
    pub timeout: Option<Timeout>,
}

impl GitSourceControl {
    pub fn new(repository: impl Into<String>) -> Result<Self> {
        let mut git = Self::default();
        git.set_repository(repository)?;
        Ok(git)
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn set_repository(&mut self, repository: impl Into<String>) -> Result<()> {
        self.repository = element::require::<Self>(&REPOSITORY, repository.into())?;
        Ok(())
    }
}

impl ConfigurationElement for GitSourceControl {
    const CATEGORY: Category = Category::SourceControl;
    const TYPE_NAME: &'static str = "git";
    const PROPERTIES: &'static [PropertyDescriptor] = &[
        REPOSITORY,
        BRANCH,
        EXECUTABLE,
        WORKING_DIRECTORY,
        AUTO_GET_SOURCE,
        TAG_ON_SUCCESS,
        COMMIT_BUILD_MODIFICATIONS,
        COMMIT_UNTRACKED_FILES,
        TAG_COMMIT_MESSAGE,
        TAG_NAME_FORMAT,
        COMMITTER_NAME,
        COMMITTER_EMAIL,
        FETCH_SUBMODULES,
        TIMEOUT,
    ];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.string(&REPOSITORY, Some(self.repository.as_str()))?;
        builder.string(&BRANCH, self.branch.as_deref())?;
        builder.string(&EXECUTABLE, self.executable.as_deref())?;
        builder.string(&WORKING_DIRECTORY, self.working_directory.as_deref())?;
        builder.bool(&AUTO_GET_SOURCE, self.auto_get_source)?;
        builder.bool(&TAG_ON_SUCCESS, self.tag_on_success)?;
        builder.bool(&COMMIT_BUILD_MODIFICATIONS, self.commit_build_modifications)?;
        builder.bool(&COMMIT_UNTRACKED_FILES, self.commit_untracked_files)?;
        builder.string(&TAG_COMMIT_MESSAGE, self.tag_commit_message.as_deref())?;
        builder.string(&TAG_NAME_FORMAT, self.tag_name_format.as_deref())?;
        builder.string(&COMMITTER_NAME, self.committer_name.as_deref())?;
        builder.string(&COMMITTER_EMAIL, self.committer_email.as_deref())?;
        builder.bool(&FETCH_SUBMODULES, self.fetch_submodules)?;
        builder.timeout(&TIMEOUT, self.timeout.as_ref())?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            repository: resolver.required(&REPOSITORY)?,
            branch: resolver.string(&BRANCH)?,
            executable: resolver.string(&EXECUTABLE)?,
            working_directory: resolver.string(&WORKING_DIRECTORY)?,
            auto_get_source: resolver.bool(&AUTO_GET_SOURCE)?,
            tag_on_success: resolver.bool(&TAG_ON_SUCCESS)?,
            commit_build_modifications: resolver.bool(&COMMIT_BUILD_MODIFICATIONS)?,
            commit_untracked_files: resolver.bool(&COMMIT_UNTRACKED_FILES)?,
            tag_commit_message: resolver.string(&TAG_COMMIT_MESSAGE)?,
            tag_name_format: resolver.string(&TAG_NAME_FORMAT)?,
            committer_name: resolver.string(&COMMITTER_NAME)?,
            committer_email: resolver.string(&COMMITTER_EMAIL)?,
            fetch_submodules: resolver.bool(&FETCH_SUBMODULES)?,
            timeout: resolver.timeout(&TIMEOUT)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_version() {
        let v15: Vec<_> = GitSourceControl::defaults_for(SchemaVersion::V1_5).collect();
        assert!(v15.contains(&("branch", "master")));
        assert!(v15.contains(&("executable", "git")));
        assert!(!v15.iter().any(|(name, _)| *name == "tagNameFormat"));
        assert!(!v15.iter().any(|(name, _)| *name == "repository"));

        let v16: Vec<_> = GitSourceControl::defaults_for(SchemaVersion::V1_6).collect();
        assert!(v16.contains(&("tagNameFormat", "{0}")));
    }

    #[test]
    fn test_1_6_properties_are_gated() {
        let mut git = GitSourceControl::new("git://example.org/repo.git").unwrap();
        git.tag_name_format = Some("CCNet-{0}".into());
        git.fetch_submodules = Some(true);
        git.commit_untracked_files = Some(false);

        let v15 = git.serialize(SchemaVersion::V1_5).unwrap();
        assert!(v15.child("tagNameFormat").is_none());
        assert!(v15.child("fetchSubmodules").is_none());
        assert_eq!(v15.child("commitUntrackedFiles").unwrap().text(), "False");

        let v16 = git.serialize(SchemaVersion::V1_6).unwrap();
        assert_eq!(v16.child("tagNameFormat").unwrap().text(), "CCNet-{0}");
        assert_eq!(v16.child("fetchSubmodules").unwrap().text(), "True");
    }

    #[test]
    fn test_newer_properties_are_read_from_any_document() {
        let xml = r#"<sourcecontrol type="git">
            <repository>git://example.org/repo.git</repository>
            <fetchSubmodules>true</fetchSubmodules>
        </sourcecontrol>"#;
        let node = XmlElement::parse(xml).unwrap();
        let git = GitSourceControl::deserialize(&node).unwrap();
        assert_eq!(git.repository(), "git://example.org/repo.git");
        assert_eq!(git.fetch_submodules, Some(true));
    }
}
