// crates/ccnet-config/src/source_control/hg.rs

use crate::builder::ElementBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::element::{self, Category, ConfigurationElement};
use crate::error::Result;
use crate::resolver::ElementResolver;
use crate::scalars::Timeout;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

const REPO: PropertyDescriptor = PropertyDescriptor::element("repo").required();
const BRANCH: PropertyDescriptor = PropertyDescriptor::element("branch").default_value("default");
const EXECUTABLE: PropertyDescriptor = PropertyDescriptor::element("executable").default_value("hg");
const WORKING_DIRECTORY: PropertyDescriptor = PropertyDescriptor::element("workingDirectory");
const AUTO_GET_SOURCE: PropertyDescriptor = PropertyDescriptor::element("autoGetSource")
    .since(SchemaVersion::V1_5)
    .default_value("True");
const TAG_ON_SUCCESS: PropertyDescriptor = PropertyDescriptor::element("tagOnSuccess")
    .since(SchemaVersion::V1_5)
    .default_value("False");
const TAG_COMMIT_MESSAGE: PropertyDescriptor =
    PropertyDescriptor::element("tagCommitMessage").since(SchemaVersion::V1_5);
const COMMIT_MODIFICATIONS: PropertyDescriptor = PropertyDescriptor::element("commitModifications")
    .since(SchemaVersion::V1_5)
    .default_value("False");
const COMMIT_UNTRACKED: PropertyDescriptor = PropertyDescriptor::element("commitUntracked")
    .since(SchemaVersion::V1_5)
    .default_value("False");
const COMMITTER_NAME: PropertyDescriptor =
    PropertyDescriptor::element("committerName").since(SchemaVersion::V1_5);
const PURGE_MODIFICATIONS: PropertyDescriptor = PropertyDescriptor::element("purgeModifications")
    .since(SchemaVersion::V1_5)
    .default_value("False");
const REVERT_MODIFICATIONS: PropertyDescriptor = PropertyDescriptor::element("revertModifications")
    .since(SchemaVersion::V1_5)
    .default_value("False");
const TIMEOUT: PropertyDescriptor = PropertyDescriptor::element("timeout").since(SchemaVersion::V1_5);

/// `<sourcecontrol type="hg">`: Mercurial.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MercurialSourceControl {
    repo: String,
    pub branch: Option<String>,
    pub executable: Option<String>,
    pub working_directory: Option<String>,
    pub auto_get_source: Option<bool>,
    pub tag_on_success: Option<bool>,
    pub tag_commit_message: Option<String>,
    pub commit_modifications: Option<bool>,
    pub commit_untracked: Option<bool>,
    pub committer_name: Option<String>,
    pub purge_modifications: Option<bool>,
    pub revert_modifications: Option<bool>,
    pub timeout: Option<Timeout>,
}

impl MercurialSourceControl {
    pub fn new(repo: impl Into<String>) -> Result<Self> {
        let mut hg = Self::default();
        hg.set_repo(repo)?;
        Ok(hg)
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn set_repo(&mut self, repo: impl Into<String>) -> Result<()> {
        self.repo = element::require::<Self>(&REPO, repo.into())?;
        Ok(())
    }
}

impl ConfigurationElement for MercurialSourceControl {
    const CATEGORY: Category = Category::SourceControl;
    const TYPE_NAME: &'static str = "hg";
    const PROPERTIES: &'static [PropertyDescriptor] = &[
        REPO,
        BRANCH,
        EXECUTABLE,
        WORKING_DIRECTORY,
        AUTO_GET_SOURCE,
        TAG_ON_SUCCESS,
        TAG_COMMIT_MESSAGE,
        COMMIT_MODIFICATIONS,
        COMMIT_UNTRACKED,
        COMMITTER_NAME,
        PURGE_MODIFICATIONS,
        REVERT_MODIFICATIONS,
        TIMEOUT,
    ];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.string(&REPO, Some(self.repo.as_str()))?;
        builder.string(&BRANCH, self.branch.as_deref())?;
        builder.string(&EXECUTABLE, self.executable.as_deref())?;
        builder.string(&WORKING_DIRECTORY, self.working_directory.as_deref())?;
        builder.bool(&AUTO_GET_SOURCE, self.auto_get_source)?;
        builder.bool(&TAG_ON_SUCCESS, self.tag_on_success)?;
        builder.string(&TAG_COMMIT_MESSAGE, self.tag_commit_message.as_deref())?;
        builder.bool(&COMMIT_MODIFICATIONS, self.commit_modifications)?;
        builder.bool(&COMMIT_UNTRACKED, self.commit_untracked)?;
        builder.string(&COMMITTER_NAME, self.committer_name.as_deref())?;
        builder.bool(&PURGE_MODIFICATIONS, self.purge_modifications)?;
        builder.bool(&REVERT_MODIFICATIONS, self.revert_modifications)?;
        builder.timeout(&TIMEOUT, self.timeout.as_ref())?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            repo: resolver.required(&REPO)?,
            branch: resolver.string(&BRANCH)?,
            executable: resolver.string(&EXECUTABLE)?,
            working_directory: resolver.string(&WORKING_DIRECTORY)?,
            auto_get_source: resolver.bool(&AUTO_GET_SOURCE)?,
            tag_on_success: resolver.bool(&TAG_ON_SUCCESS)?,
            tag_commit_message: resolver.string(&TAG_COMMIT_MESSAGE)?,
            commit_modifications: resolver.bool(&COMMIT_MODIFICATIONS)?,
            commit_untracked: resolver.bool(&COMMIT_UNTRACKED)?,
            committer_name: resolver.string(&COMMITTER_NAME)?,
            purge_modifications: resolver.bool(&PURGE_MODIFICATIONS)?,
            revert_modifications: resolver.bool(&REVERT_MODIFICATIONS)?,
            timeout: resolver.timeout(&TIMEOUT)?,
        })
    }
}
