// crates/ccnet-config/src/source_control/surround.rs

use crate::builder::ElementBuilder;
use crate::descriptor::PropertyDescriptor;
use crate::element::{Category, ConfigurationElement};
use crate::error::Result;
use crate::resolver::ElementResolver;
use crate::scalars::Timeout;
use crate::version::SchemaVersion;
use crate::xml::XmlElement;

const EXECUTABLE: PropertyDescriptor = PropertyDescriptor::element("executable").default_value("sscm");
const SERVER_CONNECT: PropertyDescriptor =
    PropertyDescriptor::element("serverconnect").default_value("127.0.0.1:4900");
const SERVER_LOGIN: PropertyDescriptor =
    PropertyDescriptor::element("serverlogin").default_value("Administrator:");
const BRANCH: PropertyDescriptor = PropertyDescriptor::element("branch");
const REPOSITORY: PropertyDescriptor = PropertyDescriptor::element("repository");
const FILE: PropertyDescriptor = PropertyDescriptor::element("file");
const WORKING_DIRECTORY: PropertyDescriptor = PropertyDescriptor::element("workingDirectory");
// Surround's own tool reads these two as integers.
const RECURSIVE: PropertyDescriptor = PropertyDescriptor::element("recursive")
    .numeric_bool()
    .default_value("0");
const SEARCH_REGEXP: PropertyDescriptor = PropertyDescriptor::element("searchregexp")
    .numeric_bool()
    .default_value("0");
const TIMEOUT: PropertyDescriptor = PropertyDescriptor::element("timeout");

/// `<sourcecontrol type="surround">`: Seapine Surround SCM.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SurroundSourceControl {
    pub executable: Option<String>,
    pub server_connect: Option<String>,
    pub server_login: Option<String>,
    pub branch: Option<String>,
    pub repository: Option<String>,
    pub file: Option<String>,
    pub working_directory: Option<String>,
    pub recursive: Option<bool>,
    pub search_regexp: Option<bool>,
    pub timeout: Option<Timeout>,
}

impl ConfigurationElement for SurroundSourceControl {
    const CATEGORY: Category = Category::SourceControl;
    const TYPE_NAME: &'static str = "surround";
    const PROPERTIES: &'static [PropertyDescriptor] = &[
        EXECUTABLE,
        SERVER_CONNECT,
        SERVER_LOGIN,
        BRANCH,
        REPOSITORY,
        FILE,
        WORKING_DIRECTORY,
        RECURSIVE,
        SEARCH_REGEXP,
        TIMEOUT,
    ];

    fn serialize(&self, version: SchemaVersion) -> Result<XmlElement> {
        let mut builder = ElementBuilder::new::<Self>(version);
        builder.string(&EXECUTABLE, self.executable.as_deref())?;
        builder.string(&SERVER_CONNECT, self.server_connect.as_deref())?;
        builder.string(&SERVER_LOGIN, self.server_login.as_deref())?;
        builder.string(&BRANCH, self.branch.as_deref())?;
        builder.string(&REPOSITORY, self.repository.as_deref())?;
        builder.string(&FILE, self.file.as_deref())?;
        builder.string(&WORKING_DIRECTORY, self.working_directory.as_deref())?;
        builder.bool(&RECURSIVE, self.recursive)?;
        builder.bool(&SEARCH_REGEXP, self.search_regexp)?;
        builder.timeout(&TIMEOUT, self.timeout.as_ref())?;
        Ok(builder.finish())
    }

    fn deserialize(node: &XmlElement) -> Result<Self> {
        let resolver = ElementResolver::new::<Self>(node)?;
        Ok(Self {
            executable: resolver.string(&EXECUTABLE)?,
            server_connect: resolver.string(&SERVER_CONNECT)?,
            server_login: resolver.string(&SERVER_LOGIN)?,
            branch: resolver.string(&BRANCH)?,
            repository: resolver.string(&REPOSITORY)?,
            file: resolver.string(&FILE)?,
            working_directory: resolver.string(&WORKING_DIRECTORY)?,
            recursive: resolver.bool(&RECURSIVE)?,
            search_regexp: resolver.bool(&SEARCH_REGEXP)?,
            timeout: resolver.timeout(&TIMEOUT)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_numeric() {
        let surround = SurroundSourceControl {
            recursive: Some(true),
            search_regexp: Some(false),
            ..Default::default()
        };

        let node = surround.serialize(SchemaVersion::LATEST).unwrap();
        assert_eq!(node.child("recursive").unwrap().text(), "1");
        assert_eq!(node.child("searchregexp").unwrap().text(), "0");

        let back = SurroundSourceControl::deserialize(&node).unwrap();
        assert_eq!(back, surround);
    }
}
