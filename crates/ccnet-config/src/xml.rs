// crates/ccnet-config/src/xml.rs

//! A small owned XML element tree.
//!
//! Configuration elements serialize into, and deserialize from, `XmlElement`
//! nodes. The tree is produced from text with the `quick-xml` pull reader and
//! written back with the `quick-xml` writer. Mixed content is not modelled:
//! an element carries either text or child elements, which is all a
//! `ccnet.config` file uses.

use crate::error::{ConfigError, Result};
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesDecl, BytesEnd, BytesRef, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

/// One element of an XML document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    pub name: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
    /// Trimmed text content; `None` when the element has no text.
    pub text: Option<String>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Creates a leaf element such as `<prefix>Foo-1-</prefix>`.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Returns the value of the attribute `name`, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets an attribute, replacing any previous value under the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Returns the first child element called `name`.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Iterates over all child elements called `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn push(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// The text content, or an empty string.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Returns the same element under a different name.
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Parses a document and returns its root element.
    ///
    /// Comments, processing instructions and the declaration are skipped.
    ///
    /// # Errors
    /// Returns a `ConfigError` for malformed XML, unresolvable references or
    /// a document without a root element.
    pub fn parse(xml: &str) -> Result<XmlElement> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<(XmlElement, String)> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    stack.push((Self::from_start(&e)?, String::new()));
                }
                Event::Empty(e) => {
                    let element = Self::from_start(&e)?;
                    Self::attach(&mut stack, &mut root, element);
                }
                Event::End(_) => {
                    let (mut element, text) = stack.pop().ok_or(ConfigError::UnbalancedDocument)?;
                    // Whitespace-only text is indentation; anything else is kept verbatim.
                    if !text.trim().is_empty() {
                        element.text = Some(text);
                    }
                    Self::attach(&mut stack, &mut root, element);
                }
                Event::Text(e) => {
                    if let Some((_, text)) = stack.last_mut() {
                        text.push_str(core::str::from_utf8(&e)?);
                    }
                }
                Event::CData(e) => {
                    if let Some((_, text)) = stack.last_mut() {
                        text.push_str(core::str::from_utf8(&e)?);
                    }
                }
                Event::GeneralRef(e) => {
                    if let Some((_, text)) = stack.last_mut() {
                        resolve_reference(&e, text)?;
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(ConfigError::UnbalancedDocument);
        }
        root.ok_or(ConfigError::EmptyDocument)
    }

    fn from_start(e: &BytesStart<'_>) -> Result<XmlElement> {
        let qname = e.name();
        let name = core::str::from_utf8(qname.as_ref())?;
        let mut element = XmlElement::new(name);
        for attr in e.attributes() {
            let attr = attr?;
            let key = core::str::from_utf8(attr.key.as_ref())?;
            let raw = core::str::from_utf8(&attr.value)?;
            let value = quick_xml::escape::unescape(raw)?;
            element.attributes.push((key.to_string(), value.into_owned()));
        }
        Ok(element)
    }

    fn attach(
        stack: &mut [(XmlElement, String)],
        root: &mut Option<XmlElement>,
        element: XmlElement,
    ) {
        match stack.last_mut() {
            Some((parent, _)) => parent.children.push(element),
            // Only the first top-level element is kept.
            None => {
                if root.is_none() {
                    *root = Some(element);
                }
            }
        }
    }

    /// Writes this element (and its subtree) as an XML string.
    ///
    /// `indent` is the number of spaces per nesting level; `0` writes everything
    /// on one line.
    pub fn write_to_string(&self, indent: usize, declaration: bool) -> Result<String> {
        let mut writer = if indent > 0 {
            Writer::new_with_indent(Vec::new(), b' ', indent)
        } else {
            Writer::new(Vec::new())
        };

        if declaration {
            writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        }
        self.write_into(&mut writer)?;

        Ok(String::from_utf8(writer.into_inner())?)
    }

    fn write_into(&self, writer: &mut Writer<Vec<u8>>) -> Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() && self.text.is_none() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        if let Some(text) = &self.text {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        for child in &self.children {
            child.write_into(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }
}

/// Appends the text of a character reference or predefined entity.
fn resolve_reference(reference: &BytesRef<'_>, text: &mut String) -> Result<()> {
    let name = core::str::from_utf8(reference)?;
    let invalid = || ConfigError::InvalidReference(name.to_string());

    match reference.resolve_char_ref().map_err(|_| invalid())? {
        Some(ch) => text.push(ch),
        None => text.push_str(resolve_predefined_entity(name).ok_or_else(invalid)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_document() {
        let xml = r#"<?xml version="1.0"?>
            <!-- a comment -->
            <sourcecontrol type="svn">
              <trunkUrl>svn://example/trunk</trunkUrl>
              <timeout units="minutes">5</timeout>
              <empty/>
            </sourcecontrol>"#;

        let root = XmlElement::parse(xml).unwrap();
        assert_eq!(root.name, "sourcecontrol");
        assert_eq!(root.attribute("type"), Some("svn"));
        assert_eq!(root.text, None);
        assert_eq!(root.children.len(), 3);
        assert_eq!(root.child("trunkUrl").unwrap().text(), "svn://example/trunk");
        assert_eq!(root.child("timeout").unwrap().attribute("units"), Some("minutes"));
        assert_eq!(root.child("empty").unwrap().text, None);
    }

    #[test]
    fn test_parse_resolves_references() {
        let xml = r#"<args a="x &amp; y">one &amp; two &#65;&#x42; <![CDATA[<raw>]]></args>"#;
        let root = XmlElement::parse(xml).unwrap();
        assert_eq!(root.attribute("a"), Some("x & y"));
        assert_eq!(root.text(), "one & two AB <raw>");
    }

    #[test]
    fn test_parse_keeps_edge_whitespace() {
        let xml = "<labeller>\n  <prefix>Build </prefix>\n  <separator> - </separator>\n</labeller>";
        let root = XmlElement::parse(xml).unwrap();
        assert_eq!(root.text, None);
        assert_eq!(root.child("prefix").unwrap().text(), "Build ");
        assert_eq!(root.child("separator").unwrap().text(), " - ");
    }

    #[test]
    fn test_parse_rejects_bad_character_reference() {
        let result = XmlElement::parse("<a>&#xZZ;</a>");
        assert!(matches!(result, Err(ConfigError::InvalidReference(ref name)) if name == "#xZZ"));
    }

    #[test]
    fn test_parse_rejects_unknown_entity() {
        let result = XmlElement::parse("<a>&nope;</a>");
        assert!(matches!(result, Err(ConfigError::InvalidReference(_))));
    }

    #[test]
    fn test_parse_empty_document() {
        let result = XmlElement::parse("<?xml version=\"1.0\"?>");
        assert!(matches!(result, Err(ConfigError::EmptyDocument)));
    }

    #[test]
    fn test_parse_unclosed_document() {
        let result = XmlElement::parse("<a><b>text</b>");
        assert!(result.is_err());
    }

    #[test]
    fn test_set_attribute_replaces() {
        let mut element = XmlElement::new("labeller");
        element.set_attribute("type", "a");
        element.set_attribute("type", "b");
        assert_eq!(element.attributes.len(), 1);
        assert_eq!(element.attribute("type"), Some("b"));
    }

    #[test]
    fn test_write_compact_and_escaped() {
        let mut root = XmlElement::new("labeller");
        root.set_attribute("type", "defaultlabeller");
        root.push(XmlElement::with_text("prefix", "A<B&C"));
        root.push(XmlElement::new("empty"));

        let xml = root.write_to_string(0, false).unwrap();
        assert_eq!(
            xml,
            r#"<labeller type="defaultlabeller"><prefix>A&lt;B&amp;C</prefix><empty/></labeller>"#
        );
    }

    #[test]
    fn test_write_then_parse_preserves_tree() {
        let mut root = XmlElement::new("project");
        root.set_attribute("name", "Quote \"me\"");
        let mut group = XmlElement::new("names");
        group.push(XmlElement::with_text("name", "alice"));
        group.push(XmlElement::with_text("name", "bob"));
        root.push(group);

        let xml = root.write_to_string(2, true).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));

        let parsed = XmlElement::parse(&xml).unwrap();
        assert_eq!(parsed, root);
    }
}
