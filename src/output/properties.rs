//! The javadoc map: package (or module) name to documentation URL.
//!
//! For every name found in a documentation index the map holds
//!
//! ```properties
//! org.slf4j=https\://www.slf4j.org/apidocs/
//! org.slf4j-module=org.slf4j
//! org.slf4j-artifact=org.slf4j\:slf4j-api
//! ```
//!
//! The `-module` entry exists when the index declares a module, the
//! `-artifact` entry when the URL came from a resolved offline artifact. The
//! first source to provide a name keeps it.
//!
//! Two serializations are supported, chosen by the output file name: Java
//! properties text, or the XML properties format when the name ends in `.xml`.

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::collections::BTreeMap;
use std::path::Path;
use url::Url;

use super::index::IndexEntry;
use crate::coordinate::VersionlessKey;
use crate::utils::atomic_write;

const MODULE_SUFFIX: &str = "-module";
const ARTIFACT_SUFFIX: &str = "-artifact";

const XML_PROLOG: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n",
    "<!DOCTYPE properties SYSTEM \"http://java.sun.com/dtd/properties.dtd\">\n"
);

/// Serialization of a [`JavadocMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertiesFormat {
    Plain,
    Xml,
}

impl PropertiesFormat {
    /// XML for file names ending in `.xml` (any case), plain otherwise.
    pub fn for_path(path: &Path) -> Self {
        let is_xml = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase().ends_with(".xml"))
            .unwrap_or(false);
        if is_xml { Self::Xml } else { Self::Plain }
    }
}

/// Sorted key/value table written as a properties file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JavadocMap {
    entries: BTreeMap<String, String>,
}

impl JavadocMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Record the entries of one index published at `url`.
    ///
    /// Names already present are left alone, together with their `-module`
    /// and `-artifact` entries. Returns the number of names added.
    pub fn add_index(
        &mut self,
        entries: &[IndexEntry],
        url: &Url,
        artifact: Option<&VersionlessKey>,
    ) -> usize {
        let mut added = 0;
        for entry in entries {
            if self.entries.contains_key(&entry.name) {
                continue;
            }
            self.entries.insert(entry.name.clone(), url.to_string());
            if let Some(module) = &entry.module {
                self.entries.insert(format!("{}{MODULE_SUFFIX}", entry.name), module.clone());
            }
            if let Some(key) = artifact {
                self.entries.insert(format!("{}{ARTIFACT_SUFFIX}", entry.name), key.to_string());
            }
            added += 1;
        }
        added
    }

    /// Java properties text with a `#comment` and a `#timestamp` line.
    pub fn render_plain(&self, comment: &str, timestamp: DateTime<FixedOffset>) -> String {
        let mut out = String::new();
        out.push('#');
        out.push_str(&escape(comment, false));
        out.push('\n');
        out.push('#');
        out.push_str(&timestamp.format("%a %b %d %H:%M:%S %z %Y").to_string());
        out.push('\n');

        for (key, value) in &self.entries {
            out.push_str(&escape(key, true));
            out.push('=');
            out.push_str(&escape(value, false));
            out.push('\n');
        }
        out
    }

    /// The XML properties format.
    pub fn render_xml(&self, comment: &str) -> Result<String> {
        let mut writer = Writer::new_with_indent(XML_PROLOG.as_bytes().to_vec(), b' ', 2);

        writer.write_event(Event::Start(BytesStart::new("properties")))?;
        writer.create_element("comment").write_text_content(BytesText::new(comment))?;
        for (key, value) in &self.entries {
            writer
                .create_element("entry")
                .with_attribute(("key", key.as_str()))
                .write_text_content(BytesText::new(value))?;
        }
        writer.write_event(Event::End(BytesEnd::new("properties")))?;

        let mut out = String::from_utf8(writer.into_inner()).context("XML output is not UTF-8")?;
        out.push('\n');
        Ok(out)
    }

    /// Write the map to `path` in the format its name selects.
    pub fn write(&self, path: &Path) -> Result<()> {
        let comment = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let content = match PropertiesFormat::for_path(path) {
            PropertiesFormat::Plain => self.render_plain(&comment, Local::now().fixed_offset()),
            PropertiesFormat::Xml => self.render_xml(&comment)?,
        };
        atomic_write(path, content.as_bytes())
            .with_context(|| format!("Failed to write javadoc map {}", path.display()))
    }
}

/// Java properties escaping. Spaces are escaped everywhere in keys and only
/// in leading position in values.
fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (index, c) in text.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            ' ' if is_key || index == 0 => out.push_str("\\ "),
            c if c < '\x20' || c > '\x7e' => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{unit:04X}"));
                }
            }
            c => out.push(c),
        }
    }
    out
}
