//! Output assembly.
//!
//! Turns the plain link set and the resolved offline map into the files the
//! javadoc tool consumes:
//!
//! - [`options`]: an options file with `-link` and `-linkoffline` directives,
//!   plus one directory per offline artifact holding its extracted index
//! - [`properties`]: a javadoc map from package (or module) name to
//!   documentation URL, in plain or XML properties format
//! - [`index`]: reading `element-list`/`package-list` from jars and URLs
//!
//! Offline entries take precedence: a URL that the offline map resolves is
//! removed from the plain link set before anything is emitted.

pub mod index;
pub mod options;
pub mod properties;

pub use index::{IndexEntry, IndexReader, parse_index};
pub use options::{Directive, OfflineExtractor, assemble_options, render_options, write_options};
pub use properties::{JavadocMap, PropertiesFormat};

use crate::links::LinkSet;
use crate::resolver::ResolvedOfflineMap;

/// The link set without any URL the offline map resolves.
pub fn plain_links(links: &LinkSet, offline: &ResolvedOfflineMap) -> LinkSet {
    let mut links = links.clone();
    links.remove_all(offline.urls());
    links
}
