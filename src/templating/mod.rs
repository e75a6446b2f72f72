//! URL template substitution.
//!
//! Link rules carry URL templates such as
//! `https://docs.example.com/{a}/{major}.{minor}/`. Placeholders are `{name}`
//! where `name` is looked up case-insensitively in the artifact's
//! [`VariableTable`]:
//!
//! | Name | Value |
//! |---|---|
//! | `groupid`, `g` | group identifier |
//! | `artifactid`, `a` | artifact identifier |
//! | `version`, `v` | base version (`1.0-SNAPSHOT` for timestamped snapshots) |
//! | `major`, `minor`, `micro`, `patch` | leading numeric segments of the version, when present |
//!
//! A name that is not an exact key may be any prefix that selects one value
//! (`{art}`, `{maj}`). A name that matches nothing, or a prefix that selects
//! several different values, fails the substitution with
//! [`DoclinkError::TemplateSubstitution`].
//!
//! The result is scanned once more, so a substituted value that itself
//! contains a placeholder is expanded too.
//!
//! # Examples
//!
//! ```rust
//! use doclink_cli::coordinate::ArtifactCoordinate;
//! use doclink_cli::templating::resolve_template;
//!
//! let coordinate = ArtifactCoordinate::from_gav("com.example:lib-a:1.2.3");
//! let url = resolve_template("https://docs.example.com/{a}/{major}.{minor}/", &coordinate)?;
//! assert_eq!(url, "https://docs.example.com/lib-a/1.2/");
//! # Ok::<(), anyhow::Error>(())
//! ```

mod context;

pub use context::{Lookup, SEGMENT_NAMES, VariableTable, VersionSegments};

use anyhow::Result;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::trace;

use crate::coordinate::ArtifactCoordinate;
use crate::core::DoclinkError;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").expect("static regex is valid"));

/// Expand every placeholder of `template` for `coordinate`.
///
/// # Errors
///
/// Returns [`DoclinkError::TemplateSubstitution`] naming the first
/// placeholder without a unique value.
pub fn resolve_template(template: &str, coordinate: &ArtifactCoordinate) -> Result<String> {
    let table = VariableTable::for_coordinate(coordinate);
    resolve_with(template, &table)
}

/// Expand `template` against an explicit table.
pub fn resolve_with(template: &str, table: &VariableTable) -> Result<String> {
    if !has_placeholders(template) {
        return Ok(template.to_string());
    }

    let first = substitute(template, template, table)?;
    let resolved = if first != template && has_placeholders(&first) {
        substitute(template, &first, table)?
    } else {
        first
    };

    trace!("Resolved URL template '{template}' to '{resolved}' with {table}");
    Ok(resolved)
}

/// Whether `template` contains at least one placeholder.
pub fn has_placeholders(template: &str) -> bool {
    PLACEHOLDER.is_match(template)
}

fn substitute(template: &str, text: &str, table: &VariableTable) -> Result<String> {
    let mut failure: Option<DoclinkError> = None;

    let replaced = PLACEHOLDER.replace_all(text, |caps: &Captures<'_>| {
        let name = &caps[1];
        match table.lookup(name) {
            Lookup::Found(value) => value,
            lookup => {
                if failure.is_none() {
                    failure = Some(substitution_error(template, name, &lookup, table));
                }
                caps[0].to_string()
            }
        }
    });

    match failure {
        Some(error) => Err(error.into()),
        None => Ok(replaced.into_owned()),
    }
}

fn substitution_error(
    template: &str,
    name: &str,
    lookup: &Lookup,
    table: &VariableTable,
) -> DoclinkError {
    let reason = match lookup {
        Lookup::Ambiguous(candidates) => {
            format!("'{name}' is a prefix of {} with different values", candidates.join(", "))
        }
        _ => match closest_name(name, table) {
            Some(suggestion) => format!("unknown variable, did you mean '{suggestion}'?"),
            None => "unknown variable".to_string(),
        },
    };

    DoclinkError::TemplateSubstitution {
        template: template.to_string(),
        name: name.to_string(),
        reason,
    }
}

fn closest_name<'a>(name: &str, table: &'a VariableTable) -> Option<&'a str> {
    let wanted = name.to_lowercase();
    table
        .names()
        .map(|candidate| (candidate, strsim::levenshtein(&wanted, candidate)))
        .filter(|(candidate, distance)| *distance <= 2 && *distance < candidate.len())
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}
