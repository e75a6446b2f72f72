//! `doclink check`: show what every rule matches.
//!
//! Nothing is downloaded or written. Template problems are reported on the
//! rule they belong to instead of aborting.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::common::{CommandContext, CommandExecutor, include_dependency_management};
use crate::coordinate::ArtifactCoordinate;
use crate::links::{LinkRule, RuleKind};
use crate::manifest::Manifest;
use crate::models::ProjectModel;

/// Evaluate all rules without resolving anything.
#[derive(Args, Debug, Default)]
pub struct CheckCommand {
    /// Do not match dependency-management entries
    #[arg(long)]
    pub(crate) no_dependency_management: bool,
}

/// What one rule matched.
#[derive(Debug, Clone)]
pub struct RuleReport {
    /// The rule, rendered
    pub rule: String,
    pub matches: Vec<RuleMatch>,
}

/// One matched artifact and its URL, or why there is none.
#[derive(Debug, Clone)]
pub struct RuleMatch {
    pub coordinate: ArtifactCoordinate,
    pub url: std::result::Result<Option<String>, String>,
}

impl RuleReport {
    pub fn has_errors(&self) -> bool {
        self.matches.iter().any(|m| m.url.is_err())
    }
}

/// Evaluate every `[[link]]` and `[[offlinelink]]` rule of `manifest`.
pub fn evaluate_rules(
    manifest: &Manifest,
    project: &ProjectModel,
    include_dependency_management: bool,
) -> Vec<RuleReport> {
    let link_candidates = project.link_candidates(include_dependency_management);
    let mut offline_candidates: Vec<ArtifactCoordinate> =
        project.resolved_javadocs().into_iter().map(|a| a.coordinate).collect();
    for candidate in project.javadoc_candidates(include_dependency_management) {
        if !offline_candidates.contains(&candidate) {
            offline_candidates.push(candidate);
        }
    }

    manifest
        .link_rules()
        .iter()
        .chain(manifest.offline_rules().iter())
        .map(|rule| {
            let candidates = match rule.kind() {
                RuleKind::Link => &link_candidates,
                RuleKind::Offlinelink => &offline_candidates,
            };
            evaluate_rule(rule, candidates)
        })
        .collect()
}

fn evaluate_rule(rule: &LinkRule, candidates: &[ArtifactCoordinate]) -> RuleReport {
    let matches = rule
        .matching(candidates)
        .map(|coordinate| RuleMatch {
            coordinate: coordinate.clone(),
            url: rule
                .url_for(coordinate)
                .map(|url| url.map(String::from))
                .map_err(|e| format!("{e:#}")),
        })
        .collect();

    RuleReport {
        rule: rule.to_string(),
        matches,
    }
}

impl CommandExecutor for CheckCommand {
    async fn execute_with_context(self, context: CommandContext) -> Result<()> {
        let include_dm = include_dependency_management(&context.manifest, self.no_dependency_management);
        let reports = evaluate_rules(&context.manifest, &context.project, include_dm);

        if reports.is_empty() {
            println!("{}", "No [[link]] or [[offlinelink]] rules declared".yellow());
            return Ok(());
        }

        for report in &reports {
            println!("{}", report.rule.bold());
            if report.matches.is_empty() {
                println!("  {}", "does not match any project dependencies".yellow());
            }
            for m in &report.matches {
                match &m.url {
                    Ok(Some(url)) => println!("  {} -> {}", m.coordinate, url.cyan()),
                    Ok(None) => println!("  {} -> {}", m.coordinate, "(no url)".dimmed()),
                    Err(e) => println!("  {} -> {}", m.coordinate, e.red()),
                }
            }
        }

        let unmatched = reports.iter().filter(|r| r.matches.is_empty()).count();
        let broken = reports.iter().filter(|r| r.has_errors()).count();
        if unmatched == 0 && broken == 0 {
            println!("{} {} rule(s) checked", "✓".green(), reports.len());
        } else {
            println!(
                "{} {} rule(s) checked, {unmatched} without matches, {broken} with URL errors",
                "!".yellow(),
                reports.len()
            );
        }
        Ok(())
    }
}
