//! `doclink options`: the javadoc options file.

use anyhow::Result;
use clap::Args;
use tracing::info;

use super::common::{CommandContext, CommandExecutor, GenerateArgs};
use crate::constants::{OPTIONS_DIRECTORY, OPTIONS_FILE_NAME};
use crate::links::collect_link_set;
use crate::output::{Directive, OfflineExtractor, assemble_options, write_options};

/// Generate `-link` and `-linkoffline` directives.
///
/// ```bash
/// doclink options
/// doclink options --output-directory build --no-dependency-management
/// ```
#[derive(Args, Debug, Default)]
pub struct OptionsCommand {
    #[command(flatten)]
    args: GenerateArgs,
}

impl CommandExecutor for OptionsCommand {
    async fn execute_with_context(self, context: CommandContext) -> Result<()> {
        if self.args.should_skip(&context.manifest) {
            info!("Skipping javadoc options file generation.");
            return Ok(());
        }

        let include_dm = self.args.include_dependency_management(&context.manifest);
        let base = self.args.output_directory(&context.manifest).join(OPTIONS_DIRECTORY);

        let links = collect_link_set(
            &context.manifest.link_rules(),
            &context.project.link_candidates(include_dm),
        )?;
        let resolution =
            context.resolve_offline(&context.manifest.offline_rules(), include_dm).await?;

        let extractor = OfflineExtractor::new(&base)?;
        let directives = assemble_options(&links, &resolution.map, &extractor)?;
        let path = base.join(OPTIONS_FILE_NAME);
        write_options(&path, &directives)?;

        let offline = directives.iter().filter(|d| matches!(d, Directive::LinkOffline { .. })).count();
        context.report(format!(
            "Wrote {} ({} link(s), {} offline link(s))",
            path.display(),
            directives.len() - offline,
            offline
        ));
        Ok(())
    }
}
