//! `doclink offline-links`: `-linkoffline` directives only.

use anyhow::Result;
use clap::Args;
use tracing::{info, warn};

use super::common::{CommandContext, CommandExecutor, GenerateArgs};
use crate::constants::{OFFLINE_LINKS_DIRECTORY, OFFLINE_OPTIONS_FILE_NAME};
use crate::links::LinkSet;
use crate::output::{OfflineExtractor, assemble_options, write_options};

/// Generate the offline link options file.
#[derive(Args, Debug, Default)]
pub struct OfflineLinksCommand {
    #[command(flatten)]
    args: GenerateArgs,
}

impl CommandExecutor for OfflineLinksCommand {
    async fn execute_with_context(self, context: CommandContext) -> Result<()> {
        if self.args.should_skip(&context.manifest) {
            info!("Skipping offline link options file generation");
            return Ok(());
        }

        let include_dm = self.args.include_dependency_management(&context.manifest);
        let base = self.args.output_directory(&context.manifest).join(OFFLINE_LINKS_DIRECTORY);

        let resolution =
            context.resolve_offline(&context.manifest.offline_rules(), include_dm).await?;
        if resolution.map.is_empty() {
            warn!("No offline links configured");
        }

        let extractor = OfflineExtractor::new(&base)?;
        let directives = assemble_options(&LinkSet::new(), &resolution.map, &extractor)?;
        let path = base.join(OFFLINE_OPTIONS_FILE_NAME);
        write_options(&path, &directives)?;

        context.report(format!("Wrote {} ({} offline link(s))", path.display(), directives.len()));
        Ok(())
    }
}
